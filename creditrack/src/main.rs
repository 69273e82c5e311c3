// --- creditrack: avance curricular por estudiante - Archivo principal ---

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use creditrack::config::{parse_delimiter, Settings};
use creditrack::datafiles::{load_curriculum, load_records_table, save_report, to_pretty_json};
use creditrack::{logging, report_for_student, run_server, AppState, Period};

#[derive(Parser, Debug)]
#[command(name = "creditrack", version, about = "Avance curricular de estudiantes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Genera el reporte de uno o más estudiantes
    Report {
        /// Tabla de registros académicos (.csv, .txt, .xlsx, .xls, .ods)
        #[arg(long)]
        records: PathBuf,
        /// Configuración curricular en JSON
        #[arg(long)]
        curriculum: PathBuf,
        /// Código de estudiante (repetible)
        #[arg(long = "student", required = true)]
        students: Vec<String>,
        /// Periodo de corte, exclusivo (ej. 202220)
        #[arg(long)]
        period: String,
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Prefijo del nombre de archivo
        #[arg(long)]
        name: Option<String>,
        /// Delimitador de la tabla CSV
        #[arg(long)]
        delimiter: Option<String>,
        /// No escribir archivos, sólo imprimir
        #[arg(long)]
        stdout_only: bool,
    },
    /// Muestra los grupos de paquetes relacionados
    Groups {
        #[arg(long)]
        curriculum: PathBuf,
    },
    /// Levanta la API HTTP
    Serve {
        #[arg(long)]
        records: PathBuf,
        #[arg(long)]
        curriculum: PathBuf,
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        delimiter: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // .env antes del logger para que RUST_LOG pueda venir de allí
    let _ = dotenv::dotenv();
    logging::init();
    let mut settings = Settings::from_env();

    let cli = Cli::parse();
    if let Err(msg) = run(cli, &mut settings).await {
        error!("{}", msg);
        process::exit(1);
    }
}

fn apply_delimiter(settings: &mut Settings, delimiter: Option<String>) -> Result<(), String> {
    if let Some(d) = delimiter {
        settings.records_delimiter =
            parse_delimiter(&d).ok_or_else(|| format!("delimitador inválido: '{}'", d))?;
    }
    Ok(())
}

async fn run(cli: Cli, settings: &mut Settings) -> Result<(), String> {
    match cli.command {
        Command::Report {
            records,
            curriculum,
            students,
            period,
            output_dir,
            name,
            delimiter,
            stdout_only,
        } => {
            apply_delimiter(settings, delimiter)?;
            if let Some(dir) = output_dir {
                settings.output_dir = dir;
            }
            if let Some(n) = name {
                settings.report_name = n;
            }

            // el corte se valida antes de leer cualquier archivo
            let cutoff = Period::parse(period.trim()).map_err(|e| e.to_string())?;

            let records_path = settings.resolve_datafile(&records);
            let curriculum_path = settings.resolve_datafile(&curriculum);
            let table = load_records_table(&records_path, settings.records_delimiter)
                .map_err(|e| e.to_string())?;
            let curriculum = load_curriculum(&curriculum_path).map_err(|e| e.to_string())?;

            for student in &students {
                let report = report_for_student(&table, &curriculum, student, cutoff)
                    .map_err(|e| e.to_string())?;
                let text = to_pretty_json(&report).map_err(|e| e.to_string())?;
                println!("{}", text);
                if !stdout_only {
                    let path = save_report(
                        &report,
                        &settings.output_dir,
                        &settings.report_name,
                        student,
                    )
                    .map_err(|e| e.to_string())?;
                    info!(student = %student, path = %path.display(), "reporte escrito");
                }
            }
            Ok(())
        }
        Command::Groups { curriculum } => {
            let curriculum_path = settings.resolve_datafile(&curriculum);
            let curriculum = load_curriculum(&curriculum_path).map_err(|e| e.to_string())?;
            println!("{}", curriculum);
            Ok(())
        }
        Command::Serve { records, curriculum, bind, delimiter } => {
            apply_delimiter(settings, delimiter)?;
            if let Some(b) = bind {
                settings.bind = b;
            }
            let records_path = settings.resolve_datafile(&records);
            let curriculum_path = settings.resolve_datafile(&curriculum);
            let table = load_records_table(&records_path, settings.records_delimiter)
                .map_err(|e| e.to_string())?;
            let curriculum = load_curriculum(&curriculum_path).map_err(|e| e.to_string())?;

            println!("Iniciando servidor en http://{}", settings.bind);
            run_server(&settings.bind, AppState::new(table, curriculum))
                .await
                .map_err(|e| format!("servidor: {}", e))
        }
    }
}
