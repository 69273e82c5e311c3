use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;
use crate::error::{ProgressError, Result};
use crate::models::CompleteReport;

/// `<output_dir>/<file_name>-<student_code>.json`
pub fn report_file_path(output_dir: &Path, file_name: &str, student_code: &str) -> PathBuf {
    output_dir.join(format!("{}-{}.json", file_name, student_code))
}

/// JSON indentado a 4 espacios; los caracteres no ASCII se escriben tal cual.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json sólo emite UTF-8 válido
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Guarda el reporte del estudiante y devuelve la ruta escrita.
pub fn save_report(
    report: &CompleteReport,
    output_dir: &Path,
    file_name: &str,
    student_code: &str,
) -> Result<PathBuf> {
    create_dir_all(output_dir).map_err(|e| ProgressError::io(output_dir, e))?;

    let file_path = report_file_path(output_dir, file_name, student_code);
    let text = to_pretty_json(report)?;

    let mut f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&file_path)
        .map_err(|e| ProgressError::io(&file_path, e))?;
    f.write_all(text.as_bytes()).map_err(|e| ProgressError::io(&file_path, e))?;

    info!(path = %file_path.display(), "reporte guardado");
    Ok(file_path)
}
