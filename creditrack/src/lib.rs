// Biblioteca raíz del crate `creditrack`.
// Reexporta los módulos principales: modelos, motor de cálculo, registros,
// lectura/escritura de archivos y la API HTTP.
pub mod models;
pub mod algorithm;
pub mod records;
pub mod datafiles;
pub mod api_json;
pub mod server;
pub mod config;
pub mod error;
pub mod logging;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::{run_server, AppState};
pub use error::{ProgressError, Result};
pub use algorithm::{report_for_student, Period};
pub use models::{CompleteReport, CurriculumStructure};
pub use records::RecordsTable;
