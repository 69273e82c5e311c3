//! Módulo `datafiles`: entrada/salida de archivos de datos.
//!
//! Submódulos:
//! - `io`: helpers de conversión de celdas y encabezados
//! - `records`: tabla de registros académicos (CSV / planilla)
//! - `curriculum`: configuración curricular en JSON
//! - `output`: escritura del reporte JSON

/// Helpers de IO para parseo de celdas
mod io;

/// Lectura de la tabla de registros: `load_records_table`
pub mod records;

/// Lectura del currículo: `load_curriculum`
pub mod curriculum;

/// Escritura de reportes: `save_report`
pub mod output;

pub use io::{cell_to_string, normalize_header};
pub use records::{load_records_table, read_delimited, RecordColumns};
pub use curriculum::{load_curriculum, parse_curriculum, CurriculumConfig};
pub use output::{report_file_path, save_report, to_pretty_json};
