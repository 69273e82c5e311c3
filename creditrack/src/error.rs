//! Tipo de error del crate.
//!
//! Los datos faltantes de un estudiante (sin registros, sin créditos) NO son
//! errores: se resuelven localmente como "no aprobado" / "0 créditos".
//! Aquí sólo llegan los problemas de configuración o de formato que deben
//! detener el cálculo.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    /// Token de periodo que no respeta el formato `YYYYS?`.
    #[error("periodo mal formado '{token}': {reason}")]
    InvalidPeriod { token: String, reason: String },

    #[error("no se pudo leer '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV inválido: {0}")]
    Csv(#[from] csv::Error),

    #[error("planilla inválida: {0}")]
    Spreadsheet(String),

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("falta la columna requerida '{0}' en la tabla de registros")]
    MissingColumn(String),

    #[error("formato de archivo no soportado: {0}")]
    UnsupportedFormat(String),
}

impl ProgressError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProgressError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ProgressError>;
