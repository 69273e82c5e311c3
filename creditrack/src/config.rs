//! Configuración por variables de entorno (con soporte de `.env`).
//!
//! | variable                        | por defecto        |
//! |---------------------------------|--------------------|
//! | `CREDITRACK_DATAFILES_DIR`      | `datafiles`        |
//! | `CREDITRACK_RECORDS_DELIMITER`  | `;`                |
//! | `CREDITRACK_OUTPUT_DIR`         | `reports`          |
//! | `CREDITRACK_REPORT_NAME`        | `report`           |
//! | `CREDITRACK_BIND`               | `127.0.0.1:8080`   |
//!
//! Los flags de la línea de comandos tienen prioridad sobre estos valores.

use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_DATAFILES_DIR: &str = "datafiles";
pub const DEFAULT_DELIMITER: u8 = b';';
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_REPORT_NAME: &str = "report";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub datafiles_dir: PathBuf,
    pub records_delimiter: u8,
    pub output_dir: PathBuf,
    pub report_name: String,
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            datafiles_dir: PathBuf::from(DEFAULT_DATAFILES_DIR),
            records_delimiter: DEFAULT_DELIMITER,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            report_name: DEFAULT_REPORT_NAME.to_string(),
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Settings {
    /// Lee las variables `CREDITRACK_*`. `main` carga `.env` antes de llamarla.
    pub fn from_env() -> Self {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable (tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get("CREDITRACK_DATAFILES_DIR") {
            s.datafiles_dir = PathBuf::from(v);
        }
        if let Some(v) = get("CREDITRACK_RECORDS_DELIMITER") {
            match parse_delimiter(&v) {
                Some(d) => s.records_delimiter = d,
                None => warn!(value = %v, "CREDITRACK_RECORDS_DELIMITER inválido, se usa ';'"),
            }
        }
        if let Some(v) = get("CREDITRACK_OUTPUT_DIR") {
            s.output_dir = PathBuf::from(v);
        }
        if let Some(v) = get("CREDITRACK_REPORT_NAME") {
            s.report_name = v;
        }
        if let Some(v) = get("CREDITRACK_BIND") {
            s.bind = v;
        }
        s
    }

    /// Resuelve un archivo de datos: si la ruta existe se usa tal cual, si no
    /// se busca dentro de `datafiles_dir`. Si tampoco está allí se devuelve la
    /// ruta original y la lectura posterior reporta el error.
    pub fn resolve_datafile(&self, name: &Path) -> PathBuf {
        if name.exists() {
            return name.to_path_buf();
        }
        let candidate = self.datafiles_dir.join(name);
        if candidate.exists() {
            debug!(path = %candidate.display(), "archivo encontrado en datafiles");
            return candidate;
        }
        name.to_path_buf()
    }
}

/// Delimitador de un solo byte ASCII; acepta `\t` o `tab` para tabulador.
pub fn parse_delimiter(s: &str) -> Option<u8> {
    match s {
        "\\t" | "tab" | "\t" => Some(b'\t'),
        _ => {
            let mut bytes = s.bytes();
            match (bytes.next(), bytes.next()) {
                (Some(b), None) if b.is_ascii() => Some(b),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_without_env() {
        let s = Settings::from_lookup(|_| None);
        assert_eq!(s, Settings::default());
        assert_eq!(s.records_delimiter, b';');
    }

    #[test]
    fn env_overrides() {
        let vars = HashMap::from([
            ("CREDITRACK_RECORDS_DELIMITER", ","),
            ("CREDITRACK_REPORT_NAME", "avance"),
            ("CREDITRACK_BIND", " 0.0.0.0:9000 "),
        ]);
        let s = Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(s.records_delimiter, b',');
        assert_eq!(s.report_name, "avance");
        assert_eq!(s.bind, "0.0.0.0:9000");
    }

    #[test]
    fn bad_delimiter_keeps_default() {
        let s = Settings::from_lookup(|k| {
            (k == "CREDITRACK_RECORDS_DELIMITER").then(|| ";;".to_string())
        });
        assert_eq!(s.records_delimiter, b';');
        assert_eq!(parse_delimiter("tab"), Some(b'\t'));
        assert_eq!(parse_delimiter("é"), None);
    }

    #[test]
    fn resolve_in_datafiles_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plan.json"), "{}").unwrap();
        let s = Settings { datafiles_dir: dir.path().to_path_buf(), ..Settings::default() };

        assert_eq!(s.resolve_datafile(Path::new("plan.json")), dir.path().join("plan.json"));
        assert_eq!(s.resolve_datafile(Path::new("missing.json")), PathBuf::from("missing.json"));
    }
}
