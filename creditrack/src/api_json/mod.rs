pub mod handlers;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use crate::algorithm::period::Period;
use crate::error::Result;
use crate::models::{CurriculumStructure, RelatedBundleGroup};

/// Parámetros de entrada para generar un reporte
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "student_code": "710220101",
///   "period": "202220"
/// }
/// ```
///
/// # Campos:
/// - `student_code`: código del estudiante (requerido)
/// - `period`: periodo de corte `YYYYS?`, exclusivo: sólo cuentan los
///   registros anteriores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub student_code: String,
    pub period: String,
}

impl ReportRequest {
    /// Periodo de corte ya parseado. Un token mal formado es un error.
    pub fn cutoff(&self) -> Result<Period> {
        Period::parse(self.period.trim())
    }
}

pub fn parse_json_input(json_str: &str) -> std::result::Result<ReportRequest, serde_json::Error> {
    serde_json::from_str::<ReportRequest>(json_str)
}

/// Construye la petición desde parámetros de query (`?student_code=..&period=..`).
pub fn request_from_query(
    query: &HashMap<String, String>,
) -> std::result::Result<ReportRequest, String> {
    let get = |key: &str| {
        query
            .get(key)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("{} is required in query", key))
    };
    Ok(ReportRequest { student_code: get("student_code")?, period: get("period")? })
}

/// Vista serializable de un grupo resuelto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupView {
    pub id: String,
    pub bundles: Vec<String>,
    pub common_courses: BTreeSet<String>,
}

impl From<&RelatedBundleGroup> for GroupView {
    fn from(g: &RelatedBundleGroup) -> Self {
        GroupView {
            id: g.id.clone(),
            bundles: g.member_names().map(|s| s.to_string()).collect(),
            common_courses: g.common_courses.clone(),
        }
    }
}

pub fn group_views(curriculum: &CurriculumStructure) -> Vec<GroupView> {
    curriculum.groups.values().map(GroupView::from).collect()
}
