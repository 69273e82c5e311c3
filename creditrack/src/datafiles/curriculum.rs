//! Lectura de la configuración curricular (JSON).
//!
//! ```json
//! {
//!   "simple_courses": [{"code": "M1"}],
//!   "course_bundles": {
//!     "Electivas A": {
//!       "minimum_credits_to_pass": 10,
//!       "related_bundles": ["Electivas B"],
//!       "courses": {"M2": {"type": "REQUIRED"}, "M3": {"type": "OPTIONAL"}}
//!     }
//!   }
//! }
//! ```
//! Los campos extra de cada curso se ignoran.

use std::collections::BTreeMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::error::{ProgressError, Result};
use crate::models::{CourseBundle, CourseType, CurriculumStructure};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleCourseConfig {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    #[serde(rename = "type")]
    pub kind: CourseType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    pub minimum_credits_to_pass: u32,
    #[serde(default)]
    pub related_bundles: Vec<String>,
    #[serde(default)]
    pub courses: BTreeMap<String, CourseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumConfig {
    #[serde(default)]
    pub simple_courses: Vec<SimpleCourseConfig>,
    #[serde(default)]
    pub course_bundles: BTreeMap<String, BundleConfig>,
}

impl From<BundleConfig> for CourseBundle {
    fn from(cfg: BundleConfig) -> Self {
        CourseBundle {
            minimum_credits_to_pass: cfg.minimum_credits_to_pass,
            related_bundles: cfg.related_bundles,
            courses: cfg.courses.into_iter().map(|(code, c)| (code, c.kind)).collect(),
        }
    }
}

impl From<CurriculumConfig> for CurriculumStructure {
    fn from(cfg: CurriculumConfig) -> Self {
        let simple_courses = cfg.simple_courses.into_iter().map(|c| c.code).collect();
        let course_bundles = cfg
            .course_bundles
            .into_iter()
            .map(|(name, b)| (name, CourseBundle::from(b)))
            .collect();
        CurriculumStructure::new(simple_courses, course_bundles)
    }
}

pub fn parse_curriculum(json_str: &str) -> Result<CurriculumStructure> {
    let cfg: CurriculumConfig = serde_json::from_str(json_str)?;
    Ok(cfg.into())
}

/// Carga el JSON y resuelve los grupos de paquetes.
pub fn load_curriculum(path: &Path) -> Result<CurriculumStructure> {
    let contents = std::fs::read_to_string(path).map_err(|e| ProgressError::io(path, e))?;
    let curriculum = parse_curriculum(&contents)?;
    info!(
        path = %path.display(),
        simple_courses = curriculum.simple_courses.len(),
        bundles = curriculum.course_bundles.len(),
        groups = curriculum.groups.len(),
        "currículo cargado"
    );
    Ok(curriculum)
}
