// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Una fila del historial académico de un estudiante. Inmutable tras la carga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub student_code: String,
    pub subject_code: String,
    /// Token de periodo tal cual viene en la tabla (ej: "202120").
    pub period: String,
    /// Estado del curso (ej: "HOMOLOGATED"). `None` si la columna no existe o está vacía.
    pub course_status: Option<String>,
    pub grading_mode: String,
    /// Nota final: letra ("A") o número como texto ("3.5").
    pub final_grade: String,
    pub credits: f64,
}

/// Tipo de requisito de un curso dentro de un paquete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    Required,
    Optional,
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseType::Required => write!(f, "REQUIRED"),
            CourseType::Optional => write!(f, "OPTIONAL"),
        }
    }
}

/// Paquete de cursos con un mínimo de créditos (ej: una línea de electivos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseBundle {
    pub minimum_credits_to_pass: u32,
    /// Paquetes relacionados. Se declaran en una sola dirección pero la
    /// relación se trata como simétrica al agrupar.
    pub related_bundles: Vec<String>,
    pub courses: BTreeMap<String, CourseType>,
}

impl fmt::Display for CourseBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CourseBundle:")?;
        writeln!(f, "  Minimum Credits to Pass: {}", self.minimum_credits_to_pass)?;
        writeln!(f, "  Related Bundles: {}", self.related_bundles.join(", "))?;
        write!(f, "  Courses:")?;
        for (code, kind) in &self.courses {
            write!(f, "\n    {}: {}", code, kind)?;
        }
        Ok(())
    }
}

/// Componente conexo de paquetes bajo la relación `related_bundles`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedBundleGroup {
    /// Nombres de los miembros ordenados y unidos con `/`.
    pub id: String,
    pub bundles: BTreeMap<String, CourseBundle>,
    /// Intersección de los códigos de curso de todos los miembros.
    pub common_courses: BTreeSet<String>,
}

impl RelatedBundleGroup {
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }
}

impl fmt::Display for RelatedBundleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<&str> = self.member_names().collect();
        let common: Vec<&str> = self.common_courses.iter().map(String::as_str).collect();
        writeln!(f, "Group: {}", self.id)?;
        writeln!(f, "  Related Bundles: {}", members.join(", "))?;
        write!(f, "  Common Courses: {}", common.join(", "))
    }
}

/// Configuración curricular completa: cursos simples, paquetes y grupos derivados.
///
/// Invariante: cada paquete pertenece a exactamente un grupo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurriculumStructure {
    pub simple_courses: Vec<String>,
    pub course_bundles: BTreeMap<String, CourseBundle>,
    pub groups: BTreeMap<String, RelatedBundleGroup>,
}

impl CurriculumStructure {
    /// Construye la estructura y resuelve los grupos una sola vez.
    pub fn new(
        simple_courses: Vec<String>,
        course_bundles: BTreeMap<String, CourseBundle>,
    ) -> Self {
        let groups = crate::algorithm::resolve_groups(&course_bundles);
        CurriculumStructure { simple_courses, course_bundles, groups }
    }

    /// Grupo al que pertenece un paquete.
    pub fn group_of(&self, bundle_name: &str) -> Option<&RelatedBundleGroup> {
        self.groups.values().find(|g| g.bundles.contains_key(bundle_name))
    }
}

impl fmt::Display for CurriculumStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CurriculumStructure:")?;
        writeln!(f, "  Simple Courses: {}", self.simple_courses.join(", "))?;
        writeln!(f, "  Course Bundles:")?;
        for (name, bundle) in &self.course_bundles {
            writeln!(f, "{}:\n{}\n", name, bundle)?;
        }
        writeln!(f, "  Group of Related Course Bundles:")?;
        let groups: Vec<String> = self.groups.values().map(|g| g.to_string()).collect();
        write!(f, "{}", groups.join("\n"))
    }
}

/// Resumen de aprobación de los cursos simples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleCoursesSummary {
    pub approved_courses: Vec<String>,
    pub total_approved_courses: usize,
    pub total_courses: usize,
    pub approval_percentage: f64,
}

/// Fila de progreso de un paquete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleProgress {
    /// Mínimo de créditos del paquete (denominador).
    pub total_credits: u32,
    pub approved_credits: f64,
    pub approved_subject_codes: BTreeSet<String>,
    pub completion_percentage: f64,
}

/// Paquete con mayor porcentaje de avance dentro de un grupo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighestApproved {
    pub bundle_name: String,
    pub approved_percentage: f64,
    pub total_credits: u32,
    pub approved_credits: f64,
    pub approved_subject_codes: BTreeSet<String>,
}

/// Resumen de un grupo de paquetes relacionados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub course_bundles: BTreeMap<String, BundleProgress>,
    /// `None` sólo para un grupo vacío, que la resolución nunca produce.
    pub highest_approved_percentage: Option<HighestApproved>,
}

/// Reporte completo de un estudiante.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteReport {
    pub simple_courses: SimpleCoursesSummary,
    pub group_of_related_course_bundles: BTreeMap<String, GroupSummary>,
}
