//! Regla de aprobación de un ramo a partir de sus registros.

use crate::models::AcademicRecord;

/// Estados que cuentan como homologación (convalidación externa).
pub const HOMOLOGATED_STATUSES: &[&str] = &["HOMOLOGATED", "HOMOLOGADO"];

/// Modos de calificación aprobado/reprobado.
pub const PASS_FAIL_MODES: &[&str] = &["PASS/FAIL", "APROBADO/REPROBADO"];

/// Modos de calificación numérica 1.5 - 5.0.
pub const NUMERIC_STANDARD_MODES: &[&str] = &[
    "NUMERIC STANDARD 1.5–5.0",
    "NUMERIC STANDARD 1.5-5.0",
    "ESTANDAR NUMERICO 1.5-5.0",
];

/// Nota mínima de aprobación en la escala numérica.
pub const MIN_PASSING_GRADE: f64 = 3.0;

/// Modo de calificación reconocido por la regla.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingMode {
    PassFail,
    NumericStandard,
    /// Cualquier otro modo: no condiciona la aprobación.
    Other,
}

impl GradingMode {
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if PASS_FAIL_MODES.contains(&tag) {
            GradingMode::PassFail
        } else if NUMERIC_STANDARD_MODES.contains(&tag) {
            GradingMode::NumericStandard
        } else {
            GradingMode::Other
        }
    }
}

pub fn is_homologated(record: &AcademicRecord) -> bool {
    record
        .course_status
        .as_deref()
        .map(|s| HOMOLOGATED_STATUSES.contains(&s.trim()))
        .unwrap_or(false)
}

/// Decide si el estudiante aprobó el ramo.
///
/// `records` ya viene filtrado por ramo y ventana de periodos. Sólo se
/// inspecciona el PRIMER registro: los siguientes nunca se examinan.
pub fn has_passed<'a, I>(records: I) -> bool
where
    I: IntoIterator<Item = &'a AcademicRecord>,
{
    match records.into_iter().next() {
        Some(first) => record_passes(first),
        None => false,
    }
}

/// Árbol de decisión sobre un registro individual.
pub fn record_passes(record: &AcademicRecord) -> bool {
    if is_homologated(record) {
        return true;
    }

    let grade = record.final_grade.trim();
    match GradingMode::from_tag(&record.grading_mode) {
        GradingMode::Other => true,
        GradingMode::PassFail => grade == "A",
        GradingMode::NumericStandard => {
            if grade == "A" {
                return true;
            }
            // nota no parseable => reprobado, no error
            parse_grade(grade).map(|g| g >= MIN_PASSING_GRADE).unwrap_or(false)
        }
    }
}

/// Parsea una nota numérica. Sin coma decimal: "3,5" no es una nota.
/// `inf` y `NaN` se aceptan y se comparan como cualquier flotante.
pub fn parse_grade(grade: &str) -> Option<f64> {
    grade.trim().parse::<f64>().ok()
}
