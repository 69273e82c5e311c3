//! Ensamblado del reporte completo de un estudiante.

use std::collections::BTreeMap;
use tracing::info;
use crate::algorithm::period::Period;
use crate::algorithm::progress::{summarize_group, summarize_simple_courses, SubjectLookup};
use crate::error::Result;
use crate::models::{CompleteReport, CurriculumStructure, GroupSummary, RelatedBundleGroup};
use crate::records::{RecordsTable, StudentRecordStore};

/// Resumen de todos los grupos, indexado por identificador de grupo.
pub fn summarize_all_groups<L>(
    groups: &BTreeMap<String, RelatedBundleGroup>,
    lookup: &L,
) -> BTreeMap<String, GroupSummary>
where
    L: SubjectLookup + ?Sized,
{
    groups
        .iter()
        .map(|(id, group)| (id.clone(), summarize_group(group, lookup)))
        .collect()
}

/// Combina el resumen de cursos simples y el de grupos.
pub fn build_complete_report<L>(curriculum: &CurriculumStructure, lookup: &L) -> CompleteReport
where
    L: SubjectLookup + ?Sized,
{
    CompleteReport {
        simple_courses: summarize_simple_courses(lookup, &curriculum.simple_courses),
        group_of_related_course_bundles: summarize_all_groups(&curriculum.groups, lookup),
    }
}

/// Pipeline de un estudiante: vista de registros hasta `cutoff` + reporte.
pub fn report_for_student(
    table: &RecordsTable,
    curriculum: &CurriculumStructure,
    student_code: &str,
    cutoff: Period,
) -> Result<CompleteReport> {
    let store = StudentRecordStore::new(table, student_code, cutoff)?;
    info!(?store, "generando reporte");

    let report = build_complete_report(curriculum, &store);
    info!(
        student = student_code,
        approved_simple = report.simple_courses.total_approved_courses,
        groups = report.group_of_related_course_bundles.len(),
        "reporte generado"
    );
    Ok(report)
}
