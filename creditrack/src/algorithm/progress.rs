//! Agregación de avance: cursos simples y grupos de paquetes.
//!
//! El cálculo no conoce la tabla de registros; consulta aprobación y
//! créditos a través de `SubjectLookup`.

use std::collections::{BTreeMap, BTreeSet};
use crate::models::{
    BundleProgress, CourseBundle, GroupSummary, HighestApproved, RelatedBundleGroup,
    SimpleCoursesSummary,
};

/// Consulta de aprobación y créditos de ramos para un estudiante.
pub trait SubjectLookup {
    /// ¿Aprobó el ramo dentro de la ventana de periodos?
    fn passed_subject(&self, subject_code: &str) -> bool;

    /// Créditos del ramo (0 si el estudiante nunca lo cursó).
    fn credits_for(&self, subject_code: &str) -> f64;
}

/// `approved / total * 100`, o 0 si el total es 0.
pub fn percentage(approved: f64, total: f64) -> f64 {
    if total > 0.0 { approved / total * 100.0 } else { 0.0 }
}

/// Resumen de cursos simples. Conserva el orden de entrada de los aprobados.
pub fn summarize_simple_courses<L>(lookup: &L, course_codes: &[String]) -> SimpleCoursesSummary
where
    L: SubjectLookup + ?Sized,
{
    let approved_courses: Vec<String> = course_codes
        .iter()
        .filter(|code| lookup.passed_subject(code))
        .cloned()
        .collect();

    let total_approved_courses = approved_courses.len();
    let total_courses = course_codes.len();

    SimpleCoursesSummary {
        approval_percentage: percentage(total_approved_courses as f64, total_courses as f64),
        approved_courses,
        total_approved_courses,
        total_courses,
    }
}

/// Avance de un paquete sobre SUS cursos y SU mínimo de créditos.
/// REQUIRED y OPTIONAL suman igual.
pub fn bundle_progress<L>(bundle: &CourseBundle, lookup: &L) -> BundleProgress
where
    L: SubjectLookup + ?Sized,
{
    let approved_subject_codes: BTreeSet<String> = bundle
        .courses
        .keys()
        .filter(|code| lookup.passed_subject(code))
        .cloned()
        .collect();

    let approved_credits: f64 = approved_subject_codes
        .iter()
        .map(|code| lookup.credits_for(code))
        .sum();
    let total_credits = bundle.minimum_credits_to_pass;

    BundleProgress {
        total_credits,
        approved_credits,
        approved_subject_codes,
        completion_percentage: percentage(approved_credits, f64::from(total_credits)),
    }
}

/// Paquete con mayor porcentaje. En empate gana el nombre menor
/// (el mapa se recorre en orden y sólo un valor estrictamente mayor reemplaza).
pub fn highest_approved(
    course_bundles: &BTreeMap<String, BundleProgress>,
) -> Option<HighestApproved> {
    let mut best: Option<(&String, &BundleProgress)> = None;
    for (name, progress) in course_bundles.iter() {
        match best {
            Some((_, current))
                if progress.completion_percentage <= current.completion_percentage => {}
            _ => best = Some((name, progress)),
        }
    }

    best.map(|(name, progress)| HighestApproved {
        bundle_name: name.clone(),
        approved_percentage: progress.completion_percentage,
        total_credits: progress.total_credits,
        approved_credits: progress.approved_credits,
        approved_subject_codes: progress.approved_subject_codes.clone(),
    })
}

/// Resumen de un grupo: avance por paquete y el mejor paquete.
pub fn summarize_group<L>(group: &RelatedBundleGroup, lookup: &L) -> GroupSummary
where
    L: SubjectLookup + ?Sized,
{
    let course_bundles: BTreeMap<String, BundleProgress> = group
        .bundles
        .iter()
        .map(|(name, bundle)| (name.clone(), bundle_progress(bundle, lookup)))
        .collect();

    let highest_approved_percentage = highest_approved(&course_bundles);
    GroupSummary { course_bundles, highest_approved_percentage }
}
