use std::fmt;
use tracing::debug;
use crate::algorithm::approval::has_passed;
use crate::algorithm::period::Period;
use crate::algorithm::progress::SubjectLookup;
use crate::error::Result;
use crate::models::AcademicRecord;
use crate::records::table::{filter_before_period, filter_by_subject, RecordsTable};

/// Vista de registros de un estudiante: todos, y los anteriores al corte.
///
/// Se materializa al construirse y es de sólo lectura; toma prestada la tabla
/// compartida, así que cada estudiante tiene su vista independiente.
pub struct StudentRecordStore<'a> {
    student_code: String,
    cutoff: Period,
    all: Vec<&'a AcademicRecord>,
    until_cutoff: Vec<&'a AcademicRecord>,
}

impl<'a> StudentRecordStore<'a> {
    /// Falla sólo si algún periodo del estudiante está mal formado.
    /// Un estudiante sin registros produce una vista vacía.
    pub fn new(table: &'a RecordsTable, student_code: &str, cutoff: Period) -> Result<Self> {
        let all = table.student_records(student_code);
        if all.is_empty() {
            debug!(student = student_code, "no hay registros para el estudiante");
        }

        let until_cutoff = filter_before_period(all.iter().copied(), &cutoff)?;
        if until_cutoff.is_empty() {
            debug!(student = student_code, %cutoff, "no hay registros antes del periodo");
        }

        Ok(StudentRecordStore {
            student_code: student_code.trim().to_string(),
            cutoff,
            all,
            until_cutoff,
        })
    }

    pub fn student_code(&self) -> &str {
        &self.student_code
    }

    pub fn cutoff(&self) -> Period {
        self.cutoff
    }

    pub fn all_records(&self) -> &[&'a AcademicRecord] {
        &self.all
    }

    pub fn records_until_cutoff(&self) -> &[&'a AcademicRecord] {
        &self.until_cutoff
    }

    /// ¿Aprobó (o convalidó) el ramo antes del periodo de corte?
    pub fn passed_subject(&self, subject_code: &str) -> bool {
        let subject_records = filter_by_subject(self.until_cutoff.iter().copied(), subject_code);
        if subject_records.is_empty() {
            debug!(
                student = %self.student_code,
                subject = subject_code,
                "sin registros del ramo antes del corte"
            );
        }
        has_passed(subject_records)
    }

    /// Créditos del primer registro del ramo en el historial completo; 0 si
    /// nunca lo cursó.
    pub fn credits_for(&self, subject_code: &str) -> f64 {
        let subject_code = subject_code.trim();
        match self.all.iter().find(|r| r.subject_code == subject_code) {
            Some(record) => record.credits,
            None => {
                debug!(
                    student = %self.student_code,
                    subject = subject_code,
                    "sin información de créditos"
                );
                0.0
            }
        }
    }
}

impl SubjectLookup for StudentRecordStore<'_> {
    fn passed_subject(&self, subject_code: &str) -> bool {
        StudentRecordStore::passed_subject(self, subject_code)
    }

    fn credits_for(&self, subject_code: &str) -> f64 {
        StudentRecordStore::credits_for(self, subject_code)
    }
}

impl fmt::Debug for StudentRecordStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudentRecordStore")
            .field("student_code", &self.student_code)
            .field("cutoff", &self.cutoff)
            .field("records", &self.all.len())
            .field("records_until_cutoff", &self.until_cutoff.len())
            .finish()
    }
}
