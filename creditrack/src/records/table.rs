//! Tabla de registros académicos en memoria y filtros planos sobre ella.

use crate::algorithm::period::Period;
use crate::error::Result;
use crate::models::AcademicRecord;

/// Tabla completa cargada una vez al inicio. Se comparte por referencia
/// entre todas las vistas de estudiante y nunca se modifica.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsTable {
    records: Vec<AcademicRecord>,
}

impl RecordsTable {
    pub fn new(records: Vec<AcademicRecord>) -> Self {
        RecordsTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AcademicRecord] {
        &self.records
    }

    /// Registros de un estudiante, en el orden de la tabla.
    pub fn student_records(&self, student_code: &str) -> Vec<&AcademicRecord> {
        filter_by_student(&self.records, student_code)
    }
}

impl FromIterator<AcademicRecord> for RecordsTable {
    fn from_iter<T: IntoIterator<Item = AcademicRecord>>(iter: T) -> Self {
        RecordsTable::new(iter.into_iter().collect())
    }
}

pub fn filter_by_student<'a, I>(records: I, student_code: &str) -> Vec<&'a AcademicRecord>
where
    I: IntoIterator<Item = &'a AcademicRecord>,
{
    let student_code = student_code.trim();
    records.into_iter().filter(|r| r.student_code == student_code).collect()
}

pub fn filter_by_subject<'a, I>(records: I, subject_code: &str) -> Vec<&'a AcademicRecord>
where
    I: IntoIterator<Item = &'a AcademicRecord>,
{
    let subject_code = subject_code.trim();
    records.into_iter().filter(|r| r.subject_code == subject_code).collect()
}

/// Registros con periodo estrictamente anterior a `limit`.
/// Un periodo mal formado en la tabla corta todo el cálculo.
pub fn filter_before_period<'a, I>(records: I, limit: &Period) -> Result<Vec<&'a AcademicRecord>>
where
    I: IntoIterator<Item = &'a AcademicRecord>,
{
    let mut out = Vec::new();
    for record in records {
        if Period::parse(&record.period)?.is_before(limit) {
            out.push(record);
        }
    }
    Ok(out)
}
