//! Lectura de la tabla de registros académicos (CSV delimitado o planilla).

use std::fs::File;
use std::io::Read;
use std::path::Path;
use calamine::{open_workbook_auto, Reader};
use csv::{ReaderBuilder, Trim};
use tracing::{info, warn};
use crate::datafiles::io::{cell_to_string, non_empty, normalize_header};
use crate::error::{ProgressError, Result};
use crate::models::AcademicRecord;
use crate::records::RecordsTable;

// Encabezados aceptados (ya normalizados): nombre original y alias en inglés.
const STUDENT_HEADERS: &[&str] = &["codigo", "student_code"];
const SUBJECT_HEADERS: &[&str] = &["materia", "subject_code"];
const PERIOD_HEADERS: &[&str] = &["periodo", "period"];
const STATUS_HEADERS: &[&str] = &["estatus_curso", "course_status"];
const MODE_HEADERS: &[&str] = &["descripcion_modo_de_calificacion", "grading_mode"];
const GRADE_HEADERS: &[&str] = &["calificacion_final", "final_grade"];
const CREDITS_HEADERS: &[&str] = &["numero_creditos", "credits"];

/// Posición de cada campo en la fila. Estado y créditos son opcionales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordColumns {
    student: usize,
    subject: usize,
    period: usize,
    status: Option<usize>,
    mode: usize,
    grade: usize,
    credits: Option<usize>,
}

impl RecordColumns {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let normalized: Vec<String> =
            headers.iter().map(|h| normalize_header(h.as_ref())).collect();
        let find = |aliases: &[&str]| normalized.iter().position(|h| aliases.contains(&h.as_str()));
        let require = |aliases: &[&str]| {
            find(aliases).ok_or_else(|| ProgressError::MissingColumn(aliases[0].to_uppercase()))
        };

        Ok(RecordColumns {
            student: require(STUDENT_HEADERS)?,
            subject: require(SUBJECT_HEADERS)?,
            period: require(PERIOD_HEADERS)?,
            status: find(STATUS_HEADERS),
            mode: require(MODE_HEADERS)?,
            grade: require(GRADE_HEADERS)?,
            credits: find(CREDITS_HEADERS),
        })
    }

    /// Convierte una fila; `None` si la fila no trae estudiante ni ramo.
    pub fn record_from_row<S: AsRef<str>>(&self, row: &[S], line: usize) -> Option<AcademicRecord> {
        let cell = |idx: usize| row.get(idx).map(|c| c.as_ref().trim()).unwrap_or("");

        let student_code = cell(self.student);
        let subject_code = cell(self.subject);
        if student_code.is_empty() && subject_code.is_empty() {
            return None;
        }

        Some(AcademicRecord {
            student_code: student_code.to_string(),
            subject_code: subject_code.to_string(),
            period: cell(self.period).to_string(),
            course_status: self.status.and_then(|idx| non_empty(cell(idx))),
            grading_mode: cell(self.mode).to_string(),
            final_grade: cell(self.grade).to_string(),
            credits: self.credits.map(|idx| parse_credits(cell(idx), line)).unwrap_or(0.0),
        })
    }
}

/// Créditos de la fila; vacío o ilegible cuenta como 0.
fn parse_credits(raw: &str, line: usize) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            warn!(line, value = raw, "créditos no numéricos, se usan 0");
            0.0
        }
    }
}

/// Lee registros delimitados desde cualquier lector (la primera fila es el encabezado).
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<RecordsTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = RecordColumns::from_headers(&headers)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let fields: Vec<&str> = row.iter().collect();
        // +2: encabezado y numeración desde 1
        if let Some(record) = columns.record_from_row(&fields, i + 2) {
            records.push(record);
        }
    }
    Ok(RecordsTable::new(records))
}

/// Lee la primera hoja de una planilla (xlsx/xls/ods).
pub fn read_spreadsheet(path: &Path) -> Result<RecordsTable> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| ProgressError::Spreadsheet(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let first = sheet_names
        .first()
        .ok_or_else(|| ProgressError::Spreadsheet(format!("'{}' no tiene hojas", path.display())))?;
    let range = workbook
        .worksheet_range(first)
        .map_err(|e| ProgressError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(RecordsTable::default()),
    };
    let columns = RecordColumns::from_headers(&headers)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if let Some(record) = columns.record_from_row(&cells, i + 2) {
            records.push(record);
        }
    }
    Ok(RecordsTable::new(records))
}

/// Carga la tabla según la extensión del archivo.
pub fn load_records_table(path: &Path, delimiter: u8) -> Result<RecordsTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let table = match ext.as_str() {
        "csv" | "txt" => {
            let file = File::open(path).map_err(|e| ProgressError::io(path, e))?;
            read_delimited(file, delimiter)?
        }
        "xlsx" | "xlsm" | "xls" | "ods" => read_spreadsheet(path)?,
        other => {
            return Err(ProgressError::UnsupportedFormat(format!(
                "'{}' (extensión '{}')",
                path.display(),
                other
            )));
        }
    };

    info!(path = %path.display(), records = table.len(), "tabla de registros cargada");
    Ok(table)
}
