//! Registros académicos: tabla compartida y vista por estudiante.

pub mod table;
pub mod store;

pub use table::{filter_before_period, filter_by_student, filter_by_subject, RecordsTable};
pub use store::StudentRecordStore;
