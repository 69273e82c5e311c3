// Motor de cálculo: periodos, aprobación, grupos de paquetes y avance.
pub mod period;
pub mod approval;
pub mod groups;
pub mod progress;
pub mod report;

pub use period::{is_before, Period};
pub use approval::has_passed;
pub use groups::resolve_groups;
pub use progress::{bundle_progress, summarize_group, summarize_simple_courses, SubjectLookup};
pub use report::{build_complete_report, report_for_student, summarize_all_groups};
