use creditrack::algorithm::has_passed;
use creditrack::models::AcademicRecord;

fn record(status: Option<&str>, mode: &str, grade: &str) -> AcademicRecord {
    AcademicRecord {
        student_code: "1001".to_string(),
        subject_code: "M1".to_string(),
        period: "202110".to_string(),
        course_status: status.map(|s| s.to_string()),
        grading_mode: mode.to_string(),
        final_grade: grade.to_string(),
        credits: 3.0,
    }
}

#[test]
fn test_homologated_always_passes() {
    assert!(has_passed(&[record(Some("HOMOLOGATED"), "PASS/FAIL", "F")]));
    assert!(has_passed(&[record(Some("HOMOLOGADO"), "NUMERIC STANDARD 1.5–5.0", "")]));
}

#[test]
fn test_pass_fail() {
    assert!(has_passed(&[record(None, "PASS/FAIL", "A")]));
    assert!(!has_passed(&[record(None, "PASS/FAIL", "F")]));
    assert!(!has_passed(&[record(None, "PASS/FAIL", "5.0")]));
}

#[test]
fn test_numeric_standard() {
    let mode = "NUMERIC STANDARD 1.5–5.0";
    assert!(has_passed(&[record(None, mode, "3.0")]));
    assert!(has_passed(&[record(None, mode, "A")]));
    // coma decimal: no es una nota numérica
    assert!(!has_passed(&[record(None, "NUMERIC STANDARD 1.5-5.0", "3,5")]));
    assert!(!has_passed(&[record(None, "ESTANDAR NUMERICO 1.5-5.0", "3,5")]));
    assert!(!has_passed(&[record(None, mode, "2.9")]));
    assert!(!has_passed(&[record(None, mode, "N/A")]));
}

#[test]
fn test_unknown_mode_passes() {
    assert!(has_passed(&[record(None, "OTRO MODO", "0")]));
}

#[test]
fn test_only_first_record_counts() {
    let mode = "NUMERIC STANDARD 1.5–5.0";
    let failed_then_passed = [record(None, mode, "2.0"), record(None, mode, "4.5")];
    assert!(!has_passed(&failed_then_passed));

    let empty: [AcademicRecord; 0] = [];
    assert!(!has_passed(&empty));
}
