use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use creditrack::algorithm::period::Period;
use creditrack::algorithm::report_for_student;
use creditrack::datafiles::{load_curriculum, load_records_table, save_report};
use creditrack::models::{CurriculumStructure, SimpleCoursesSummary};
use creditrack::{ProgressError, RecordsTable};
use pretty_assertions::assert_eq;

const RECORDS_CSV: &str = "\
CODIGO;MATERIA;PERIODO;ESTATUS_CURSO;DESCRIPCION_MODO_DE_CALIFICACION;CALIFICACION_FINAL;NUMERO_CREDITOS
1001;M1;202110;HOMOLOGATED;NUMERIC STANDARD 1.5-5.0;;3
1001;M2;202120;;NUMERIC STANDARD 1.5-5.0;4.2;4
1001;M3;202210;;PASS/FAIL;A;3
1001;M4;202220;;NUMERIC STANDARD 1.5-5.0;5.0;3
1002;M1;202110;;NUMERIC STANDARD 1.5-5.0;2.0;3
1003;M1;20X1;;PASS/FAIL;A;3
";

const CURRICULUM_JSON: &str = r#"
{
    "simple_courses": [{"code": "M1"}, {"code": "M9"}],
    "course_bundles": {
        "A": {"minimum_credits_to_pass": 10, "related_bundles": ["B"],
              "courses": {"M2": {"type": "REQUIRED"}, "M3": {"type": "OPTIONAL"}, "M4": {"type": "OPTIONAL"}}},
        "B": {"minimum_credits_to_pass": 8, "related_bundles": [],
              "courses": {"M3": {"type": "OPTIONAL"}, "M5": {"type": "OPTIONAL"}}},
        "C": {"minimum_credits_to_pass": 0, "courses": {"M6": {"type": "REQUIRED"}}}
    }
}
"#;

fn load_fixtures(dir: &Path) -> (RecordsTable, CurriculumStructure) {
    let records_path = dir.join("registros.csv");
    let curriculum_path = dir.join("curriculum.json");
    fs::write(&records_path, RECORDS_CSV).unwrap();
    fs::write(&curriculum_path, CURRICULUM_JSON).unwrap();

    let table = load_records_table(&records_path, b';').expect("Debe leer la tabla");
    let curriculum = load_curriculum(&curriculum_path).expect("Debe leer el currículo");
    (table, curriculum)
}

fn codes(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_report_for_student() {
    creditrack::logging::init_test();
    let dir = tempfile::tempdir().unwrap();
    let (table, curriculum) = load_fixtures(dir.path());
    assert_eq!(table.len(), 6);

    let report = report_for_student(&table, &curriculum, "1001", Period::new(2022, 2)).unwrap();

    assert_eq!(
        report.simple_courses,
        SimpleCoursesSummary {
            approved_courses: vec!["M1".to_string()],
            total_approved_courses: 1,
            total_courses: 2,
            approval_percentage: 50.0,
        }
    );

    let groups = &report.group_of_related_course_bundles;
    assert_eq!(groups.keys().cloned().collect::<Vec<_>>(), vec!["A/B", "C"]);

    let ab = &groups["A/B"];
    // M4 es del mismo periodo que el corte: no cuenta
    assert_eq!(ab.course_bundles["A"].approved_subject_codes, codes(&["M2", "M3"]));
    assert_eq!(ab.course_bundles["A"].approved_credits, 7.0);
    assert_eq!(ab.course_bundles["A"].completion_percentage, 70.0);
    assert_eq!(ab.course_bundles["B"].completion_percentage, 37.5);

    let best = ab.highest_approved_percentage.as_ref().expect("grupo no vacío");
    assert_eq!(best.bundle_name, "A");
    assert_eq!(best.total_credits, 10);

    let c = &groups["C"];
    assert_eq!(c.course_bundles["C"].completion_percentage, 0.0);
    assert_eq!(c.highest_approved_percentage.as_ref().map(|h| h.bundle_name.as_str()), Some("C"));
}

#[test]
fn test_later_cutoff_counts_more_records() {
    let dir = tempfile::tempdir().unwrap();
    let (table, curriculum) = load_fixtures(dir.path());

    let report = report_for_student(&table, &curriculum, "1001", Period::new(2023, 1)).unwrap();
    let a = &report.group_of_related_course_bundles["A/B"].course_bundles["A"];
    assert_eq!(a.approved_credits, 10.0);
    assert_eq!(a.completion_percentage, 100.0);
}

#[test]
fn test_failed_and_unknown_students() {
    let dir = tempfile::tempdir().unwrap();
    let (table, curriculum) = load_fixtures(dir.path());
    let cutoff = Period::new(2022, 2);

    let failed = report_for_student(&table, &curriculum, "1002", cutoff).unwrap();
    assert!(failed.simple_courses.approved_courses.is_empty());
    assert_eq!(failed.simple_courses.approval_percentage, 0.0);

    // sin registros no es error: todo en cero
    let unknown = report_for_student(&table, &curriculum, "9999", cutoff).unwrap();
    assert_eq!(unknown.simple_courses.total_courses, 2);
    assert_eq!(unknown.group_of_related_course_bundles.len(), 2);
    for group in unknown.group_of_related_course_bundles.values() {
        for progress in group.course_bundles.values() {
            assert_eq!(progress.approved_credits, 0.0);
            assert!(progress.approved_subject_codes.is_empty());
        }
    }
}

#[test]
fn test_malformed_record_period_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (table, curriculum) = load_fixtures(dir.path());

    let err = report_for_student(&table, &curriculum, "1003", Period::new(2022, 2)).unwrap_err();
    assert!(matches!(err, ProgressError::InvalidPeriod { .. }));
}

#[test]
fn test_homologated_simple_course_only() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().join("r.csv");
    fs::write(
        &records,
        "student_code,subject_code,period,course_status,grading_mode,final_grade\n\
         S1,M1,202110,HOMOLOGATED,PASS/FAIL,\n",
    )
    .unwrap();
    let table = load_records_table(&records, b',').unwrap();
    let curriculum = CurriculumStructure::new(vec!["M1".to_string()], Default::default());

    let report = report_for_student(&table, &curriculum, "S1", Period::new(2022, 2)).unwrap();
    assert_eq!(report.simple_courses.approved_courses, vec!["M1"]);
    assert_eq!(report.simple_courses.approval_percentage, 100.0);
    assert!(report.group_of_related_course_bundles.is_empty());
}

#[test]
fn test_save_report_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let (table, curriculum) = load_fixtures(dir.path());
    let report = report_for_student(&table, &curriculum, "1001", Period::new(2022, 2)).unwrap();

    let out_dir = dir.path().join("salida");
    let path = save_report(&report, &out_dir, "avance", "1001").unwrap();
    assert_eq!(path, out_dir.join("avance-1001.json"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"simple_courses\": {"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["group_of_related_course_bundles"]["A/B"]["highest_approved_percentage"]["bundle_name"],
        "A"
    );
    assert_eq!(
        value["group_of_related_course_bundles"]["A/B"]["course_bundles"]["A"]["approved_subject_codes"],
        serde_json::json!(["M2", "M3"])
    );
}

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

#[test]
fn test_spreadsheet_matches_csv() {
    let dir = tempfile::tempdir().unwrap();
    let (csv_table, curriculum) = load_fixtures(dir.path());
    let xlsx_table =
        load_records_table(&fixture("registros.xlsx"), b';').expect("Debe leer la planilla");

    // sólo la primera hoja: la hoja "Notas" no aporta registros
    assert_eq!(xlsx_table.len(), 6);
    assert!(xlsx_table.student_records("9999").is_empty());

    // celdas numéricas de código, periodo y créditos sin decimales
    let first = &xlsx_table.records()[0];
    assert_eq!(first.student_code, "1001");
    assert_eq!(first.period, "202110");
    assert_eq!(first.credits, 3.0);
    assert_eq!(first.course_status.as_deref(), Some("HOMOLOGATED"));
    assert_eq!(first.final_grade, "");
    assert_eq!(xlsx_table.records()[1].final_grade, "4.2");

    let cutoff = Period::new(2022, 2);
    for student in ["1001", "1002"] {
        let from_csv = report_for_student(&csv_table, &curriculum, student, cutoff).unwrap();
        let from_xlsx = report_for_student(&xlsx_table, &curriculum, student, cutoff).unwrap();
        assert_eq!(from_xlsx, from_csv);
    }

    let err = report_for_student(&xlsx_table, &curriculum, "1003", cutoff).unwrap_err();
    assert!(matches!(err, ProgressError::InvalidPeriod { .. }));
}

#[test]
fn test_empty_spreadsheet_is_empty_table() {
    let table = load_records_table(&fixture("registros_vacio.xlsx"), b';').unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_unsupported_extension() {
    let err = load_records_table(Path::new("registros.pdf"), b';').unwrap_err();
    assert!(matches!(err, ProgressError::UnsupportedFormat(_)));
}
