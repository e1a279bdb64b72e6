//! Integration tests for report generation and exports

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use headcount_app::export::export_history_to_excel;
use headcount_app::report::generate_report;
use headcount_types::{AttendanceRecord, Category, Tally};

fn sample_tally() -> Tally {
    let mut tally = Tally::new();
    tally.set_service_name("Sunday AM");
    tally.increment(Category::Gents);
    for _ in 0..2 {
        tally.increment(Category::Ladies);
    }
    for _ in 0..3 {
        tally.increment(Category::Kids);
    }
    tally
}

#[test]
fn test_generate_report_writes_pdf() {
    let dir = tempdir().unwrap();

    let pdf_path = generate_report(&sample_tally(), dir.path()).unwrap();
    assert_eq!(
        pdf_path.file_name().unwrap().to_str().unwrap(),
        "Sunday_AM_headcount.pdf"
    );

    let bytes = std::fs::read(&pdf_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"), "output should be a PDF file");
}

#[test]
fn test_report_for_empty_tally_still_generates() {
    // Zero total: pie chart is skipped, the document is still produced
    let dir = tempdir().unwrap();

    let pdf_path = generate_report(&Tally::new(), dir.path()).unwrap();
    assert_eq!(
        pdf_path.file_name().unwrap().to_str().unwrap(),
        "service_headcount.pdf"
    );
    assert!(pdf_path.exists());
}

#[test]
fn test_excel_export_writes_workbook() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("history.xlsx");

    let records = vec![
        AttendanceRecord {
            recorded_at: Utc.with_ymd_and_hms(2025, 1, 5, 9, 30, 0).unwrap(),
            service_name: "Sunday AM".to_string(),
            gents: 3,
            ladies: 5,
            kids: 2,
        },
        AttendanceRecord {
            recorded_at: Utc.with_ymd_and_hms(2025, 1, 5, 18, 0, 0).unwrap(),
            service_name: "Sunday PM".to_string(),
            gents: 1,
            ladies: 2,
            kids: 0,
        },
    ];

    export_history_to_excel(&records, &out).unwrap();
    assert!(out.metadata().unwrap().len() > 0);
}

#[test]
fn test_excel_export_handles_empty_history() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("history.xlsx");

    export_history_to_excel(&[], &out).unwrap();
    assert!(out.exists());
}
