//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use headcount_types::{AttendanceRecord, Category, Error, Result};

/// Export the attendance history to an Excel file
pub fn export_history_to_excel(records: &[AttendanceRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, records)?;

    // Add records sheet
    let records_sheet = workbook.add_worksheet();
    write_records_sheet(records_sheet, records)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, records: &[AttendanceRecord]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Attendance History Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Export Date:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, &chrono::Utc::now().to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Total Records:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, records.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Grand totals per category across all records
    sheet
        .write_string_with_format(5, 0, "Grand Totals", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut row = 6;
    let mut grand_total = 0u32;
    for category in Category::ALL {
        let total: u32 = records.iter().map(|r| r.count(category)).sum();
        grand_total += total;
        sheet
            .write_string(row, 0, category.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, total as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    sheet
        .write_string(row, 0, "Total")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(row, 1, grand_total as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_records_sheet(sheet: &mut Worksheet, records: &[AttendanceRecord]) -> Result<()> {
    sheet
        .set_name("Records")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    let headers = ["Date", "Service Name", "Gents", "Ladies", "Kids", "Total"];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string(row, 0, record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &record.service_name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, record.gents as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, record.ladies as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, record.kids as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, record.total() as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Column widths for readability
    sheet
        .set_column_width(0, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
