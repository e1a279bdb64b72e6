//! Report generation
//!
//! Renders the current tally as chart images and assembles them into a
//! multi-page PDF named `<service_name>_headcount.pdf`.

pub mod charts;
pub mod pdf;

pub use charts::{render_charts, RenderedCharts};

use std::fs;
use std::path::{Path, PathBuf};

use headcount_types::{Result, Tally};

/// Build the report file name from a service name
///
/// Path-hostile characters are replaced; a blank name falls back to "service".
pub fn report_file_name(service_name: &str) -> String {
    let slug: String = service_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if slug.is_empty() {
        "service_headcount.pdf".to_string()
    } else {
        format!("{}_headcount.pdf", slug)
    }
}

/// Generate the PDF report for the current tally
///
/// Chart images are staged in a temporary directory and embedded into the
/// document; the PDF lands in `report_dir`.
pub fn generate_report(tally: &Tally, report_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(report_dir)?;

    let chart_dir = tempfile::tempdir()?;
    let charts = render_charts(tally, chart_dir.path())?;

    let pdf_path = report_dir.join(report_file_name(&tally.service_name));
    pdf::generate_pdf(tally, &charts, &pdf_path)?;

    Ok(pdf_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name_sanitized() {
        assert_eq!(report_file_name("Sunday AM"), "Sunday_AM_headcount.pdf");
        assert_eq!(report_file_name("a/b:c"), "a_b_c_headcount.pdf");
    }

    #[test]
    fn test_report_file_name_blank_fallback() {
        assert_eq!(report_file_name(""), "service_headcount.pdf");
        assert_eq!(report_file_name("   "), "service_headcount.pdf");
    }
}
