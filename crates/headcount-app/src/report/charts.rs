//! Chart rendering with plotters
//!
//! Bar and pie charts of the current tally, rendered to PNG files for the
//! PDF report. The pie chart is skipped with a diagnostic when the total is
//! zero, since a zero-sum slice set cannot be rendered; counts are unsigned
//! by construction, so no other degenerate input exists.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use headcount_types::{Category, Error, Result, Tally};

/// Chart image size in pixels
const CHART_SIZE: (u32, u32) = (640, 480);

/// Rendered chart image paths
#[derive(Debug, Clone)]
pub struct RenderedCharts {
    /// Bar chart image, always rendered
    pub bar: PathBuf,
    /// Pie chart image, `None` when the total was zero
    pub pie: Option<PathBuf>,
}

fn chart_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

fn category_color(category: Category) -> RGBColor {
    match category {
        Category::Gents => RGBColor(31, 119, 180),
        Category::Ladies => RGBColor(255, 127, 14),
        Category::Kids => RGBColor(44, 160, 44),
    }
}

/// Render both charts into the given directory
pub fn render_charts(tally: &Tally, dir: &Path) -> Result<RenderedCharts> {
    let bar = dir.join("bar_chart.png");
    render_bar_chart(tally, &bar)?;

    let pie_path = dir.join("pie_chart.png");
    let pie = if render_pie_chart(tally, &pie_path)? {
        Some(pie_path)
    } else {
        None
    };

    Ok(RenderedCharts { bar, pie })
}

/// Render a bar chart: one bar per category in fixed order
///
/// The y-axis is scaled slightly above the current maximum count.
pub fn render_bar_chart(tally: &Tally, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let y_max = tally
        .counts()
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0)
        + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Headcount Bar Graph", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(44)
        .build_cartesian_2d((0i32..3i32).into_segmented(), 0u32..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Categories")
        .y_desc("Count")
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if (0..3).contains(i) => {
                Category::ALL[*i as usize].label().to_string()
            }
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            tally
                .counts()
                .iter()
                .enumerate()
                .map(|(i, (category, count))| {
                    let i = i as i32;
                    Rectangle::new(
                        [
                            (SegmentValue::Exact(i), 0u32),
                            (SegmentValue::Exact(i + 1), *count),
                        ],
                        category_color(*category).filled(),
                    )
                }),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Render a pie chart with percentage-labeled slices
///
/// Returns `false` (and writes nothing) when the total is zero.
pub fn render_pie_chart(tally: &Tally, path: &Path) -> Result<bool> {
    if tally.total() == 0 {
        eprintln!("Pie chart skipped: total count is zero");
        return Ok(false);
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = root
        .titled("Headcount Distribution", ("sans-serif", 28))
        .map_err(chart_err)?;

    let sizes: Vec<f64> = tally.counts().iter().map(|(_, c)| *c as f64).collect();
    let colors: Vec<RGBColor> = Category::ALL.iter().map(|c| category_color(*c)).collect();
    let labels: Vec<String> = Category::ALL.iter().map(|c| c.label().to_string()).collect();

    let center = ((CHART_SIZE.0 / 2) as i32, (CHART_SIZE.1 / 2) as i32);
    let radius = 150.0;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));

    root.draw(&pie).map_err(chart_err)?;
    root.present().map_err(chart_err)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_tally() -> Tally {
        let mut tally = Tally::new();
        for _ in 0..3 {
            tally.increment(Category::Gents);
        }
        for _ in 0..5 {
            tally.increment(Category::Ladies);
        }
        for _ in 0..2 {
            tally.increment(Category::Kids);
        }
        tally
    }

    #[test]
    fn test_bar_chart_renders_for_empty_tally() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bar.png");
        render_bar_chart(&Tally::new(), &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_pie_chart_skipped_on_zero_total() {
        let dir = tempdir().unwrap();
        let charts = render_charts(&Tally::new(), dir.path()).unwrap();
        assert!(charts.pie.is_none());
        assert!(charts.bar.exists());
    }

    #[test]
    fn test_pie_chart_rendered_for_nonzero_total() {
        let dir = tempdir().unwrap();
        let charts = render_charts(&sample_tally(), dir.path()).unwrap();
        let pie = charts.pie.expect("pie chart should render");
        assert!(pie.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_slice_percentages_sum_to_one_hundred() {
        let tally = sample_tally();
        let total = tally.total() as f64;
        let sum: f64 = tally
            .counts()
            .iter()
            .map(|(_, c)| *c as f64 / total * 100.0)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
