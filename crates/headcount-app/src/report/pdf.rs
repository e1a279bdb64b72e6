//! PDF report assembly with printpdf
//!
//! Page 1: title, service name line, category/count table. Page 2: embedded
//! bar chart. Page 3: embedded pie chart, omitted when the pie was skipped.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::image_crate;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point,
};

use headcount_types::{Category, Error, Result, Tally};

use super::charts::RenderedCharts;

/// A4 page size
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

/// Chart images are 640px wide; at 96 dpi that is ~169mm, fitting A4
const IMAGE_DPI: f32 = 96.0;

fn pdf_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Pdf(e.to_string())
}

/// Assemble the report PDF from the tally and the rendered chart images
pub fn generate_pdf(tally: &Tally, charts: &RenderedCharts, output_path: &Path) -> Result<()> {
    let (doc, page1, layer1) = PdfDocument::new(
        "Service Headcount Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Summary",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    let layer = doc.get_page(page1).get_layer(layer1);
    write_summary_page(&layer, tally, &font, &font_bold);

    add_chart_page(&doc, "Attendance Breakdown", &charts.bar, &font_bold)?;
    if let Some(ref pie) = charts.pie {
        add_chart_page(&doc, "Attendance Distribution", pie, &font_bold)?;
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;
    Ok(())
}

fn write_summary_page(
    layer: &PdfLayerReference,
    tally: &Tally,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
) {
    layer.use_text(
        "Service Headcount Report",
        18.0,
        Mm(58.0),
        Mm(270.0),
        font_bold,
    );
    layer.use_text(
        format!("Service Name: {}", tally.service_name_or_default()),
        12.0,
        Mm(58.0),
        Mm(258.0),
        font,
    );

    // Category/count table: header plus Gents, Ladies, Kids, Total
    let mut y = 240.0f32;
    layer.use_text("Category", 12.0, Mm(65.0), Mm(y), font_bold);
    layer.use_text("Count", 12.0, Mm(115.0), Mm(y), font_bold);
    draw_rule(layer, y - 3.0);

    for category in Category::ALL {
        y -= 10.0;
        layer.use_text(category.label(), 12.0, Mm(65.0), Mm(y), font);
        layer.use_text(tally.count(category).to_string(), 12.0, Mm(115.0), Mm(y), font);
    }

    y -= 10.0;
    draw_rule(layer, y + 7.0);
    layer.use_text("Total", 12.0, Mm(65.0), Mm(y), font_bold);
    layer.use_text(tally.total().to_string(), 12.0, Mm(115.0), Mm(y), font_bold);
    draw_rule(layer, y - 3.0);
}

/// Horizontal table rule at the given height
fn draw_rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_thickness(0.4);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(60.0), Mm(y)), false),
            (Point::new(Mm(140.0), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Append a page carrying a caption and one embedded chart image
fn add_chart_page(
    doc: &PdfDocumentReference,
    caption: &str,
    image_path: &Path,
    font_bold: &IndirectFontRef,
) -> Result<()> {
    let (page, layer_idx) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), caption);
    let layer = doc.get_page(page).get_layer(layer_idx);

    layer.use_text(caption, 14.0, Mm(70.0), Mm(272.0), font_bold);

    let dynamic_image = image_crate::open(image_path).map_err(pdf_err)?;
    let image = Image::from_dynamic_image(&dynamic_image);
    image.add_to_layer(
        layer,
        ImageTransform {
            translate_x: Some(Mm(20.0)),
            translate_y: Some(Mm(130.0)),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );

    Ok(())
}
