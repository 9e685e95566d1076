//! PDF export backend: a titled, striped table on landscape A4 pages.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::PaintMode;
use printpdf::{BuiltinFont, Color, Mm, PdfDocument, PdfLayerReference, Rect, Rgb};

use super::{ExportError, ExportRow, EXPORT_COLUMNS};

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 10.0;
const ROW_HEIGHT: f32 = 6.0;
const BODY_FONT_SIZE: f32 = 7.0;

// Column cells wider than this are truncated; 13 columns leave little room.
const MAX_CELL_CHARS: usize = 18;

const HEADER_FILL: (f32, f32, f32) = (0.16, 0.50, 0.73);
const STRIPE_FILL: (f32, f32, f32) = (0.93, 0.94, 0.95);

pub(super) fn write(path: &Path, base_name: &str, rows: &[ExportRow]) -> Result<(), ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("{base_name} Financials"),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "table",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|error| ExportError::Pdf(error.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|error| ExportError::Pdf(error.to_string()))?;

    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / EXPORT_COLUMNS.len() as f32;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(
        format!("{base_name} Financials"),
        14.0,
        Mm(MARGIN),
        Mm(PAGE_HEIGHT - MARGIN - 5.0),
        &bold,
    );

    let mut y = PAGE_HEIGHT - MARGIN - 14.0;
    draw_header(&layer, &bold, column_width, y);
    y -= ROW_HEIGHT;

    for (index, row) in rows.iter().enumerate() {
        if y < MARGIN + ROW_HEIGHT {
            let (page, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
            layer = doc.get_page(page).get_layer(layer_index);
            y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
            draw_header(&layer, &bold, column_width, y);
            y -= ROW_HEIGHT;
        }

        if index % 2 == 1 {
            fill_row(&layer, STRIPE_FILL, column_width, y);
        }

        set_fill(&layer, (0.0, 0.0, 0.0));
        for (col, cell) in row.cells().iter().enumerate() {
            layer.use_text(
                truncate(&cell.render()),
                BODY_FONT_SIZE,
                Mm(MARGIN + col as f32 * column_width + 1.0),
                Mm(y + 1.5),
                &font,
            );
        }

        y -= ROW_HEIGHT;
    }

    doc.save(&mut BufWriter::new(File::create(path)?))
        .map_err(|error| ExportError::Pdf(error.to_string()))?;
    Ok(())
}

fn draw_header(layer: &PdfLayerReference, bold: &printpdf::IndirectFontRef, column_width: f32, y: f32) {
    fill_row(layer, HEADER_FILL, column_width, y);
    set_fill(layer, (1.0, 1.0, 1.0));
    for (col, name) in EXPORT_COLUMNS.iter().enumerate() {
        layer.use_text(
            truncate(name),
            BODY_FONT_SIZE,
            Mm(MARGIN + col as f32 * column_width + 1.0),
            Mm(y + 1.5),
            bold,
        );
    }
}

fn fill_row(layer: &PdfLayerReference, rgb: (f32, f32, f32), column_width: f32, y: f32) {
    set_fill(layer, rgb);
    let rect = Rect::new(
        Mm(MARGIN),
        Mm(y),
        Mm(MARGIN + column_width * EXPORT_COLUMNS.len() as f32),
        Mm(y + ROW_HEIGHT),
    )
    .with_mode(PaintMode::Fill);
    layer.add_rect(rect);
}

fn set_fill(layer: &PdfLayerReference, (r, g, b): (f32, f32, f32)) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_CHARS {
        return value.to_owned();
    }
    let mut cut: String = value.chars().take(MAX_CELL_CHARS - 1).collect();
    cut.push('…');
    cut
}
