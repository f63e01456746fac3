//! Document assembler: packs named images into a `.docx` table.
//!
//! Layout is passed in explicitly through `DocumentLayout`. With one column the
//! table has a header row and one `name | image` row per item; with more
//! columns the images form a grid and each cell carries its name as a caption.
use std::io::{Cursor, Write};

use docx_rs::{
    AlignmentType, Docx, Paragraph, Pic, Run, Style, StyleType, Table, TableCell, TableRow,
    WidthType,
};
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::NamedImage;

pub const EMU_PER_INCH: f64 = 914_400.0;
pub const TWIPS_PER_INCH: f64 = 1440.0;

const HEADING_STYLE_ID: &str = "Heading1";
const NAME_COLUMN_INCHES: f64 = 2.0;
const CELL_MARGIN_INCHES: f64 = 0.2;

/// Explicit document configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLayout {
    pub title: String,
    /// Header of the name column (single-column layout only)
    pub name_header: String,
    /// Header of the image column (single-column layout only)
    pub image_header: String,
    /// Rendered width of each image; height follows the aspect ratio
    pub image_width_inches: f64,
    /// Images per table row
    pub columns: usize,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            title: "Meter Display Regions".to_string(),
            name_header: "Image Name".to_string(),
            image_header: "Display Crop".to_string(),
            image_width_inches: 2.5,
            columns: 1,
        }
    }
}

impl DocumentLayout {
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(Error::InvalidArgument {
                arg: "columns",
                value: self.columns.to_string(),
            });
        }
        if !(self.image_width_inches.is_finite() && self.image_width_inches > 0.0) {
            return Err(Error::InvalidArgument {
                arg: "image_width_inches",
                value: self.image_width_inches.to_string(),
            });
        }
        Ok(())
    }
}

/// Rendered size in EMU for an image drawn `width_inches` wide.
pub fn display_size_emu(width_px: u32, height_px: u32, width_inches: f64) -> (u32, u32) {
    let width_emu = width_inches * EMU_PER_INCH;
    let height_emu = if width_px == 0 {
        0.0
    } else {
        width_emu * height_px as f64 / width_px as f64
    };
    (width_emu.round() as u32, height_emu.round() as u32)
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

fn text_paragraph(text: &str, bold: bool) -> Paragraph {
    let mut run = Run::new().add_text(text);
    if bold {
        run = run.bold();
    }
    Paragraph::new().add_run(run)
}

fn picture_paragraph(item: &NamedImage, layout: &DocumentLayout) -> Result<Paragraph> {
    let png = encode_png(&item.image)?;
    let (width, height) = item.image.dimensions();
    let (w_emu, h_emu) = display_size_emu(width, height, layout.image_width_inches);
    debug!(
        "Embedding '{}' ({}x{} px, {} bytes PNG)",
        item.name,
        width,
        height,
        png.len()
    );
    let pic = Pic::new(&png).size(w_emu, h_emu);
    Ok(Paragraph::new().add_run(Run::new().add_image(pic)))
}

fn twips(inches: f64) -> usize {
    (inches * TWIPS_PER_INCH).round() as usize
}

fn labeled_rows_table(items: &[NamedImage], layout: &DocumentLayout) -> Result<Table> {
    let name_width = twips(NAME_COLUMN_INCHES);
    let image_width = twips(layout.image_width_inches + CELL_MARGIN_INCHES);

    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(TableRow::new(vec![
        TableCell::new()
            .width(name_width, WidthType::Dxa)
            .add_paragraph(text_paragraph(&layout.name_header, true)),
        TableCell::new()
            .width(image_width, WidthType::Dxa)
            .add_paragraph(text_paragraph(&layout.image_header, true)),
    ]));
    for item in items {
        rows.push(TableRow::new(vec![
            TableCell::new()
                .width(name_width, WidthType::Dxa)
                .add_paragraph(text_paragraph(&item.name, false)),
            TableCell::new()
                .width(image_width, WidthType::Dxa)
                .add_paragraph(picture_paragraph(item, layout)?),
        ]));
    }
    Ok(Table::new(rows).set_grid(vec![name_width, image_width]))
}

fn grid_table(items: &[NamedImage], layout: &DocumentLayout) -> Result<Table> {
    let cell_width = twips(layout.image_width_inches + CELL_MARGIN_INCHES);
    let mut rows = Vec::with_capacity(items.len().div_ceil(layout.columns));
    for chunk in items.chunks(layout.columns) {
        let mut cells = Vec::with_capacity(layout.columns);
        for item in chunk {
            cells.push(
                TableCell::new()
                    .width(cell_width, WidthType::Dxa)
                    .add_paragraph(picture_paragraph(item, layout)?.align(AlignmentType::Center))
                    .add_paragraph(
                        text_paragraph(&item.name, false).align(AlignmentType::Center),
                    ),
            );
        }
        // pad the last row so every row has the same cell count
        while cells.len() < layout.columns {
            cells.push(
                TableCell::new()
                    .width(cell_width, WidthType::Dxa)
                    .add_paragraph(Paragraph::new()),
            );
        }
        rows.push(TableRow::new(cells));
    }
    Ok(Table::new(rows).set_grid(vec![cell_width; layout.columns]))
}

/// Build the `.docx` bytes: a heading followed by one table holding every item once.
pub fn build_document(items: &[NamedImage], layout: &DocumentLayout) -> Result<Vec<u8>> {
    layout.validate()?;
    if items.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let table = if layout.columns == 1 {
        labeled_rows_table(items, layout)?
    } else {
        grid_table(items, layout)?
    };

    let heading_style = Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("Heading 1")
        .size(32)
        .bold();

    let docx = Docx::new()
        .add_style(heading_style)
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(&layout.title))
                .style(HEADING_STYLE_ID),
        )
        .add_table(table);

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| Error::Document(e.to_string()))?;
    buf.flush()?;

    let bytes = buf.into_inner();
    info!(
        "Built document with {} image(s) in {} column(s), {} bytes",
        items.len(),
        layout.columns,
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn item(name: &str, w: u32, h: u32) -> NamedImage {
        NamedImage::new(name, RgbImage::from_pixel(w, h, Rgb([120, 60, 30])))
    }

    #[test]
    fn display_size_follows_aspect_ratio() {
        assert_eq!(display_size_emu(200, 100, 2.5), (2_286_000, 1_143_000));
        assert_eq!(display_size_emu(100, 100, 1.0), (914_400, 914_400));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = build_document(&[], &DocumentLayout::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument));
    }

    #[test]
    fn invalid_layout_is_rejected() {
        let layout = DocumentLayout {
            columns: 0,
            ..DocumentLayout::default()
        };
        assert!(matches!(
            build_document(&[item("a.png", 4, 4)], &layout),
            Err(Error::InvalidArgument { arg: "columns", .. })
        ));
        let layout = DocumentLayout {
            image_width_inches: -1.0,
            ..DocumentLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn output_is_a_zip_container() {
        let bytes = build_document(&[item("a.png", 40, 20)], &DocumentLayout::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn grid_layout_accepts_partial_rows() {
        let layout = DocumentLayout {
            columns: 3,
            ..DocumentLayout::default()
        };
        let items = vec![item("a.png", 10, 10), item("b.png", 20, 10), item("c.png", 10, 30), item("d.png", 8, 8)];
        let bytes = build_document(&items, &layout).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
