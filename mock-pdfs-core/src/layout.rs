//! Cursor-based page layout over `oxidize_pdf`
//!
//! Fixtures are authored as a flow of fixed-height "cells" measured in
//! millimetres on an A4 sheet. [`DocumentBuilder`] keeps a write cursor,
//! converts cell geometry into PDF points (origin bottom-left), breaks to a
//! new page when a cell would cross the bottom margin, and hands the
//! finished pages to an [`oxidize_pdf::Document`].
//!
//! ```rust,no_run
//! use mock_pdfs::layout::{Align, Border, DocumentBuilder, Next, Style};
//!
//! # fn main() -> mock_pdfs::Result<()> {
//! let mut doc = DocumentBuilder::new("Example");
//! doc.add_page();
//! doc.set_font(Style::Bold, 16.0)
//!     .cell(0.0, 10.0, "HELLO", Border::None, Next::NewLine, Align::Center)?;
//! doc.save("example.pdf")?;
//! # Ok(())
//! # }
//! ```

use crate::error::{FixtureError, Result};
use oxidize_pdf::{measure_text, Document, Font, Page};
use std::path::Path;

/// Points per millimetre.
const MM: f64 = 72.0 / 25.4;

/// A4 width in millimetres
pub const PAGE_WIDTH: f64 = 210.0;
/// A4 height in millimetres
pub const PAGE_HEIGHT: f64 = 297.0;

const MARGIN: f64 = 10.0;
const BOTTOM_MARGIN: f64 = 20.0;
const CELL_PADDING: f64 = 1.0;
const BORDER_WIDTH: f64 = 0.2;

const AUTHOR: &str = "Acme Corporation";
const CREATOR: &str = "mockpdfs";

/// Font weight of the standard Helvetica family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Regular,
    Bold,
}

impl Style {
    fn font(self) -> Font {
        match self {
            Style::Regular => Font::Helvetica,
            Style::Bold => Font::HelveticaBold,
        }
    }
}

/// Horizontal placement of text inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    None,
    Frame,
}

/// Where the cursor goes after a cell is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Stay on the line, right of the cell
    Right,
    /// Left margin of the following line
    NewLine,
}

pub struct DocumentBuilder {
    document: Document,
    current: Option<Page>,
    page_count: usize,
    x: f64,
    y: f64,
    style: Style,
    font_size: f64,
}

impl DocumentBuilder {
    pub fn new(title: &str) -> Self {
        let mut document = Document::new();
        document.set_title(title);
        document.set_author(AUTHOR);
        document.set_creator(CREATOR);

        Self {
            document,
            current: None,
            page_count: 0,
            x: MARGIN,
            y: MARGIN,
            style: Style::Regular,
            font_size: 12.0,
        }
    }

    /// Finishes the current page and starts a blank one.
    pub fn add_page(&mut self) -> &mut Self {
        if let Some(page) = self.current.take() {
            self.document.add_page(page);
        }
        self.current = Some(Page::a4());
        self.page_count += 1;
        self.x = MARGIN;
        self.y = MARGIN;
        self
    }

    pub fn set_font(&mut self, style: Style, size: f64) -> &mut Self {
        self.style = style;
        self.font_size = size;
        self
    }

    /// Moves the cursor to the left margin, `height` millimetres down.
    pub fn ln(&mut self, height: f64) -> &mut Self {
        self.x = MARGIN;
        self.y += height;
        self
    }

    /// Writes one cell at the cursor.
    ///
    /// A `width` of zero stretches the cell to the right margin.
    pub fn cell(
        &mut self,
        width: f64,
        height: f64,
        text: &str,
        border: Border,
        next: Next,
        align: Align,
    ) -> Result<&mut Self> {
        if self.current.is_none() {
            return Err(FixtureError::Layout(format!(
                "cell '{text}' written before the first page"
            )));
        }
        if height > PAGE_HEIGHT - MARGIN - BOTTOM_MARGIN {
            return Err(FixtureError::Layout(format!(
                "cell height {height}mm exceeds the printable area"
            )));
        }

        if self.y + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            let x = self.x;
            self.add_page();
            self.x = x;
        }

        let width = if width == 0.0 {
            PAGE_WIDTH - MARGIN - self.x
        } else {
            width
        };
        let (x, y, font_size) = (self.x, self.y, self.font_size);
        let font = self.style.font();
        let page = self
            .current
            .as_mut()
            .ok_or_else(|| FixtureError::Layout("no open page".to_string()))?;

        if border == Border::Frame {
            page.graphics()
                .set_line_width(BORDER_WIDTH * MM)
                .rect(
                    x * MM,
                    (PAGE_HEIGHT - y - height) * MM,
                    width * MM,
                    height * MM,
                )
                .stroke();
        }

        if !text.is_empty() {
            let text_width = measure_text(text, font.clone(), font_size) / MM;
            let dx = match align {
                Align::Left => CELL_PADDING,
                Align::Center => (width - text_width) / 2.0,
                Align::Right => width - CELL_PADDING - text_width,
            };
            // Vertically centred on the cell, as cap height is ~0.7 of the font size.
            let baseline = y + 0.5 * height + 0.3 * font_size / MM;
            page.text()
                .set_font(font, font_size)
                .at((x + dx) * MM, (PAGE_HEIGHT - baseline) * MM)
                .write(text)?;
        }

        match next {
            Next::Right => self.x += width,
            Next::NewLine => {
                self.x = MARGIN;
                self.y += height;
            }
        }
        Ok(self)
    }

    /// Full-width left-aligned line without a border.
    pub fn line(&mut self, height: f64, text: &str) -> Result<&mut Self> {
        self.cell(0.0, height, text, Border::None, Next::NewLine, Align::Left)
    }

    /// Full-width centred line without a border.
    pub fn centered(&mut self, height: f64, text: &str) -> Result<&mut Self> {
        self.cell(0.0, height, text, Border::None, Next::NewLine, Align::Center)
    }

    /// Writes each entry as a full-width line; empty entries become a `gap`.
    pub fn paragraph(&mut self, height: f64, lines: &[&str], gap: f64) -> Result<&mut Self> {
        for line in lines {
            if line.is_empty() {
                self.ln(gap);
            } else {
                self.line(height, line)?;
            }
        }
        Ok(self)
    }

    /// Bold label cell of `label_width` followed by a regular value to the margin.
    pub fn field(
        &mut self,
        label_width: f64,
        height: f64,
        label: &str,
        value: &str,
    ) -> Result<&mut Self> {
        let size = self.font_size;
        self.set_font(Style::Bold, size)
            .cell(label_width, height, label, Border::None, Next::Right, Align::Left)?;
        self.set_font(Style::Regular, size).line(height, value)
    }

    /// One row of framed cells; the last cell ends the line.
    pub fn table_row(
        &mut self,
        height: f64,
        columns: &[(f64, &str, Align)],
    ) -> Result<&mut Self> {
        let last = columns.len().saturating_sub(1);
        for (i, (width, text, align)) in columns.iter().enumerate() {
            let next = if i == last { Next::NewLine } else { Next::Right };
            self.cell(*width, height, text, Border::Frame, next, *align)?;
        }
        Ok(self)
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Cursor position in millimetres from the top-left corner.
    pub fn cursor(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Flushes the last page and writes the document to `path`.
    pub fn save(mut self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(page) = self.current.take() {
            self.document.add_page(page);
        }
        self.document.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cell_before_first_page_is_rejected() {
        let mut doc = DocumentBuilder::new("Empty");
        let result = doc.line(6.0, "too early");
        assert!(matches!(result, Err(FixtureError::Layout(_))));
    }

    #[test]
    fn test_cursor_advances_right_then_down() {
        let mut doc = DocumentBuilder::new("Cursor");
        doc.add_page();
        doc.cell(40.0, 6.0, "Label:", Border::None, Next::Right, Align::Left)
            .unwrap();
        assert_eq!(doc.cursor(), (MARGIN + 40.0, MARGIN));

        doc.cell(0.0, 6.0, "value", Border::Frame, Next::NewLine, Align::Right)
            .unwrap();
        assert_eq!(doc.cursor(), (MARGIN, MARGIN + 6.0));
    }

    #[test]
    fn test_overflow_breaks_to_new_page() {
        let mut doc = DocumentBuilder::new("Overflow");
        doc.add_page();
        for i in 0..60 {
            doc.line(5.0, &format!("line {i}")).unwrap();
        }
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_oversized_cell_is_rejected() {
        let mut doc = DocumentBuilder::new("Oversized");
        doc.add_page();
        assert!(doc.line(PAGE_HEIGHT, "tall").is_err());
    }

    #[test]
    fn test_paragraph_gaps_on_empty_entries() {
        let mut doc = DocumentBuilder::new("Paragraph");
        doc.add_page();
        doc.paragraph(6.0, &["one", "", "two"], 3.0).unwrap();
        assert_eq!(doc.cursor(), (MARGIN, MARGIN + 15.0));
    }

    #[test]
    fn test_save_writes_pdf_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.pdf");

        let mut doc = DocumentBuilder::new("Table");
        doc.add_page();
        doc.set_font(Style::Bold, 10.0)
            .table_row(
                8.0,
                &[
                    (80.0, "Description", Align::Center),
                    (30.0, "Total", Align::Center),
                ],
            )
            .unwrap();
        doc.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
