use crate::shared::Result;
use std::path::Path;

/// Text styles a report document can render
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// No markup around text
    #[default]
    None,
    /// A paragraph
    Normal,
    /// A heading; each entry into this style takes the next heading level
    Header,
    /// An inline span with the given class
    Custom(String),
}

/// ReportDocumentWriter port for incrementally emitting the report
///
/// Writers are single-use: once `close` has run, every further write fails
/// with a contract violation while `close` itself stays a no-op.
/// All `text`/`label` arguments are escaped by the writer.
pub trait ReportDocumentWriter {
    /// Where the primary document is (or will be) written
    fn document_path(&self) -> &Path;

    /// Sets the level the next heading gets (clamped to 1..=6)
    fn reset_heading_level(&mut self, level: u8);

    /// Switches style, closing the markup of the previous one
    fn with_style(&mut self, style: TextStyle) -> Result<()>;

    fn text(&mut self, text: &str) -> Result<()>;

    fn line_break(&mut self) -> Result<()>;

    fn start_table(&mut self) -> Result<()>;

    fn end_table(&mut self) -> Result<()>;

    fn start_row(&mut self) -> Result<()>;

    fn end_row(&mut self) -> Result<()>;

    fn start_cell(&mut self) -> Result<()>;

    fn end_cell(&mut self) -> Result<()>;

    /// A column header cell
    fn header_cell(&mut self, text: &str) -> Result<()>;

    /// Shorthand for start cell, text, end cell
    fn cell(&mut self, text: &str) -> Result<()> {
        self.start_cell()?;
        self.text(text)?;
        self.end_cell()
    }

    fn link(&mut self, label: &str, target: &str) -> Result<()>;

    /// Writes `content` to a side file at `relative_name` next to the
    /// document, then links to it with `label`.
    ///
    /// # Errors
    /// Fails if `relative_name` would escape the report directory or the
    /// side file cannot be written
    fn link_to_content(&mut self, label: &str, relative_name: &str, content: &str) -> Result<()>;

    /// Finishes the document; calling it again does nothing
    fn close(&mut self) -> Result<()>;
}
