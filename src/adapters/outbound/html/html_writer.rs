use crate::ports::outbound::{ReportDocumentWriter, TextStyle};
use crate::report_generation::domain::ReportMetadata;
use crate::shared::error::ReportError;
use crate::shared::security::validate_relative_entry_path;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const MIN_HEADING_LEVEL: u8 = 1;
const MAX_HEADING_LEVEL: u8 = 6;

/// Lifecycle of the primary document
enum DocumentState {
    /// Nothing written yet; no file exists
    NotOpened,
    Open(BufWriter<File>),
    /// Terminal
    Closed,
}

/// Observable lifecycle phase, for callers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterPhase {
    NotOpened,
    Open,
    Closed,
}

/// HtmlReportWriter adapter: streams the report as HTML.
///
/// The output file is created lazily by the first non-empty write, together
/// with its parent directories and the document preamble. Style changes
/// close the previous style's markup before opening the next. `close`
/// writes the postamble exactly once; `Drop` closes a writer that is still
/// open so the document is finished on every exit path.
///
/// Methods take `&mut self`, which serializes all transitions.
pub struct HtmlReportWriter {
    path: PathBuf,
    preamble: String,
    state: DocumentState,
    style: TextStyle,
    closing_markup: String,
    heading_level: u8,
}

impl HtmlReportWriter {
    pub fn new(path: impl Into<PathBuf>, title: &str, metadata: &ReportMetadata) -> Self {
        Self {
            path: path.into(),
            preamble: preamble(title, metadata),
            state: DocumentState::NotOpened,
            style: TextStyle::None,
            closing_markup: String::new(),
            heading_level: MIN_HEADING_LEVEL,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn phase(&self) -> WriterPhase {
        match self.state {
            DocumentState::NotOpened => WriterPhase::NotOpened,
            DocumentState::Open(_) => WriterPhase::Open,
            DocumentState::Closed => WriterPhase::Closed,
        }
    }

    /// Directory side files are placed under
    fn content_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Writes markup as-is, opening the document on the first non-empty write
    fn html(&mut self, markup: &str) -> Result<()> {
        if markup.is_empty() {
            return self.ensure_not_closed();
        }
        if matches!(self.state, DocumentState::NotOpened) {
            self.open()?;
        }
        match &mut self.state {
            DocumentState::Open(writer) => writer
                .write_all(markup.as_bytes())
                .map_err(|e| write_error(&self.path, e)),
            _ => Err(self.closed_error()),
        }
    }

    fn open(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_error(&self.path, e))?;
            }
        }
        let file = File::create(&self.path).map_err(|e| write_error(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.preamble.as_bytes())
            .map_err(|e| write_error(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "opened report document");
        self.state = DocumentState::Open(writer);
        Ok(())
    }

    fn ensure_not_closed(&self) -> Result<()> {
        match self.state {
            DocumentState::Closed => Err(self.closed_error()),
            _ => Ok(()),
        }
    }

    fn closed_error(&self) -> anyhow::Error {
        ReportError::WriterClosed {
            path: self.path.clone(),
        }
        .into()
    }

    fn opening_markup(&self, style: &TextStyle) -> (String, String) {
        match style {
            TextStyle::None => (String::new(), String::new()),
            TextStyle::Normal => ("<p>".to_string(), "</p>".to_string()),
            TextStyle::Header => {
                let level = self.heading_level;
                (format!("<h{}>", level), format!("</h{}>", level))
            }
            TextStyle::Custom(class) => (
                format!("<span class=\"{}\">", escape_html(class)),
                "</span>".to_string(),
            ),
        }
    }
}

impl ReportDocumentWriter for HtmlReportWriter {
    fn document_path(&self) -> &Path {
        &self.path
    }

    fn reset_heading_level(&mut self, level: u8) {
        self.heading_level = level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL);
    }

    fn with_style(&mut self, style: TextStyle) -> Result<()> {
        self.ensure_not_closed()?;
        if style == self.style {
            return Ok(());
        }

        // State only changes once the markup is written
        let previous_closing = self.closing_markup.clone();
        self.html(&previous_closing)?;
        self.closing_markup.clear();
        self.style = TextStyle::None;

        let (opening, closing) = self.opening_markup(&style);
        self.html(&opening)?;
        if style == TextStyle::Header {
            self.heading_level = (self.heading_level + 1).min(MAX_HEADING_LEVEL);
        }
        self.style = style;
        self.closing_markup = closing;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.html(&escape_html(text))
    }

    fn line_break(&mut self) -> Result<()> {
        self.html("<br />")
    }

    fn start_table(&mut self) -> Result<()> {
        self.with_style(TextStyle::None)?;
        self.html("<table>")
    }

    fn end_table(&mut self) -> Result<()> {
        self.with_style(TextStyle::None)?;
        self.html("</table>")
    }

    fn start_row(&mut self) -> Result<()> {
        self.with_style(TextStyle::None)?;
        self.html("<tr>")
    }

    fn end_row(&mut self) -> Result<()> {
        self.with_style(TextStyle::None)?;
        self.html("</tr>")
    }

    fn start_cell(&mut self) -> Result<()> {
        self.with_style(TextStyle::None)?;
        self.html("<td>")
    }

    fn end_cell(&mut self) -> Result<()> {
        self.with_style(TextStyle::None)?;
        self.html("</td>")
    }

    fn header_cell(&mut self, text: &str) -> Result<()> {
        self.with_style(TextStyle::None)?;
        self.html(&format!("<th>{}</th>", escape_html(text)))
    }

    fn link(&mut self, label: &str, target: &str) -> Result<()> {
        self.html(&format!(
            "<a href=\"{}\">{}</a>",
            escape_html(target),
            escape_html(label)
        ))
    }

    fn link_to_content(&mut self, label: &str, relative_name: &str, content: &str) -> Result<()> {
        self.ensure_not_closed()?;
        let relative = Path::new(relative_name);
        validate_relative_entry_path(relative)?;

        let side_file = self.content_dir().join(relative);
        if let Some(parent) = side_file.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(&side_file, e))?;
        }
        fs::write(&side_file, content).map_err(|e| write_error(&side_file, e))?;

        self.link(label, &encode_relative_link(relative_name))
    }

    fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, DocumentState::Closed) {
            DocumentState::Open(mut writer) => {
                let closing = std::mem::take(&mut self.closing_markup);
                self.style = TextStyle::None;
                writer
                    .write_all(closing.as_bytes())
                    .and_then(|_| writer.write_all(b"</body></html>\n"))
                    .and_then(|_| writer.flush())
                    .map_err(|e| write_error(&self.path, e))?;
                tracing::debug!(path = %self.path.display(), "closed report document");
                Ok(())
            }
            DocumentState::NotOpened | DocumentState::Closed => Ok(()),
        }
    }
}

impl Drop for HtmlReportWriter {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "failed to finish report document");
        }
    }
}

fn preamble(title: &str, metadata: &ReportMetadata) -> String {
    format!(
        "<html><head><meta charset=\"utf-8\"><title>{}</title>\
         <meta name=\"generator\" content=\"{}\">\
         <meta name=\"report-id\" content=\"{}\">\
         <meta name=\"generated-at\" content=\"{}\">\
         </head><body>",
        escape_html(title),
        escape_html(&metadata.generator()),
        metadata.report_urn(),
        metadata.timestamp(),
    )
}

fn write_error(path: &Path, error: std::io::Error) -> anyhow::Error {
    ReportError::FileWriteError {
        path: path.to_path_buf(),
        details: error.to_string(),
    }
    .into()
}

/// Escapes text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encodes each `/`-separated segment of a relative link target
fn encode_relative_link(relative_name: &str) -> String {
    relative_name
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
