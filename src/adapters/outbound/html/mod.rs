/// HTML rendering of the license report
mod html_writer;

pub use html_writer::{escape_html, HtmlReportWriter, WriterPhase};
