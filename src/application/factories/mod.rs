mod report_writer_factory;

pub use report_writer_factory::{ReportWriterFactory, DEFAULT_OUTPUT_PATH};
