/// Archive adapters for reading bundled license files
mod archive_scanner;

pub use archive_scanner::ArchiveScanner;
