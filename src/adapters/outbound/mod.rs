/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod archive;
pub mod cache;
pub mod console;
pub mod filesystem;
pub mod html;
pub mod metadata;
pub mod network;
