// src/header/mod.rs
mod file_header;
mod record_header;

pub use file_header::FileHeader;
pub use record_header::RecordHeader;
