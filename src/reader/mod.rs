// src/reader/mod.rs
mod config;
mod iter;
mod sync_reader;

pub use config::{BufferMode, ReaderConfig};
pub use iter::PacketIter;
pub use sync_reader::PcapReader;
