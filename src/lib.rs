// src/lib.rs
//! # pcap-classic
//!
//! A fast, defensive Rust reader for classic libpcap capture files: a 24-byte
//! global header followed by a stream of length-prefixed packet records.
//!
//! ## Features
//!
//! - 🚀 **Low Overhead**: One reusable payload buffer, buffered or memory-mapped I/O
//! - 🔒 **Defensive**: Corrupt length fields never cause unbounded allocation
//! - ✅ **All Variants**: Little/big endian, microsecond/nanosecond timestamps
//! - 🎯 **Explicit Errors**: Truncation is reported, never mistaken for end of file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pcap_classic::*;
//!
//! fn main() -> Result<()> {
//!     let mut reader = PcapReader::open("capture.pcap")?;
//!     println!("Link type: {}", reader.header().link_type);
//!
//!     while let Some(packet) = reader.read_next_packet()? {
//!         println!("{} bytes at {:?}", packet.captured_length, packet.timestamp());
//!     }
//!
//!     reader.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ### Keeping payloads
//!
//! By default each payload borrows a buffer that the next read overwrites.
//! Use [`BufferMode::Owned`] or [`PcapReader::packets`] to keep them:
//!
//! ```rust,no_run
//! use pcap_classic::*;
//!
//! fn main() -> Result<()> {
//!     let mut reader = PcapReader::open("capture.pcap")?;
//!     let packets: Vec<PacketRecord<'static>> = reader.packets().collect::<Result<_>>()?;
//!     println!("Read {} packets", packets.len());
//!     Ok(())
//! }
//! ```
//!
//! ### Counting
//!
//! ```rust,no_run
//! let total = pcap_classic::count("capture.pcap")?;
//! # Ok::<(), pcap_classic::PcapError>(())
//! ```

// Modules
pub mod error;
pub mod types;
pub mod header;
pub mod packet;
pub mod reader;

mod count;
mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{PcapError, Result};

pub use types::{
    Endianness,
    TimestampUnit,
    Timestamp,
};

pub use header::{
    FileHeader,
    RecordHeader,
};

pub use packet::PacketRecord;

pub use reader::{
    BufferMode,
    PacketIter,
    PcapReader,
    ReaderConfig,
};

pub use count::{count, count_packets};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use pcap_classic::prelude::*;
    //! ```

    pub use crate::error::{PcapError, Result};
    pub use crate::packet::PacketRecord;
    pub use crate::reader::{BufferMode, PcapReader, ReaderConfig};
}

/// The capture format version this library reads
pub const PCAP_VERSION: (u16, u16) = (FileHeader::VERSION_MAJOR, FileHeader::VERSION_MINOR);

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
