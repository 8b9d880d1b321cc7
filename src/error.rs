// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PcapError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid magic number: {0:#010x}")]
    BadMagic(u32),

    #[error("Unsupported format version {major}.{minor} (expected 2.4)")]
    UnsupportedVersion { major: u16, minor: u16 },

    #[error("Short read on global header: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("Truncated record header at offset {offset}: got {available} of 16 bytes")]
    TruncatedRecordHeader { offset: u64, available: usize },

    #[error("Oversized record at offset {offset}: captured length {captured_length} exceeds snapshot length {snapshot_length}")]
    OversizedRecord {
        offset: u64,
        captured_length: u32,
        snapshot_length: u32,
    },

    #[error("Inconsistent record lengths at offset {offset}: captured {captured_length} > original {original_length}")]
    InconsistentLengths {
        offset: u64,
        captured_length: u32,
        original_length: u32,
    },

    #[error("Truncated payload at offset {offset}: expected {expected} bytes, got {actual}")]
    TruncatedPayload { offset: u64, expected: u32, actual: u64 },

    #[error("Reader closed")]
    Closed,
}

impl PcapError {
    /// Builds an equivalent error for a reader that is parked in its
    /// errored state.
    ///
    /// `io::Error` is not `Clone`, so I/O failures are rebuilt from their
    /// kind and message.
    pub fn replay(&self) -> PcapError {
        match self {
            PcapError::Open { path, source } => PcapError::Open {
                path: path.clone(),
                source: io::Error::new(source.kind(), source.to_string()),
            },
            PcapError::Io(e) => PcapError::Io(io::Error::new(e.kind(), e.to_string())),
            PcapError::BadMagic(magic) => PcapError::BadMagic(*magic),
            PcapError::UnsupportedVersion { major, minor } => PcapError::UnsupportedVersion {
                major: *major,
                minor: *minor,
            },
            PcapError::ShortRead { expected, actual } => PcapError::ShortRead {
                expected: *expected,
                actual: *actual,
            },
            PcapError::TruncatedRecordHeader { offset, available } => {
                PcapError::TruncatedRecordHeader {
                    offset: *offset,
                    available: *available,
                }
            }
            PcapError::OversizedRecord {
                offset,
                captured_length,
                snapshot_length,
            } => PcapError::OversizedRecord {
                offset: *offset,
                captured_length: *captured_length,
                snapshot_length: *snapshot_length,
            },
            PcapError::InconsistentLengths {
                offset,
                captured_length,
                original_length,
            } => PcapError::InconsistentLengths {
                offset: *offset,
                captured_length: *captured_length,
                original_length: *original_length,
            },
            PcapError::TruncatedPayload {
                offset,
                expected,
                actual,
            } => PcapError::TruncatedPayload {
                offset: *offset,
                expected: *expected,
                actual: *actual,
            },
            PcapError::Closed => PcapError::Closed,
        }
    }
}

pub type Result<T> = std::result::Result<T, PcapError>;
