// src/header/record_header.rs
use crate::types::Endianness;
use crate::utils::read_u32;

/// Fixed 16-byte header preceding every packet payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub timestamp_seconds: u32,
    pub timestamp_fraction: u32,
    pub captured_length: u32,
    pub original_length: u32,
}

impl RecordHeader {
    pub const SIZE: usize = 16;

    pub fn from_bytes(bytes: &[u8; Self::SIZE], order: Endianness) -> Self {
        RecordHeader {
            timestamp_seconds: read_u32(&bytes[0..4], order),
            timestamp_fraction: read_u32(&bytes[4..8], order),
            captured_length: read_u32(&bytes[8..12], order),
            original_length: read_u32(&bytes[12..16], order),
        }
    }
}
