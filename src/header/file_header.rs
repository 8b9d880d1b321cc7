// src/header/file_header.rs
use crate::error::{PcapError, Result};
use crate::types::{Endianness, TimestampUnit};
use crate::utils::{read_fully, read_i32, read_u16, read_u32};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io::Read;

/// Global header of a classic capture file
///
/// Decoded once when a file is opened and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic bytes exactly as stored at offset 0
    pub magic: [u8; 4],
    pub version_major: u16,
    pub version_minor: u16,
    /// GMT-to-local correction; informational only
    pub timezone_offset: i32,
    /// Accuracy of timestamps; informational only
    pub timestamp_accuracy: u32,
    pub snapshot_length: u32,
    /// Link-layer header type, not interpreted here
    pub link_type: u32,
    pub byte_order: Endianness,
    pub timestamp_unit: TimestampUnit,
}

impl FileHeader {
    pub const SIZE: usize = 24;
    pub const MAGIC_MICROSECONDS: u32 = 0xa1b2c3d4;
    pub const MAGIC_NANOSECONDS: u32 = 0xa1b23c4d;
    pub const VERSION_MAJOR: u16 = 2;
    pub const VERSION_MINOR: u16 = 4;

    /// Map raw magic bytes to the byte order and timestamp unit they select
    pub fn classify_magic(magic: [u8; 4]) -> Option<(Endianness, TimestampUnit)> {
        let as_little = LittleEndian::read_u32(&magic);
        let as_big = BigEndian::read_u32(&magic);

        match (as_little, as_big) {
            (FileHeader::MAGIC_MICROSECONDS, _) => Some((Endianness::Little, TimestampUnit::Microseconds)),
            (_, FileHeader::MAGIC_MICROSECONDS) => Some((Endianness::Big, TimestampUnit::Microseconds)),
            (FileHeader::MAGIC_NANOSECONDS, _) => Some((Endianness::Little, TimestampUnit::Nanoseconds)),
            (_, FileHeader::MAGIC_NANOSECONDS) => Some((Endianness::Big, TimestampUnit::Nanoseconds)),
            _ => None,
        }
    }

    /// Decode the 24-byte global header from the start of `source`.
    ///
    /// Consumes exactly [`FileHeader::SIZE`] bytes on success.
    pub fn decode<R: Read + ?Sized>(source: &mut R) -> Result<Self> {
        let mut bytes = [0u8; Self::SIZE];
        let available = read_fully(source, &mut bytes)?;
        if available < Self::SIZE {
            return Err(PcapError::ShortRead {
                expected: Self::SIZE,
                actual: available,
            });
        }

        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self> {
        let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
        let (byte_order, timestamp_unit) = Self::classify_magic(magic)
            .ok_or_else(|| PcapError::BadMagic(BigEndian::read_u32(&magic)))?;

        let version_major = read_u16(&bytes[4..6], byte_order);
        let version_minor = read_u16(&bytes[6..8], byte_order);
        if version_major != Self::VERSION_MAJOR || version_minor != Self::VERSION_MINOR {
            return Err(PcapError::UnsupportedVersion {
                major: version_major,
                minor: version_minor,
            });
        }

        Ok(FileHeader {
            magic,
            version_major,
            version_minor,
            timezone_offset: read_i32(&bytes[8..12], byte_order),
            timestamp_accuracy: read_u32(&bytes[12..16], byte_order),
            snapshot_length: read_u32(&bytes[16..20], byte_order),
            link_type: read_u32(&bytes[20..24], byte_order),
            byte_order,
            timestamp_unit,
        })
    }

    /// Whether multi-byte fields must be swapped on this machine
    pub fn is_swapped(&self) -> bool {
        self.byte_order != Endianness::native()
    }
}
