// src/packet.rs
use crate::header::RecordHeader;
use crate::types::{Timestamp, TimestampUnit};
use std::borrow::Cow;

/// One decoded packet record
///
/// With [`BufferMode::Reuse`](crate::BufferMode::Reuse) the payload borrows the
/// reader's internal buffer and the record must be dropped (or converted with
/// [`PacketRecord::into_owned`]) before the next read. With
/// [`BufferMode::Owned`](crate::BufferMode::Owned) every payload is a fresh
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketRecord<'a> {
    pub timestamp_seconds: u32,
    /// Sub-second part, in `timestamp_unit` ticks
    pub timestamp_fraction: u32,
    pub timestamp_unit: TimestampUnit,
    pub captured_length: u32,
    pub original_length: u32,
    pub payload: Cow<'a, [u8]>,
}

impl<'a> PacketRecord<'a> {
    pub fn new(header: RecordHeader, timestamp_unit: TimestampUnit, payload: Cow<'a, [u8]>) -> Self {
        PacketRecord {
            timestamp_seconds: header.timestamp_seconds,
            timestamp_fraction: header.timestamp_fraction,
            timestamp_unit,
            captured_length: header.captured_length,
            original_length: header.original_length,
            payload,
        }
    }

    pub fn header(&self) -> RecordHeader {
        RecordHeader {
            timestamp_seconds: self.timestamp_seconds,
            timestamp_fraction: self.timestamp_fraction,
            captured_length: self.captured_length,
            original_length: self.original_length,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        Timestamp::from_raw(self.timestamp_seconds, self.timestamp_fraction, self.timestamp_unit)
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether the capture cut the packet short of its length on the wire
    pub fn is_truncated(&self) -> bool {
        self.captured_length < self.original_length
    }

    /// Detach the record from the reader, copying the payload if it is borrowed
    pub fn into_owned(self) -> PacketRecord<'static> {
        PacketRecord {
            timestamp_seconds: self.timestamp_seconds,
            timestamp_fraction: self.timestamp_fraction,
            timestamp_unit: self.timestamp_unit,
            captured_length: self.captured_length,
            original_length: self.original_length,
            payload: Cow::Owned(self.payload.into_owned()),
        }
    }
}
