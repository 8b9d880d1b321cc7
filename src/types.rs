// src/types.rs
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Byte order of every multi-byte field in a capture file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    /// Byte order of the machine this code runs on
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}

/// Unit of the fractional timestamp field of each record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampUnit {
    Microseconds,
    Nanoseconds,
}

impl TimestampUnit {
    /// Number of nanoseconds represented by one tick of the fraction field
    pub fn nanos_per_tick(&self) -> u64 {
        match self {
            TimestampUnit::Microseconds => 1_000,
            TimestampUnit::Nanoseconds => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimestampUnit::Microseconds => "microseconds",
            TimestampUnit::Nanoseconds => "nanoseconds",
        }
    }
}

impl fmt::Display for TimestampUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Packet timestamp normalised to seconds and nanoseconds since the Unix epoch
///
/// Fraction values at or above one second (which some writers emit) carry
/// over into `seconds` rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: u64,
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn from_raw(seconds: u32, fraction: u32, unit: TimestampUnit) -> Self {
        let total_nanos = fraction as u64 * unit.nanos_per_tick();
        Timestamp {
            seconds: seconds as u64 + total_nanos / 1_000_000_000,
            nanoseconds: (total_nanos % 1_000_000_000) as u32,
        }
    }

    /// Time elapsed since the Unix epoch
    pub fn as_duration(&self) -> Duration {
        Duration::new(self.seconds, self.nanoseconds)
    }

    pub fn to_system_time(&self) -> SystemTime {
        UNIX_EPOCH + self.as_duration()
    }

    pub fn as_micros(&self) -> u128 {
        self.as_duration().as_micros()
    }

    pub fn as_nanos(&self) -> u128 {
        self.as_duration().as_nanos()
    }
}
