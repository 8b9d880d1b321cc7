// tests/common/mod.rs
#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use pcap_classic::{Endianness, FileHeader, TimestampUnit};
use std::cell::Cell;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Route the reader's `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One record as written into a fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord {
    pub seconds: u32,
    pub fraction: u32,
    pub captured_length: u32,
    pub original_length: u32,
    pub payload: Vec<u8>,
}

impl FixtureRecord {
    pub fn new(seconds: u32, fraction: u32, payload: &[u8]) -> Self {
        FixtureRecord {
            seconds,
            fraction,
            captured_length: payload.len() as u32,
            original_length: payload.len() as u32,
            payload: payload.to_vec(),
        }
    }
}

/// Hand-assembles capture files byte for byte
pub struct CaptureBuilder {
    order: Endianness,
    magic: [u8; 4],
    version: (u16, u16),
    timezone_offset: i32,
    snapshot_length: u32,
    link_type: u32,
    body: Vec<u8>,
}

impl CaptureBuilder {
    pub fn new(order: Endianness, unit: TimestampUnit) -> Self {
        let magic = match unit {
            TimestampUnit::Microseconds => FileHeader::MAGIC_MICROSECONDS,
            TimestampUnit::Nanoseconds => FileHeader::MAGIC_NANOSECONDS,
        };
        let magic = match order {
            Endianness::Little => magic.to_le_bytes(),
            Endianness::Big => magic.to_be_bytes(),
        };

        CaptureBuilder {
            order,
            magic,
            version: (2, 4),
            timezone_offset: 0,
            snapshot_length: 65535,
            link_type: 1,
            body: Vec::new(),
        }
    }

    pub fn little_micros() -> Self {
        Self::new(Endianness::Little, TimestampUnit::Microseconds)
    }

    pub fn magic(mut self, magic: [u8; 4]) -> Self {
        self.magic = magic;
        self
    }

    pub fn version(mut self, major: u16, minor: u16) -> Self {
        self.version = (major, minor);
        self
    }

    pub fn timezone_offset(mut self, offset: i32) -> Self {
        self.timezone_offset = offset;
        self
    }

    pub fn snapshot_length(mut self, snaplen: u32) -> Self {
        self.snapshot_length = snaplen;
        self
    }

    pub fn link_type(mut self, link_type: u32) -> Self {
        self.link_type = link_type;
        self
    }

    pub fn record(self, seconds: u32, fraction: u32, payload: &[u8]) -> Self {
        self.push(&FixtureRecord::new(seconds, fraction, payload))
    }

    /// Append a record whose length fields need not match its payload
    pub fn push(mut self, record: &FixtureRecord) -> Self {
        self.put_u32_body(record.seconds);
        self.put_u32_body(record.fraction);
        self.put_u32_body(record.captured_length);
        self.put_u32_body(record.original_length);
        self.body.extend_from_slice(&record.payload);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FileHeader::SIZE + self.body.len());
        out.extend_from_slice(&self.magic);
        match self.order {
            Endianness::Little => {
                out.write_u16::<LittleEndian>(self.version.0).unwrap();
                out.write_u16::<LittleEndian>(self.version.1).unwrap();
                out.write_i32::<LittleEndian>(self.timezone_offset).unwrap();
                out.write_u32::<LittleEndian>(0).unwrap();
                out.write_u32::<LittleEndian>(self.snapshot_length).unwrap();
                out.write_u32::<LittleEndian>(self.link_type).unwrap();
            }
            Endianness::Big => {
                out.write_u16::<BigEndian>(self.version.0).unwrap();
                out.write_u16::<BigEndian>(self.version.1).unwrap();
                out.write_i32::<BigEndian>(self.timezone_offset).unwrap();
                out.write_u32::<BigEndian>(0).unwrap();
                out.write_u32::<BigEndian>(self.snapshot_length).unwrap();
                out.write_u32::<BigEndian>(self.link_type).unwrap();
            }
        }
        out.extend_from_slice(&self.body);
        out
    }

    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }

    fn put_u32_body(&mut self, value: u32) {
        match self.order {
            Endianness::Little => self.body.write_u32::<LittleEndian>(value).unwrap(),
            Endianness::Big => self.body.write_u32::<BigEndian>(value).unwrap(),
        }
    }
}

/// Read adapter that records how many bytes have been pulled through it
pub struct CountingReader<R> {
    inner: R,
    consumed: Rc<Cell<u64>>,
}

impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> (Self, Rc<Cell<u64>>) {
        let consumed = Rc::new(Cell::new(0));
        (CountingReader { inner, consumed: consumed.clone() }, consumed)
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed.set(self.consumed.get() + n as u64);
        Ok(n)
    }
}
