// src/reader/sync_reader.rs
use crate::error::{PcapError, Result};
use crate::header::{FileHeader, RecordHeader};
use crate::packet::PacketRecord;
use crate::reader::config::{BufferMode, ReaderConfig};
use crate::reader::iter::PacketIter;
use crate::utils::read_fully;
use log::{debug, warn};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::io::Cursor;

/// Upper bound on payload capacity reserved before any bytes arrive.
/// Larger payloads grow as data is actually read.
const PREALLOC_LIMIT: usize = 262144;

#[derive(Debug)]
enum ReaderState {
    Open,
    Exhausted,
    Failed(PcapError),
    Closed,
}

/// Synchronous reader for classic capture files
///
/// Pulls one record per call. Not meant to be shared between threads: every
/// read takes `&mut self`.
pub struct PcapReader<R: Read> {
    source: Option<R>,
    header: FileHeader,
    config: ReaderConfig,
    buffer: Vec<u8>,
    state: ReaderState,
    packets_read: u64,
    position: u64,
}

/// Constructor for standard file I/O
impl PcapReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    pub fn open_with_config(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PcapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::with_capacity(config.io_buffer_capacity, file);
        let reader = Self::with_config(reader, config)?;
        debug!("Opened {}", path.display());
        Ok(reader)
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl PcapReader<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PcapError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mmap = unsafe { Mmap::map(&file)? };

        Self::with_config(Cursor::new(mmap), ReaderConfig::default())
    }
}

impl<R: Read> PcapReader<R> {
    /// Wrap a byte source positioned at the start of a capture file
    pub fn from_reader(source: R) -> Result<Self> {
        Self::with_config(source, ReaderConfig::default())
    }

    pub fn with_config(mut source: R, config: ReaderConfig) -> Result<Self> {
        let header = FileHeader::decode(&mut source)?;
        debug!(
            "Capture header: version {}.{}, {}, {}, snaplen {}, linktype {}",
            header.version_major,
            header.version_minor,
            header.byte_order,
            header.timestamp_unit,
            header.snapshot_length,
            header.link_type,
        );

        Ok(PcapReader {
            source: Some(source),
            header,
            config,
            buffer: Vec::new(),
            state: ReaderState::Open,
            packets_read: 0,
            position: FileHeader::SIZE as u64,
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Number of records successfully read or skipped so far
    pub fn packets_read(&self) -> u64 {
        self.packets_read
    }

    /// Byte offset of the read cursor from the start of the file
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, ReaderState::Exhausted)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, ReaderState::Closed)
    }

    /// Read the next packet.
    ///
    /// Returns `Ok(None)` once the stream ends cleanly at a record boundary.
    /// After end of stream or an error, every further call returns the same
    /// outcome without touching the source.
    pub fn read_next_packet(&mut self) -> Result<Option<PacketRecord<'_>>> {
        let record = match self.next_record_header()? {
            Some(record) => record,
            None => return Ok(None),
        };
        let unit = self.header.timestamp_unit;

        match self.config.buffer_mode {
            BufferMode::Reuse => {
                self.buffer.clear();
                let source = self.source.as_mut().ok_or(PcapError::Closed)?;
                let read = Self::read_payload(source, record.captured_length, &mut self.buffer);
                self.finish_payload(&record, read)?;
                Ok(Some(PacketRecord::new(record, unit, Cow::Borrowed(&self.buffer[..]))))
            }
            BufferMode::Owned => {
                let mut payload = Vec::new();
                let source = self.source.as_mut().ok_or(PcapError::Closed)?;
                let read = Self::read_payload(source, record.captured_length, &mut payload);
                self.finish_payload(&record, read)?;
                Ok(Some(PacketRecord::new(record, unit, Cow::Owned(payload))))
            }
        }
    }

    /// Advance past the next record without copying its payload.
    ///
    /// Validation and error reporting match [`PcapReader::read_next_packet`].
    pub fn skip_next_packet(&mut self) -> Result<Option<RecordHeader>> {
        let record = match self.next_record_header()? {
            Some(record) => record,
            None => return Ok(None),
        };

        let source = self.source.as_mut().ok_or(PcapError::Closed)?;
        let skipped = io::copy(
            &mut source.by_ref().take(record.captured_length as u64),
            &mut io::sink(),
        );
        self.finish_payload(&record, skipped)?;
        Ok(Some(record))
    }

    /// Iterate over the remaining packets with owned payloads
    pub fn packets(&mut self) -> PacketIter<'_, R> {
        PacketIter::new(self)
    }

    /// Release the underlying source. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if let Some(source) = self.source.take() {
            drop(source);
            debug!("Closed capture after {} packets", self.packets_read);
        }
        self.state = ReaderState::Closed;
        self.buffer = Vec::new();
        Ok(())
    }

    fn next_record_header(&mut self) -> Result<Option<RecordHeader>> {
        match &self.state {
            ReaderState::Open => {}
            ReaderState::Exhausted => return Ok(None),
            ReaderState::Failed(err) => return Err(err.replay()),
            ReaderState::Closed => return Err(PcapError::Closed),
        }

        let offset = self.position;
        let source = self.source.as_mut().ok_or(PcapError::Closed)?;
        let mut bytes = [0u8; RecordHeader::SIZE];
        let available = match read_fully(source, &mut bytes) {
            Ok(n) => n,
            Err(e) => return Err(self.fail(e.into())),
        };

        if available == 0 {
            debug!("End of capture after {} packets", self.packets_read);
            self.state = ReaderState::Exhausted;
            return Ok(None);
        }
        if available < RecordHeader::SIZE {
            return Err(self.fail(PcapError::TruncatedRecordHeader { offset, available }));
        }
        self.position += RecordHeader::SIZE as u64;

        let record = RecordHeader::from_bytes(&bytes, self.header.byte_order);
        if record.captured_length > self.header.snapshot_length {
            return Err(self.fail(PcapError::OversizedRecord {
                offset,
                captured_length: record.captured_length,
                snapshot_length: self.header.snapshot_length,
            }));
        }
        if self.config.strict_lengths && record.captured_length > record.original_length {
            return Err(self.fail(PcapError::InconsistentLengths {
                offset,
                captured_length: record.captured_length,
                original_length: record.original_length,
            }));
        }

        Ok(Some(record))
    }

    /// Append up to `len` bytes from `source` to `buf`, returning how many arrived
    fn read_payload(source: &mut R, len: u32, buf: &mut Vec<u8>) -> io::Result<u64> {
        buf.reserve((len as usize).min(PREALLOC_LIMIT));
        let read = source.by_ref().take(len as u64).read_to_end(buf)?;
        Ok(read as u64)
    }

    fn finish_payload(&mut self, record: &RecordHeader, read: io::Result<u64>) -> Result<()> {
        let offset = self.position;
        let actual = match read {
            Ok(n) => n,
            Err(e) => return Err(self.fail(e.into())),
        };

        if actual < record.captured_length as u64 {
            return Err(self.fail(PcapError::TruncatedPayload {
                offset,
                expected: record.captured_length,
                actual,
            }));
        }

        self.position += actual;
        self.packets_read += 1;
        Ok(())
    }

    fn fail(&mut self, err: PcapError) -> PcapError {
        warn!("Capture decoding failed after {} packets: {}", self.packets_read, err);
        self.state = ReaderState::Failed(err.replay());
        err
    }
}
