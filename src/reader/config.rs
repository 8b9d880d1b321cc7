// src/reader/config.rs

/// How packet payloads are handed to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferMode {
    /// Payloads borrow one internal buffer that is overwritten by the next
    /// read. Fastest; the caller copies anything it wants to keep.
    #[default]
    Reuse,
    /// Every payload is a fresh allocation owned by the caller
    Owned,
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub buffer_mode: BufferMode,
    /// Capacity of the `BufReader` placed in front of files opened by path
    pub io_buffer_capacity: usize,
    /// Reject records whose captured length exceeds their original length
    pub strict_lengths: bool,
}

impl ReaderConfig {
    pub const DEFAULT_IO_BUFFER_CAPACITY: usize = 65536;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer_mode(mut self, mode: BufferMode) -> Self {
        self.buffer_mode = mode;
        self
    }

    pub fn with_io_buffer_capacity(mut self, capacity: usize) -> Self {
        self.io_buffer_capacity = capacity.max(1);
        self
    }

    pub fn with_strict_lengths(mut self, strict: bool) -> Self {
        self.strict_lengths = strict;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            buffer_mode: BufferMode::Reuse,
            io_buffer_capacity: Self::DEFAULT_IO_BUFFER_CAPACITY,
            strict_lengths: true,
        }
    }
}
