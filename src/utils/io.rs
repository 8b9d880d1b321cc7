// src/utils/io.rs
use std::io::{self, Read};

/// Fill `buf` from `reader`, stopping early only at end of stream.
///
/// Unlike `read_exact`, the number of bytes actually read is reported so a
/// clean end of stream (0) can be told apart from a partial structure.
pub fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
