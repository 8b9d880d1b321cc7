// src/count.rs
use crate::error::Result;
use crate::reader::PcapReader;
use std::io::Read;
use std::path::Path;

/// Count the packets in a capture file.
///
/// Payloads are skipped rather than copied. Any failure (opening, a corrupt
/// record, a partial trailing record) is returned as an error; a partial
/// count is never reported as success.
pub fn count(path: impl AsRef<Path>) -> Result<u64> {
    let mut reader = PcapReader::open(path)?;
    let packets = count_packets(&mut reader)?;
    reader.close()?;
    Ok(packets)
}

/// Drain the remaining records of `reader`, returning how many were skipped
pub fn count_packets<R: Read>(reader: &mut PcapReader<R>) -> Result<u64> {
    let mut packets = 0u64;
    while reader.skip_next_packet()?.is_some() {
        packets += 1;
    }
    Ok(packets)
}
