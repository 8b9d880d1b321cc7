// src/reader/iter.rs
use crate::error::Result;
use crate::packet::PacketRecord;
use crate::reader::PcapReader;
use std::io::Read;

/// Iterator over the remaining packets of a reader
///
/// Payloads are detached from the reader, so items can be kept across
/// iterations. Iteration stops after end of stream or after yielding the
/// first error.
pub struct PacketIter<'a, R: Read> {
    reader: &'a mut PcapReader<R>,
    done: bool,
}

impl<'a, R: Read> PacketIter<'a, R> {
    pub(crate) fn new(reader: &'a mut PcapReader<R>) -> Self {
        PacketIter { reader, done: false }
    }
}

impl<'a, R: Read> Iterator for PacketIter<'a, R> {
    type Item = Result<PacketRecord<'static>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_next_packet() {
            Ok(Some(packet)) => Some(Ok(packet.into_owned())),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a, R: Read> std::iter::FusedIterator for PacketIter<'a, R> {}
