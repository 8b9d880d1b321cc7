// src/utils/endian.rs
use crate::types::Endianness;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

pub fn read_u16(bytes: &[u8], order: Endianness) -> u16 {
    match order {
        Endianness::Little => LittleEndian::read_u16(bytes),
        Endianness::Big => BigEndian::read_u16(bytes),
    }
}

pub fn read_u32(bytes: &[u8], order: Endianness) -> u32 {
    match order {
        Endianness::Little => LittleEndian::read_u32(bytes),
        Endianness::Big => BigEndian::read_u32(bytes),
    }
}

pub fn read_i32(bytes: &[u8], order: Endianness) -> i32 {
    match order {
        Endianness::Little => LittleEndian::read_i32(bytes),
        Endianness::Big => BigEndian::read_i32(bytes),
    }
}
