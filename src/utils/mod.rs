// src/utils/mod.rs
mod endian;
mod io;

pub(crate) use endian::*;
pub(crate) use io::*;
