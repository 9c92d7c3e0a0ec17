// cartridge load errors
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not open ROM file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not allocate {size} bytes for the ROM image")]
    Allocation { size: u64 },

    #[error("I/O error while reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("short read: expected {expected} bytes, got {actual}")]
    TruncatedRead { expected: usize, actual: usize },

    #[error("ROM is {len} bytes, too small to hold a header (need 0x150)")]
    HeaderOutOfBounds { len: usize },
}

/// Capacity code whose size would not fit the computation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SizeCodeError {
    #[error("invalid code 0x{code:02X}")]
    InvalidSizeCode { code: u8 },
}
