// cartridge loader
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use super::error::LoadError;
use super::header::{self, Header, TITLE_LEN};

#[derive(Clone, Debug)]
pub struct Cartridge {
    pub filename: String,
    pub rom: Vec<u8>,
    pub header: Header,
    /// Checksum computed over the image, compared against `header.header_checksum`.
    pub checksum: u8,
}

impl Cartridge {
    pub fn load(path: &str) -> Result<Self, LoadError> {
        let mut file = File::open(path).map_err(|source| LoadError::FileOpen {
            path: path.to_string(),
            source,
        })?;

        // go to the end to see how big the file is, then back to the start
        let size = file
            .seek(SeekFrom::End(0))
            .and_then(|size| file.rewind().map(|_| size))
            .map_err(|source| LoadError::FileOpen {
                path: path.to_string(),
                source,
            })?;
        log::debug!("{path}: {size} bytes");

        let rom = read_image(file, size, path)?;
        Self::from_bytes(path, rom)
    }

    /// Builds a cartridge from an image already in memory.
    pub fn from_bytes(filename: &str, rom: Vec<u8>) -> Result<Self, LoadError> {
        let mut header =
            Header::parse(&rom).ok_or(LoadError::HeaderOutOfBounds { len: rom.len() })?;
        // the last title byte is not guaranteed to be a terminator
        header.title[TITLE_LEN - 1] = 0;

        let checksum = header::header_checksum(&rom)
            .ok_or(LoadError::HeaderOutOfBounds { len: rom.len() })?;
        if checksum != header.header_checksum {
            log::warn!(
                "{filename}: header checksum mismatch (computed 0x{checksum:02X}, header 0x{:02X})",
                header.header_checksum
            );
        }

        Ok(Self {
            filename: filename.to_string(),
            rom,
            header,
            checksum,
        })
    }

    pub fn rom_size_code(&self) -> u8 {
        self.header.rom_size
    }

    pub fn ram_size_code(&self) -> u8 {
        self.header.ram_size
    }

    pub fn checksum_ok(&self) -> bool {
        self.checksum == self.header.header_checksum
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }
}

/// Reads exactly `size` bytes into a freshly reserved buffer.
fn read_image<R: Read>(reader: R, size: u64, path: &str) -> Result<Vec<u8>, LoadError> {
    let expected = usize::try_from(size).map_err(|_| LoadError::Allocation { size })?;
    let mut rom = Vec::new();
    rom.try_reserve_exact(expected)
        .map_err(|_| LoadError::Allocation { size })?;

    reader
        .take(size)
        .read_to_end(&mut rom)
        .map_err(|source| LoadError::Read {
            path: path.to_string(),
            source,
        })?;
    if rom.len() < expected {
        return Err(LoadError::TruncatedRead {
            expected,
            actual: rom.len(),
        });
    }

    Ok(rom)
}
