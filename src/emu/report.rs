// human readable cartridge metadata
use std::fmt;

use super::cart::Cartridge;
use super::error::SizeCodeError;
use super::header::TITLE_LEN;
use super::tables;

const UNKNOWN: &str = "Unknown";

pub fn title_of(c: &Cartridge) -> String {
    let title = &c.header.title[..TITLE_LEN - 1];
    let end = title.iter().position(|&b| b == 0).unwrap_or(title.len());
    String::from_utf8_lossy(&title[..end]).into_owned()
}

/// Key into the publisher table, if the header says to use it.
///
/// The gate reads the new licensee code but the key is the old licensee
/// byte. Kept as-is; change here if that turns out to be wrong.
pub fn publisher_lookup_key(c: &Cartridge) -> Option<u8> {
    (c.header.new_licensee_code <= 0xA4).then_some(c.header.old_licensee_code)
}

pub fn publisher_name_of(c: &Cartridge) -> &'static str {
    publisher_lookup_key(c)
        .and_then(tables::publisher)
        .unwrap_or(UNKNOWN)
}

pub fn cart_type_name_of(c: &Cartridge) -> &'static str {
    if c.header.cart_type <= tables::MAX_CART_TYPE {
        tables::cart_type(c.header.cart_type).unwrap_or(UNKNOWN)
    } else {
        UNKNOWN
    }
}

/// ROM capacity in KiB: `32 << code`.
pub fn rom_size_kib(c: &Cartridge) -> Result<u32, SizeCodeError> {
    let code = c.rom_size_code();
    if u32::from(code) > 32u32.leading_zeros() {
        return Err(SizeCodeError::InvalidSizeCode { code });
    }
    Ok(32 << code)
}

/// RAM capacity in KiB: 0 for code 0, otherwise `1 << (code + 3)`.
pub fn ram_size_kib(c: &Cartridge) -> Result<u32, SizeCodeError> {
    let code = c.ram_size_code();
    if code == 0 {
        return Ok(0);
    }
    let shift = u32::from(code) + 3;
    if shift >= u32::BITS {
        return Err(SizeCodeError::InvalidSizeCode { code });
    }
    Ok(1 << shift)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChecksumVerdict {
    Ok,
    Bad,
}

impl fmt::Display for ChecksumVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChecksumVerdict::Ok => "OK",
            ChecksumVerdict::Bad => "BAD",
        })
    }
}

pub fn checksum_verdict(c: &Cartridge) -> ChecksumVerdict {
    if c.checksum_ok() {
        ChecksumVerdict::Ok
    } else {
        ChecksumVerdict::Bad
    }
}

/// Everything printed after a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartridgeReport {
    pub title: String,
    pub cart_type: &'static str,
    pub cart_type_code: u8,
    pub publisher: &'static str,
    pub rom_size_kib: Result<u32, SizeCodeError>,
    pub ram_size_kib: Result<u32, SizeCodeError>,
    pub checksum: ChecksumVerdict,
    pub global_checksum: u16,
}

impl CartridgeReport {
    pub fn new(c: &Cartridge) -> Self {
        let rom_size_kib = rom_size_kib(c);
        let ram_size_kib = ram_size_kib(c);
        for err in [&rom_size_kib, &ram_size_kib]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
        {
            log::warn!("{}: size {err}", c.filename);
        }

        Self {
            title: title_of(c),
            cart_type: cart_type_name_of(c),
            cart_type_code: c.header.cart_type,
            publisher: publisher_name_of(c),
            rom_size_kib,
            ram_size_kib,
            checksum: checksum_verdict(c),
            global_checksum: c.header.global_checksum,
        }
    }
}

fn write_size(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    size: &Result<u32, SizeCodeError>,
) -> fmt::Result {
    match size {
        Ok(kib) => writeln!(f, "{label}: {kib}KB"),
        Err(err) => writeln!(f, "{label}: {err}"),
    }
}

impl fmt::Display for CartridgeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Type: {} (0x{:02X})", self.cart_type, self.cart_type_code)?;
        writeln!(f, "Publisher: {}", self.publisher)?;
        write_size(f, "ROM Size", &self.rom_size_kib)?;
        write_size(f, "RAM Size", &self.ram_size_kib)?;
        write!(f, "Header Checksum: {}", self.checksum)
    }
}
