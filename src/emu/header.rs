// cartridge header, decoded field by field from 0x100..=0x14F

pub const HEADER_START: usize = 0x100;
/// Smallest image that contains the whole header.
pub const HEADER_END: usize = 0x150;
pub const TITLE_LEN: usize = 16;

pub const CHECKSUM_START: usize = 0x134;
pub const CHECKSUM_END: usize = 0x14C;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub entry_point: [u8; 4],          // 0100-0103
    pub logo: [u8; 48],                // 0104-0133
    pub title: [u8; TITLE_LEN],        // 0134-0143
    pub new_licensee_code: u16,        // 0144-0145
    pub sgb_flag: u8,                  // 0146
    pub cart_type: u8,                 // 0147
    pub rom_size: u8,                  // 0148
    pub ram_size: u8,                  // 0149
    pub destination_code: u8,          // 014A
    pub old_licensee_code: u8,         // 014B
    pub mask_rom_version: u8,          // 014C
    pub header_checksum: u8,           // 014D
    pub global_checksum: u16,          // 014E-014F
}

impl Header {
    /// Decodes the header out of a full ROM image. Returns `None` when the
    /// image ends before 0x150.
    pub fn parse(rom: &[u8]) -> Option<Self> {
        let h = rom.get(HEADER_START..HEADER_END)?;

        let mut entry_point = [0; 4];
        entry_point.copy_from_slice(&h[0x00..0x04]);
        let mut logo = [0; 48];
        logo.copy_from_slice(&h[0x04..0x34]);
        let mut title = [0; TITLE_LEN];
        title.copy_from_slice(&h[0x34..0x44]);

        Some(Self {
            entry_point,
            logo,
            title,
            new_licensee_code: u16::from_le_bytes([h[0x44], h[0x45]]),
            sgb_flag: h[0x46],
            cart_type: h[0x47],
            rom_size: h[0x48],
            ram_size: h[0x49],
            destination_code: h[0x4A],
            old_licensee_code: h[0x4B],
            mask_rom_version: h[0x4C],
            header_checksum: h[0x4D],
            global_checksum: u16::from_le_bytes([h[0x4E], h[0x4F]]),
        })
    }
}

/// Header checksum over 0x134..=0x14C: `x = x - b - 1`, wrapping at 8 bits.
/// `None` when the image ends before 0x14D.
pub fn header_checksum(rom: &[u8]) -> Option<u8> {
    let bytes = rom.get(CHECKSUM_START..=CHECKSUM_END)?;
    Some(bytes.iter().fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_fixed_offsets() {
        let mut rom = vec![0u8; 0x150];
        rom[0x100..0x104].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
        rom[0x134..0x13B].copy_from_slice(b"TESTROM");
        rom[0x144] = 0x34;
        rom[0x145] = 0x12;
        rom[0x147] = 0x1B;
        rom[0x148] = 0x05;
        rom[0x149] = 0x03;
        rom[0x14A] = 0x01;
        rom[0x14B] = 0x33;
        rom[0x14C] = 0x02;
        rom[0x14D] = 0xAB;
        rom[0x14E] = 0xCD;
        rom[0x14F] = 0xEF;

        let h = Header::parse(&rom).unwrap();
        assert_eq!(h.entry_point, [0x00, 0xC3, 0x50, 0x01]);
        assert_eq!(&h.title[..7], b"TESTROM");
        assert_eq!(h.new_licensee_code, 0x1234);
        assert_eq!(h.cart_type, 0x1B);
        assert_eq!(h.rom_size, 0x05);
        assert_eq!(h.ram_size, 0x03);
        assert_eq!(h.destination_code, 0x01);
        assert_eq!(h.old_licensee_code, 0x33);
        assert_eq!(h.mask_rom_version, 0x02);
        assert_eq!(h.header_checksum, 0xAB);
        assert_eq!(h.global_checksum, 0xEFCD);
    }

    #[test]
    fn parse_rejects_short_image() {
        assert!(Header::parse(&[0u8; 0x14F]).is_none());
        assert!(Header::parse(&[]).is_none());
    }

    #[test]
    fn checksum_of_zeroed_header() {
        // 25 bytes of zero: 0 - 25 = 0xE7
        let rom = vec![0u8; 0x150];
        assert_eq!(header_checksum(&rom), Some(0xE7));
    }

    #[test]
    fn checksum_needs_whole_range() {
        assert_eq!(header_checksum(&[0u8; 0x140]), None);
        assert_eq!(header_checksum(&[0u8; 0x14C]), None);
        assert_eq!(header_checksum(&[0u8; 0x14D]), Some(0xE7));
    }
}
