// emulator module root
mod cart;
mod error;
pub mod header;
pub mod report;
pub mod tables;

pub use cart::Cartridge;
pub use error::{LoadError, SizeCodeError};
pub use header::Header;
pub use report::{CartridgeReport, ChecksumVerdict};

/// Emulator context. Owns the loaded cartridge; the bus and CPU borrow ROM
/// contents from here.
pub struct Emulator {
    cart: Cartridge,
    report: CartridgeReport,
}

impl Emulator {
    pub fn new(rom_path: &str) -> Result<Self, LoadError> {
        let cart = Cartridge::load(rom_path)?;
        log::info!("loaded '{}' ({} bytes)", cart.filename, cart.rom.len());
        let report = CartridgeReport::new(&cart);

        Ok(Self { cart, report })
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cart
    }

    /// Summary built once at load time.
    pub fn report(&self) -> &CartridgeReport {
        &self.report
    }
}
