use anyhow::{Context, Result};
use clap::Parser;
use gb_cart::emu;

#[derive(Parser, Debug)]
struct Args {
    /// Path to .gb ROM file
    rom: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let emu = emu::Emulator::new(&args.rom)
        .with_context(|| format!("failed to load ROM '{}'", args.rom))?;

    println!("{}", emu.report());

    Ok(())
}
