use crate::inject::{inject_symbols, Outcome, DEST_SECTION};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod blob;
mod error;
mod inject;
mod sections;

/// Packs an ELF binary's own .symtab and .strtab into its reserved
/// .syms_area section, in place.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the ELF file
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match inject_symbols(&args.file) {
        Ok(Outcome::Injected { bytes }) => {
            println!(
                "info: symtab and strtab sections ({} bytes) injected into {} section.",
                bytes, DEST_SECTION
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::Skipped) => {
            println!(
                "warn: {} section too small to hold any symbols. skipping.",
                DEST_SECTION
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
