use crate::blob::build_blob;
use crate::error::Result;
use crate::sections::SectionTable;
use std::fs::{self, OpenOptions};
use std::path::Path;

pub const SYMTAB_SECTION: &str = ".symtab";
pub const STRTAB_SECTION: &str = ".strtab";
pub const DEST_SECTION: &str = ".syms_area";

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The blob was written; `bytes` is its length.
    Injected { bytes: usize },
    /// The destination section cannot hold even the length prefix, which
    /// marks a binary built without symbol-area support. Nothing written.
    Skipped,
}

/// Extract `.symtab` and `.strtab`, frame them, and overwrite `.syms_area`
/// in place. The file is read and parsed once up front, so both source
/// sections and the destination extent come from the same snapshot; the
/// write happens only after both extractions and the capacity check.
pub fn inject_symbols(path: &Path) -> Result<Outcome> {
    let content = fs::read(path)?;
    let table = SectionTable::parse(&content)?;

    let symtab = table.section_data(&content, SYMTAB_SECTION)?;
    let strtab = table.section_data(&content, STRTAB_SECTION)?;
    let blob = build_blob(symtab, strtab)?;

    let dest = table.find(DEST_SECTION)?;
    if dest.size <= 4 {
        return Ok(Outcome::Skipped);
    }

    let mut file = OpenOptions::new().write(true).open(path)?;
    table.write_section(&mut file, DEST_SECTION, &blob)?;
    Ok(Outcome::Injected { bytes: blob.len() })
}
