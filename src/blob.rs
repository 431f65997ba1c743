use crate::error::{Error, Result};

/// Frame the symbol table and string table into one buffer:
/// a 4-byte little-endian length of the symtab content, then the symtab
/// bytes, then the strtab bytes. A reader splits the blob back apart from
/// the prefix alone, so no second length field is carried. The framing is
/// a fixed, versionless format with no magic number.
pub fn build_blob(symtab: &[u8], strtab: &[u8]) -> Result<Vec<u8>> {
    let header = u32::try_from(symtab.len())
        .map_err(|_| Error::SymtabTooLarge(symtab.len()))?
        .to_le_bytes();

    let mut blob = Vec::with_capacity(4 + symtab.len() + strtab.len());
    blob.extend_from_slice(&header);
    blob.extend_from_slice(symtab);
    blob.extend_from_slice(strtab);
    Ok(blob)
}
