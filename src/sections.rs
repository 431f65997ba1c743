use crate::error::{Error, Result};
use elf::endian::AnyEndian;
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};

/// On-disk extent of a named section: its content occupies
/// `[offset, offset + size)` in the file.
#[derive(Debug)]
pub struct SectionExtent {
    pub name: String,
    pub offset: u64,
    pub size: u64,
}

/// Section header table of one ELF file, parsed once and shared by every
/// lookup so reads and the final write all see the same snapshot.
#[derive(Debug)]
pub struct SectionTable {
    extents: Vec<SectionExtent>,
}

impl SectionTable {
    pub fn parse(data: &[u8]) -> Result<SectionTable> {
        let elf = elf::ElfBytes::<AnyEndian>::minimal_parse(data)?;
        let (headers, strtab) = elf.section_headers_with_strtab()?;

        let headers = match headers {
            Some(headers) => headers,
            None => return Ok(SectionTable { extents: vec![] }),
        };
        let strtab = strtab.ok_or_else(|| {
            Error::MalformedContainer("missing section name string table".to_string())
        })?;

        let extents = headers
            .iter()
            .map(|s| {
                let name = strtab.get(s.sh_name as usize)?.to_string();
                Ok(SectionExtent {
                    name,
                    offset: s.sh_offset,
                    size: s.sh_size,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SectionTable { extents })
    }

    /// First section whose name matches exactly.
    pub fn find(&self, name: &str) -> Result<&SectionExtent> {
        self.extents
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::SectionNotFound(name.to_string()))
    }

    /// Raw content of the named section, sliced out of the file bytes the
    /// table was parsed from.
    pub fn section_data<'a>(&self, data: &'a [u8], name: &str) -> Result<&'a [u8]> {
        let extent = self.find(name)?;
        let start = usize::try_from(extent.offset)
            .ok()
            .filter(|&start| start <= data.len());
        let end = extent
            .offset
            .checked_add(extent.size)
            .and_then(|end| usize::try_from(end).ok())
            .filter(|&end| end <= data.len());
        match (start, end) {
            (Some(start), Some(end)) => Ok(&data[start..end]),
            _ => Err(Error::MalformedContainer(format!(
                "section '{}' extends past end of file",
                name
            ))),
        }
    }

    /// Overwrite the named section in place. The new content must fit the
    /// section's reserved extent; trailing extent bytes are left as they
    /// were. Nothing is written when the capacity check fails.
    pub fn write_section(&self, file: &mut File, name: &str, data: &[u8]) -> Result<()> {
        let extent = self.find(name)?;
        if data.len() as u64 > extent.size {
            return Err(Error::DataTooLarge {
                name: name.to_string(),
                len: data.len(),
                capacity: extent.size,
            });
        }
        file.seek(SeekFrom::Start(extent.offset))?;
        file.write_all(data)?;
        Ok(())
    }
}
