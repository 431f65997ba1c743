use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested section is absent from the section header table.
    #[error("section '{0}' not found")]
    SectionNotFound(String),

    /// The file is not a parseable ELF object, or a section header
    /// describes an extent outside the file.
    #[error("malformed ELF container: {0}")]
    MalformedContainer(String),

    /// The blob does not fit the destination section's reserved extent.
    #[error("new data size exceeds section '{name}' capacity ({len} > {capacity})")]
    DataTooLarge {
        name: String,
        len: usize,
        capacity: u64,
    },

    /// Symbol table content too long for the 4-byte length prefix.
    #[error("symbol table of {0} bytes exceeds the 4-byte length prefix")]
    SymtabTooLarge(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<elf::ParseError> for Error {
    fn from(err: elf::ParseError) -> Self {
        Error::MalformedContainer(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
