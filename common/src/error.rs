use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    #[error("no symbols to build a tree from")]
    InvalidInput,
    #[error("symbol {0} has no code in the code table")]
    UnknownSymbol(String),
    #[error("bits starting at position {position} do not match any code")]
    CorruptEncoding { position: usize },
    #[error("invalid code table: {0}")]
    InvalidCodeTable(String),
    #[error("no code table, encode something first")]
    MissingCodeTable,
}
