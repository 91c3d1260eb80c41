use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphGenError {
    /// Requested code is absent from every character-class table.
    #[error("Unknown language code “{0}”")]
    UnknownLanguage(String),

    /// Character-class tables could not be parsed.
    #[error("table error: {0}")]
    Tables(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
