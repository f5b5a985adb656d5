use std::path::PathBuf;

/// Errors raised by the conversion pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    /// Input file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Grammar could not be loaded into the parser
    #[error("failed to load the TypeScript grammar: {0}")]
    Grammar(String),

    /// Parser produced no syntax tree
    #[error("failed to parse source text")]
    Parse,

    /// Output directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
}
