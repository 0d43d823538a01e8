use super::SourceFile;
use thiserror::Error;

/// Everything that can go wrong while reading one output file.
///
/// All variants are recoverable: the aggregator records them per condition
/// and keeps going, so tests and reports can tell an unreadable file from
/// a malformed one from one that merely lacks a required field.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The file existed but contained no usable record at all.
    #[error("{file} held no usable data")]
    Empty { file: SourceFile },

    /// The final snapshot line lacks one of the fixed property keys.
    #[error("required key '{key}' missing from the last snapshot line")]
    MissingKey { key: &'static str },

    #[error("failed to parse {file}: {details} (at line {line})")]
    Parse {
        file: SourceFile,
        line: usize,
        details: String,
    },

    /// An RDF data row did not have the fixed column count.
    #[error("unexpected column layout at line {line}: {found} columns where {expected} were expected")]
    ColumnLayout {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// RDF sampling blocks within one file disagree in row count.
    #[error("blocks disagree in shape: block {block} has {found} rows, the first had {expected}")]
    ShapeMismatch {
        block: usize,
        expected: usize,
        found: usize,
    },
}

impl Error {
    pub fn parse(file: SourceFile, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            file,
            line,
            details: details.into(),
        }
    }
}
