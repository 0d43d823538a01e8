//! Parsers for the engine's loosely structured output files.
//!
//! Each parser takes any [`std::io::BufRead`] source and returns a typed
//! value; every failure mode is a recoverable [`Error`] so the caller can
//! isolate it at the per-condition level instead of aborting the run.

use std::fmt;

pub mod calc;
pub mod density;
pub mod rdf;

mod error;

pub use error::Error;

/// The three per-run output files the post-processor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFile {
    /// Time-averaged global properties; the last column holds the density
    /// samples.
    Density,
    /// Calculated transport property snapshots, one per report interval.
    Calculated,
    /// Block-structured radial distribution function tables.
    Rdf,
}

impl SourceFile {
    /// File name the engine writes and the scanner searches for.
    pub fn file_name(self) -> &'static str {
        match self {
            SourceFile::Density => "GlobalPropsTimeAvg.prop",
            SourceFile::Calculated => "GlobalPropCalculated.prop",
            SourceFile::Rdf => "rdf_all.rdf",
        }
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Strips a raw line to its significant content; `None` for blank lines
/// and `#` comments.
pub(crate) fn data_line(raw: &str) -> Option<&str> {
    let s = raw.trim();
    if s.is_empty() || s.starts_with('#') {
        None
    } else {
        Some(s)
    }
}
