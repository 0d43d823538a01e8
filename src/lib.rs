//! Campaign tooling for LAMMPS `(T, P)` sweep simulations.
//!
//! This crate automates the life cycle of a sweep campaign around an
//! external molecular-dynamics engine: it generates per-condition input
//! decks, hands prepared runs to the batch scheduler, and post-processes
//! the engine's output files into a summary table, block-averaged radial
//! distribution functions, and charts. The engine itself is never run from
//! here; the crate only prepares its inputs and interprets its outputs.
//!
//! # Condition directories
//!
//! Every simulation runs inside a directory named
//! `T_<temperature>_P_<pressure>` (for example `T_313_P_1`). The
//! post-processing scanner decodes that name back into a [`ConditionKey`]
//! by walking upward from each result file it finds, so result files may
//! sit at any depth below their condition directory.
//!
//! # Post-processing pipeline
//!
//! ```no_run
//! use md_sweep::{output, report};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let root = Path::new("simulations");
//! let survey = report::collect(root)?;
//!
//! let mut table = Vec::new();
//! output::table::write(&mut table, &survey.records)?;
//! # Ok(())
//! # }
//! ```
//!
//! Parse failures never abort a survey: each failed file becomes a typed
//! [`report::Issue`] and the affected fields stay unset, so one broken run
//! cannot suppress the report for the rest of the campaign.
//!
//! # Module organization
//!
//! - [`scan`] — locates result files and ties them to conditions
//! - [`parse`] — the three per-file parsers (density, transport, RDF)
//! - [`report`] — merges parses into per-condition records
//! - [`output`] — table, data-file, and chart writers
//! - [`deck`] — per-condition input deck generation
//! - [`submit`] — batch-scheduler submission

mod model;

pub mod deck;
pub mod output;
pub mod parse;
pub mod report;
pub mod scan;
pub mod submit;

pub use model::condition::{ConditionKey, ParseConditionError};
pub use model::rdf::RdfCurve;
pub use model::record::Measurements;
