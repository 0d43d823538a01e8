//! The plain-text summary table.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::model::condition::ConditionKey;
use crate::model::record::Measurements;

/// Rendered in place of a value whose source file was absent or failed to
/// parse.
pub const PLACEHOLDER: &str = "MISSING";

const TEMP_W: usize = 8;
const PRESS_W: usize = 8;
const DENSITY_W: usize = 12;
const TRANSPORT_W: usize = 15;

/// Writes one fixed-width row per condition.
///
/// Rows come out sorted by temperature then pressure. Populated densities
/// are printed in fixed decimal, transport properties in scientific
/// notation; unpopulated fields show [`PLACEHOLDER`] so a half-finished
/// campaign is visible at a glance.
pub fn write<W: Write>(
    mut out: W,
    records: &BTreeMap<ConditionKey, Measurements>,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>TEMP_W$} {:>PRESS_W$} {:>DENSITY_W$} {:>TRANSPORT_W$} {:>TRANSPORT_W$}",
        "T(K)", "P(bar)", "Density", "SelfDiff", "Viscosity",
    )?;

    for (key, record) in records {
        let density = match record.density {
            Some(v) => format!("{v:>DENSITY_W$.6}"),
            None => format!("{PLACEHOLDER:>DENSITY_W$}"),
        };
        writeln!(
            out,
            "{:>TEMP_W$} {:>PRESS_W$} {} {} {}",
            key.temperature,
            key.pressure,
            density,
            transport_cell(record.self_diffusion),
            transport_cell(record.viscosity),
        )?;
    }
    Ok(())
}

fn transport_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:>TRANSPORT_W$.6e}"),
        None => format!("{PLACEHOLDER:>TRANSPORT_W$}"),
    }
}
