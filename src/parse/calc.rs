use std::collections::HashMap;
use std::io::BufRead;

use super::{data_line, Error, SourceFile};

/// Key names as written by the `fix print` line of the run script.
pub const SELF_DIFFUSION_KEY: &str = "D[H2O]";
pub const VISCOSITY_KEY: &str = "viscosity";

/// The two transport properties reported on each snapshot line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transport {
    pub self_diffusion: f64,
    pub viscosity: f64,
}

/// Extracts the transport properties from a calculated-properties file.
///
/// Each retained line is a full `key: value, key: value, ...` snapshot and
/// later lines supersede earlier ones, so only the final retained line is
/// parsed. Segments without a colon, or whose value is not a number, are
/// ignored; what matters is that the two fixed keys are present.
pub fn read<R: BufRead>(reader: R) -> Result<Transport, Error> {
    let mut last: Option<String> = None;
    for line in reader.lines() {
        let line = line?;
        if let Some(s) = data_line(&line) {
            last = Some(s.to_string());
        }
    }

    let snapshot = last.ok_or(Error::Empty {
        file: SourceFile::Calculated,
    })?;

    let mut fields: HashMap<&str, f64> = HashMap::new();
    for segment in snapshot.split(',') {
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };
        let Ok(value) = value.trim().parse::<f64>() else {
            continue;
        };
        fields.insert(key.trim(), value);
    }

    let lookup = |key: &'static str| {
        fields
            .get(key)
            .copied()
            .ok_or(Error::MissingKey { key })
    };

    Ok(Transport {
        self_diffusion: lookup(SELF_DIFFUSION_KEY)?,
        viscosity: lookup(VISCOSITY_KEY)?,
    })
}
