//! Averaged RDF data files.

use std::io::{self, Write};

use crate::model::rdf::RdfCurve;

// Comment header keeps the body purely whitespace-numeric.
const HEADER: &str = "# r g_oo g_hh g_oh";

/// Writes one averaged curve, one radial bin per row.
pub fn write<W: Write>(mut out: W, curve: &RdfCurve) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for bin in 0..curve.bins() {
        writeln!(
            out,
            "{:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
            curve.r[bin], curve.g_oo[bin], curve.g_hh[bin], curve.g_oh[bin],
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_bin() {
        let curve = RdfCurve {
            r: vec![0.05, 0.15],
            g_oo: vec![0.0, 1.25],
            g_hh: vec![0.0, 1.5],
            g_oh: vec![0.0, 1.75],
        };

        let mut buf = Vec::new();
        write(&mut buf, &curve).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(!lines[1].starts_with('#'));
        assert!(lines[2].contains("1.250000e0"));
        assert!(lines[2].contains("1.750000e0"));
    }
}
