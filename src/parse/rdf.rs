use std::io::BufRead;

use super::{data_line, Error, SourceFile};
use crate::model::rdf::RdfCurve;

/// Fixed layout of one data row, as produced by `fix ave/time ... mode
/// vector` over a three-pair `compute rdf`: bin index, radius, then a
/// (g, coordination) column pair per requested species pair.
pub const ROW_COLUMNS: usize = 8;

const COL_RADIUS: usize = 1;
const COL_G_OO: usize = 2;
const COL_G_HH: usize = 4;
const COL_G_OH: usize = 6;

type Row = [f64; ROW_COLUMNS];

/// Reads every sampling block of an RDF file and averages them.
///
/// A retained line with exactly two tokens (`<timestep> <row-count>`)
/// opens the next block; all following lines are its data rows. Blocks
/// must agree in row count. The radius column of the first block is taken
/// verbatim; the binning of later blocks is trusted, not re-verified.
pub fn read<R: BufRead>(reader: R) -> Result<RdfCurve, Error> {
    let blocks = collect_blocks(reader)?;
    average(&blocks)
}

fn collect_blocks<R: BufRead>(reader: R) -> Result<Vec<Vec<Row>>, Error> {
    let mut blocks: Vec<Vec<Row>> = Vec::new();
    let mut current: Option<Vec<Row>> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(s) = data_line(&line) else { continue };
        let line_no = idx + 1;

        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() == 2 {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(Vec::new());
            continue;
        }

        let Some(block) = current.as_mut() else {
            return Err(Error::parse(
                SourceFile::Rdf,
                line_no,
                "data row before the first block header",
            ));
        };
        block.push(parse_row(&tokens, line_no)?);
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    if blocks.is_empty() {
        return Err(Error::Empty {
            file: SourceFile::Rdf,
        });
    }
    Ok(blocks)
}

fn parse_row(tokens: &[&str], line_no: usize) -> Result<Row, Error> {
    if tokens.len() != ROW_COLUMNS {
        return Err(Error::ColumnLayout {
            line: line_no,
            expected: ROW_COLUMNS,
            found: tokens.len(),
        });
    }

    let mut row = [0.0; ROW_COLUMNS];
    for (slot, token) in row.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| {
            Error::parse(
                SourceFile::Rdf,
                line_no,
                format!("'{token}' is not a number"),
            )
        })?;
    }
    Ok(row)
}

fn average(blocks: &[Vec<Row>]) -> Result<RdfCurve, Error> {
    let bins = blocks[0].len();
    if bins == 0 {
        return Err(Error::Empty {
            file: SourceFile::Rdf,
        });
    }
    for (idx, block) in blocks.iter().enumerate().skip(1) {
        if block.len() != bins {
            return Err(Error::ShapeMismatch {
                block: idx + 1,
                expected: bins,
                found: block.len(),
            });
        }
    }

    let column_mean = |col: usize| -> Vec<f64> {
        (0..bins)
            .map(|bin| {
                blocks.iter().map(|block| block[bin][col]).sum::<f64>() / blocks.len() as f64
            })
            .collect()
    };

    Ok(RdfCurve {
        r: blocks[0].iter().map(|row| row[COL_RADIUS]).collect(),
        g_oo: column_mean(COL_G_OO),
        g_hh: column_mean(COL_G_HH),
        g_oh: column_mean(COL_G_OH),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ONE_BLOCK: &str = "\
# Time-averaged data for fix rdfOut
1000 3
1 0.05 0.1 0.01 0.2 0.02 0.3 0.03
2 0.15 1.1 0.11 1.2 0.12 1.3 0.13
3 0.25 2.1 0.21 2.2 0.22 2.3 0.23
";

    #[test]
    fn reads_a_single_block() {
        let curve = read(Cursor::new(ONE_BLOCK)).unwrap();
        assert_eq!(curve.bins(), 3);
        assert_eq!(curve.r, vec![0.05, 0.15, 0.25]);
        assert_eq!(curve.g_oo, vec![0.1, 1.1, 2.1]);
        assert_eq!(curve.g_hh, vec![0.2, 1.2, 2.2]);
        assert_eq!(curve.g_oh, vec![0.3, 1.3, 2.3]);
    }

    #[test]
    fn averaging_duplicate_blocks_is_idempotent() {
        let mut doubled = String::from(ONE_BLOCK);
        doubled.push_str("2000 3\n");
        doubled.push_str("1 0.05 0.1 0.01 0.2 0.02 0.3 0.03\n");
        doubled.push_str("2 0.15 1.1 0.11 1.2 0.12 1.3 0.13\n");
        doubled.push_str("3 0.25 2.1 0.21 2.2 0.22 2.3 0.23\n");

        let once = read(Cursor::new(ONE_BLOCK)).unwrap();
        let twice = read(Cursor::new(doubled)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn averages_element_wise_across_blocks() {
        let data = "\
1000 2
1 0.05 1.0 0.0 2.0 0.0 3.0 0.0
2 0.15 1.0 0.0 2.0 0.0 3.0 0.0
2000 2
1 0.05 3.0 0.0 4.0 0.0 5.0 0.0
2 0.15 3.0 0.0 4.0 0.0 5.0 0.0
";
        let curve = read(Cursor::new(data)).unwrap();
        assert_eq!(curve.g_oo, vec![2.0, 2.0]);
        assert_eq!(curve.g_hh, vec![3.0, 3.0]);
        assert_eq!(curve.g_oh, vec![4.0, 4.0]);
    }

    #[test]
    fn radius_comes_from_the_first_block() {
        let data = "\
1000 1
1 0.05 1.0 0.0 1.0 0.0 1.0 0.0
2000 1
1 0.99 1.0 0.0 1.0 0.0 1.0 0.0
";
        let curve = read(Cursor::new(data)).unwrap();
        assert_eq!(curve.r, vec![0.05]);
    }

    #[test]
    fn mismatched_block_row_counts_are_rejected() {
        let data = "\
1000 2
1 0.05 1.0 0.0 1.0 0.0 1.0 0.0
2 0.15 1.0 0.0 1.0 0.0 1.0 0.0
2000 1
1 0.05 1.0 0.0 1.0 0.0 1.0 0.0
";
        let err = read(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                block: 2,
                expected: 2,
                found: 1,
            }
        ));
    }

    #[test]
    fn wrong_column_count_fails_loudly() {
        let data = "1000 1\n1 0.05 1.0 0.0 1.0 0.0 1.0\n";
        let err = read(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnLayout {
                line: 2,
                expected: ROW_COLUMNS,
                found: 7,
            }
        ));
    }

    #[test]
    fn unparseable_number_fails_with_line_number() {
        let data = "1000 1\n1 0.05 oops 0.0 1.0 0.0 1.0 0.0\n";
        let err = read(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn data_row_before_any_header_is_rejected() {
        let data = "1 0.05 1.0 0.0 1.0 0.0 1.0 0.0\n";
        assert!(matches!(
            read(Cursor::new(data)).unwrap_err(),
            Error::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn file_without_blocks_is_empty() {
        let err = read(Cursor::new("# header only\n\n")).unwrap_err();
        assert!(matches!(
            err,
            Error::Empty {
                file: SourceFile::Rdf
            }
        ));
    }
}
