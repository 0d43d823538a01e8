use std::io::BufRead;

use super::{data_line, Error, SourceFile};

/// Averages the density samples of a time-averaged properties file.
///
/// Every retained line contributes its last whitespace-separated token as
/// one sample; lines whose last token is not a number are skipped so a
/// truncated trailing write cannot poison the average. A file with zero
/// usable samples is an [`Error::Empty`].
pub fn read<R: BufRead>(reader: R) -> Result<f64, Error> {
    let mut total = 0.0;
    let mut samples = 0usize;

    for line in reader.lines() {
        let line = line?;
        let Some(s) = data_line(&line) else { continue };
        let Some(token) = s.split_whitespace().next_back() else {
            continue;
        };
        let Ok(sample) = token.parse::<f64>() else {
            continue;
        };
        total += sample;
        samples += 1;
    }

    if samples == 0 {
        return Err(Error::Empty {
            file: SourceFile::Density,
        });
    }
    Ok(total / samples as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn averages_last_column() {
        let data = "1 2 3 1000.0\n1 2 3 1002.0\n# comment\n";
        assert_eq!(read(Cursor::new(data)).unwrap(), 1001.0);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let data = "# header\n\n   \n10 998.0\n\n# trailing\n10 1000.0\n";
        assert_eq!(read(Cursor::new(data)).unwrap(), 999.0);
    }

    #[test]
    fn skips_lines_with_unparseable_last_token() {
        let data = "10 1000.0\n10 not-a-number\n10 1002.0\n";
        assert_eq!(read(Cursor::new(data)).unwrap(), 1001.0);
    }

    #[test]
    fn empty_file_is_an_error() {
        let err = read(Cursor::new("# only comments\n\n")).unwrap_err();
        assert!(matches!(
            err,
            Error::Empty {
                file: SourceFile::Density
            }
        ));
    }

    #[test]
    fn file_of_malformed_rows_is_an_error() {
        let err = read(Cursor::new("a b c\nx y z\n")).unwrap_err();
        assert!(matches!(err, Error::Empty { .. }));
    }
}
