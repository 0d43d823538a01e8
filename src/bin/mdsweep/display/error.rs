use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

const INNER: usize = 58;

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let bar = |c: char| c.to_string().repeat(INNER);

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔{}╗", bar('═'));
    let _ = writeln!(stderr, "   ║  {:<w$} ║", "✗ Error", w = INNER - 3);
    let _ = writeln!(stderr, "   ╟{}╢", bar('─'));
    for line in wrap(&err.to_string(), INNER - 3) {
        let _ = writeln!(stderr, "   ║  {:<w$} ║", line, w = INNER - 3);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟{}╢", bar('─'));
        let _ = writeln!(stderr, "   ║  {:<w$} ║", "Caused by:", w = INNER - 3);
        for line in wrap(&cause.to_string(), INNER - 5) {
            let _ = writeln!(stderr, "   ║    {:<w$} ║", line, w = INNER - 5);
        }
        source = cause.source();
    }

    if let Some(hints) = hints_for(err) {
        let _ = writeln!(stderr, "   ╟{}╢", bar('─'));
        let _ = writeln!(stderr, "   ║  {:<w$} ║", "Hints:", w = INNER - 3);
        for hint in hints {
            for (i, line) in wrap(&hint, INNER - 7).into_iter().enumerate() {
                let bullet = if i == 0 { "• " } else { "  " };
                let _ = writeln!(
                    stderr,
                    "   ║    {bullet}{:<w$} ║",
                    line,
                    w = INNER - 7
                );
            }
        }
    }

    let _ = writeln!(stderr, "   ╚{}╝", bar('═'));
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(deck_err) = err.downcast_ref::<md_sweep::deck::Error>() {
        use md_sweep::deck::Error as DeckError;

        match deck_err {
            DeckError::Config(_) => {
                hints.push("The campaign file is not valid TOML".into());
                hints.push(
                    "Expected keys: temperatures, pressures, base_dir, aux_files".into(),
                );
            }
            DeckError::EmptyGrid(grid) => {
                hints.push(format!("Add at least one entry to '{grid}'"));
            }
            DeckError::MissingAux { path } => {
                hints.push(format!(
                    "'{}' must exist in the assets directory",
                    path.display()
                ));
                hints.push("Point --assets at the directory holding the engine inputs".into());
            }
            DeckError::Io { source } => io_hints(source, &mut hints),
        }
    } else if let Some(io_err) = err.downcast_ref::<io::Error>() {
        io_hints(io_err, &mut hints);
    } else {
        let text = err.to_string().to_lowercase();
        if text.contains("sbatch") {
            hints.push("Is the scheduler CLI (sbatch) on PATH?".into());
            hints.push("Use --dry-run to list submittable directories first".into());
        }
    }

    if hints.is_empty() {
        None
    } else {
        Some(hints)
    }
}

fn io_hints(source: &io::Error, hints: &mut Vec<String>) {
    use io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure it exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the path".into());
            hints.push("Check access rights with `ls -la`".into());
        }
        ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".into());
        }
        _ => {}
    }
}
