use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use md_sweep::deck::Campaign;
use md_sweep::report::{Issue, RdfSeries};
use md_sweep::{ConditionKey, Measurements};

const INDENT: &str = "      ";
const KEY_W: usize = 22;
const VAL_W: usize = 32;

pub fn print_survey_summary(
    records: &BTreeMap<ConditionKey, Measurements>,
    series: &[RdfSeries],
    skipped: &[Issue],
) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let total = records.len();
    let complete = records.values().filter(|m| m.is_complete()).count();
    let rows = vec![
        ("Conditions", total.to_string()),
        ("Complete records", complete.to_string()),
        ("Partial records", (total - complete).to_string()),
        ("Averaged RDF curves", series.len().to_string()),
        ("Skipped files", skipped.len().to_string()),
    ];
    print_kv_table(&mut out, "Campaign Summary", &rows);
}

pub fn print_deck_summary(campaign: &Campaign, created: &[PathBuf]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Temperatures", grid_summary(&campaign.temperatures, "K")),
        ("Pressures", grid_summary(&campaign.pressures, "bar")),
        ("Auxiliary files", campaign.aux_files.len().to_string()),
        ("Run directories", created.len().to_string()),
    ];
    print_kv_table(&mut out, "Deck Generation", &rows);
}

/// Skipped-input diagnostics; written even in quiet mode, since a silent
/// hole in the table is worse than one extra stderr line.
pub fn print_issues(skipped: &[Issue]) {
    if skipped.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out);
    let _ = writeln!(out, "{INDENT}\x1b[33m⚠\x1b[0m Skipped inputs:");
    for issue in skipped {
        let _ = writeln!(
            out,
            "{INDENT}  \x1b[2m·\x1b[0m {} [{}]: {}",
            issue.key.dir_name(),
            issue.stage,
            issue.error
        );
    }
}

pub fn print_submissions(submissions: &[md_sweep::submit::Submission]) {
    if submissions.is_empty() {
        let mut out = io::stderr().lock();
        let _ = writeln!(out, "{INDENT}No submittable directories found");
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out);
    for submission in submissions {
        match &submission.outcome {
            Ok(()) => {
                let _ = writeln!(
                    out,
                    "{INDENT}\x1b[32m✓\x1b[0m {}",
                    submission.dir.display()
                );
            }
            Err(e) => {
                let _ = writeln!(
                    out,
                    "{INDENT}\x1b[31m✗\x1b[0m {}: {}",
                    submission.dir.display(),
                    e
                );
            }
        }
    }
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let fill = (KEY_W + VAL_W).saturating_sub(title.len());

    let _ = writeln!(out);
    let _ = writeln!(out, "{INDENT}┌─ {title} {}┐", "─".repeat(fill));
    for (key, value) in rows {
        let _ = writeln!(out, "{INDENT}│ {key:<KEY_W$} {value:>VAL_W$} │");
    }
    let _ = writeln!(out, "{INDENT}└{}┘", "─".repeat(KEY_W + VAL_W + 3));
}

fn grid_summary(values: &[u32], unit: &str) -> String {
    match (values.iter().min(), values.iter().max()) {
        (Some(lo), Some(hi)) if lo != hi => format!("{} ({lo}..{hi} {unit})", values.len()),
        (Some(lo), _) => format!("{} ({lo} {unit})", values.len()),
        _ => "0".to_string(),
    }
}
