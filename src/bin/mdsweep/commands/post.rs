use std::fs::{self, File};
use std::io::BufWriter;

use anyhow::{Context as _, Result};

use md_sweep::{output, report};

use crate::cli::PostArgs;
use crate::display::{print_issues, print_survey_summary, Context, Progress};

const TOTAL_STEPS: u8 = 3;

pub fn run(args: PostArgs, ctx: Context) -> Result<()> {
    let root = args.root;
    let results_dir = args
        .output
        .unwrap_or_else(|| root.join(output::RESULTS_DIR));

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Collecting scalar results");
    let survey = report::collect(&root)
        .with_context(|| format!("Failed to scan '{}'", root.display()))?;
    let collect_notes = vec![format!(
        "{} condition(s), {} complete",
        survey.records.len(),
        survey.complete_count()
    )];
    let collect_notes_ref: Vec<&str> = collect_notes.iter().map(String::as_str).collect();
    progress.complete_step("Collecting scalar results", &collect_notes_ref);

    progress.step("Averaging radial distribution functions");
    let (series, rdf_issues) = report::collect_rdf(&root)
        .with_context(|| format!("Failed to scan '{}'", root.display()))?;
    let rdf_notes = vec![format!("{} curve(s) averaged", series.len())];
    let rdf_notes_ref: Vec<&str> = rdf_notes.iter().map(String::as_str).collect();
    progress.complete_step("Averaging radial distribution functions", &rdf_notes_ref);

    progress.step("Writing report");
    fs::create_dir_all(&results_dir)
        .with_context(|| format!("Failed to create '{}'", results_dir.display()))?;

    let table_path = results_dir.join(output::RESULTS_TABLE);
    let table_file = File::create(&table_path)
        .with_context(|| format!("Failed to create '{}'", table_path.display()))?;
    output::table::write(BufWriter::new(table_file), &survey.records)
        .with_context(|| format!("Failed to write '{}'", table_path.display()))?;

    let mut write_notes = vec![format!("Summary table → {}", table_path.display())];

    for entry in &series {
        let dat_path = results_dir.join(output::rdf_data_name(entry.key, entry.index));
        let dat_file = File::create(&dat_path)
            .with_context(|| format!("Failed to create '{}'", dat_path.display()))?;
        output::rdf::write(BufWriter::new(dat_file), &entry.curve)
            .with_context(|| format!("Failed to write '{}'", dat_path.display()))?;
    }
    if !series.is_empty() {
        write_notes.push(format!("{} averaged RDF data file(s)", series.len()));
    }

    if !args.no_plots {
        let charts = output::plot::sweep_charts(&results_dir, &survey.records)
            .context("Failed to render the temperature-sweep charts")?;
        if !charts.is_empty() {
            write_notes.push(format!("{} sweep chart(s)", charts.len()));
        }
        for entry in &series {
            let chart_path = results_dir.join(output::rdf_chart_name(entry.key, entry.index));
            output::plot::rdf_chart(&chart_path, &entry.curve)
                .with_context(|| format!("Failed to render '{}'", chart_path.display()))?;
        }
        if !series.is_empty() {
            write_notes.push(format!("{} RDF chart(s)", series.len()));
        }
    }

    let write_notes_ref: Vec<&str> = write_notes.iter().map(String::as_str).collect();
    progress.complete_step("Writing report", &write_notes_ref);
    progress.finish();

    let report::Survey { records, issues } = survey;
    let mut skipped = issues;
    skipped.extend(rdf_issues);

    if ctx.interactive {
        print_survey_summary(&records, &series, &skipped);
    }
    print_issues(&skipped);

    Ok(())
}
