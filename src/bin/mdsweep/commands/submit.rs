use anyhow::{bail, Context as _, Result};

use crate::cli::SubmitArgs;
use crate::display::{print_submissions, Context, Progress};

pub fn run(args: SubmitArgs, ctx: Context) -> Result<()> {
    if args.dry_run {
        let dirs = md_sweep::submit::find_submittable(&args.root)
            .with_context(|| format!("Failed to read '{}'", args.root.display()))?;
        for dir in &dirs {
            println!("{}", dir.display());
        }
        return Ok(());
    }

    let mut progress = Progress::new(ctx.interactive, 1);

    progress.step("Submitting jobs");
    let submissions = md_sweep::submit::submit_all(&args.root)
        .with_context(|| format!("Failed to read '{}'", args.root.display()))?;
    let accepted = submissions
        .iter()
        .filter(|s| s.outcome.is_ok())
        .count();
    let notes = vec![format!("{accepted} of {} accepted", submissions.len())];
    let notes_ref: Vec<&str> = notes.iter().map(String::as_str).collect();
    progress.complete_step("Submitting jobs", &notes_ref);
    progress.finish();

    print_submissions(&submissions);

    let failed = submissions.len() - accepted;
    if failed > 0 {
        bail!("{failed} of {} submissions failed", submissions.len());
    }
    Ok(())
}
