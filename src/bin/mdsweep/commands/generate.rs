use std::fs;

use anyhow::{Context as _, Result};

use md_sweep::deck;

use crate::cli::GenArgs;
use crate::display::{print_deck_summary, Context, Progress};

pub fn run(args: GenArgs, ctx: Context) -> Result<()> {
    let text = fs::read_to_string(&args.campaign)
        .with_context(|| format!("Failed to read campaign file '{}'", args.campaign.display()))?;
    let campaign = deck::Campaign::from_toml(&text)
        .with_context(|| format!("Invalid campaign file '{}'", args.campaign.display()))?;

    let mut progress = Progress::new(ctx.interactive, 1);

    progress.step("Generating input decks");
    let created = deck::generate(&campaign, &args.root, &args.assets)
        .context("Deck generation failed")?;
    let notes = vec![format!(
        "{} run director{} under {}",
        created.len(),
        if created.len() == 1 { "y" } else { "ies" },
        args.root.join(&campaign.base_dir).display()
    )];
    let notes_ref: Vec<&str> = notes.iter().map(String::as_str).collect();
    progress.complete_step("Generating input decks", &notes_ref);
    progress.finish();

    if ctx.interactive {
        print_deck_summary(&campaign, &created);
    }

    Ok(())
}
