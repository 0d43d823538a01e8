use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mdsweep",
    about = "LAMMPS (T, P) sweep campaigns: deck generation, submission, post-processing",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The selected subcommand's `--quiet` flag.
    pub fn quiet(&self) -> bool {
        match &self.command {
            Command::Gen(args) => args.quiet,
            Command::Submit(args) => args.quiet,
            Command::Post(args) => args.quiet,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate per-condition input decks from a campaign file
    #[command(visible_alias = "g")]
    Gen(GenArgs),

    /// Submit prepared run directories to the batch scheduler
    #[command(visible_alias = "s")]
    Submit(SubmitArgs),

    /// Post-process finished runs into tables, data files, and charts
    #[command(visible_alias = "p")]
    Post(PostArgs),
}

#[derive(Args)]
pub struct GenArgs {
    /// Campaign description (TOML: temperatures, pressures, layout)
    #[arg(value_name = "CAMPAIGN")]
    pub campaign: PathBuf,

    /// Directory holding the auxiliary engine inputs to copy
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub assets: PathBuf,

    /// Directory the campaign layout is created under
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Directory whose subdirectories hold prepared runs
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// List what would be submitted without calling the scheduler
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct PostArgs {
    /// Root directory scanned for finished runs
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Where tables, data files, and charts go [default: ROOT/results]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Skip chart rendering (tables and data files only)
    #[arg(long)]
    pub no_plots: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
