use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Step-by-step progress on stderr; a no-op when not interactive.
pub enum Progress {
    Interactive(Spinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        if interactive {
            Self::Interactive(Spinner::new(total_steps))
        } else {
            Self::Silent
        }
    }

    pub fn step(&mut self, description: &str) {
        if let Self::Interactive(spinner) = self {
            spinner.step(description);
        }
    }

    pub fn complete_step(&mut self, description: &str, notes: &[&str]) {
        if let Self::Interactive(spinner) = self {
            spinner.complete_step(description, notes);
        }
    }

    pub fn finish(self) {
        if let Self::Interactive(spinner) = self {
            spinner.finish();
        }
    }
}

pub struct Spinner {
    bar: Option<ProgressBar>,
    started: Instant,
    step_started: Instant,
    step: u8,
    total_steps: u8,
}

impl Spinner {
    fn new(total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            bar: None,
            started: now,
            step_started: now,
            step: 0,
            total_steps,
        }
    }

    fn step(&mut self, description: &str) {
        self.clear();
        self.step += 1;
        self.step_started = Instant::now();

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("invalid spinner template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(format!(
            "[{}/{}] {}...",
            self.step, self.total_steps, description
        ));
        self.bar = Some(bar);
    }

    fn complete_step(&mut self, description: &str, notes: &[&str]) {
        self.clear();
        let elapsed = self.step_started.elapsed();
        let mut stderr = io::stderr().lock();

        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<46} {:>5.1}s",
            description,
            elapsed.as_secs_f64()
        );
        for note in notes {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", note);
        }
    }

    fn finish(mut self) {
        self.clear();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m Done {:>48}",
            format!("Total: {:.2}s", self.started.elapsed().as_secs_f64())
        );
        let _ = writeln!(stderr);
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
