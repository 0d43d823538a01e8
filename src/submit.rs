//! Batch-scheduler submission for prepared run directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Job script the scheduler is pointed at, one per run directory.
pub const SUBMIT_SCRIPT: &str = "submit.sh";

const SCHEDULER: &str = "sbatch";

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not invoke {SCHEDULER}: {source}")]
    Spawn { source: io::Error },

    #[error("{SCHEDULER} exited with {status}")]
    Scheduler { status: std::process::ExitStatus },
}

/// Outcome of one scheduler invocation.
#[derive(Debug)]
pub struct Submission {
    pub dir: PathBuf,
    pub outcome: Result<(), Error>,
}

/// Immediate subdirectories of `root` that contain a job script, sorted.
pub fn find_submittable(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir() && path.join(SUBMIT_SCRIPT).is_file())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Runs `sbatch submit.sh` inside every submittable directory.
///
/// One rejected or failed submission never stops the sweep; each
/// directory's outcome is reported on its own.
pub fn submit_all(root: &Path) -> io::Result<Vec<Submission>> {
    let mut submissions = Vec::new();
    for dir in find_submittable(root)? {
        let outcome = submit_one(&dir);
        submissions.push(Submission { dir, outcome });
    }
    Ok(submissions)
}

fn submit_one(dir: &Path) -> Result<(), Error> {
    let status = Command::new(SCHEDULER)
        .arg(SUBMIT_SCRIPT)
        .current_dir(dir)
        .status()
        .map_err(|source| Error::Spawn { source })?;

    if !status.success() {
        return Err(Error::Scheduler { status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_only_directories_holding_a_job_script() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        fs::create_dir(root.join("T_313_P_1")).unwrap();
        fs::write(root.join("T_313_P_1").join(SUBMIT_SCRIPT), "#!/bin/sh\n").unwrap();
        fs::create_dir(root.join("T_323_P_1")).unwrap();
        fs::write(root.join("T_323_P_1/run.lmp"), "").unwrap();
        fs::write(root.join("stray_file"), "").unwrap();

        let dirs = find_submittable(root).unwrap();
        assert_eq!(dirs, vec![root.join("T_313_P_1")]);
    }

    #[test]
    fn submittable_directories_come_back_sorted() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        for name in ["zeta", "alpha", "mid"] {
            fs::create_dir(root.join(name)).unwrap();
            fs::write(root.join(name).join(SUBMIT_SCRIPT), "#!/bin/sh\n").unwrap();
        }

        let dirs = find_submittable(root).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn empty_root_has_nothing_to_submit() {
        let tmp = TempDir::new().unwrap();
        assert!(find_submittable(tmp.path()).unwrap().is_empty());
    }
}
