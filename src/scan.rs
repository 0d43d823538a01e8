//! Locates engine output files and ties each one to its condition.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::condition::ConditionKey;

/// One discovered result file together with the condition it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub path: PathBuf,
    pub key: ConditionKey,
}

/// Recursively finds every file named `file_name` under `root` that sits
/// below a condition directory.
///
/// Traversal is depth-first with entries visited in name order, so
/// repeated runs over the same tree yield the same hit sequence. Files
/// with no condition ancestor are skipped, as are subtrees that cannot be
/// read; only an unreadable `root` is an error.
pub fn find_results(root: &Path, file_name: &str) -> io::Result<Vec<Hit>> {
    let mut hits = Vec::new();
    for path in sorted_entries(root)? {
        visit(&path, file_name, &mut hits);
    }
    Ok(hits)
}

fn visit(path: &Path, file_name: &str, hits: &mut Vec<Hit>) {
    if path.is_dir() {
        let Ok(entries) = sorted_entries(path) else {
            return;
        };
        for child in entries {
            visit(&child, file_name, hits);
        }
        return;
    }

    if path.file_name().and_then(|n| n.to_str()) != Some(file_name) {
        return;
    }
    if let Some(key) = path.parent().and_then(condition_for) {
        hits.push(Hit {
            path: path.to_path_buf(),
            key,
        });
    }
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    Ok(entries)
}

/// Walks upward from `start` and returns the key of the nearest directory
/// whose full name has the `T_<int>_P_<int>` shape.
pub fn condition_for(start: &Path) -> Option<ConditionKey> {
    start.ancestors().find_map(|dir| {
        dir.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.parse().ok())
    })
}

/// Collapses hits to one file per condition, keeping the first
/// encountered. Used for the single-value result files; RDF files are
/// instead numbered per condition by the aggregator.
pub fn first_per_condition(hits: Vec<Hit>) -> BTreeMap<ConditionKey, PathBuf> {
    let mut files = BTreeMap::new();
    for hit in hits {
        files.entry(hit.key).or_insert(hit.path);
    }
    files
}
