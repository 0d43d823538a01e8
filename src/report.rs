//! Merges per-file parses into per-condition records.
//!
//! The aggregator isolates failures: every condition seen by any file
//! search gets a record, a failed parse only leaves its fields unset, and
//! the failure itself is kept as a typed [`Issue`] for reporting.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::model::condition::ConditionKey;
use crate::model::rdf::RdfCurve;
use crate::model::record::Measurements;
use crate::parse::{self, SourceFile};
use crate::scan;

/// What a failed per-file parse was trying to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Density,
    Transport,
    Rdf,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Density => "density",
            Stage::Transport => "transport",
            Stage::Rdf => "rdf",
        })
    }
}

/// A per-condition parse failure, kept instead of aborting the run.
#[derive(Debug)]
pub struct Issue {
    pub key: ConditionKey,
    pub path: PathBuf,
    pub stage: Stage,
    pub error: parse::Error,
}

/// Everything harvested from one scan of a campaign tree.
#[derive(Debug, Default)]
pub struct Survey {
    /// One record per condition, sorted by temperature then pressure.
    pub records: BTreeMap<ConditionKey, Measurements>,
    pub issues: Vec<Issue>,
}

impl Survey {
    pub fn complete_count(&self) -> usize {
        self.records.values().filter(|m| m.is_complete()).count()
    }
}

/// Scans `root` for the scalar result files and parses them into records.
///
/// The record set covers the union of the two file searches: a condition
/// with only one of the files still gets a row, with the other fields
/// unset. Both parses are attempted independently per condition.
pub fn collect(root: &Path) -> io::Result<Survey> {
    let density_files =
        scan::first_per_condition(scan::find_results(root, SourceFile::Density.file_name())?);
    let calc_files =
        scan::first_per_condition(scan::find_results(root, SourceFile::Calculated.file_name())?);

    let mut survey = Survey::default();
    for &key in density_files.keys().chain(calc_files.keys()) {
        survey.records.entry(key).or_default();
    }

    for (&key, path) in &density_files {
        match parse_density(path) {
            Ok(density) => {
                survey.records.entry(key).or_default().record_density(density);
            }
            Err(error) => survey.issues.push(Issue {
                key,
                path: path.clone(),
                stage: Stage::Density,
                error,
            }),
        }
    }

    for (&key, path) in &calc_files {
        match parse_transport(path) {
            Ok(transport) => {
                survey
                    .records
                    .entry(key)
                    .or_default()
                    .record_transport(transport.self_diffusion, transport.viscosity);
            }
            Err(error) => survey.issues.push(Issue {
                key,
                path: path.clone(),
                stage: Stage::Transport,
                error,
            }),
        }
    }

    Ok(survey)
}

/// One averaged RDF curve, numbered within its condition for output
/// naming.
#[derive(Debug)]
pub struct RdfSeries {
    pub key: ConditionKey,
    /// 1-based position among this condition's successfully parsed files.
    pub index: usize,
    pub curve: RdfCurve,
}

/// Scans `root` for RDF files and block-averages each one.
///
/// Unlike the scalar searches every matching file is processed; files
/// sharing a condition get consecutive indices in hit order. Failures are
/// returned alongside the curves, never raised.
pub fn collect_rdf(root: &Path) -> io::Result<(Vec<RdfSeries>, Vec<Issue>)> {
    let mut series = Vec::new();
    let mut issues = Vec::new();
    let mut counters: BTreeMap<ConditionKey, usize> = BTreeMap::new();

    for hit in scan::find_results(root, SourceFile::Rdf.file_name())? {
        match parse_rdf(&hit.path) {
            Ok(curve) => {
                let index = counters
                    .entry(hit.key)
                    .and_modify(|n| *n += 1)
                    .or_insert(1);
                series.push(RdfSeries {
                    key: hit.key,
                    index: *index,
                    curve,
                });
            }
            Err(error) => issues.push(Issue {
                key: hit.key,
                path: hit.path,
                stage: Stage::Rdf,
                error,
            }),
        }
    }

    Ok((series, issues))
}

fn parse_density(path: &Path) -> Result<f64, parse::Error> {
    let file = File::open(path)?;
    parse::density::read(BufReader::new(file))
}

fn parse_transport(path: &Path) -> Result<parse::calc::Transport, parse::Error> {
    let file = File::open(path)?;
    parse::calc::read(BufReader::new(file))
}

fn parse_rdf(path: &Path) -> Result<RdfCurve, parse::Error> {
    let file = File::open(path)?;
    parse::rdf::read(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn collects_complete_and_partial_records() {
        let tmp = TempDir::new().unwrap();
        let full = tmp.path().join("batch/T_313_P_1/run");
        write_file(&full, "GlobalPropsTimeAvg.prop", "1 2 3 1000.0\n1 2 3 1002.0\n# c\n");
        write_file(
            &full,
            "GlobalPropCalculated.prop",
            "time:0, D[H2O]:1e-9, viscosity:0.5\ntime:1, D[H2O]:2e-9, viscosity:0.6\n",
        );
        let partial = tmp.path().join("batch/T_323_P_1");
        write_file(&partial, "GlobalPropsTimeAvg.prop", "4 5 6 998.5\n");

        let survey = collect(tmp.path()).unwrap();
        assert_eq!(survey.records.len(), 2);
        assert!(survey.issues.is_empty());
        assert_eq!(survey.complete_count(), 1);

        let full_rec = &survey.records[&ConditionKey::new(313, 1)];
        assert_eq!(full_rec.density, Some(1001.0));
        assert_eq!(full_rec.self_diffusion, Some(2e-9));
        assert_eq!(full_rec.viscosity, Some(0.6));

        let partial_rec = &survey.records[&ConditionKey::new(323, 1)];
        assert_eq!(partial_rec.density, Some(998.5));
        assert_eq!(partial_rec.self_diffusion, None);
        assert_eq!(partial_rec.viscosity, None);
    }

    #[test]
    fn parse_failure_is_isolated_to_its_field() {
        let tmp = TempDir::new().unwrap();
        let run = tmp.path().join("T_313_P_1");
        write_file(&run, "GlobalPropsTimeAvg.prop", "1 2 3 1000.0\n");
        write_file(&run, "GlobalPropCalculated.prop", "time:1\n");

        let survey = collect(tmp.path()).unwrap();
        let record = &survey.records[&ConditionKey::new(313, 1)];
        assert_eq!(record.density, Some(1000.0));
        assert_eq!(record.self_diffusion, None);

        assert_eq!(survey.issues.len(), 1);
        let issue = &survey.issues[0];
        assert_eq!(issue.stage, Stage::Transport);
        assert!(matches!(issue.error, parse::Error::MissingKey { .. }));
    }

    #[test]
    fn one_bad_condition_never_blocks_the_others() {
        let tmp = TempDir::new().unwrap();
        write_file(
            &tmp.path().join("T_313_P_1"),
            "GlobalPropsTimeAvg.prop",
            "# still equilibrating\n",
        );
        write_file(
            &tmp.path().join("T_323_P_1"),
            "GlobalPropsTimeAvg.prop",
            "1 2 3 997.0\n",
        );

        let survey = collect(tmp.path()).unwrap();
        assert_eq!(survey.records.len(), 2);
        assert_eq!(survey.records[&ConditionKey::new(313, 1)].density, None);
        assert_eq!(
            survey.records[&ConditionKey::new(323, 1)].density,
            Some(997.0)
        );
        assert_eq!(survey.issues.len(), 1);
        assert!(matches!(survey.issues[0].error, parse::Error::Empty { .. }));
    }

    #[test]
    fn empty_tree_gives_an_empty_survey() {
        let tmp = TempDir::new().unwrap();
        let survey = collect(tmp.path()).unwrap();
        assert!(survey.records.is_empty());
        assert!(survey.issues.is_empty());
    }

    const RDF_BLOCK: &str = "\
1000 2
1 0.05 1.0 0.0 2.0 0.0 3.0 0.0
2 0.15 1.0 0.0 2.0 0.0 3.0 0.0
";

    #[test]
    fn rdf_files_get_per_condition_indices() {
        let tmp = TempDir::new().unwrap();
        write_file(&tmp.path().join("T_313_P_1/stage1"), "rdf_all.rdf", RDF_BLOCK);
        write_file(&tmp.path().join("T_313_P_1/stage2"), "rdf_all.rdf", RDF_BLOCK);
        write_file(&tmp.path().join("T_323_P_1"), "rdf_all.rdf", RDF_BLOCK);

        let (series, issues) = collect_rdf(tmp.path()).unwrap();
        assert!(issues.is_empty());
        let labels: Vec<(ConditionKey, usize)> =
            series.iter().map(|s| (s.key, s.index)).collect();
        assert_eq!(
            labels,
            vec![
                (ConditionKey::new(313, 1), 1),
                (ConditionKey::new(313, 1), 2),
                (ConditionKey::new(323, 1), 1),
            ]
        );
    }

    #[test]
    fn failed_rdf_parse_becomes_an_issue() {
        let tmp = TempDir::new().unwrap();
        write_file(&tmp.path().join("T_313_P_1"), "rdf_all.rdf", "# no blocks\n");

        let (series, issues) = collect_rdf(tmp.path()).unwrap();
        assert!(series.is_empty());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].stage, Stage::Rdf);
        assert!(matches!(issues[0].error, parse::Error::Empty { .. }));
    }
}
