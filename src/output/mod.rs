//! Writers for the campaign's output artifacts.

pub mod plot;
pub mod rdf;
pub mod table;

use crate::model::condition::ConditionKey;

/// Directory created under the scanned root, unless overridden.
pub const RESULTS_DIR: &str = "results";

/// File name of the plain-text summary table.
pub const RESULTS_TABLE: &str = "results.txt";

/// File name for one averaged RDF data file.
pub fn rdf_data_name(key: ConditionKey, index: usize) -> String {
    format!("rdf_average_{}_{}.dat", key.dir_name(), index)
}

/// File name for one per-condition RDF chart.
pub fn rdf_chart_name(key: ConditionKey, index: usize) -> String {
    format!("rdf_{}_{}.png", key.dir_name(), index)
}
