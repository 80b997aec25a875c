//! Chain statistics report assembly and export

use crate::io::configuration::{COMMENT_MARKER, OUTPUT_PRECISION};
use crate::io::error::{ErgodicError, Result};
use crate::linalg::provider::LinearAlgebra;
use crate::markov::analyzer::ChainAnalyzer;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::path::Path;

/// Statistics computed for one transition matrix
#[derive(Debug, Clone)]
pub struct ChainReport {
    /// Stationary distribution
    pub steady_state: Array1<f64>,
    /// First mean passage times
    pub passage_times: Array2<f64>,
    /// Mean recurrence times, if requested
    pub recurrence_times: Option<Array1<f64>>,
    /// Passage time variances, if requested
    pub variances: Option<Array2<f64>>,
}

impl ChainReport {
    /// Compute the report for `matrix`
    ///
    /// # Errors
    ///
    /// Propagates any analysis failure; no partial report is produced
    pub fn compute<L: LinearAlgebra>(
        analyzer: &ChainAnalyzer<L>,
        matrix: &Array2<f64>,
        include_recurrence: bool,
        include_variances: bool,
    ) -> Result<Self> {
        let steady_state = analyzer.steady_state(matrix)?;
        let passage_times = analyzer.first_mean_passage_times(matrix)?;

        let recurrence_times = if include_recurrence {
            Some(analyzer.mean_recurrence_times(matrix)?)
        } else {
            None
        };

        let variances = if include_variances {
            Some(analyzer.passage_time_variances(matrix)?)
        } else {
            None
        };

        Ok(Self {
            steady_state,
            passage_times,
            recurrence_times,
            variances,
        })
    }

    /// Render the report as commented sections of whitespace-separated rows
    pub fn render(&self) -> String {
        let mut sections = vec![
            section("steady state", &format_row(self.steady_state.view())),
            section("first mean passage times", &format_matrix(self.passage_times.view())),
        ];

        if let Some(recurrence) = &self.recurrence_times {
            sections.push(section("mean recurrence times", &format_row(recurrence.view())));
        }
        if let Some(variances) = &self.variances {
            sections.push(section("passage time variances", &format_matrix(variances.view())));
        }

        sections.join("\n")
    }

    /// Write the rendered report to `path`
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be written
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render()).map_err(|source| ErgodicError::FileSystem {
            path: path.to_path_buf(),
            operation: "write report",
            source,
        })
    }
}

fn section(title: &str, body: &str) -> String {
    format!("{COMMENT_MARKER} {title}\n{body}\n")
}

fn format_row(values: ArrayView1<'_, f64>) -> String {
    values
        .iter()
        .map(|value| format!("{value:.precision$}", precision = OUTPUT_PRECISION))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_matrix(values: ArrayView2<'_, f64>) -> String {
    values
        .rows()
        .into_iter()
        .map(format_row)
        .collect::<Vec<_>>()
        .join("\n")
}
