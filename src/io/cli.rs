//! Command-line interface for batch analysis of transition matrix files

use crate::io::configuration::{
    DEFAULT_ROW_SUM_TOLERANCE, INPUT_EXTENSIONS, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{ErgodicError, Result, invalid_parameter};
use crate::io::matrix_file::read_matrix;
use crate::io::progress::ProgressManager;
use crate::io::report::ChainReport;
use crate::markov::analyzer::ChainAnalyzer;
use crate::markov::config::{ChainConfig, LimitingMethod, Validation};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ergodic")]
#[command(
    author,
    version,
    about = "Steady state and first mean passage times of ergodic Markov chains"
)]
/// Command-line arguments for the chain analysis tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Matrix file (.txt or .csv) or directory of matrix files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Approximate the limiting matrix by P^N instead of the exact steady state
    #[arg(short, long, value_name = "N")]
    pub power: Option<u32>,

    /// Only check that matrices are square and finite, not row-stochastic
    #[arg(short, long)]
    pub structural: bool,

    /// Allowed deviation of row sums from 1
    #[arg(short, long, default_value_t = DEFAULT_ROW_SUM_TOLERANCE)]
    pub tolerance: f64,

    /// Include mean recurrence times in reports
    #[arg(short, long)]
    pub recurrence: bool,

    /// Include passage time variances in reports
    #[arg(long)]
    pub variances: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a report exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing reports should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Analysis configuration selected by the flags
    pub fn chain_config(&self) -> ChainConfig {
        let limiting = match self.power {
            Some(exponent) => LimitingMethod::MatrixPower { exponent },
            None => LimitingMethod::Exact,
        };
        let validation = if self.structural {
            Validation::Structural
        } else {
            Validation::Strict {
                tolerance: self.tolerance,
            }
        };

        ChainConfig::new()
            .with_limiting(limiting)
            .with_validation(validation)
    }
}

/// Orchestrates batch analysis of matrix files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    analyzer: ChainAnalyzer,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the flags describe an invalid configuration
    pub fn new(cli: Cli) -> Result<Self> {
        let analyzer = ChainAnalyzer::new(cli.chain_config())?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            analyzer,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// Every file is attempted; failures are logged and the first one is
    /// returned once the batch is done.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or any file fails to analyse
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!(path = %self.cli.target.display(), "no matrix files to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut first_error = None;
        for file in &files {
            match self.process_file(file) {
                Ok(()) => {
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.complete_file();
                    }
                }
                Err(error) => {
                    warn!(file = %file.display(), %error, "analysis failed");
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.fail_file();
                    }
                    first_error.get_or_insert(error);
                }
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        first_error.map_or(Ok(()), Err)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if is_matrix_file(target) {
                Ok(if self.should_process_file(target) {
                    vec![target.clone()]
                } else {
                    vec![]
                })
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a .txt or .csv matrix",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|source| ErgodicError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_matrix_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a matrix file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!(file = %input_path.display(), "skipping, report exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let matrix = read_matrix(input_path)?;
        let report =
            ChainReport::compute(&self.analyzer, &matrix, self.cli.recurrence, self.cli.variances)?;

        let output_path = Self::get_output_path(input_path);
        report.write(&output_path)?;

        info!(
            file = %input_path.display(),
            report = %output_path.display(),
            states = matrix.nrows(),
            elapsed = ?start_time.elapsed(),
            "analysed transition matrix"
        );
        Ok(())
    }

    /// Report path written beside `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Whether `path` is a matrix input rather than a report written by this tool
pub fn is_matrix_file(path: &Path) -> bool {
    let has_input_extension = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|extension| INPUT_EXTENSIONS.contains(&extension));
    let is_report = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));

    has_input_extension && !is_report
}
