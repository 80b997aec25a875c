//! Validated entry points for chain statistics with an injected provider

use crate::io::error::Result;
use crate::linalg::backend::NalgebraBackend;
use crate::linalg::provider::LinearAlgebra;
use crate::markov::config::ChainConfig;
use crate::markov::passage;
use crate::markov::steady_state::stationary_distribution;
use crate::markov::validation::validate;
use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Data, Ix2};
use tracing::debug;

/// Computes summary statistics of ergodic Markov chains
///
/// Holds a validated [`ChainConfig`] and a [`LinearAlgebra`] provider. Every
/// method validates its input matrix according to the configuration, then
/// runs the corresponding computation. The analyzer has no mutable state and
/// can be shared between threads.
///
/// # Example
///
/// ```
/// use ergodic::ChainAnalyzer;
/// use ndarray::array;
///
/// let p = array![[0.5, 0.25, 0.25], [0.5, 0.0, 0.5], [0.25, 0.25, 0.5]];
/// let analyzer: ChainAnalyzer = ChainAnalyzer::default();
///
/// let pi = analyzer.steady_state(&p)?;
/// assert!((pi[1] - 0.2).abs() < 1e-9);
/// # Ok::<(), ergodic::ErgodicError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChainAnalyzer<L = NalgebraBackend> {
    config: ChainConfig,
    backend: L,
}

impl ChainAnalyzer<NalgebraBackend> {
    /// Create an analyzer with the default nalgebra provider
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: ChainConfig) -> Result<Self> {
        Self::with_backend(config, NalgebraBackend::new())
    }
}

impl<L: LinearAlgebra> ChainAnalyzer<L> {
    /// Create an analyzer with a custom linear-algebra provider
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_backend(config: ChainConfig, backend: L) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, backend })
    }

    /// Active configuration
    pub const fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Linear-algebra provider in use
    pub const fn backend(&self) -> &L {
        &self.backend
    }

    fn prepare<'a, S>(&self, matrix: &'a ArrayBase<S, Ix2>) -> Result<ArrayView2<'a, f64>>
    where
        S: Data<Elem = f64>,
    {
        let view = matrix.view();
        let states = validate(view, self.config.validation())?;
        debug!(states, validation = ?self.config.validation(), "validated transition matrix");
        Ok(view)
    }

    /// Stationary distribution, summing to 1
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the eigen decomposition fails,
    /// or the dominant eigenvector sums to zero
    pub fn steady_state<S>(&self, matrix: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
    where
        S: Data<Elem = f64>,
    {
        let view = self.prepare(matrix)?;
        stationary_distribution(&self.backend, view)
    }

    /// Matrix of first mean passage times, zero on the diagonal
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, `I - P + A` is singular, or a
    /// stationary probability is numerically zero
    pub fn first_mean_passage_times<S>(&self, matrix: &ArrayBase<S, Ix2>) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
    {
        let view = self.prepare(matrix)?;
        passage::first_mean_passage_times(&self.backend, view, self.config.limiting())
    }

    /// Fundamental matrix `Z = (I - P + A)⁻¹`
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the limiting matrix cannot be
    /// built, or `I - P + A` is singular
    pub fn fundamental_matrix<S>(&self, matrix: &ArrayBase<S, Ix2>) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
    {
        let view = self.prepare(matrix)?;
        let limiting = passage::limiting_matrix(&self.backend, view, self.config.limiting())?;
        passage::fundamental_matrix(&self.backend, view, limiting.view())
    }

    /// Mean recurrence time of each state
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or a stationary probability is
    /// numerically zero
    pub fn mean_recurrence_times<S>(&self, matrix: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
    where
        S: Data<Elem = f64>,
    {
        let view = self.prepare(matrix)?;
        passage::mean_recurrence_times(&self.backend, view)
    }

    /// Variances of first passage times, recurrence variances on the diagonal
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, `I - P + A` is singular, or a
    /// stationary probability is numerically zero
    pub fn passage_time_variances<S>(&self, matrix: &ArrayBase<S, Ix2>) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
    {
        let view = self.prepare(matrix)?;
        passage::passage_time_variances(&self.backend, view, self.config.limiting())
    }
}

/// Stationary distribution of a transition matrix using the default analyzer
///
/// # Errors
///
/// Returns an error if the matrix is not a valid transition matrix or its
/// dominant eigenvector sums to zero
pub fn steady_state<S>(matrix: &ArrayBase<S, Ix2>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    ChainAnalyzer::<NalgebraBackend>::default().steady_state(matrix)
}

/// First mean passage times of a transition matrix using the default analyzer
///
/// # Errors
///
/// Returns an error if the matrix is not a valid transition matrix,
/// `I - P + A` is singular, or a stationary probability is numerically zero
pub fn fmpt<S>(matrix: &ArrayBase<S, Ix2>) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    ChainAnalyzer::<NalgebraBackend>::default().first_mean_passage_times(matrix)
}
