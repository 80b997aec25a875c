//! First passage statistics via the Kemeny–Snell fundamental matrix

use crate::io::configuration::DEGENERACY_EPSILON;
use crate::io::error::{Result, degenerate_input};
use crate::linalg::power::matrix_power;
use crate::linalg::provider::{LinearAlgebra, square_dimension};
use crate::markov::config::LimitingMethod;
use crate::markov::steady_state::stationary_distribution;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

/// Matrix with every row equal to `distribution`
pub fn broadcast_rows(distribution: ArrayView1<'_, f64>) -> Array2<f64> {
    let states = distribution.len();
    let mut limiting = Array2::zeros((states, states));
    for mut row in limiting.rows_mut() {
        row.assign(&distribution);
    }
    limiting
}

/// Limiting matrix `A` of the chain
///
/// # Errors
///
/// Returns an error if the matrix is not square or the steady state cannot
/// be computed
pub fn limiting_matrix<L>(
    backend: &L,
    matrix: ArrayView2<'_, f64>,
    method: LimitingMethod,
) -> Result<Array2<f64>>
where
    L: LinearAlgebra + ?Sized,
{
    debug!(states = matrix.nrows(), ?method, "building limiting matrix");
    match method {
        LimitingMethod::Exact => {
            let stationary = stationary_distribution(backend, matrix)?;
            Ok(broadcast_rows(stationary.view()))
        }
        LimitingMethod::MatrixPower { exponent } => matrix_power(matrix, exponent),
    }
}

/// Fundamental matrix `Z = (I - P + A)⁻¹` for a given limiting matrix
///
/// # Errors
///
/// Returns [`SingularMatrix`](crate::ErgodicError::SingularMatrix) if
/// `I - P + A` is not invertible
pub fn fundamental_matrix<L>(
    backend: &L,
    matrix: ArrayView2<'_, f64>,
    limiting: ArrayView2<'_, f64>,
) -> Result<Array2<f64>>
where
    L: LinearAlgebra + ?Sized,
{
    let states = square_dimension(matrix)?;
    let system = Array2::<f64>::eye(states) - &matrix + &limiting;
    backend.inverse(system.view())
}

/// Ensure no stationary probability is numerically zero before dividing by it
fn check_positive(stationary: ArrayView1<'_, f64>, operation: &'static str) -> Result<()> {
    if let Some((state, value)) = stationary
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || v.abs() < DEGENERACY_EPSILON)
    {
        return Err(degenerate_input(
            operation,
            &format!("stationary probability of state {state} is {value}"),
        ));
    }
    Ok(())
}

/// Mean first passage times from the fundamental and limiting matrices
///
/// Entry `(i, j)` is `(Z[j][j] - Z[i][j]) / A[j][j]`, which is zero on the
/// diagonal.
///
/// # Errors
///
/// Returns [`DegenerateInput`](crate::ErgodicError::DegenerateInput) if a
/// diagonal entry of `A` is numerically zero
pub fn passage_times_from(
    fundamental: ArrayView2<'_, f64>,
    limiting: ArrayView2<'_, f64>,
) -> Result<Array2<f64>> {
    let stationary = limiting.diag();
    check_positive(stationary, "first mean passage times")?;

    let targets = fundamental.diag().insert_axis(Axis(0));
    let denominators = stationary.insert_axis(Axis(0));
    Ok((&targets - &fundamental) / &denominators)
}

/// First mean passage times of a transition matrix
///
/// Entry `(i, j)` is the expected number of steps for the chain started in
/// state `i` to first enter state `j`.
///
/// # Errors
///
/// Returns an error if the limiting matrix cannot be built, `I - P + A` is
/// singular, or a stationary probability is numerically zero
pub fn first_mean_passage_times<L>(
    backend: &L,
    matrix: ArrayView2<'_, f64>,
    method: LimitingMethod,
) -> Result<Array2<f64>>
where
    L: LinearAlgebra + ?Sized,
{
    let limiting = limiting_matrix(backend, matrix, method)?;
    let fundamental = fundamental_matrix(backend, matrix, limiting.view())?;
    passage_times_from(fundamental.view(), limiting.view())
}

/// Mean recurrence time of each state, the reciprocal of its stationary probability
///
/// # Errors
///
/// Returns an error if the steady state cannot be computed or a stationary
/// probability is numerically zero
pub fn mean_recurrence_times<L>(backend: &L, matrix: ArrayView2<'_, f64>) -> Result<Array1<f64>>
where
    L: LinearAlgebra + ?Sized,
{
    let stationary = stationary_distribution(backend, matrix)?;
    check_positive(stationary.view(), "mean recurrence times")?;
    Ok(stationary.mapv(f64::recip))
}

/// Variances of first passage times
///
/// With `D = diag(1/π)` and `M = (I - Z + E·Z_dg)·D` the mean passage matrix
/// including recurrence times,
/// `W = M(2·Z_dg·D - I) + 2(Z·M - E·(Z·M)_dg)` holds second moments and the
/// result is `W - M∘M`.
///
/// # Errors
///
/// Returns an error if the limiting matrix cannot be built, `I - P + A` is
/// singular, or a stationary probability is numerically zero
pub fn passage_time_variances<L>(
    backend: &L,
    matrix: ArrayView2<'_, f64>,
    method: LimitingMethod,
) -> Result<Array2<f64>>
where
    L: LinearAlgebra + ?Sized,
{
    let limiting = limiting_matrix(backend, matrix, method)?;
    let fundamental = fundamental_matrix(backend, matrix, limiting.view())?;

    let stationary = limiting.diag();
    check_positive(stationary, "passage time variances")?;

    let states = stationary.len();
    let identity = Array2::<f64>::eye(states);
    let ones = Array2::<f64>::ones((states, states));
    let recurrence = Array2::from_diag(&stationary.mapv(f64::recip));
    let fundamental_diagonal = Array2::from_diag(&fundamental.diag());

    let means = (&identity - &fundamental + ones.dot(&fundamental_diagonal)).dot(&recurrence);
    let weighted = fundamental.dot(&means);
    let weighted_diagonal = Array2::from_diag(&weighted.diag());

    let second_moments = means.dot(&(fundamental_diagonal.dot(&recurrence) * 2.0 - &identity))
        + (&weighted - &ones.dot(&weighted_diagonal)) * 2.0;

    Ok(second_moments - &means * &means)
}
