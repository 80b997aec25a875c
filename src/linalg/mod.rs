/// Default provider backed by nalgebra decompositions
pub mod backend;
/// Integer matrix powers over ndarray
pub mod power;
/// Linear-algebra provider trait and shape helpers
pub mod provider;

pub use backend::NalgebraBackend;
pub use provider::LinearAlgebra;
