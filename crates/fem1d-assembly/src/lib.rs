//! Global system assembly for one-dimensional linear finite elements.
//!
//! A chain of two-node bar elements with uniform material (E, A) and a
//! uniform source f is assembled into a dense stiffness matrix K and load
//! vector F. A Dirichlet value is folded into the first row and a Neumann
//! traction into the last load entry. Solving K u = F is left to the caller.

pub mod assembly;
pub mod boundary_conditions;
pub mod elements;
pub mod error;
pub mod export;
pub mod problem;

pub use assembly::GlobalSystem;
pub use boundary_conditions::{BoundaryConditions, DirichletBC, NeumannBC};
pub use elements::LinearBar;
pub use error::{AssemblyError, Result};
pub use export::{LinearSystemData, SparseTripletsF64};
pub use problem::ProblemDescription;

/// Assemble `(K, F)` for a problem description.
///
/// Shorthand for [`GlobalSystem::assemble`] followed by
/// [`GlobalSystem::into_parts`].
pub fn assemble(
    problem: &ProblemDescription,
) -> Result<(nalgebra::DMatrix<f64>, nalgebra::DVector<f64>)> {
    GlobalSystem::assemble(problem).map(GlobalSystem::into_parts)
}

/// The uniform five-DOF heat-rod scenario used as the regression fixture:
/// E = A = f = 1, u0 = 273.15, t = 100, h = [1, 1, 1, 1, 1].
pub fn reference_problem() -> ProblemDescription {
    ProblemDescription::new(1.0, 1.0, 273.15, 1.0, 100.0, vec![1.0; 5])
}
