//! Global matrix assembly for the 1D bar system.
//!
//! Assembles element contributions into the global system:
//! - K: Global stiffness matrix (dense, n × n)
//! - F: Global force vector (n)
//!
//! ## Assembly Process
//!
//! 1. Validate the problem (non-empty mesh, strictly positive element sizes)
//! 2. Allocate zero K and F with one DOF per element-size entry
//! 3. Loop over the n-1 elements joining DOFs i and i+1:
//!    - Compute element stiffness k_e and load f_e
//!    - Scatter-add them into rows/columns i, i+1
//! 4. Fold the Dirichlet condition into row 0
//! 5. Add the Neumann traction to the last force entry
//!
//! After element accumulation K is symmetric and tridiagonal. The boundary
//! conditions only touch `K[0][0]`, `F[0]` and `F[n-1]`.

use crate::boundary_conditions::BoundaryConditions;
use crate::elements::LinearBar;
use crate::error::{AssemblyError, Result};
use crate::problem::ProblemDescription;
use log::{debug, info, trace};
use nalgebra::{DMatrix, DVector, Matrix2, Vector2};
use rayon::prelude::*;

/// Global finite element system
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSystem {
    /// Global stiffness matrix
    pub stiffness: DMatrix<f64>,
    /// Global force vector
    pub force: DVector<f64>,
    /// Number of degrees of freedom
    pub num_dofs: usize,
    /// Set once the Dirichlet/Neumann rows have been folded in
    boundary_conditions_applied: bool,
}

impl GlobalSystem {
    /// Create a new empty global system
    pub fn new(num_dofs: usize) -> Self {
        Self {
            stiffness: DMatrix::zeros(num_dofs, num_dofs),
            force: DVector::zeros(num_dofs),
            num_dofs,
            boundary_conditions_applied: false,
        }
    }

    /// Rebuild a system from a stored K and F.
    ///
    /// # Errors
    /// Returns `AssemblyError::InvalidInput` if K is not square or F does not
    /// match its size.
    pub fn from_parts(
        stiffness: DMatrix<f64>,
        force: DVector<f64>,
        boundary_conditions_applied: bool,
    ) -> Result<Self> {
        let num_dofs = stiffness.nrows();
        if stiffness.ncols() != num_dofs || force.len() != num_dofs {
            return Err(AssemblyError::invalid_input(format!(
                "stiffness is {}x{} but force has {} entries",
                stiffness.nrows(),
                stiffness.ncols(),
                force.len()
            )));
        }
        Ok(Self {
            stiffness,
            force,
            num_dofs,
            boundary_conditions_applied,
        })
    }

    /// True once [`GlobalSystem::apply_boundary_conditions`] has run
    pub fn boundary_conditions_applied(&self) -> bool {
        self.boundary_conditions_applied
    }

    /// Assemble the complete system: element contributions plus both
    /// boundary conditions.
    ///
    /// # Errors
    /// Returns `AssemblyError::InvalidInput` if the element-size sequence is
    /// empty or contains a non-positive value. Nothing is allocated in that case.
    pub fn assemble(problem: &ProblemDescription) -> Result<Self> {
        let mut system = Self::assemble_elements(problem)?;
        system.apply_boundary_conditions(problem)?;
        info!("Assembled 1D system with {} DOFs", system.num_dofs);
        Ok(system)
    }

    /// Same result as [`GlobalSystem::assemble`], with the element blocks
    /// computed on the rayon thread pool.
    ///
    /// Local blocks are collected in element order and scattered serially,
    /// so no two threads ever write the same cell and the result is
    /// bit-identical to the serial path.
    pub fn assemble_parallel(problem: &ProblemDescription) -> Result<Self> {
        problem.validate()?;

        let n = problem.num_dofs();
        let (e, a, f) = (problem.elastic_modulus, problem.area, problem.source);

        let sizes = &problem.element_sizes[..problem.num_elements()];

        let contributions: Vec<(LinearBar, Matrix2<f64>, Vector2<f64>)> = sizes
            .par_iter()
            .enumerate()
            .map(|(i, &h)| {
                let elem = LinearBar::new(i, h);
                (elem, elem.local_stiffness(e, a), elem.local_load(f, a))
            })
            .collect();

        debug!(
            "Computed {} element blocks in parallel, scattering into {} DOFs",
            contributions.len(),
            n
        );

        let mut system = Self::new(n);
        for (elem, k_e, f_e) in &contributions {
            system.scatter(elem, k_e, f_e);
        }

        system.apply_boundary_conditions(problem)?;
        info!("Assembled 1D system with {} DOFs (parallel)", system.num_dofs);
        Ok(system)
    }

    /// Run the element accumulation pass only (no boundary conditions).
    ///
    /// The returned stiffness matrix is symmetric and tridiagonal.
    pub fn assemble_elements(problem: &ProblemDescription) -> Result<Self> {
        problem.validate()?;

        let mut system = Self::new(problem.num_dofs());
        debug!(
            "Assembling {} elements into {} DOFs",
            problem.num_elements(),
            system.num_dofs
        );

        for (i, &h) in problem.element_sizes[..problem.num_elements()]
            .iter()
            .enumerate()
        {
            let elem = LinearBar::new(i, h);
            let k_e = elem.local_stiffness(problem.elastic_modulus, problem.area);
            let f_e = elem.local_load(problem.source, problem.area);
            system.scatter(&elem, &k_e, &f_e);
        }

        Ok(system)
    }

    /// Add element contributions to the global matrix and vector
    fn scatter(&mut self, elem: &LinearBar, k_e: &Matrix2<f64>, f_e: &Vector2<f64>) {
        let dofs = elem.global_dofs();
        trace!(
            "element {} (h = {}) -> DOFs {:?}",
            elem.index, elem.length, dofs
        );

        for (i_local, &i_global) in dofs.iter().enumerate() {
            for (j_local, &j_global) in dofs.iter().enumerate() {
                self.stiffness[(i_global, j_global)] += k_e[(i_local, j_local)];
            }
            self.force[i_global] += f_e[i_local];
        }
    }

    /// Apply the Dirichlet (left) then the Neumann (right) condition.
    ///
    /// Must be called exactly once, after element accumulation. A second call
    /// is rejected and leaves K and F untouched.
    pub fn apply_boundary_conditions(&mut self, problem: &ProblemDescription) -> Result<()> {
        if self.boundary_conditions_applied {
            return Err(AssemblyError::invalid_input(
                "boundary conditions have already been applied to this system",
            ));
        }

        if self.num_dofs == 0 || self.num_dofs != problem.num_dofs() {
            return Err(AssemblyError::invalid_input(format!(
                "system has {} DOFs but problem has {}",
                self.num_dofs,
                problem.num_dofs()
            )));
        }

        let h0 = problem.element_sizes[0];
        let first = LinearBar::new(0, h0);
        let bcs = BoundaryConditions::from_problem(problem);

        bcs.dirichlet.apply(
            self,
            h0,
            first.stiffness_factor(problem.elastic_modulus, problem.area),
        )?;
        bcs.neumann.apply(self, problem.area)?;
        self.boundary_conditions_applied = true;

        Ok(())
    }

    /// Check K[i][j] == K[j][i] within `tolerance`
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        for i in 0..self.num_dofs {
            for j in (i + 1)..self.num_dofs {
                if (self.stiffness[(i, j)] - self.stiffness[(j, i)]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Largest |i - j| over the non-zero entries of K (0 for a diagonal matrix)
    pub fn bandwidth(&self) -> usize {
        let mut bandwidth = 0;
        for i in 0..self.num_dofs {
            for j in 0..self.num_dofs {
                if self.stiffness[(i, j)] != 0.0 {
                    bandwidth = bandwidth.max(i.abs_diff(j));
                }
            }
        }
        bandwidth
    }

    /// Check if the system is well-formed before handing it to a solver
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.stiffness.nrows() != self.num_dofs || self.stiffness.ncols() != self.num_dofs {
            return Err(format!(
                "Stiffness matrix is {}x{}, expected {}x{}",
                self.stiffness.nrows(),
                self.stiffness.ncols(),
                self.num_dofs,
                self.num_dofs
            ));
        }

        if self.force.len() != self.num_dofs {
            return Err(format!(
                "Force vector has {} entries, expected {}",
                self.force.len(),
                self.num_dofs
            ));
        }

        for i in 0..self.num_dofs {
            for j in 0..self.num_dofs {
                if !self.stiffness[(i, j)].is_finite() {
                    return Err(format!("Non-finite stiffness entry at ({}, {})", i, j));
                }
            }
            if !self.force[i].is_finite() {
                return Err(format!("Non-finite force entry at DOF {}", i));
            }
        }

        Ok(())
    }

    /// Consume the system, returning (K, F)
    pub fn into_parts(self) -> (DMatrix<f64>, DVector<f64>) {
        (self.stiffness, self.force)
    }
}
