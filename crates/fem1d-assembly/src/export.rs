//! Hand-off of the assembled system to an external linear solver.
//!
//! The dense K is exported as COO triplets (non-zero entries only), which
//! any sparse backend can consume, or directly as an `nalgebra_sparse`
//! CSR matrix.

use crate::assembly::GlobalSystem;
use nalgebra::DVector;
use nalgebra_sparse::{CooMatrix, CsrMatrix};

/// Sparse matrix in COO (coordinate/triplet) format.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseTripletsF64 {
    pub nrows: usize,
    pub ncols: usize,
    pub row_indices: Vec<usize>,
    pub col_indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl SparseTripletsF64 {
    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Convert to CSR. Fails only if an index is out of bounds.
    pub fn to_csr(&self) -> Result<CsrMatrix<f64>, String> {
        let coo = CooMatrix::try_from_triplets(
            self.nrows,
            self.ncols,
            self.row_indices.clone(),
            self.col_indices.clone(),
            self.values.clone(),
        )
        .map_err(|err| format!("Invalid triplets: {}", err))?;
        Ok(CsrMatrix::from(&coo))
    }
}

/// A linear system ready for solving: K * u = F.
///
/// Boundary conditions are already folded into K and F.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystemData {
    /// Stiffness matrix in COO triplet format
    pub stiffness: SparseTripletsF64,
    /// Force vector (dense)
    pub force: DVector<f64>,
    /// Total number of degrees of freedom
    pub num_dofs: usize,
}

impl GlobalSystem {
    /// Export the assembled system as backend-agnostic `LinearSystemData`.
    ///
    /// Entries that are exactly zero are skipped, so a tridiagonal K yields
    /// at most 3n - 2 triplets.
    pub fn to_linear_system_data(&self) -> LinearSystemData {
        let n = self.num_dofs;
        let mut rows = Vec::new();
        let mut cols = Vec::new();
        let mut vals = Vec::new();

        for i in 0..n {
            for j in 0..n {
                let v = self.stiffness[(i, j)];
                if v != 0.0 {
                    rows.push(i);
                    cols.push(j);
                    vals.push(v);
                }
            }
        }

        LinearSystemData {
            stiffness: SparseTripletsF64 {
                nrows: n,
                ncols: n,
                row_indices: rows,
                col_indices: cols,
                values: vals,
            },
            force: self.force.clone(),
            num_dofs: n,
        }
    }
}
