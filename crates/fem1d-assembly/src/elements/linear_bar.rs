//! 2-node linear bar element with one DOF per node.
//!
//! Element `i` joins global DOFs `i` and `i + 1` and has length `h`.
//!
//! ## Element Formulation
//!
//! Local stiffness matrix:
//! ```text
//! k_local[a][b] = (4*E*A/h) * dN[a] * dN[b]
//!               = (E*A/h) * [ 1  -1]
//!                           [-1   1]
//! ```
//!
//! Local load vector for a uniform source f:
//! ```text
//! f_local[a] = f*A*h * ∫N[a]dξ
//! ```

use crate::elements::shape::{DERIVATIVES, INTEGRALS, JACOBIAN_FACTOR};
use nalgebra::{Matrix2, Vector2};

/// 2-node linear bar element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBar {
    /// Element index (also the global DOF of its first node)
    pub index: usize,
    /// Element length h
    pub length: f64,
}

impl LinearBar {
    /// Create a new bar element
    pub fn new(index: usize, length: f64) -> Self {
        Self { index, length }
    }

    /// Scalar stiffness prefactor 4*E*A/h
    pub fn stiffness_factor(&self, elastic_modulus: f64, area: f64) -> f64 {
        JACOBIAN_FACTOR * elastic_modulus * area / self.length
    }

    /// Compute local stiffness matrix (2×2)
    pub fn local_stiffness(&self, elastic_modulus: f64, area: f64) -> Matrix2<f64> {
        let k = self.stiffness_factor(elastic_modulus, area);
        Matrix2::from_fn(|a, b| k * DERIVATIVES[a] * DERIVATIVES[b])
    }

    /// Compute local load vector (2×1) for a uniform source term
    pub fn local_load(&self, source: f64, area: f64) -> Vector2<f64> {
        let f = source * area * self.length;
        Vector2::from_fn(|a, _| f * INTEGRALS[a])
    }

    /// Global DOF indices of the element nodes
    pub fn global_dofs(&self) -> [usize; 2] {
        [self.index, self.index + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_bar_element() {
        let elem = LinearBar::new(3, 0.25);
        assert_eq!(elem.index, 3);
        assert_eq!(elem.length, 0.25);
        assert_eq!(elem.global_dofs(), [3, 4]);
    }

    #[test]
    fn local_stiffness_matrix() {
        // E = 210000, A = 0.01, h = 2  =>  E*A/h = 1050
        let elem = LinearBar::new(0, 2.0);
        let k = elem.local_stiffness(210000.0, 0.01);
        let expected_k = 1050.0;

        assert!((k[(0, 0)] - expected_k).abs() < 1e-6);
        assert!((k[(0, 1)] + expected_k).abs() < 1e-6);
        assert!((k[(1, 0)] + expected_k).abs() < 1e-6);
        assert!((k[(1, 1)] - expected_k).abs() < 1e-6);
    }

    #[test]
    fn local_stiffness_symmetry() {
        let elem = LinearBar::new(0, 0.37);
        let k = elem.local_stiffness(45.0, 0.01);
        assert_eq!(k[(0, 1)], k[(1, 0)]);
    }

    #[test]
    fn local_stiffness_equilibrium() {
        // Rigid-body translation produces no force
        let elem = LinearBar::new(0, 1.3);
        let k = elem.local_stiffness(7.0, 3.0);
        for i in 0..2 {
            let row_sum: f64 = (0..2).map(|j| k[(i, j)]).sum();
            assert!(row_sum.abs() < 1e-12, "Row {} sum = {}", i, row_sum);
        }
    }

    #[test]
    fn unit_element_stiffness() {
        let k = LinearBar::new(0, 1.0).local_stiffness(1.0, 1.0);
        assert_eq!(k, Matrix2::new(1.0, -1.0, -1.0, 1.0));
    }

    #[test]
    fn local_load_vector() {
        // f*A*h = 2 * 0.5 * 3 = 3 on each node
        let f = LinearBar::new(0, 3.0).local_load(2.0, 0.5);
        assert_eq!(f, Vector2::new(3.0, 3.0));
    }

    #[test]
    fn stiffness_scales_inversely_with_length() {
        let short = LinearBar::new(0, 0.5).local_stiffness(1.0, 1.0);
        let long = LinearBar::new(0, 1.0).local_stiffness(1.0, 1.0);
        assert_eq!(short, long * 2.0);
    }
}
