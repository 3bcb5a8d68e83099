//! Linear shape functions of the two-node element on the reference interval ξ ∈ [-1, 1].
//!
//! ```text
//! N1(ξ) = (1 - ξ) / 2      dN1/dξ = -1/2
//! N2(ξ) = (1 + ξ) / 2      dN2/dξ = +1/2
//! ```

/// ∫ N_a dξ over [-1, 1] for a = 1, 2
pub const INTEGRALS: [f64; 2] = [1.0, 1.0];

/// dN_a/dξ for a = 1, 2 (constant over the element)
pub const DERIVATIVES: [f64; 2] = [-0.5, 0.5];

/// Reference-to-physical scaling of the stiffness term, (dξ/dx)² · h = 4 / h.
pub const JACOBIAN_FACTOR: f64 = 4.0;

/// Shape function N1
pub fn n1(xi: f64) -> f64 {
    (1.0 - xi) / 2.0
}

/// Shape function N2
pub fn n2(xi: f64) -> f64 {
    (1.0 + xi) / 2.0
}

/// dN1/dξ; the argument is accepted for symmetry with `n1`
pub fn dn1(_xi: f64) -> f64 {
    DERIVATIVES[0]
}

/// dN2/dξ
pub fn dn2(_xi: f64) -> f64 {
    DERIVATIVES[1]
}

/// Both shape functions evaluated at ξ
pub fn evaluate(xi: f64) -> [f64; 2] {
    [n1(xi), n2(xi)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n1_values() {
        assert_eq!(n1(-1.0), 1.0);
        assert_eq!(n1(0.0), 0.5);
        assert_eq!(n1(1.0), 0.0);
    }

    #[test]
    fn n2_values() {
        assert_eq!(n2(-1.0), 0.0);
        assert_eq!(n2(0.0), 0.5);
        assert_eq!(n2(1.0), 1.0);
    }

    #[test]
    fn derivatives_are_constant() {
        for xi in [-1.0, -0.3, 0.0, 0.7, 1.0] {
            assert_eq!(dn1(xi), -0.5);
            assert_eq!(dn2(xi), 0.5);
        }
    }

    #[test]
    fn partition_of_unity() {
        for xi in [-1.0, -0.5, 0.0, 0.25, 1.0] {
            let [a, b] = evaluate(xi);
            assert!((a + b - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn kronecker_delta_at_nodes() {
        assert_eq!(evaluate(-1.0), [1.0, 0.0]);
        assert_eq!(evaluate(1.0), [0.0, 1.0]);
    }

    #[test]
    fn integrals_match_midpoint_rule() {
        // Midpoint rule is exact for linear functions on [-1, 1] (weight 2)
        assert_eq!(2.0 * n1(0.0), INTEGRALS[0]);
        assert_eq!(2.0 * n2(0.0), INTEGRALS[1]);
    }

    #[test]
    fn derivatives_match_finite_difference() {
        let d = 1e-6;
        let fd1 = (n1(d) - n1(-d)) / (2.0 * d);
        let fd2 = (n2(d) - n2(-d)) / (2.0 * d);
        assert!((fd1 - DERIVATIVES[0]).abs() < 1e-9);
        assert!((fd2 - DERIVATIVES[1]).abs() < 1e-9);
    }
}
