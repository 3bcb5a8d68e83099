//! Problem description for a 1D bar/rod with one Dirichlet and one Neumann end.
//!
//! All physical scalars are uniform over the domain. The element-size
//! sequence is supplied by the caller; one degree of freedom is assembled per
//! entry.
//!
//! ## JSON layout
//!
//! ```text
//! {"E": 1.0, "A": 1.0, "u0": 273.15, "f": 1.0, "t": 100.0, "h": [1, 1, 1, 1, 1]}
//! ```
//!
//! The long field names (`elastic_modulus`, `area`, ...) are accepted as well.

use crate::error::{AssemblyError, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Inputs for one assembly run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDescription {
    /// Elastic modulus E (or conductivity for heat problems)
    #[serde(alias = "E")]
    pub elastic_modulus: f64,
    /// Cross-sectional area A
    #[serde(alias = "A")]
    pub area: f64,
    /// Prescribed value u0 at the left boundary
    #[serde(alias = "u0")]
    pub dirichlet_value: f64,
    /// Distributed source f per unit volume
    #[serde(alias = "f")]
    pub source: f64,
    /// Traction/flux t at the right boundary
    #[serde(alias = "t")]
    pub traction: f64,
    /// Element sizes h, one per degree of freedom
    #[serde(alias = "h")]
    pub element_sizes: Vec<f64>,
}

impl ProblemDescription {
    /// Create a new problem description
    pub fn new(
        elastic_modulus: f64,
        area: f64,
        dirichlet_value: f64,
        source: f64,
        traction: f64,
        element_sizes: Vec<f64>,
    ) -> Self {
        Self {
            elastic_modulus,
            area,
            dirichlet_value,
            source,
            traction,
            element_sizes,
        }
    }

    /// Number of degrees of freedom in the assembled system
    pub fn num_dofs(&self) -> usize {
        self.element_sizes.len()
    }

    /// Number of element contributions accumulated before boundary conditions
    pub fn num_elements(&self) -> usize {
        self.element_sizes.len().saturating_sub(1)
    }

    pub fn element_size(&self, element: usize) -> Option<f64> {
        self.element_sizes.get(element).copied()
    }

    /// Check that the problem can be assembled.
    ///
    /// Only the element sizes are enforced: the sequence must be non-empty and
    /// every size finite and strictly positive. Non-positive `E`/`A` or non-finite
    /// scalars are physically meaningless but arithmetically well defined, so
    /// they only produce a warning.
    pub fn validate(&self) -> Result<()> {
        if self.element_sizes.is_empty() {
            return Err(AssemblyError::invalid_input(
                "element size sequence is empty (no degrees of freedom to assemble)",
            ));
        }

        for (i, &h) in self.element_sizes.iter().enumerate() {
            if h.is_nan() {
                return Err(AssemblyError::invalid_input(format!(
                    "element {} size is not a number",
                    i
                )));
            }
            if !h.is_finite() {
                return Err(AssemblyError::invalid_input(format!(
                    "element {} has non-finite size {}",
                    i, h
                )));
            }
            if h <= 0.0 {
                return Err(AssemblyError::invalid_input(format!(
                    "element {} has non-positive size {}",
                    i, h
                )));
            }
        }

        if self.elastic_modulus <= 0.0 || self.area <= 0.0 {
            warn!(
                "non-physical material: E = {}, A = {} (assembling anyway)",
                self.elastic_modulus, self.area
            );
        }

        let scalars = [
            ("E", self.elastic_modulus),
            ("A", self.area),
            ("u0", self.dirichlet_value),
            ("f", self.source),
            ("t", self.traction),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                warn!("{} is not finite ({}); results will not be finite", name, value);
            }
        }

        Ok(())
    }
}
