//! Element library for 1D bar problems.

pub mod linear_bar;
pub mod shape;

pub use linear_bar::LinearBar;
pub use shape::{DERIVATIVES, INTEGRALS, JACOBIAN_FACTOR};
