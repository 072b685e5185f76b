//! Multilinear interpolation on N-dimensional rectilinear grids, and its adjoint.
//!
//! The two-dimensional case is also available as [`crate::bilinear`],
//! which gives the same results with fixed-size corner weights.

pub mod rectilinear;

pub use rectilinear::{adjoint, adjoint_alloc, interpn, interpn_alloc, MAXDIMS};
