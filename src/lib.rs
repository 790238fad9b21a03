//! Analytical solutions for verifying porous media flow simulators
//!
//! The main structure is [analytical::HeadModel] which computes the exact hydraulic head
//! of the steady one-dimensional flow through two materials in parallel.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod io;
pub mod prelude;
pub mod util;
