//! Implements the base structures such as parameters and constants

mod constants;
mod filepath;
mod param_head;
pub use crate::base::constants::*;
pub use crate::base::filepath::*;
pub use crate::base::param_head::*;
