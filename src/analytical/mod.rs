//! This module contains analytical solutions used to verify the results of flow simulators

mod head_model;

pub use head_model::*;
