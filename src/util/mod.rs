//! Contains utility functions for plotting and verifying results

mod compare_head;
mod head_observations;
mod plot_head;

pub use compare_head::*;
pub use head_observations::*;
pub use plot_head::*;
