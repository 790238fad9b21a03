//! Makes available common structures needed to compute and verify analytical solutions
//!
//! You may write `use pmverif::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::HeadModel;
pub use crate::base::{FilePath, ParamHead, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR, PARAM_HEAD_NAMES};
pub use crate::io::{ParameterSource, TagPathDocument, XmlParameterList};
pub use crate::util::{compare_head, plot_head, HeadObservations};
pub use crate::StrError;
