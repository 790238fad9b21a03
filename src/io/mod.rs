//! Implements the sources of parameters: maps, JSON documents, and XML parameter lists

mod parameter_source;
mod tag_path_document;
mod tag_paths;
mod xml_parameter_list;
pub use crate::io::parameter_source::*;
pub use crate::io::tag_path_document::*;
pub use crate::io::tag_paths::*;
pub use crate::io::xml_parameter_list::*;
