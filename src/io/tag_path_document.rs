use super::{tag_path, ParameterSource};
use crate::StrError;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Holds a hierarchical input document whose entries are addressed by tag paths
///
/// The document is a tree of named lists, e.g.:
///
/// ```text
/// {
///   "Main": {
///     "Boundary Conditions": {
///       "LeftBC": {
///         "BC: Hydrostatic": { "Water Table Height": [20.0] }
///       }
///     }
///   }
/// }
/// ```
///
/// where the value of the left boundary head is found at
/// `/Main/Boundary Conditions/LeftBC/BC: Hydrostatic/Water Table Height` (index 0).
///
/// Leaf values may be numbers, numeric strings, or arrays of these.
#[derive(Clone, Debug)]
pub struct TagPathDocument {
    root: Value,
}

impl TagPathDocument {
    /// Allocates a new instance from a JSON string
    pub fn from_json_str(text: &str) -> Result<Self, StrError> {
        let root: Value = serde_json::from_str(text).map_err(|_| "cannot parse JSON document")?;
        if !root.is_object() {
            return Err("the document root must be an object");
        }
        Ok(TagPathDocument { root })
    }

    /// Reads a JSON file containing the document
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let text = fs::read_to_string(&path).map_err(|_| "file not found")?;
        log::debug!("reading parameter document {:?}", path);
        TagPathDocument::from_json_str(&text)
    }

    /// Returns the node at a tag path such as "/Main/Mesh/Unstructured"
    fn node(&self, tag_path: &str) -> Option<&Value> {
        let mut node = &self.root;
        for tag in tag_path.split('/').filter(|t| !t.is_empty()) {
            node = node.as_object()?.get(tag)?;
        }
        Some(node)
    }

    /// Returns the numeric value at a tag path
    ///
    /// # Input
    ///
    /// * `tag_path` -- the path to the entry, e.g. "/Main/Phase Definitions/Aqueous/Phase Properties/Density: Uniform/Density"
    /// * `index` -- the component of an array entry or None for a scalar entry
    pub fn value_at(&self, tag_path: &str, index: Option<usize>) -> Result<f64, StrError> {
        let node = match self.node(tag_path) {
            Some(n) => n,
            None => {
                log::error!("tag path not found: {}", tag_path);
                return Err("tag path not found in document");
            }
        };
        let leaf = match (node, index) {
            (Value::Array(values), Some(i)) => match values.get(i) {
                Some(v) => v,
                None => {
                    log::error!("index {} is out of range at {}", i, tag_path);
                    return Err("array index is out of range");
                }
            },
            (Value::Array(..), None) => {
                log::error!("entry at {} is an array but no index was given", tag_path);
                return Err("entry is an array but no index was given");
            }
            (_, Some(..)) => {
                log::error!("entry at {} is not an array", tag_path);
                return Err("entry is not an array");
            }
            (v, None) => v,
        };
        let value = match leaf {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match value {
            Some(v) if v.is_finite() => Ok(v),
            _ => {
                log::error!("entry at {} is not a number", tag_path);
                Err("entry is not a number")
            }
        }
    }
}

impl ParameterSource for TagPathDocument {
    fn get(&self, name: &str) -> Result<Option<f64>, StrError> {
        match tag_path(name) {
            Some((path, index)) => Ok(Some(self.value_at(path, index)?)),
            None => Ok(None),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
