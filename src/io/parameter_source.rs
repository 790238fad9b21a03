use crate::StrError;
use std::collections::HashMap;

/// Defines a source of parameters addressed by logical name (e.g., "h_0", "rho")
///
/// The logical names are listed in [crate::base::PARAM_HEAD_NAMES].
pub trait ParameterSource {
    /// Returns the value of a parameter
    ///
    /// Returns `Ok(None)` if the source does not provide the parameter, so the default value
    /// should be used. Returns an error if the source should provide the parameter but cannot.
    fn get(&self, name: &str) -> Result<Option<f64>, StrError>;
}

impl ParameterSource for HashMap<String, f64> {
    fn get(&self, name: &str) -> Result<Option<f64>, StrError> {
        Ok(HashMap::get(self, name).copied())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParameterSource;
    use crate::StrError;
    use std::collections::HashMap;

    #[test]
    fn map_source_works() -> Result<(), StrError> {
        let values = HashMap::from([("h_0".to_string(), 10.0)]);
        let source: &dyn ParameterSource = &values;
        assert_eq!(source.get("h_0")?, Some(10.0));
        assert_eq!(source.get("h_L")?, None);
        Ok(())
    }
}
