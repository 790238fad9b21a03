use super::{tag_path, ParameterSource};
use crate::StrError;
use roxmltree::{Document, Node};
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Holds the parameters of a simulation input file written as nested XML parameter lists
///
/// The input file has the form:
///
/// ```text
/// <ParameterList name="Main">
///   <ParameterList name="Boundary Conditions">
///     <ParameterList name="LeftBC">
///       <ParameterList name="BC: Hydrostatic">
///         <Parameter name="Water Table Height" type="Array(double)" value="{20.0}"/>
///       </ParameterList>
///     </ParameterList>
///   </ParameterList>
/// </ParameterList>
/// ```
///
/// and the value of the left boundary head is found at
/// `/Main/Boundary Conditions/LeftBC/BC: Hydrostatic/Water Table Height` (index 0).
///
/// Array values are written as `{a, b, c}`.
#[derive(Clone, Debug)]
pub struct XmlParameterList {
    /// Maps the tag path of each parameter to its (unparsed) value
    values: HashMap<String, String>,

    /// Holds the tag paths of all parameter lists
    lists: HashSet<String>,
}

impl XmlParameterList {
    /// Allocates a new instance from an XML string
    pub fn from_xml_str(text: &str) -> Result<Self, StrError> {
        let doc = Document::parse(text).map_err(|_| "cannot parse XML document")?;
        let root = doc.root_element();
        if root.tag_name().name() != "ParameterList" {
            return Err("the document root must be a ParameterList");
        }
        let name = root.attribute("name").ok_or("ParameterList must have a name")?;
        let mut list = XmlParameterList {
            values: HashMap::new(),
            lists: HashSet::new(),
        };
        let prefix = format!("/{}", name);
        list.lists.insert(prefix.clone());
        list.collect(root, &prefix)?;
        Ok(list)
    }

    /// Reads an XML file containing the simulation input
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_xml<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let text = fs::read_to_string(&path).map_err(|_| "file not found")?;
        log::debug!("reading parameter list {:?}", path);
        XmlParameterList::from_xml_str(&text)
    }

    /// Registers the parameters and sublists of a parameter list
    fn collect(&mut self, node: Node, prefix: &str) -> Result<(), StrError> {
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "ParameterList" => {
                    let name = child.attribute("name").ok_or("ParameterList must have a name")?;
                    let path = format!("{}/{}", prefix, name);
                    self.lists.insert(path.clone());
                    self.collect(child, &path)?;
                }
                "Parameter" => {
                    let name = child.attribute("name").ok_or("Parameter must have a name")?;
                    let value = child.attribute("value").ok_or("Parameter must have a value")?;
                    self.values.insert(format!("{}/{}", prefix, name), value.to_string());
                }
                other => log::debug!("ignoring <{}> in {}", other, prefix),
            }
        }
        Ok(())
    }

    /// Returns the numeric value at a tag path
    ///
    /// # Input
    ///
    /// * `tag_path` -- the path to the parameter, e.g. "/Main/Phase Definitions/Aqueous/Phase Properties/Density: Uniform/Density"
    /// * `index` -- the component of an array parameter or None for a scalar parameter
    pub fn value_at(&self, tag_path: &str, index: Option<usize>) -> Result<f64, StrError> {
        let raw = match self.values.get(tag_path) {
            Some(v) => v.trim(),
            None => {
                if self.lists.contains(tag_path) {
                    log::error!("entry at {} is not a number", tag_path);
                    return Err("entry is not a number");
                }
                log::error!("tag path not found: {}", tag_path);
                return Err("tag path not found in document");
            }
        };
        let array = raw.starts_with('{') && raw.ends_with('}');
        let component = match index {
            Some(i) => {
                if !array {
                    log::error!("entry at {} is not an array", tag_path);
                    return Err("entry is not an array");
                }
                match raw[1..raw.len() - 1].split(',').nth(i) {
                    Some(c) => c,
                    None => {
                        log::error!("index {} is out of range at {}", i, tag_path);
                        return Err("array index is out of range");
                    }
                }
            }
            None => {
                if array {
                    log::error!("entry at {} is an array but no index was given", tag_path);
                    return Err("entry is an array but no index was given");
                }
                raw
            }
        };
        match component.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => {
                log::error!("entry at {} is not a number", tag_path);
                Err("entry is not a number")
            }
        }
    }
}

impl ParameterSource for XmlParameterList {
    fn get(&self, name: &str) -> Result<Option<f64>, StrError> {
        match tag_path(name) {
            Some((path, index)) => Ok(Some(self.value_at(path, index)?)),
            None => Ok(None),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::XmlParameterList;
    use crate::io::ParameterSource;
    use crate::StrError;

    const XML: &str = r#"<ParameterList name="Main">
  <Parameter name="Amanzi Input Format Version" type="string" value="1.2.2"/>
  <ParameterList name="Mesh">
    <ParameterList name="Unstructured">
      <ParameterList name="Generate Mesh">
        <ParameterList name="Uniform Structured">
          <Parameter name="Number of Cells" type="Array(int)" value="{200, 1, 20}"/>
          <Parameter name="Domain Low Corner" type="Array(double)" value="{0.0, 0.0, 0.0}"/>
          <Parameter name="Domain High Corner" type="Array(double)" value="{200.0, 1.0, 20.0}"/>
        </ParameterList>
      </ParameterList>
    </ParameterList>
  </ParameterList>
  <ParameterList name="Material Properties">
    <ParameterList name="Front Material">
      <ParameterList name="Intrinsic Permeability: Uniform">
        <Parameter name="Value" type="double" value="2.0e-12"/>
      </ParameterList>
    </ParameterList>
    <ParameterList name="Back Material">
      <ParameterList name="Intrinsic Permeability: Uniform">
        <Parameter name="Value" type="double" value="2.0e-11"/>
      </ParameterList>
    </ParameterList>
  </ParameterList>
  <ParameterList name="Phase Definitions">
    <ParameterList name="Aqueous">
      <ParameterList name="Phase Properties">
        <ParameterList name="Viscosity: Uniform">
          <Parameter name="Viscosity" type="double" value="1.0e-3"/>
        </ParameterList>
        <ParameterList name="Density: Uniform">
          <Parameter name="Density" type="double" value="1000.0"/>
        </ParameterList>
      </ParameterList>
    </ParameterList>
  </ParameterList>
  <ParameterList name="Boundary Conditions">
    <ParameterList name="LeftBC">
      <ParameterList name="BC: Hydrostatic">
        <Parameter name="Water Table Height" type="Array(double)" value="{30.0}"/>
      </ParameterList>
    </ParameterList>
    <ParameterList name="RightBC">
      <ParameterList name="BC: Hydrostatic">
        <Parameter name="Water Table Height" type="Array(double)" value="{25.0}"/>
      </ParameterList>
    </ParameterList>
  </ParameterList>
</ParameterList>"#;

    #[test]
    fn from_xml_str_captures_errors() {
        assert_eq!(
            XmlParameterList::from_xml_str("<ParameterList name=\"Main\">").err(),
            Some("cannot parse XML document")
        );
        assert_eq!(
            XmlParameterList::from_xml_str("<Main/>").err(),
            Some("the document root must be a ParameterList")
        );
        assert_eq!(
            XmlParameterList::from_xml_str("<ParameterList/>").err(),
            Some("ParameterList must have a name")
        );
        assert_eq!(
            XmlParameterList::from_xml_str("<ParameterList name=\"Main\"><Parameter value=\"1\"/></ParameterList>")
                .err(),
            Some("Parameter must have a name")
        );
        assert_eq!(
            XmlParameterList::from_xml_str("<ParameterList name=\"Main\"><Parameter name=\"g\"/></ParameterList>")
                .err(),
            Some("Parameter must have a value")
        );
    }

    #[test]
    fn read_xml_captures_errors() {
        assert_eq!(
            XmlParameterList::read_xml("/tmp/pmverif/__not_found__.xml").err(),
            Some("file not found")
        );
    }

    #[test]
    fn value_at_works() -> Result<(), StrError> {
        let list = XmlParameterList::from_xml_str(XML)?;
        let corner = "/Main/Mesh/Unstructured/Generate Mesh/Uniform Structured/Domain High Corner";
        assert_eq!(list.value_at(corner, Some(0))?, 200.0);
        assert_eq!(list.value_at(corner, Some(1))?, 1.0);
        assert_eq!(list.value_at(corner, Some(2))?, 20.0);
        let k2 = "/Main/Material Properties/Back Material/Intrinsic Permeability: Uniform/Value";
        assert_eq!(list.value_at(k2, None)?, 2.0e-11);
        Ok(())
    }

    #[test]
    fn value_at_captures_errors() -> Result<(), StrError> {
        let list = XmlParameterList::from_xml_str(XML)?;
        let corner = "/Main/Mesh/Unstructured/Generate Mesh/Uniform Structured/Domain High Corner";
        let rho = "/Main/Phase Definitions/Aqueous/Phase Properties/Density: Uniform/Density";
        assert_eq!(
            list.value_at("/Main/Mesh/Structured", None).err(),
            Some("tag path not found in document")
        );
        assert_eq!(list.value_at(corner, Some(3)).err(), Some("array index is out of range"));
        assert_eq!(
            list.value_at(corner, None).err(),
            Some("entry is an array but no index was given")
        );
        assert_eq!(list.value_at(rho, Some(0)).err(), Some("entry is not an array"));
        assert_eq!(list.value_at("/Main/Mesh", None).err(), Some("entry is not a number"));
        assert_eq!(
            list.value_at("/Main/Amanzi Input Format Version", None).err(),
            Some("entry is not a number")
        );
        Ok(())
    }

    #[test]
    fn parameter_source_works() -> Result<(), StrError> {
        let list = XmlParameterList::from_xml_str(XML)?;
        assert_eq!(list.get("x_0")?, Some(0.0));
        assert_eq!(list.get("z_0")?, Some(0.0));
        assert_eq!(list.get("x_1")?, Some(200.0));
        assert_eq!(list.get("z_1")?, Some(20.0));
        assert_eq!(list.get("k1")?, Some(2.0e-12));
        assert_eq!(list.get("k2")?, Some(2.0e-11));
        assert_eq!(list.get("mu")?, Some(1.0e-3));
        assert_eq!(list.get("rho")?, Some(1000.0));
        assert_eq!(list.get("h_0")?, Some(30.0));
        assert_eq!(list.get("h_L")?, Some(25.0));
        assert_eq!(list.get("g")?, None);
        assert_eq!(list.get("p_atm")?, None);
        Ok(())
    }

    #[test]
    fn parameter_source_propagates_missing_entries() -> Result<(), StrError> {
        let list = XmlParameterList::from_xml_str("<ParameterList name=\"Main\"/>")?;
        assert_eq!(list.get("x_0").err(), Some("tag path not found in document"));
        assert_eq!(list.get("g")?, None);
        Ok(())
    }
}
