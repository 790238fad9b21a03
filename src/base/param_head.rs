use super::{ATMOSPHERIC_PRESSURE, STANDARD_GRAVITY, WATER_DENSITY, WATER_VISCOSITY};
use crate::io::ParameterSource;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the logical names of all parameters in [ParamHead]
pub const PARAM_HEAD_NAMES: [&str; 12] = [
    "x_0", "x_1", "z_0", "z_1", "k1", "k2", "rho", "mu", "h_0", "h_L", "g", "p_atm",
];

/// Holds parameters for the steady flow through two materials in parallel
///
/// The domain is the rectangle `[x_0, x_1] × [z_0, z_1]` and the flow occurs along x
/// with fixed hydraulic heads on the left and right sides.
///
/// ```text
///  z_1  +-----------------------------+
///       |        back material (k2)   |
///  h_0  |-----------------------------|  h_L
///       |       front material (k1)   |
///  z_0  +-----------------------------+
///      x_0                           x_1
/// ```
///
/// # Default values
///
/// | parameter  | default      |
/// |------------|--------------|
/// | `x_0, x_1` | 0, 100       |
/// | `z_0, z_1` | 0, 10        |
/// | `k1`       | 1.1847e-12   |
/// | `k2`       | 1.1847e-11   |
/// | `rho`      | 998.2        |
/// | `mu`       | 1.002e-3     |
/// | `h_0, h_L` | 20.0, 19.0   |
/// | `g`        | 9.80665      |
/// | `p_atm`    | 101325.0     |
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamHead {
    /// Left side of the domain (flow direction) [m]
    pub x_0: f64,

    /// Right side of the domain (flow direction) [m]
    pub x_1: f64,

    /// Bottom of the domain [m]
    pub z_0: f64,

    /// Top of the domain [m]
    pub z_1: f64,

    /// Intrinsic permeability of the front material [m²]
    pub k1: f64,

    /// Intrinsic permeability of the back material [m²]
    pub k2: f64,

    /// Liquid density [kg/m³]
    pub rho: f64,

    /// Liquid viscosity [kg/(m·s)]
    pub mu: f64,

    /// Hydraulic head at x_0 [m]
    pub h_0: f64,

    /// Hydraulic head at x_1 [m]
    #[serde(rename = "h_L")]
    pub h_l: f64,

    /// Gravity acceleration [m/s²]
    pub g: f64,

    /// Atmospheric pressure [Pa]
    pub p_atm: f64,
}

impl Default for ParamHead {
    fn default() -> Self {
        ParamHead {
            x_0: 0.0,
            x_1: 100.0,
            z_0: 0.0,
            z_1: 10.0,
            k1: 1.1847e-12,
            k2: 1.1847e-11,
            rho: WATER_DENSITY,
            mu: WATER_VISCOSITY,
            h_0: 20.0,
            h_l: 19.0,
            g: STANDARD_GRAVITY,
            p_atm: ATMOSPHERIC_PRESSURE,
        }
    }
}

impl ParamHead {
    /// Returns a mutable reference to the value associated with a logical name
    fn value_mut(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "x_0" => Some(&mut self.x_0),
            "x_1" => Some(&mut self.x_1),
            "z_0" => Some(&mut self.z_0),
            "z_1" => Some(&mut self.z_1),
            "k1" => Some(&mut self.k1),
            "k2" => Some(&mut self.k2),
            "rho" => Some(&mut self.rho),
            "mu" => Some(&mut self.mu),
            "h_0" => Some(&mut self.h_0),
            "h_L" => Some(&mut self.h_l),
            "g" => Some(&mut self.g),
            "p_atm" => Some(&mut self.p_atm),
            _ => None,
        }
    }

    /// Returns the value associated with a logical name (e.g., "h_L")
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "x_0" => Some(self.x_0),
            "x_1" => Some(self.x_1),
            "z_0" => Some(self.z_0),
            "z_1" => Some(self.z_1),
            "k1" => Some(self.k1),
            "k2" => Some(self.k2),
            "rho" => Some(self.rho),
            "mu" => Some(self.mu),
            "h_0" => Some(self.h_0),
            "h_L" => Some(self.h_l),
            "g" => Some(self.g),
            "p_atm" => Some(self.p_atm),
            _ => None,
        }
    }

    /// Allocates a new instance by overriding the default values
    ///
    /// Keys absent from `values` receive the default value. Unknown keys are ignored.
    /// No range checking is performed here; see [crate::analytical::HeadModel::new].
    pub fn from_map(values: &HashMap<String, f64>) -> Self {
        let mut param = ParamHead::default();
        for (name, value) in values {
            match param.value_mut(name) {
                Some(v) => *v = *value,
                None => log::warn!("ignoring unknown parameter '{}'", name),
            }
        }
        param
    }

    /// Allocates a new instance by querying a parameter source
    ///
    /// Each logical name in [PARAM_HEAD_NAMES] is requested from the source. Names for which
    /// the source has no value receive the default value. Errors from the source are propagated.
    pub fn from_source(source: &dyn ParameterSource) -> Result<Self, StrError> {
        let mut param = ParamHead::default();
        for name in PARAM_HEAD_NAMES {
            if let Some(value) = source.get(name)? {
                if let Some(v) = param.value_mut(name) {
                    *v = value;
                }
            }
        }
        Ok(param)
    }

    /// Reads a JSON file containing the parameters
    ///
    /// Missing keys receive the default values.
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let param = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(param)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
