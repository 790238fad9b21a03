use crate::base::ParamHead;
use crate::io::{ParameterSource, TagPathDocument, XmlParameterList};
use crate::StrError;
use plotpy::linspace;
use russell_lab::{Matrix, Vector};
use std::ffi::OsStr;
use std::path::Path;

/// Solution of the steady flow through two materials in parallel (1D)
///
/// Solves the system:
///
/// ```text
/// div(ρ/μ k grad(p + ρ g z)) = 0   on   [x_0, x_1] × [z_0, z_1]
/// ```
///
/// with the boundary conditions:
///
/// ```text
/// h(x_0, z) = h_0
/// h(x_1, z) = h_L
/// ```
///
/// The two materials are arranged in parallel (one above the other), thus the flow along x
/// produces the linear head profile:
///
/// ```text
/// h(x) = (h_L - h_0) (x - x_0) / (x_1 - x_0) + h_0
/// ```
///
/// **Note:** The permeabilities and fluid properties do not appear in the head; they are
/// only needed to compute the hydraulic conductivities and the pressure.
#[derive(Clone, Debug)]
pub struct HeadModel {
    /// Holds the parameters
    param: ParamHead,

    /// Holds the domain length L = x_1 - x_0
    ll: f64,
}

impl HeadModel {
    /// Allocates a new instance
    pub fn new(param: &ParamHead) -> Result<Self, StrError> {
        let ll = param.x_1 - param.x_0;
        if ll == 0.0 {
            return Err("x_1 must be different than x_0");
        }
        if ll < 0.0 {
            return Err("x_1 must be greater than x_0");
        }
        log::debug!(
            "head model: x ∈ [{}, {}], h_0 = {}, h_L = {}",
            param.x_0,
            param.x_1,
            param.h_0,
            param.h_l
        );
        Ok(HeadModel { param: *param, ll })
    }

    /// Allocates a new instance with the default parameters
    pub fn new_default() -> Result<Self, StrError> {
        HeadModel::new(&ParamHead::default())
    }

    /// Allocates a new instance with parameters from a source (e.g., a map or a document)
    pub fn from_source(source: &dyn ParameterSource) -> Result<Self, StrError> {
        let param = ParamHead::from_source(source)?;
        HeadModel::new(&param)
    }

    /// Allocates a new instance with parameters from a simulation input document
    ///
    /// Files with the `.xml` extension are read as XML parameter lists; other files
    /// are read as JSON documents with the same tag paths.
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn from_document<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path);
        if path.extension() == Some(OsStr::new("xml")) {
            let list = XmlParameterList::read_xml(path)?;
            HeadModel::from_source(&list)
        } else {
            let document = TagPathDocument::read_json(path)?;
            HeadModel::from_source(&document)
        }
    }

    /// Returns the parameters
    pub fn param(&self) -> &ParamHead {
        &self.param
    }

    /// Returns the domain length L = x_1 - x_0
    pub fn length(&self) -> f64 {
        self.ll
    }

    /// Calculates the hydraulic head at a single point
    ///
    /// **Note:** `z` is ignored.
    pub fn head_at(&self, x: f64, _z: f64) -> f64 {
        let p = &self.param;
        (p.h_l - p.h_0) * (x - p.x_0) / self.ll + p.h_0
    }

    /// Calculates the hydraulic head at all points
    ///
    /// # Input
    ///
    /// * `coords` -- (npoint, 2) matrix with the (x, z) coordinates
    ///
    /// # Output
    ///
    /// Returns a vector with npoint head values.
    pub fn head(&self, coords: &Matrix) -> Result<Vector, StrError> {
        let (npoint, ncol) = coords.dims();
        if ncol != 2 {
            return Err("coords must have two columns (x, z)");
        }
        let mut hh = Vector::new(npoint);
        for i in 0..npoint {
            hh[i] = self.head_at(coords.get(i, 0), coords.get(i, 1));
        }
        Ok(hh)
    }

    /// Calculates the liquid pressure at all points
    ///
    /// ```text
    /// p = p_atm + ρ g (h - z)
    /// ```
    ///
    /// # Input
    ///
    /// * `coords` -- (npoint, 2) matrix with the (x, z) coordinates
    pub fn pressure(&self, coords: &Matrix) -> Result<Vector, StrError> {
        let p = &self.param;
        let hh = self.head(coords)?;
        let mut pp = Vector::new(hh.dim());
        for i in 0..hh.dim() {
            pp[i] = p.p_atm + p.rho * p.g * (hh[i] - coords.get(i, 1));
        }
        Ok(pp)
    }

    /// Returns the hydraulic conductivities of the front and back materials
    ///
    /// ```text
    /// Kᵢ = ρ g kᵢ / μ
    /// ```
    ///
    /// Returns `(kk1, kk2)`
    pub fn conductivities(&self) -> (f64, f64) {
        let p = &self.param;
        let kk1 = p.rho * p.g * p.k1 / p.mu;
        let kk2 = p.rho * p.g * p.k2 / p.mu;
        (kk1, kk2)
    }

    /// Calculates the head along a horizontal line
    ///
    /// # Input
    ///
    /// * `np` -- number of points (evenly spaced from x_0 to x_1)
    /// * `z` -- elevation of the horizontal line
    ///
    /// # Output
    ///
    /// Returns `(xx, hh)` where:
    ///
    /// * `xx` -- x coordinates
    /// * `hh` -- hydraulic heads
    pub fn sample(&self, np: usize, z: f64) -> (Vec<f64>, Vec<f64>) {
        let xx = linspace(self.param.x_0, self.param.x_1, np);
        let hh: Vec<_> = xx.iter().map(|x| self.head_at(*x, z)).collect();
        (xx, hh)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
