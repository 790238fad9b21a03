use crate::analytical::HeadModel;
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds head values computed by a numerical simulator at some points
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeadObservations {
    /// Holds the (x, z) coordinates of the points
    pub coords: Vec<[f64; 2]>,

    /// Holds the head values at the points
    pub head: Vec<f64>,
}

impl HeadObservations {
    /// Allocates a new instance with the exact solution at the given points
    pub fn from_model(model: &HeadModel, coords: &[[f64; 2]]) -> Self {
        HeadObservations {
            coords: coords.to_vec(),
            head: coords.iter().map(|c| model.head_at(c[0], c[1])).collect(),
        }
    }

    /// Returns the coordinates as a (npoint, 2) matrix
    pub fn coords_matrix(&self) -> Matrix {
        let mut coords = Matrix::new(self.coords.len(), 2);
        for (i, c) in self.coords.iter().enumerate() {
            coords.set(i, 0, c[0]);
            coords.set(i, 1, c[1]);
        }
        coords
    }

    /// Reads a JSON file containing the observations
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
        let data = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(data)
    }

    /// Writes a JSON file with the observations
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
