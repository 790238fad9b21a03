use crate::StrError;
use plotpy::{Curve, Plot};
use std::ffi::OsStr;

/// Draws head curves along x and saves the figure
///
/// # Input
///
/// * `xx` -- the x coordinates shared by all curves
/// * `curves` -- pairs of (label, head values) with the same length as `xx`
/// * `full_path` -- the figure path (e.g., with .svg extension); may be a String, &str, or Path
pub fn plot_head<P>(xx: &[f64], curves: &[(&str, &[f64])], full_path: &P) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    if curves.is_empty() {
        return Err("there must be at least one curve");
    }
    let mut plot = Plot::new();
    for (label, hh) in curves {
        if hh.len() != xx.len() {
            return Err("the number of head values must equal the number of x coordinates");
        }
        let mut curve = Curve::new();
        curve.set_label(label).set_marker_style("o").draw(&xx, hh);
        plot.add(&curve);
    }
    plot.grid_labels_legend("x-coordinate [m]", "Head [m]");
    plot.save(full_path)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::plot_head;
    use crate::base::FilePath;

    #[test]
    fn plot_head_captures_errors() {
        let path = FilePath::test_svg("plot_head_errors");
        let xx = [0.0, 1.0];
        assert_eq!(
            plot_head(&xx, &[], &path).err(),
            Some("there must be at least one curve")
        );
        let hh = [1.0];
        assert_eq!(
            plot_head(&xx, &[("wrong", &hh[..])], &path).err(),
            Some("the number of head values must equal the number of x coordinates")
        );
    }
}
