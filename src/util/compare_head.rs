use super::HeadObservations;
use crate::analytical::HeadModel;
use crate::StrError;

/// Queries whether A failed to compare with B or not
///
/// Returns `(fail, diff)`
fn query_failed(a: f64, b: f64, tol: f64, verbose: usize) -> (bool, f64) {
    let diff = f64::abs(a - b);
    let fail = diff > tol;
    if verbose == 1 {
        let mrk = if fail { "❌" } else { "➖" };
        println!("{:15.6e}{}", diff, mrk);
    } else if verbose == 2 {
        let mrk = if fail { "❌" } else { "➖" };
        println!("{:9.2e} vs {:9.2e}({:9.2e}{})", a, b, diff, mrk);
    }
    (fail, diff)
}

/// Compares the head computed by a numerical simulator against the analytical solution
///
/// # Input
///
/// * `model` -- the analytical solution
/// * `observations` -- the numerical results
/// * `tol` -- the tolerance on the absolute difference of head values
/// * `verbose` -- Enables the verbose mode:
///   - 0 => no output
///   - 1 => shows error
///   - 2 => shows values and error
///
/// # Output
///
/// Returns `(all_good, diff_max)` where `all_good` indicates that all differences are
/// smaller than or equal to `tol` and `diff_max` is the largest difference
pub fn compare_head(
    model: &HeadModel,
    observations: &HeadObservations,
    tol: f64,
    verbose: usize,
) -> Result<(bool, f64), StrError> {
    let npoint = observations.coords.len();
    if npoint < 1 {
        return Err("there must be at least one observation");
    }
    if observations.head.len() != npoint {
        return Err("the number of head values must equal the number of points");
    }
    let exact = model.head(&observations.coords_matrix())?;
    if verbose > 0 {
        println!("ERROR ON HEAD");
    }
    let mut all_good = true;
    let mut diff_max = 0.0;
    for p in 0..npoint {
        let (fail, diff) = query_failed(observations.head[p], exact[p], tol, verbose);
        diff_max = f64::max(diff_max, diff);
        if fail {
            all_good = false;
        }
    }
    if verbose > 0 {
        println!("\ndiff_head_max = {:9.2e}\n", diff_max);
    }
    log::info!(
        "compared {} head values: max difference = {:e} (tol = {:e})",
        npoint,
        diff_max,
        tol
    );
    Ok((all_good, diff_max))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::compare_head;
    use crate::analytical::HeadModel;
    use crate::util::HeadObservations;
    use crate::StrError;
    use russell_lab::approx_eq;

    #[test]
    fn compare_head_captures_errors() -> Result<(), StrError> {
        let model = HeadModel::new_default()?;
        let empty = HeadObservations {
            coords: Vec::new(),
            head: Vec::new(),
        };
        assert_eq!(
            compare_head(&model, &empty, 1e-6, 0).err(),
            Some("there must be at least one observation")
        );
        let wrong = HeadObservations {
            coords: vec![[0.0, 0.0], [1.0, 0.0]],
            head: vec![20.0],
        };
        assert_eq!(
            compare_head(&model, &wrong, 1e-6, 0).err(),
            Some("the number of head values must equal the number of points")
        );
        Ok(())
    }

    #[test]
    fn compare_head_works() -> Result<(), StrError> {
        let model = HeadModel::new_default()?;
        let mut obs = HeadObservations::from_model(&model, &[[0.0, 3.0], [40.0, 3.0], [100.0, 7.0]]);
        let (all_good, diff_max) = compare_head(&model, &obs, 1e-12, 0)?;
        assert!(all_good);
        assert_eq!(diff_max, 0.0);

        obs.head[1] += 0.01;
        let (all_good, diff_max) = compare_head(&model, &obs, 1e-3, 2)?;
        assert!(!all_good);
        approx_eq(diff_max, 0.01, 1e-12);

        let (all_good, _) = compare_head(&model, &obs, 0.1, 1)?;
        assert!(all_good);
        Ok(())
    }
}
