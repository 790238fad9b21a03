/// Domain corners in the mesh generation list
const PATH_LOW_CORNER: &str = "/Main/Mesh/Unstructured/Generate Mesh/Uniform Structured/Domain Low Corner";
const PATH_HIGH_CORNER: &str = "/Main/Mesh/Unstructured/Generate Mesh/Uniform Structured/Domain High Corner";

/// Material properties
const PATH_K1: &str = "/Main/Material Properties/Front Material/Intrinsic Permeability: Uniform/Value";
const PATH_K2: &str = "/Main/Material Properties/Back Material/Intrinsic Permeability: Uniform/Value";

/// Phase properties
const PATH_MU: &str = "/Main/Phase Definitions/Aqueous/Phase Properties/Viscosity: Uniform/Viscosity";
const PATH_RHO: &str = "/Main/Phase Definitions/Aqueous/Phase Properties/Density: Uniform/Density";

/// Boundary conditions
const PATH_H_0: &str = "/Main/Boundary Conditions/LeftBC/BC: Hydrostatic/Water Table Height";
const PATH_H_L: &str = "/Main/Boundary Conditions/RightBC/BC: Hydrostatic/Water Table Height";

/// Returns the tag path and array index (if any) of a logical parameter name
///
/// Returns None if the parameter is not stored in the document (e.g., gravity).
pub fn tag_path(name: &str) -> Option<(&'static str, Option<usize>)> {
    match name {
        "x_0" => Some((PATH_LOW_CORNER, Some(0))),
        "z_0" => Some((PATH_LOW_CORNER, Some(2))),
        "x_1" => Some((PATH_HIGH_CORNER, Some(0))),
        "z_1" => Some((PATH_HIGH_CORNER, Some(2))),
        "k1" => Some((PATH_K1, None)),
        "k2" => Some((PATH_K2, None)),
        "mu" => Some((PATH_MU, None)),
        "rho" => Some((PATH_RHO, None)),
        "h_0" => Some((PATH_H_0, Some(0))),
        "h_L" => Some((PATH_H_L, Some(0))),
        _ => None,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::tag_path;
    use crate::base::PARAM_HEAD_NAMES;

    #[test]
    fn tag_path_works() {
        let mut count = 0;
        for name in PARAM_HEAD_NAMES {
            if tag_path(name).is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 10);
        assert_eq!(tag_path("g"), None);
        assert_eq!(tag_path("p_atm"), None);
    }
}
