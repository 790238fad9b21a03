use super::{DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
use std::path::{Path, PathBuf};

pub struct FilePath {}

impl FilePath {
    /// Returns the filepath of a figure (.svg) file
    ///
    /// # Input
    ///
    /// * `filename_key` -- the filename without path and extension; ".svg" will added
    /// * `out_dir` -- the output directory; None means [DEFAULT_OUT_DIR]
    pub fn svg(filename_key: &str, out_dir: Option<&str>) -> PathBuf {
        let mut filename = String::from(filename_key);
        filename.push_str(".svg");
        Path::new(out_dir.unwrap_or(DEFAULT_OUT_DIR)).join(filename)
    }

    /// Returns the filepath of a figure (.svg) file in the test directory
    ///
    /// # Input
    ///
    /// * `filename_key` -- the filename without path and extension; ".svg" will added
    pub fn test_svg(filename_key: &str) -> PathBuf {
        FilePath::svg(filename_key, Some(DEFAULT_TEST_DIR))
    }

    /// Returns the filepath of an input file in the local "data" directory
    ///
    /// # Input
    ///
    /// * `filename_key` -- the filename without path and extension; ".json" will added
    pub fn input(filename_key: &str) -> PathBuf {
        let mut filename = String::from(filename_key);
        filename.push_str(".json");
        Path::new("data").join("inputs").join(filename)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::FilePath;
    use std::ffi::OsStr;

    #[test]
    fn paths_are_correct() {
        assert_eq!(
            FilePath::svg("head", None).as_os_str(),
            OsStr::new("/tmp/pmverif/results/head.svg")
        );
        assert_eq!(
            FilePath::svg("head", Some("/tmp/other")).as_os_str(),
            OsStr::new("/tmp/other/head.svg")
        );
        assert_eq!(
            FilePath::test_svg("head").as_os_str(),
            OsStr::new("/tmp/pmverif/test/head.svg")
        );
        assert_eq!(
            FilePath::input("linear_materials_parallel_1d").as_os_str(),
            OsStr::new("data/inputs/linear_materials_parallel_1d.json")
        );
    }
}
