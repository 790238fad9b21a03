/// Defines the directory where the result files (figures, reports) are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/pmverif/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/pmverif/test";

/// Standard gravity acceleration [m/s²]
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Standard atmospheric pressure [Pa]
pub const ATMOSPHERIC_PRESSURE: f64 = 101325.0;

/// Density of water at 20 °C [kg/m³]
pub const WATER_DENSITY: f64 = 998.2;

/// Dynamic viscosity of water at 20 °C [kg/(m·s)]
pub const WATER_VISCOSITY: f64 = 1.002e-3;
