//! fertile-test - Regression test framework for fertile land analysis
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use fertile_test::{RegParams, load_test_input};
//!
//! let mut rp = RegParams::new("scan");
//! rp.compare_areas(&[116800, 116800], &areas);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use fertile_core::Rect;

/// Load and parse a barren-land payload from the test data directory
///
/// # Arguments
///
/// * `name` - Payload filename (e.g., "two_bands.txt")
pub fn load_test_input(name: &str) -> TestResult<Vec<Rect>> {
    let path = test_data_path(name);
    let text = std::fs::read_to_string(&path).map_err(|e| TestError::InputLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;
    fertile_io::parse_barren_list(&text).map_err(|e| TestError::InputLoad {
        path,
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // fertile-test is at crates/fertile-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/inputs/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
