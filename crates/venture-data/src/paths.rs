//! Sample data directory resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the sample data directory.
pub const SAMPLE_DATA_ENV_VAR: &str = "VENTURE_SAMPLE_DATA_DIR";

pub const USERS_FILE: &str = "users.csv";
pub const DEALS_FILE: &str = "deals.csv";
pub const VENTURES_FILE: &str = "ventures.csv";

/// Get the sample data root directory.
///
/// Resolution order:
/// 1. `VENTURE_SAMPLE_DATA_DIR` environment variable
/// 2. `sample-data/` directory relative to workspace root
pub fn sample_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(SAMPLE_DATA_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../sample-data")
}

pub fn users_path(root: &Path) -> PathBuf {
    root.join(USERS_FILE)
}

pub fn deals_path(root: &Path) -> PathBuf {
    root.join(DEALS_FILE)
}

pub fn ventures_path(root: &Path) -> PathBuf {
    root.join(VENTURES_FILE)
}
