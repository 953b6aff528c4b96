use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the platform data directory (`~/.local/share` on Linux)
///
/// Honors `XDG_DATA_HOME` on Linux through the `dirs` crate.
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir().context("Could not determine the user data directory (is HOME set?)")
}
