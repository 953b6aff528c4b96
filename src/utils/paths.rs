use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::environment::get_data_dir;

/// Bundle identifier the chat application stores its data under
pub const APP_IDENTIFIER: &str = "com.linuxai.assistant";

pub const DATABASE_FILENAME: &str = "database.db";

/// Default location of the chat application's database
///
/// Resolved from the platform data directory, e.g.
/// `~/.local/share/com.linuxai.assistant/database.db` on Linux.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(store_path_in(&get_data_dir()?))
}

pub(crate) fn store_path_in(data_dir: &Path) -> PathBuf {
    data_dir.join(APP_IDENTIFIER).join(DATABASE_FILENAME)
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chat_seeder::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.local/share/com.linuxai.assistant/database.db");
/// // Returns "~/.local/share/com.linuxai.assistant/database.db" if HOME=/home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    // Compare whole components so /home/al does not match /home/alice
    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.to_string_lossy())
        };
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
