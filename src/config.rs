//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Profiles created when no target is given
pub const DEFAULT_PROFILE_COUNT: usize = 5;

/// File name of the browser's shared profile registry
pub const LOCAL_STATE_FILE: &str = "Local State";

/// File name of the per-profile settings file
pub const PREFERENCES_FILE: &str = "Preferences";

/// Get the Brave user data directory
/// - Windows: %LOCALAPPDATA%/BraveSoftware/Brave-Browser/User Data/
/// - Everything else: ~/.config/BraveSoftware/Brave-Browser/
pub fn brave_user_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        let local_appdata =
            dirs::data_local_dir().context("Could not determine LocalAppData directory")?;
        Ok(local_appdata
            .join("BraveSoftware")
            .join("Brave-Browser")
            .join("User Data"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home
            .join(".config")
            .join("BraveSoftware")
            .join("Brave-Browser"))
    }
}

/// Resolve the user data directory, preferring an explicit override
pub fn resolve_user_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir),
        None => brave_user_data_dir(),
    }
}
