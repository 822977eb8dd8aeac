//! Profile directory discovery
//!
//! Brave keeps each profile in a directory named `Profile <n>` directly
//! inside the user data directory. `Default` and `System Profile` are not
//! numbered and are never reported here.

use std::fs;
use std::path::Path;

use crate::error::{ProfileError, ProfileResult};

/// Directory name prefix shared by all numbered profiles
pub const PROFILE_DIR_PREFIX: &str = "Profile ";

/// Directory name for profile number `n`
pub fn profile_dir_name(number: u64) -> String {
    format!("{}{}", PROFILE_DIR_PREFIX, number)
}

/// Extract the profile number from a directory name
///
/// Only a pure run of ASCII digits after the prefix is accepted, so
/// `Profile 07` parses as 7 while `Profile abc`, `Profile -1` and
/// `Profile 1a` are rejected.
pub fn parse_profile_dir_name(name: &str) -> Option<u64> {
    let suffix = name.strip_prefix(PROFILE_DIR_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// List the numbers of all `Profile <n>` directories in `base_dir`, ascending
///
/// A missing base directory simply has no profiles.
pub fn existing_profile_numbers(base_dir: &Path) -> ProfileResult<Vec<u64>> {
    if !base_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(base_dir).map_err(|e| ProfileError::io(base_dir, e))?;

    let mut numbers = Vec::new();
    for entry in entries.flatten() {
        // Follows symlinks, so a profile moved to another drive still counts
        if !entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        if let Some(number) = parse_profile_dir_name(name) {
            numbers.push(number);
        }
    }

    numbers.sort_unstable();
    Ok(numbers)
}
