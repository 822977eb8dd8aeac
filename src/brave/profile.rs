//! Profile creation and target-count reconciliation
//!
//! Each creation scans the user data directory again, so a batch always
//! allocates against what is actually on disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::allocator::next_profile_number;
use super::local_state::{self, RegistryUpdate};
use super::preferences::Preferences;
use super::scanner::{self, profile_dir_name};
use crate::config::{LOCAL_STATE_FILE, PREFERENCES_FILE};
use crate::error::{ProfileError, ProfileResult};

/// A profile provisioned by [`ProfileManager::create_profile`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProfile {
    pub number: u64,
    pub path: PathBuf,
    /// Whether the profile made it into Local State
    pub registry: RegistryUpdate,
}

/// Manages numbered profiles inside one Brave user data directory
#[derive(Debug, Clone)]
pub struct ProfileManager {
    user_data_dir: PathBuf,
    local_state_path: PathBuf,
}

impl ProfileManager {
    pub fn new<P: Into<PathBuf>>(user_data_dir: P) -> Self {
        let user_data_dir = user_data_dir.into();
        let local_state_path = user_data_dir.join(LOCAL_STATE_FILE);
        Self {
            user_data_dir,
            local_state_path,
        }
    }

    pub fn user_data_dir(&self) -> &Path {
        &self.user_data_dir
    }

    pub fn local_state_path(&self) -> &Path {
        &self.local_state_path
    }

    pub fn profile_dir(&self, number: u64) -> PathBuf {
        self.user_data_dir.join(profile_dir_name(number))
    }

    pub fn preferences_path(&self, number: u64) -> PathBuf {
        self.profile_dir(number).join(PREFERENCES_FILE)
    }

    /// Numbers of the profiles currently on disk, ascending
    pub fn existing_profile_numbers(&self) -> ProfileResult<Vec<u64>> {
        scanner::existing_profile_numbers(&self.user_data_dir)
    }

    /// The number the next [`create_profile`](Self::create_profile) call would use
    pub fn next_profile_number(&self) -> ProfileResult<u64> {
        Ok(next_profile_number(&self.existing_profile_numbers()?))
    }

    /// Create the next numbered profile and register it
    pub fn create_profile(&self) -> ProfileResult<CreatedProfile> {
        let number = self.next_profile_number()?;
        self.create_numbered_profile(number)
    }

    /// Create `Profile <number>`, failing if anything already sits at that path
    pub fn create_numbered_profile(&self, number: u64) -> ProfileResult<CreatedProfile> {
        let path = self.profile_dir(number);

        // Anything at the path counts, including a dangling symlink
        if fs::symlink_metadata(&path).is_ok() {
            return Err(ProfileError::AlreadyExists(path));
        }

        fs::create_dir_all(&path).map_err(|e| ProfileError::io(&path, e))?;
        Preferences::for_number(number).write(path.join(PREFERENCES_FILE))?;

        // The directory stays even if registration is skipped
        let registry = local_state::update_local_state(&self.local_state_path, number);

        Ok(CreatedProfile {
            number,
            path,
            registry,
        })
    }

    /// Create profiles until at least `target` exist
    ///
    /// Stops at the first error; profiles created before it stay on disk.
    pub fn ensure_profile_count(&self, target: usize) -> ProfileResult<Vec<CreatedProfile>> {
        let current = self.existing_profile_numbers()?.len();
        let deficit = target.saturating_sub(current);

        let mut created = Vec::with_capacity(deficit);
        for _ in 0..deficit {
            created.push(self.create_profile()?);
        }

        Ok(created)
    }

    /// Numbers `ensure_profile_count(target)` would create, without touching disk
    pub fn plan_profile_count(&self, target: usize) -> ProfileResult<Vec<u64>> {
        let mut used = self.existing_profile_numbers()?;
        let deficit = target.saturating_sub(used.len());

        let mut planned = Vec::with_capacity(deficit);
        for _ in 0..deficit {
            let number = next_profile_number(&used);
            used.push(number);
            planned.push(number);
        }

        Ok(planned)
    }

    /// Re-register an existing profile in Local State
    pub fn register_profile(&self, number: u64) -> ProfileResult<RegistryUpdate> {
        let path = self.profile_dir(number);
        if !path.is_dir() {
            return Err(ProfileError::NotFound(path));
        }

        Ok(local_state::update_local_state(
            &self.local_state_path,
            number,
        ))
    }
}
