//! List command - Show numbered profiles and their Local State status

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use brave_profiles::brave::local_state;
use brave_profiles::brave::scanner::profile_dir_name;
use brave_profiles::brave::ProfileManager;

/// A numbered profile found on disk
#[derive(Debug)]
pub struct ProfileEntry {
    pub number: u64,
    /// Display name from Local State, if registered
    pub display_name: Option<String>,
}

/// Collect profiles on disk with their registry entries
///
/// An unreadable Local State is reported as a warning and every profile
/// shows up as unregistered.
pub fn list(manager: &ProfileManager) -> Result<Vec<ProfileEntry>> {
    let numbers = manager
        .existing_profile_numbers()
        .with_context(|| format!("Failed to read: {}", manager.user_data_dir().display()))?;

    let cache = match local_state::read_info_cache(manager.local_state_path()) {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow(), e);
            Default::default()
        }
    };

    Ok(numbers
        .into_iter()
        .map(|number| ProfileEntry {
            number,
            display_name: cache.get(&profile_dir_name(number)).map(|s| s.name.clone()),
        })
        .collect())
}

/// Execute the list command and return formatted output
pub fn execute(manager: &ProfileManager) -> Result<String> {
    let profiles = list(manager)?;

    if profiles.is_empty() {
        return Ok(format!(
            "No numbered profiles in {}",
            manager.user_data_dir().display()
        ));
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Profile"),
        Cell::new("Name"),
        Cell::new("Registered"),
    ]);

    for profile in &profiles {
        let (name, registered) = match &profile.display_name {
            Some(name) => (name.clone(), "yes"),
            None => ("-".to_string(), "no"),
        };
        table.add_row(vec![
            Cell::new(profile_dir_name(profile.number)),
            Cell::new(name),
            Cell::new(registered),
        ]);
    }

    let unregistered = profiles.iter().filter(|p| p.display_name.is_none()).count();

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} profiles found", profiles.len()));
    if unregistered > 0 {
        output.push_str(&format!(", {} not in Local State", unregistered));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_marks_unregistered() {
        let temp = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp.path());
        manager.create_profile().unwrap();
        fs::create_dir(temp.path().join("Profile 2")).unwrap();

        let profiles = list(&manager).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].display_name.as_deref(), Some("1"));
        assert!(profiles[1].display_name.is_none());

        let output = execute(&manager).unwrap();
        assert!(output.contains("2 profiles found, 1 not in Local State"));
    }

    #[test]
    fn test_list_with_corrupt_local_state() {
        let temp = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp.path());
        fs::create_dir(temp.path().join("Profile 1")).unwrap();
        fs::write(manager.local_state_path(), "{").unwrap();

        let profiles = list(&manager).unwrap();
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].display_name.is_none());
    }

    #[test]
    fn test_execute_empty() {
        let temp = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp.path());

        let output = execute(&manager).unwrap();
        assert!(output.starts_with("No numbered profiles"));
    }
}
