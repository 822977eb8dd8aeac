//! Register command - Add an existing profile to Local State

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use brave_profiles::brave::{ProfileManager, RegistryUpdate};

/// Execute the register command
pub fn execute(manager: &ProfileManager, number: u64) -> Result<()> {
    if number == 0 {
        bail!("Profile numbers start at 1");
    }

    match manager.register_profile(number)? {
        RegistryUpdate::Updated => {
            println!(
                "{} {}",
                "Registered:".green(),
                manager.profile_dir(number).display()
            );
            println!("{}", "Restart Brave to see the profile.".dimmed());
        }
        skipped @ RegistryUpdate::Skipped { .. } => {
            bail!("Profile {} {}", number, skipped);
        }
    }

    Ok(())
}
