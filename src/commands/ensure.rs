//! Ensure command - Create profiles until the target count exists

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use brave_profiles::brave::{CreatedProfile, ProfileManager};

/// Execute the ensure command
pub fn execute(manager: &ProfileManager, target: usize, dry_run: bool) -> Result<()> {
    if dry_run {
        let planned = manager
            .plan_profile_count(target)
            .context("Failed to scan existing profiles")?;
        print_plan(manager, &planned);
        return Ok(());
    }

    let created = manager.ensure_profile_count(target)?;

    if created.is_empty() {
        let existing = manager.existing_profile_numbers()?;
        println!(
            "No new profiles needed. Existing profiles: {}",
            format_numbers(&existing)
        );
        return Ok(());
    }

    print_created(&created);
    Ok(())
}

fn print_plan(manager: &ProfileManager, planned: &[u64]) {
    if planned.is_empty() {
        println!("{}", "(DRY-RUN) No new profiles needed.".blue());
        return;
    }

    println!(
        "{}",
        format!("(DRY-RUN) Would create {} profile(s):", planned.len()).blue()
    );
    for &number in planned {
        println!("  - {}", manager.profile_dir(number).display());
    }
}

fn print_created(created: &[CreatedProfile]) {
    println!("Created {} new profile(s):", created.len());
    for profile in created {
        println!("  - {}", profile.path.display());
    }

    let skipped: Vec<&CreatedProfile> = created
        .iter()
        .filter(|p| !p.registry.is_updated())
        .collect();

    if skipped.is_empty() {
        println!();
        println!(
            "{}",
            "Profiles were added to Local State and will show up in Brave.".green()
        );
    } else {
        println!();
        for profile in &skipped {
            eprintln!(
                "{} Profile {} {}",
                "Warning:".yellow(),
                profile.number,
                profile.registry
            );
        }
        println!(
            "Run {} once Local State is readable to register them.",
            "brave-profiles register <N>".bold()
        );
    }
    println!("{}", "Restart Brave to see the new profiles.".dimmed());
}

/// Format profile numbers like `[1, 2, 5]`
pub fn format_numbers(numbers: &[u64]) -> String {
    let joined = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
