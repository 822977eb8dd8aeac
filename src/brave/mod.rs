//! Core Brave profile operations

pub mod allocator;
pub mod local_state;
pub mod preferences;
pub mod profile;
pub mod scanner;

// Re-exports for library consumers
pub use allocator::next_profile_number;
pub use local_state::{update_local_state, RegistryUpdate};
pub use profile::{CreatedProfile, ProfileManager};
pub use scanner::existing_profile_numbers;
