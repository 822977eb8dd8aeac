//! Per-profile `Preferences` file
//!
//! Brave fills in everything it doesn't find on first launch, so only the
//! keys we want to pin are written.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::local_state::to_string_indented;
use crate::error::{ProfileError, ProfileResult};

/// WebRTC policy that keeps traffic off non-proxied UDP
pub const IP_HANDLING_POLICY: &str = "disable_non_proxied_udp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub profile: ProfileIdentity,
    pub browser: BrowserChrome,
    pub webrtc: WebRtcPrivacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileIdentity {
    pub name: String,
    pub avatar_icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserChrome {
    pub custom_chrome_frame: bool,
    pub show_home_button: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebRtcPrivacy {
    pub multiple_routes_enabled: bool,
    pub non_proxied_udp_enabled: bool,
    pub ip_handling_policy: String,
}

impl Preferences {
    /// Preferences for a new profile named after its number
    pub fn for_number(number: u64) -> Self {
        Self {
            profile: ProfileIdentity {
                name: number.to_string(),
                avatar_icon: "0".to_string(),
            },
            browser: BrowserChrome {
                custom_chrome_frame: false,
                show_home_button: false,
            },
            webrtc: WebRtcPrivacy {
                multiple_routes_enabled: false,
                non_proxied_udp_enabled: false,
                ip_handling_policy: IP_HANDLING_POLICY.to_string(),
            },
        }
    }

    /// Write a Preferences file, replacing any existing one
    pub fn write<P: AsRef<Path>>(&self, path: P) -> ProfileResult<()> {
        let path = path.as_ref();
        let content = to_string_indented(self)?;
        fs::write(path, content).map_err(|e| ProfileError::io(path, e))
    }
}
