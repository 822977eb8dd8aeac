//! Local State registry operations
//!
//! Brave lists known profiles from `<user data>/Local State`, under
//! `profile.info_cache."Profile <n>"`. Only that subtree is written here;
//! every other key in the document is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use super::scanner::profile_dir_name;
use crate::error::{ProfileError, ProfileResult};

/// Display metadata Brave keeps for each profile in `info_cache`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    #[serde(default)]
    pub is_using_default_name: bool,
    #[serde(default)]
    pub is_using_default_avatar: bool,
    #[serde(default)]
    pub avatar_icon: String,
    #[serde(default)]
    pub name_is_ephemeral: bool,
    #[serde(default)]
    pub background_apps: bool,
}

impl ProfileSummary {
    /// Summary for a freshly provisioned profile named after its number
    pub fn for_number(number: u64) -> Self {
        Self {
            name: number.to_string(),
            is_using_default_name: false,
            is_using_default_avatar: true,
            avatar_icon: "0".to_string(),
            name_is_ephemeral: false,
            background_apps: false,
        }
    }
}

/// Outcome of a registry update
///
/// Registry failures never abort provisioning; they are reported here so
/// the caller can warn and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryUpdate {
    Updated,
    Skipped { reason: String },
}

impl RegistryUpdate {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

impl fmt::Display for RegistryUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "registered"),
            Self::Skipped { reason } => write!(f, "not registered: {}", reason),
        }
    }
}

/// Register profile `number` in the Local State file at `local_state_path`
///
/// A missing file starts from an empty document. Any read, parse, shape or
/// write failure leaves the file as it was and comes back as
/// [`RegistryUpdate::Skipped`].
pub fn update_local_state<P: AsRef<Path>>(local_state_path: P, number: u64) -> RegistryUpdate {
    match try_update_local_state(local_state_path.as_ref(), number) {
        Ok(()) => RegistryUpdate::Updated,
        Err(e) => RegistryUpdate::Skipped {
            reason: format!("{:#}", anyhow::Error::from(e)),
        },
    }
}

fn try_update_local_state(path: &Path, number: u64) -> ProfileResult<()> {
    let mut json = read_document(path)?;

    let root = json
        .as_object_mut()
        .ok_or_else(|| shape_error(path, "document is not a JSON object"))?;

    let profile = root
        .entry("profile")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| shape_error(path, "`profile` is not a JSON object"))?;

    let info_cache = profile
        .entry("info_cache")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| shape_error(path, "`profile.info_cache` is not a JSON object"))?;

    info_cache.insert(
        profile_dir_name(number),
        serde_json::to_value(ProfileSummary::for_number(number))?,
    );

    write_document(path, &json)
}

/// Read the `info_cache` entries, keyed by profile directory name
///
/// Entries that don't look like a profile summary are left out.
pub fn read_info_cache<P: AsRef<Path>>(
    local_state_path: P,
) -> ProfileResult<BTreeMap<String, ProfileSummary>> {
    let path = local_state_path.as_ref();
    let json = read_document(path)?;

    let entries = json
        .get("profile")
        .and_then(|p| p.get("info_cache"))
        .and_then(|c| c.as_object())
        .map(|cache| {
            cache
                .iter()
                .filter_map(|(id, entry)| {
                    serde_json::from_value(entry.clone())
                        .ok()
                        .map(|summary| (id.clone(), summary))
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(entries)
}

fn read_document(path: &Path) -> ProfileResult<Value> {
    if !path.exists() {
        return Ok(Value::Object(Map::new()));
    }

    let content = fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

fn write_document(path: &Path, json: &Value) -> ProfileResult<()> {
    let content = to_string_indented(json)?;
    fs::write(path, content).map_err(|e| ProfileError::io(path, e))
}

/// Pretty-print with four-space indentation
pub(crate) fn to_string_indented<T: Serialize>(value: &T) -> ProfileResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn shape_error(path: &Path, reason: &str) -> ProfileError {
    ProfileError::InvalidRegistry {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
