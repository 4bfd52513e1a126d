//! NVR (name-version-release) parsing.
//!
//! Version and release never contain hyphens; the name may. Parsing is
//! therefore a greedy split on the last two hyphens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing an NVR string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NvrError {
    /// The string does not have the `name-version-release` shape.
    #[error("Malformed NVR: {0:?}")]
    Malformed(String),
}

/// A parsed name-version-release identifier, e.g. `flatpak-sdk-31-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nvr {
    /// Package name (may itself contain hyphens).
    pub name: String,
    /// Version field.
    pub version: String,
    /// Release field, including any dist tag.
    pub release: String,
}

impl Nvr {
    /// Parse an NVR, splitting on the last two hyphens.
    ///
    /// # Errors
    ///
    /// Returns [`NvrError::Malformed`] if the string has fewer than two
    /// hyphens or any of the three fields is empty.
    pub fn parse(nvr: &str) -> Result<Self, NvrError> {
        let mut parts = nvr.rsplitn(3, '-');
        let release = parts.next().unwrap_or("");
        let version = parts.next().unwrap_or("");
        let name = parts.next().unwrap_or("");

        if name.is_empty() || version.is_empty() || release.is_empty() {
            return Err(NvrError::Malformed(nvr.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            release: release.to_string(),
        })
    }

    /// Whether this names the Flatpak runtime or SDK rather than an
    /// application. Runtime packages are not sourced from modules.
    pub fn is_runtime(&self) -> bool {
        self.name == "flatpak-runtime" || self.name == "flatpak-sdk"
    }
}

impl std::fmt::Display for Nvr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.name, self.version, self.release)
    }
}

/// Strip a trailing `.module_<token>` dist-tag suffix from an NVR string.
///
/// The token must be non-empty and hyphen-free; strings without the
/// suffix are returned unchanged.
///
/// ```
/// use fpstatus_schema::nvr::abbrev;
///
/// assert_eq!(abbrev("pkg-1.0-1.fc31.module_f31+123+abc"), "pkg-1.0-1.fc31");
/// assert_eq!(abbrev("pkg-1.0-1.fc31"), "pkg-1.0-1.fc31");
/// ```
pub fn abbrev(nvr: &str) -> &str {
    const MARKER: &str = ".module_";

    // Earliest marker whose remainder is hyphen-free wins.
    let mut start = 0;
    while let Some(pos) = nvr[start..].find(MARKER) {
        let idx = start + pos;
        let token = &nvr[idx + MARKER.len()..];
        if !token.is_empty() && !token.contains('-') {
            return &nvr[..idx];
        }
        start = idx + 1;
    }

    nvr
}
