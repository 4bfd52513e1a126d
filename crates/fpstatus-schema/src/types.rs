//! Wire-format model for the status document.
//!
//! Field names follow the JSON emitted by the status updater. The whole
//! document is one immutable snapshot; nothing here mutates after load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::nvr::{Nvr, NvrError};

/// Top-level status document: `{ date_updated, flatpaks }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusIndex {
    /// When the producer last regenerated the document.
    pub date_updated: DateTime<Utc>,
    /// All tracked Flatpaks.
    pub flatpaks: Vec<Flatpak>,
}

/// A Flatpak application (or runtime) and its recent builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flatpak {
    /// Flatpak name, e.g. `eog`.
    pub name: String,
    /// Builds ordered most recent first (index 0 = latest).
    pub builds: Vec<FlatpakBuild>,
}

/// One build of a Flatpak and the package builds it contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatpakBuild {
    /// The Koji build of the Flatpak itself, with detail fields.
    pub build: BuildRef,

    /// The Bodhi update shipping this build, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateRef>,

    /// Package builds bundled into this Flatpak.
    pub packages: Vec<Package>,
}

/// A package build inside a Flatpak build, with its dist-git history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// The Koji build this Flatpak was built against.
    pub build: BuildRef,

    /// Dist-git commit the build was made from.
    pub commit: String,

    /// Dist-git branch the history was resolved on.
    pub branch: String,

    /// The module build this package came through, absent for runtime
    /// packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_build: Option<BuildRef>,

    /// Newer-to-older investigation items; index 0 is the current
    /// upstream build. Never empty in a valid document.
    pub history: Vec<HistoryItem>,
}

/// One step in a package's freshness history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Dist-git commit of this step.
    pub commit: String,
    /// The Koji build made from that commit (id and nvr only).
    pub build: BuildRef,
    /// The Bodhi update carrying that build, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateRef>,
}

/// Reference to a Koji build. The detail fields are emitted only for
/// top-level Flatpak builds, not for history entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRef {
    /// Koji build id, used for buildinfo links.
    pub id: u64,
    /// Full NVR of the build.
    pub nvr: String,
    /// Who submitted the build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// When the build finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

/// Reference to a Bodhi update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRef {
    /// Bodhi update id, e.g. `FEDORA-2019-1a2b3c4d5e`.
    pub id: String,
    /// Where the update is in the pipeline.
    pub status: UpdateStatus,
    /// What kind of update this is.
    #[serde(rename = "type")]
    pub update_type: UpdateType,
    /// Who submitted the update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// When the update was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_submitted: Option<DateTime<Utc>>,
}

/// Pipeline state of a Bodhi update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    /// Submitted but not yet pushed anywhere.
    Pending,
    /// Pushed to the testing repository.
    Testing,
    /// Promoted to the stable repository.
    Stable,
}

impl UpdateStatus {
    /// Lowercase wire-format name, for display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Testing => "testing",
            Self::Stable => "stable",
        }
    }
}

/// Classification of a Bodhi update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    /// Fixes bugs without adding features.
    Bugfix,
    /// Adds features.
    Enhancement,
    /// Introduces a new package.
    Newpackage,
    /// Fixes a security issue; tracked independently of freshness.
    Security,
}

impl UpdateType {
    /// Lowercase wire-format name, for display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bugfix => "bugfix",
            Self::Enhancement => "enhancement",
            Self::Newpackage => "newpackage",
            Self::Security => "security",
        }
    }
}

/// Errors raised when validating a parsed [`StatusIndex`].
#[derive(thiserror::Error, Debug)]
pub enum MalformedRecordError {
    /// A package record with no history entries.
    #[error("Package {nvr} has an empty history")]
    EmptyHistory {
        /// NVR of the offending package build.
        nvr: String,
    },

    /// An NVR somewhere in the tree that does not parse.
    #[error(transparent)]
    BadNvr(#[from] NvrError),
}

impl Package {
    /// Base package name, parsed out of the build NVR.
    ///
    /// # Errors
    ///
    /// Returns [`NvrError::Malformed`] if the NVR does not parse; cannot
    /// happen on a validated document.
    pub fn name(&self) -> Result<String, NvrError> {
        Ok(Nvr::parse(&self.build.nvr)?.name)
    }
}

impl StatusIndex {
    /// Walk the whole tree once, rejecting records the classifiers
    /// cannot meaningfully evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRecordError::EmptyHistory`] for a package with
    /// no history, or [`MalformedRecordError::BadNvr`] for any
    /// unparseable NVR.
    pub fn validate(&self) -> Result<(), MalformedRecordError> {
        for flatpak in &self.flatpaks {
            for build in &flatpak.builds {
                Nvr::parse(&build.build.nvr)?;
                for pkg in &build.packages {
                    Nvr::parse(&pkg.build.nvr)?;
                    if let Some(module) = &pkg.module_build {
                        Nvr::parse(&module.nvr)?;
                    }
                    if pkg.history.is_empty() {
                        return Err(MalformedRecordError::EmptyHistory {
                            nvr: pkg.build.nvr.clone(),
                        });
                    }
                    for item in &pkg.history {
                        Nvr::parse(&item.build.nvr)?;
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_DOCUMENT: &str = r#"
{
  "date_updated": "2019-11-04T15:00:00Z",
  "flatpaks": [
    {
      "name": "eog",
      "builds": [
        {
          "build": {
            "id": 1234,
            "nvr": "eog-stable-3120191024150000.1",
            "user_name": "releng",
            "completion_time": "2019-10-24T15:30:00Z"
          },
          "update": {
            "id": "FEDORA-FLATPAK-2019-0001",
            "status": "stable",
            "type": "bugfix",
            "user_name": "releng",
            "date_submitted": "2019-10-24T16:00:00Z"
          },
          "packages": [
            {
              "build": {"id": 42, "nvr": "eog-3.34.1-1.fc31"},
              "commit": "aaaa0000",
              "branch": "f31",
              "module_build": {"id": 99, "nvr": "eog-stable-3120191024150000"},
              "history": [
                {
                  "build": {"id": 43, "nvr": "eog-3.34.2-1.fc31"},
                  "commit": "bbbb1111",
                  "update": {
                    "id": "FEDORA-2019-0002",
                    "status": "testing",
                    "type": "enhancement"
                  }
                },
                {
                  "build": {"id": 42, "nvr": "eog-3.34.1-1.fc31"},
                  "commit": "aaaa0000"
                }
              ]
            }
          ]
        }
      ]
    }
  ]
}
"#;

    #[test]
    fn test_parse_example_document() {
        let index: StatusIndex = serde_json::from_str(EXAMPLE_DOCUMENT).unwrap();
        assert_eq!(index.flatpaks.len(), 1);

        let flatpak = &index.flatpaks[0];
        assert_eq!(flatpak.name, "eog");

        let build = &flatpak.builds[0];
        assert_eq!(build.build.user_name.as_deref(), Some("releng"));
        assert_eq!(
            build.update.as_ref().unwrap().status,
            UpdateStatus::Stable
        );

        let pkg = &build.packages[0];
        assert_eq!(pkg.branch, "f31");
        assert_eq!(pkg.module_build.as_ref().unwrap().id, 99);
        assert_eq!(pkg.history.len(), 2);

        // History builds carry no detail fields.
        let latest = &pkg.history[0];
        assert!(latest.build.user_name.is_none());
        assert_eq!(
            latest.update.as_ref().unwrap().update_type,
            UpdateType::Enhancement
        );
        assert!(pkg.history[1].update.is_none());

        index.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_history() {
        let mut index: StatusIndex = serde_json::from_str(EXAMPLE_DOCUMENT).unwrap();
        index.flatpaks[0].builds[0].packages[0].history.clear();

        let err = index.validate().unwrap_err();
        assert!(matches!(
            err,
            MalformedRecordError::EmptyHistory { ref nvr } if nvr == "eog-3.34.1-1.fc31"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_nvr() {
        let mut index: StatusIndex = serde_json::from_str(EXAMPLE_DOCUMENT).unwrap();
        index.flatpaks[0].builds[0].packages[0].build.nvr = "nohyphens".to_string();
        assert!(matches!(
            index.validate().unwrap_err(),
            MalformedRecordError::BadNvr(_)
        ));
    }

    #[test]
    fn test_package_name() {
        let index: StatusIndex = serde_json::from_str(EXAMPLE_DOCUMENT).unwrap();
        let pkg = &index.flatpaks[0].builds[0].packages[0];
        assert_eq!(pkg.name().unwrap(), "eog");
    }
}
