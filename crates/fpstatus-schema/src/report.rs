//! View model recomputed from one loaded snapshot.
//!
//! The rendering boundary consumes this instead of calling the
//! classifiers directly; badges are computed exactly once per load.

use chrono::{DateTime, Utc};

use crate::status;
use crate::types::{Flatpak, FlatpakBuild, StatusIndex, UpdateStatus, UpdateType};

/// Pre-computed badges for a whole status document.
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// When the producer last regenerated the document.
    pub date_updated: DateTime<Utc>,
    /// One entry per Flatpak, in document order.
    pub flatpaks: Vec<FlatpakReport>,
}

/// Badges for one Flatpak across all of its builds.
#[derive(Debug, Clone)]
pub struct FlatpakReport {
    /// Flatpak name.
    pub name: String,
    /// Every build is good.
    pub good: bool,
    /// Some build has an unapplied security fix.
    pub security_updates: bool,
    /// Per-build detail, most recent first.
    pub builds: Vec<BuildReport>,
}

/// Badges and summary for one Flatpak build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Full NVR of the Flatpak build.
    pub nvr: String,
    /// Koji build id, for buildinfo links.
    pub build_id: u64,
    /// Every package in the build is good.
    pub good: bool,
    /// Some package has an unapplied security fix.
    pub security_updates: bool,
    /// One-line freshness summary.
    pub summary: String,
    /// Status, type and id of the Bodhi update shipping this build.
    pub update: Option<(UpdateStatus, UpdateType, String)>,
    /// Base names of the not-good packages.
    pub stale_packages: Vec<String>,
}

impl StatusReport {
    /// Classify every Flatpak and build in the document.
    pub fn from_index(index: &StatusIndex) -> Self {
        Self {
            date_updated: index.date_updated,
            flatpaks: index.flatpaks.iter().map(FlatpakReport::new).collect(),
        }
    }

    /// Look up one Flatpak's report by name.
    pub fn find(&self, name: &str) -> Option<&FlatpakReport> {
        self.flatpaks.iter().find(|f| f.name == name)
    }
}

impl FlatpakReport {
    fn new(flatpak: &Flatpak) -> Self {
        Self {
            name: flatpak.name.clone(),
            good: status::is_flatpak_good(flatpak),
            security_updates: status::flatpak_has_security_updates(flatpak),
            builds: flatpak.builds.iter().map(BuildReport::new).collect(),
        }
    }
}

impl BuildReport {
    fn new(build: &FlatpakBuild) -> Self {
        Self {
            nvr: build.build.nvr.clone(),
            build_id: build.build.id,
            good: status::is_build_good(build),
            security_updates: status::build_has_security_updates(build),
            summary: status::build_status_string(build),
            update: build
                .update
                .as_ref()
                .map(|u| (u.status, u.update_type, u.id.clone())),
            stale_packages: status::stale_package_names(build),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuildRef, HistoryItem, Package, UpdateRef};

    fn index_with_one_stale_package() -> StatusIndex {
        let history = vec![
            HistoryItem {
                commit: "b".to_string(),
                build: BuildRef {
                    id: 2,
                    nvr: "foo-1.1-1.fc31".to_string(),
                    user_name: None,
                    completion_time: None,
                },
                update: Some(UpdateRef {
                    id: "FEDORA-2019-0001".to_string(),
                    status: UpdateStatus::Stable,
                    update_type: UpdateType::Security,
                    user_name: None,
                    date_submitted: None,
                }),
            },
            HistoryItem {
                commit: "a".to_string(),
                build: BuildRef {
                    id: 1,
                    nvr: "foo-1.0-1.fc31".to_string(),
                    user_name: None,
                    completion_time: None,
                },
                update: None,
            },
        ];

        StatusIndex {
            date_updated: "2019-11-04T15:00:00Z".parse().unwrap(),
            flatpaks: vec![Flatpak {
                name: "app".to_string(),
                builds: vec![FlatpakBuild {
                    build: BuildRef {
                        id: 10,
                        nvr: "app-stable-1".to_string(),
                        user_name: None,
                        completion_time: None,
                    },
                    update: None,
                    packages: vec![Package {
                        build: BuildRef {
                            id: 1,
                            nvr: "foo-1.0-1.fc31".to_string(),
                            user_name: None,
                            completion_time: None,
                        },
                        commit: "a".to_string(),
                        branch: "f31".to_string(),
                        module_build: None,
                        history,
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_report_flags_staleness_and_security() {
        let index = index_with_one_stale_package();
        let report = StatusReport::from_index(&index);

        let flatpak = report.find("app").unwrap();
        assert!(!flatpak.good);
        assert!(flatpak.security_updates);

        let build = &flatpak.builds[0];
        assert!(!build.good);
        assert!(build.security_updates);
        assert_eq!(build.summary, "Out-of-date: foo");
        assert_eq!(build.stale_packages, vec!["foo".to_string()]);
    }

    #[test]
    fn test_find_missing_flatpak() {
        let report = StatusReport::from_index(&index_with_one_stale_package());
        assert!(report.find("nosuch").is_none());
    }
}
