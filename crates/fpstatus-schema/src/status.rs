//! Status evaluator: pure classifiers over a loaded snapshot.
//!
//! A package is "good" when it was built from the newest dist-git commit,
//! or from the one before it while the newest build's update is still in
//! testing. Security lag is tracked separately from general freshness: a
//! build can be merely stale, or stale with an unapplied non-testing
//! security update.

use crate::types::{Flatpak, FlatpakBuild, Package, UpdateStatus, UpdateType};

/// Whether a package build is current.
///
/// True iff the package was built from `history[0].commit`, or from
/// `history[1].commit` while the newest build's update is still in
/// testing. A one-step lag is tolerated until the update is promoted to
/// stable.
pub fn is_package_good(pkg: &Package) -> bool {
    let Some(latest) = pkg.history.first() else {
        return false;
    };

    if pkg.commit == latest.commit {
        return true;
    }

    let latest_in_testing = latest
        .update
        .as_ref()
        .is_some_and(|u| u.status == UpdateStatus::Testing);

    latest_in_testing
        && pkg
            .history
            .get(1)
            .is_some_and(|prev| pkg.commit == prev.commit)
}

/// Whether every package in a Flatpak build is good. Vacuously true for
/// an empty package list.
pub fn is_build_good(build: &FlatpakBuild) -> bool {
    build.packages.iter().all(is_package_good)
}

/// Whether every build of a Flatpak is good.
pub fn is_flatpak_good(flatpak: &Flatpak) -> bool {
    flatpak.builds.iter().all(is_build_good)
}

/// Whether any package in this build has an unapplied security fix.
///
/// Walks each package's history from most recent, stopping at the entry
/// for the currently built commit; a strictly newer entry whose update is
/// a security update past testing signals an unapplied fix.
pub fn build_has_security_updates(build: &FlatpakBuild) -> bool {
    build.packages.iter().any(package_has_security_updates)
}

/// Whether any build of this Flatpak has an unapplied security fix.
pub fn flatpak_has_security_updates(flatpak: &Flatpak) -> bool {
    flatpak.builds.iter().any(build_has_security_updates)
}

fn package_has_security_updates(pkg: &Package) -> bool {
    for item in &pkg.history {
        if item.commit == pkg.commit {
            break;
        }
        if let Some(update) = &item.update {
            if update.update_type == UpdateType::Security
                && update.status != UpdateStatus::Testing
            {
                return true;
            }
        }
    }

    false
}

/// One-line freshness summary for a Flatpak build.
///
/// `"All packages up to date"` when every package is good, otherwise
/// `"Out-of-date: "` followed by the base names of the stale packages in
/// package order.
pub fn build_status_string(build: &FlatpakBuild) -> String {
    let stale = stale_package_names(build);
    if stale.is_empty() {
        "All packages up to date".to_string()
    } else {
        format!("Out-of-date: {}", stale.join(", "))
    }
}

/// Base names of the not-good packages in a build, in package order.
/// An unparseable NVR falls back to the raw string.
pub fn stale_package_names(build: &FlatpakBuild) -> Vec<String> {
    build
        .packages
        .iter()
        .filter(|pkg| !is_package_good(pkg))
        .map(|pkg| pkg.name().unwrap_or_else(|_| pkg.build.nvr.clone()))
        .collect()
}
