//! Outbound links to the build system, update system, and commit viewer.

/// Koji buildinfo page for a build id.
pub fn koji_build_url(build_id: u64) -> String {
    format!("https://koji.fedoraproject.org/koji/buildinfo?buildID={build_id}")
}

/// Bodhi page for an update id.
pub fn bodhi_update_url(update_id: &str) -> String {
    format!("https://bodhi.fedoraproject.org/updates/{update_id}")
}

/// Dist-git commit view for a package branch, anchored at one commit.
pub fn distgit_commit_url(package_name: &str, branch: &str, commit: &str) -> String {
    format!("https://src.fedoraproject.org/rpms/{package_name}/commits/{branch}#c_{commit}")
}
