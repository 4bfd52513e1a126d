//! Check command: machine-friendly freshness gate.

use anyhow::{Result, bail};
use fpstatus_schema::StatusReport;

use crate::ops::fetch::Source;

/// Print one line per out-of-date or security-lagging Flatpak and return
/// the failure count. No names means check everything.
pub async fn check(source: &Source, names: &[String]) -> Result<usize> {
    let index = super::load_validated(source).await?;
    let report = StatusReport::from_index(&index);

    for name in names {
        if report.find(name).is_none() {
            bail!("Flatpak '{name}' not found");
        }
    }

    let mut failures = 0;
    for flatpak in &report.flatpaks {
        if !names.is_empty() && !names.contains(&flatpak.name) {
            continue;
        }
        if flatpak.good && !flatpak.security_updates {
            continue;
        }

        failures += 1;
        let summary = flatpak
            .builds
            .first()
            .map_or("no builds", |b| b.summary.as_str());
        let security = if flatpak.security_updates {
            " (security updates pending)"
        } else {
            ""
        };
        println!("{}: {summary}{security}", flatpak.name);
    }

    Ok(failures)
}
