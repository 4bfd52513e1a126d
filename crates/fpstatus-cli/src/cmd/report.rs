//! Report command: one-line freshness summary per Flatpak.

use anyhow::Result;
use crossterm::style::Stylize;
use fpstatus_schema::StatusReport;

use crate::ops::fetch::Source;
use crate::ui;

/// Render the overview: badge, name, latest build, summary.
pub async fn report(source: &Source) -> Result<()> {
    let index = super::load_validated(source).await?;
    let report = StatusReport::from_index(&index);

    let name_width = report
        .flatpaks
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(0)
        .max(8);

    println!();
    println!("{}", "Flatpak status".dark_grey());
    println!();

    for flatpak in &report.flatpaks {
        let badge = if flatpak.good {
            "   ok".green()
        } else {
            "STALE".red()
        };
        let security = if flatpak.security_updates {
            " security!".red().bold()
        } else {
            "".stylize()
        };

        let latest = flatpak.builds.first();
        let nvr = latest.map_or("(no builds)", |b| b.nvr.as_str());
        let summary = latest.map_or(String::new(), |b| b.summary.clone());

        let name_part = format!("{:<name_width$}", flatpak.name);
        println!(
            "  {badge}  {}  {}  {summary}{security}",
            name_part.bold(),
            nvr.dark_grey(),
        );
    }

    let stale = report.flatpaks.iter().filter(|f| !f.good).count();
    println!();
    if stale == 0 {
        println!("{}", "All Flatpaks up to date".dark_grey());
    } else {
        println!(
            "{}",
            format!("{stale} of {} Flatpaks out of date", report.flatpaks.len()).dark_grey()
        );
    }
    println!(
        "{}",
        format!("Updated {}", ui::format_time(report.date_updated)).dark_grey()
    );
    println!();

    Ok(())
}
