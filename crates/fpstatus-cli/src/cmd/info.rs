//! Info command: builds, packages, and history for one Flatpak.

use anyhow::{Result, bail};
use crossterm::style::Stylize;
use fpstatus_schema::nvr::{self, Nvr};
use fpstatus_schema::{FlatpakBuild, Package, status};

use crate::ops::fetch::Source;
use crate::ui::{self, links};

/// Render the full drill-down for one Flatpak.
pub async fn info(source: &Source, name: &str) -> Result<()> {
    let index = super::load_validated(source).await?;

    let Some(flatpak) = index.flatpaks.iter().find(|f| f.name == name) else {
        bail!("Flatpak '{name}' not found");
    };

    println!();
    println!("  {}", flatpak.name.as_str().white().bold());

    for build in &flatpak.builds {
        print_build(build)?;
    }
    println!();

    Ok(())
}

fn print_build(build: &FlatpakBuild) -> Result<()> {
    let good = status::is_build_good(build);
    let badge = if good { "ok".green() } else { "STALE".red() };

    println!();
    println!(
        "  {} [{badge}]  {}",
        build.build.nvr.as_str().bold(),
        status::build_status_string(build).dark_grey()
    );

    let lw = 10;
    println!("  {:<lw$}{}", "build", links::koji_build_url(build.build.id));
    if let Some(time) = build.build.completion_time {
        println!("  {:<lw$}{}", "completed", ui::format_time(time));
    }
    if let Some(update) = &build.update {
        println!(
            "  {:<lw$}{} ({}, {})",
            "update",
            links::bodhi_update_url(&update.id),
            update.status.as_str(),
            update.update_type.as_str()
        );
    }

    for pkg in &build.packages {
        print_package(pkg)?;
    }

    Ok(())
}

fn print_package(pkg: &Package) -> Result<()> {
    let parsed = Nvr::parse(&pkg.build.nvr)?;
    let good = status::is_package_good(pkg);

    let marker = if good { " ".stylize() } else { "!".red() };
    let module = pkg
        .module_build
        .as_ref()
        .and_then(|m| Nvr::parse(&m.nvr).ok())
        .map_or(String::new(), |m| format!("  module:{}", m.name));

    println!(
        "    {marker} {} {}{}",
        ui::short_commit(&pkg.commit).dark_grey(),
        nvr::abbrev(&pkg.build.nvr),
        module.dark_grey()
    );
    println!(
        "        {}",
        links::distgit_commit_url(&parsed.name, &pkg.branch, &pkg.commit).dark_grey()
    );

    // Expanded history, newest first; mark the entry we are built from.
    for item in &pkg.history {
        let current = if item.commit == pkg.commit {
            "*".green()
        } else {
            " ".stylize()
        };
        let update = item.update.as_ref().map_or(String::new(), |u| {
            format!("  update:{} ({})", u.status.as_str(), u.update_type.as_str())
        });
        println!(
            "      {current} {} {}{}",
            ui::short_commit(&item.commit).dark_grey(),
            nvr::abbrev(&item.build.nvr),
            update.dark_grey()
        );
    }

    Ok(())
}
