//! fpstatus - Flatpak freshness dashboard
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Terminal front end for the `status.json` document produced by the
//! Flatpak status updater.
//!
//! # Overview
//!
//! `fpstatus` loads the status document from a local file or a URL,
//! validates it, computes a [`fpstatus_schema::StatusReport`], and
//! renders it: a one-line-per-Flatpak overview (`report`), a full
//! drill-down with build/update/commit links (`info`), or a
//! machine-friendly gate (`check`).
//!
//! The document is a single immutable snapshot per invocation; there is
//! no polling, caching, or retry.

pub mod cmd;
pub mod ops;
pub mod ui;

pub use ops::fetch::{FetchError, Source};

/// User agent sent on status document fetches.
pub const USER_AGENT: &str = concat!("fpstatus/", env!("CARGO_PKG_VERSION"));

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fpstatus")]
#[command(author, version, about = "Flatpak build/update freshness dashboard")]
pub struct Cli {
    /// Read the status document from a local file (default: ./status.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Fetch the status document from a URL instead of a file
    #[arg(long, global = true, value_name = "URL", conflicts_with = "file")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// One-line freshness summary per Flatpak
    Report,
    /// Builds, packages, and history for one Flatpak
    Info {
        /// Flatpak name, e.g. eog
        name: String,
    },
    /// Exit non-zero if anything is out of date
    Check {
        /// Flatpak names to check (default: all)
        names: Vec<String>,
    },
}

impl Cli {
    /// Resolve the document source from the global flags.
    pub fn source(&self) -> Source {
        match (&self.url, &self.file) {
            (Some(url), _) => Source::Url(url.clone()),
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => Source::File(PathBuf::from("status.json")),
        }
    }
}
