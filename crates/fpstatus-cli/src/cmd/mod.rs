//! Command implementations.

pub mod check;
pub mod info;
pub mod report;

use anyhow::{Context, Result};
use fpstatus_schema::StatusIndex;

use crate::ops::fetch::{self, Source};

/// Load and validate the status document; the shared front half of every
/// command.
pub(crate) async fn load_validated(source: &Source) -> Result<StatusIndex> {
    let index = fetch::load(source)
        .await
        .with_context(|| format!("Failed to load status from {source}"))?;

    index
        .validate()
        .context("Status document failed validation")?;

    Ok(index)
}
