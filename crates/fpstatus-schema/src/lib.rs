//! fpstatus-schema - data model and status evaluator
//!
//! Typed model for the `status.json` document produced by the Flatpak
//! status updater, plus the pure classifier functions that derive
//! good/bad/security badges from it.
//!
//! The intended flow is parse → [`StatusIndex::validate`] →
//! [`report::StatusReport::from_index`]; after validation every
//! classifier in [`status`] is a total function.

pub mod nvr;
pub mod report;
pub mod status;
pub mod types;

// Re-exports
pub use nvr::{Nvr, NvrError};
pub use report::{BuildReport, FlatpakReport, StatusReport};
pub use types::{
    BuildRef, Flatpak, FlatpakBuild, HistoryItem, MalformedRecordError, Package, StatusIndex,
    UpdateRef, UpdateStatus, UpdateType,
};
