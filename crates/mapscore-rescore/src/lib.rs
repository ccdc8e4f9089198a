//! # mapscore-rescore
//!
//! Recomputes the double-time performance points of every map in the store.
//! The enumerator snapshots the id list, the rescorer scores each map's
//! asset through an `IScoringOracle` and the store commits every staged
//! update in one transaction.

pub mod cli;
pub mod enumerator;
pub mod errors;
pub mod oracle;
pub mod report;
pub mod rescorer;

pub use enumerator::{enumerate_records, RecordSnapshot};
pub use errors::RescoreError;
pub use oracle::OppaiOracle;
pub use report::{RunReport, SkippedRecord};
pub use rescorer::BatchRescorer;
