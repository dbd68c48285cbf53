//! Persistence module for state serialization
//!
//! Provides snapshot export/import for the open windows of a desktop session.

mod snapshot;

pub use snapshot::Snapshot;
