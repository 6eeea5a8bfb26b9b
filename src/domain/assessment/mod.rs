//! Assessment module - the save/restore payload and its header fields.

mod snapshot;

pub use snapshot::{AssessmentMeta, AssessmentSnapshot, SnapshotError};
