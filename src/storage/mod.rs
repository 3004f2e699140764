//! Append-only snapshot persistence.

pub mod snapshot;

pub use snapshot::{
    append_snapshot, append_snapshot_with, render_snapshot, try_append_snapshot, SnapshotFormat,
    SNAPSHOT_SCHEMA_VERSION,
};
