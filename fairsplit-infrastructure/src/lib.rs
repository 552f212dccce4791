#![warn(clippy::uninlined_format_args)]

pub mod memory_store;
pub mod snapshot;

pub use memory_store::InMemoryEventStore;
pub use snapshot::{EventSnapshot, SnapshotError, load_snapshot};
