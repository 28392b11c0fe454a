//! Core migration logic
//!
//! - [`idmap`]: natural-key to surrogate-id maps built during a run
//! - [`transform`]: pure row-to-document transformers
//! - [`migrate`]: the pass runner and its summary

pub mod idmap;
pub mod migrate;
pub mod transform;

pub use idmap::IdMap;
pub use migrate::{MigrationRunner, MigrationSummary};
