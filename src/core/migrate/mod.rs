//! Migration pipeline

pub mod runner;
pub mod summary;

pub use runner::MigrationRunner;
pub use summary::{EntityCounts, MigrationSummary};
