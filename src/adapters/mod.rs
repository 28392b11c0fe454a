//! External integrations
//!
//! Adapters wrap the two database drivers behind the domain traits so the
//! migration core never sees driver types.

pub mod mongodb;
pub mod mysql;
pub mod traits;

pub use traits::{SourceReader, TargetWriter};
