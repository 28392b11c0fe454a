//! Adapter abstraction traits
//!
//! These traits are the seam between the migration core and the two
//! stores. The runner only speaks `SourceReader` and `TargetWriter`, so
//! tests drive it with in-memory fakes.

use crate::domain::{Result, SourceRow};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

/// Read access to the relational source
#[async_trait]
pub trait SourceReader: Send + Sync {
    /// Fetch the full contents of one table as ordered rows
    ///
    /// Single pass: calling again re-queries the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or fetch fails. The caller treats
    /// this as fatal for the whole run.
    async fn fetch_table(&self, table: &str) -> Result<Vec<SourceRow>>;
}

/// Write access to the document target
#[async_trait]
pub trait TargetWriter: Send + Sync {
    /// Insert one document into the named collection
    ///
    /// # Returns
    ///
    /// The surrogate identifier generated by the store for the new
    /// document.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails; the caller decides whether
    /// that is contained per-row or fatal.
    async fn insert_document(&self, collection: &str, document: Document) -> Result<Bson>;
}
