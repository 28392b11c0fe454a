//! MongoDB client implementation
//!
//! Wraps the official driver behind the [`TargetWriter`] trait. One
//! document per insert, returning the store-generated surrogate id. In
//! dry-run mode nothing is written; a fresh ObjectId is handed back so
//! dependent passes still resolve parent references.

use crate::adapters::traits::TargetWriter;
use crate::config::MongoDbConfig;
use crate::domain::{Result, TargetError};
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;

/// MongoDB target client
///
/// Clones share the underlying driver client.
#[derive(Clone)]
pub struct MongoTarget {
    client: Client,
    database: Database,
    database_name: String,
    uri_safe: String,
    dry_run: bool,
}

impl MongoTarget {
    /// Connect to the target and select the configured database
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is invalid or the initial connection
    /// fails.
    pub async fn connect(config: &MongoDbConfig, dry_run: bool) -> Result<Self> {
        let client = Client::with_uri_str(config.uri.expose_secret().as_ref())
            .await
            .map_err(|e| TargetError::ConnectionFailed(e.to_string()))?;

        let database = client.database(&config.database);

        Ok(Self {
            client,
            database,
            database_name: config.database.clone(),
            uri_safe: config.uri_safe(),
            dry_run,
        })
    }

    /// Test the connection with a ping
    pub async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| TargetError::PingFailed(e.to_string()))?;

        tracing::info!(
            uri = %self.uri_safe,
            database = %self.database_name,
            "MongoDB connection test successful"
        );
        Ok(())
    }

    /// Shut down the client
    ///
    /// Called in the run teardown path regardless of outcome.
    pub async fn close(self) {
        self.client.shutdown().await;
    }

    /// The logical database name
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

#[async_trait]
impl TargetWriter for MongoTarget {
    async fn insert_document(&self, collection: &str, document: Document) -> Result<Bson> {
        if self.dry_run {
            tracing::debug!(collection = %collection, "Dry run - skipping insert");
            return Ok(Bson::ObjectId(ObjectId::new()));
        }

        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| TargetError::InsertFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(result.inserted_id)
    }
}
