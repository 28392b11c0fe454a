// Trellis - MySQL to MongoDB Migration Tool
// Copyright (c) 2025 Trellis Contributors
// Licensed under the MIT License

//! # Trellis - MySQL to MongoDB Migration
//!
//! Trellis is an ETL tool built in Rust that migrates an academic taxonomy
//! (streams, courses, topics, subtopics, concepts, sub-concepts) and student
//! enrollment records from a relational MySQL schema into MongoDB document
//! collections.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** rows from the MySQL source, one `SELECT *` per table
//! - **Transforming** flat rows into typed documents, including the nested
//!   student document and the fixed five-slot installment array
//! - **Loading** documents into MongoDB one insert at a time, threading the
//!   store-generated surrogate ids into dependent passes
//!
//! ## Architecture
//!
//! Trellis follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (id maps, transformers, the pass runner)
//! - [`adapters`] - External integrations (MySQL, MongoDB)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trellis::adapters::mongodb::MongoTarget;
//! use trellis::adapters::mysql::MySqlClient;
//! use trellis::config::load_config;
//! use trellis::core::MigrationRunner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("trellis.toml")?;
//!
//!     let mysql = MySqlClient::new(&config.mysql)?;
//!     let mongo = MongoTarget::connect(&config.mongodb, false).await?;
//!
//!     let runner = MigrationRunner::new(
//!         Arc::new(mysql),
//!         Arc::new(mongo),
//!         config.mongodb.collections.clone(),
//!     );
//!     let summary = runner.run().await?;
//!
//!     println!("Migrated {} documents", summary.total_migrated());
//!     Ok(())
//! }
//! ```
//!
//! ## Pass Ordering
//!
//! Passes run sequentially in dependency order; each pass records the
//! surrogate id of every document it writes, keyed by the source row's
//! natural key, so the next pass can resolve its parent references:
//!
//! ```text
//! streams → courses → topics → subtopics → concepts → sub-concepts → students
//! ```
//!
//! A taxonomy row whose parent key was never mapped is skipped with a
//! diagnostic. A student row with an unmapped course is still written,
//! with the course reference absent.
//!
//! ## Error Handling
//!
//! Trellis uses the [`domain::TrellisError`] type for all errors:
//!
//! ```rust,no_run
//! use trellis::domain::TrellisError;
//!
//! fn example() -> Result<(), TrellisError> {
//!     let config = trellis::config::load_config("trellis.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
