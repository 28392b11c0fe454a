//! Migrate command implementation
//!
//! This module implements the `migrate` command for moving the academic
//! taxonomy and student records from MySQL to MongoDB.

use crate::adapters::mongodb::MongoTarget;
use crate::adapters::mysql::MySqlClient;
use crate::config::load_config;
use crate::core::MigrationRunner;
use clap::Args;
use std::sync::Arc;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - read and transform without writing to MongoDB
    #[arg(long)]
    pub dry_run: bool,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting migrate command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply dry-run flag from CLI
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No data will be written to MongoDB");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !config.application.dry_run {
            println!("Migration Configuration:");
            println!("  Source: {}", config.mysql.url_safe());
            println!("  Target: {}", config.mongodb.uri_safe());
            println!("  Database: {}", config.mongodb.database);
            println!();
            print!("Proceed with migration? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Migration cancelled.");
                return Ok(0);
            }
        }

        // Connect to the source
        let mysql = match MySqlClient::new(&config.mysql) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Invalid MySQL configuration");
                eprintln!("Failed to initialize MySQL client: {e}");
                return Ok(4); // Connection error exit code
            }
        };
        if let Err(e) = mysql.test_connection().await {
            tracing::error!(error = %e, "MySQL connection failed");
            eprintln!("Failed to connect to MySQL: {e}");
            return Ok(4);
        }

        // Connect to the target
        let mongo =
            match MongoTarget::connect(&config.mongodb, config.application.dry_run).await {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!(error = %e, "MongoDB connection failed");
                    eprintln!("Failed to connect to MongoDB: {e}");
                    return Ok(4);
                }
            };
        if let Err(e) = mongo.ping().await {
            tracing::error!(error = %e, "MongoDB ping failed");
            eprintln!("Failed to ping MongoDB: {e}");
            return Ok(4);
        }

        // Run the migration
        println!("🚀 Starting migration...");
        println!();

        let runner = MigrationRunner::new(
            Arc::new(mysql.clone()),
            Arc::new(mongo.clone()),
            config.mongodb.collections.clone(),
        );

        let summary = match runner.run().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Migration failed");
                eprintln!("Migration failed: {e}");
                close_connections(mysql, mongo).await;
                return Ok(5); // Fatal error exit code
            }
        };

        close_connections(mysql, mongo).await;

        // Display summary
        println!();
        println!("📊 Migration Summary:");
        println!(
            "  Streams: {}/{} migrated",
            summary.streams.migrated, summary.streams.read
        );
        println!(
            "  Courses: {}/{} migrated",
            summary.courses.migrated, summary.courses.read
        );
        println!(
            "  Topics: {}/{} migrated",
            summary.topics.migrated, summary.topics.read
        );
        println!(
            "  Subtopics: {}/{} migrated",
            summary.subtopics.migrated, summary.subtopics.read
        );
        println!(
            "  Concepts: {}/{} migrated",
            summary.concepts.migrated, summary.concepts.read
        );
        println!(
            "  Sub-concepts: {}/{} migrated",
            summary.sub_concepts.migrated, summary.sub_concepts.read
        );
        println!(
            "  Students: {}/{} migrated",
            summary.students.migrated, summary.students.read
        );
        println!("  Skipped: {}", summary.total_skipped());
        println!("  Failed: {}", summary.total_failed());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if !summary.diagnostics.is_empty() {
            println!("⚠️  Diagnostics:");
            for (i, line) in summary.diagnostics.iter().enumerate() {
                if i < 20 {
                    println!("  - {line}");
                }
            }
            if summary.diagnostics.len() > 20 {
                println!("  ... and {} more", summary.diagnostics.len() - 20);
            }
            println!();
        }

        let exit_code = if summary.is_clean() {
            println!("✅ Migration completed successfully!");
            0
        } else {
            println!("⚠️  Migration completed with skipped or failed rows");
            1 // Partial success
        };

        Ok(exit_code)
    }
}

/// Release the source pool and shut the target down
async fn close_connections(mysql: MySqlClient, mongo: MongoTarget) {
    if let Err(e) = mysql.close().await {
        tracing::warn!(error = %e, "MySQL disconnect failed");
    }
    mongo.close().await;
}
