//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Trellis configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  MySQL Source: {}", config.mysql.url_safe());
        println!("  MongoDB Target: {}", config.mongodb.uri_safe());
        println!("  MongoDB Database: {}", config.mongodb.database);
        println!(
            "  Collections: {}, {}, {}, {}, {}, {}, {}, {}",
            config.mongodb.collections.streams,
            config.mongodb.collections.courses,
            config.mongodb.collections.topics,
            config.mongodb.collections.subtopics,
            config.mongodb.collections.subtopics_mirror,
            config.mongodb.collections.concepts,
            config.mongodb.collections.sub_concepts,
            config.mongodb.collections.students,
        );
        println!();
        Ok(0)
    }
}
