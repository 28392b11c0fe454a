//! Configuration management
//!
//! Loads the `trellis.toml` configuration, performs `${VAR}` environment
//! substitution and `TRELLIS_*` overrides, and validates the result.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CollectionNames, LoggingConfig, MongoDbConfig, MySqlConfig, TrellisConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
