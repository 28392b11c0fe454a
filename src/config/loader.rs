//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::TrellisConfig;
use crate::config::secret_string;
use crate::domain::errors::TrellisError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into TrellisConfig
/// 4. Applies environment variable overrides (TRELLIS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use trellis::config::load_config;
///
/// let config = load_config("trellis.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TrellisConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrellisError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TrellisError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: TrellisConfig = toml::from_str(&contents)
        .map_err(|e| TrellisError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        TrellisError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(TrellisError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using TRELLIS_* prefix
///
/// Environment variables follow the pattern: TRELLIS_<SECTION>_<KEY>
/// For example: TRELLIS_MYSQL_URL, TRELLIS_MONGODB_DATABASE
fn apply_env_overrides(config: &mut TrellisConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("TRELLIS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("TRELLIS_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // MySQL overrides
    if let Ok(val) = std::env::var("TRELLIS_MYSQL_URL") {
        config.mysql.url = secret_string(val);
    }

    // MongoDB overrides
    if let Ok(val) = std::env::var("TRELLIS_MONGODB_URI") {
        config.mongodb.uri = secret_string(val);
    }
    if let Ok(val) = std::env::var("TRELLIS_MONGODB_DATABASE") {
        config.mongodb.database = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("TRELLIS_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("TRELLIS_LOGGING_FILE_PATH") {
        config.logging.file_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("TRELLIS_TEST_VAR", "test_value");
        let input = "url = \"${TRELLIS_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "url = \"test_value\"\n");
        std::env::remove_var("TRELLIS_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("TRELLIS_MISSING_VAR");
        let input = "url = \"${TRELLIS_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# this ${NOT_A_VAR} is a comment\nkey = \"value\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${NOT_A_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "info"

[mysql]
url = "mysql://root:pw@localhost:3306/icad_online"

[mongodb]
uri = "mongodb://localhost:27017"
database = "ai_icad"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.mongodb.database, "ai_icad");
        assert_eq!(config.mongodb.collections.streams, "streams");
        assert!(!config.application.dry_run);
    }

    #[test]
    fn test_load_config_invalid_scheme_rejected() {
        let toml_content = r#"
[mysql]
url = "postgres://localhost/db"

[mongodb]
uri = "mongodb://localhost:27017"
database = "ai_icad"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
