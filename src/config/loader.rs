//! Configuration loader for YAML files
//!
//! This module handles loading and validating configuration from YAML files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::BridgeError;

use super::types::BridgeConfig;

/// Load configuration from a YAML file
///
/// This function:
/// 1. Checks if the file exists
/// 2. Parses the YAML content
/// 3. Validates the configuration rules
pub fn load_config(path: &Path) -> Result<BridgeConfig, BridgeError> {
    if !path.exists() {
        return Err(BridgeError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let config: BridgeConfig = serde_yaml::from_reader(reader).map_err(|e| {
        BridgeError::Config(format!("YAML parse error in '{}': {}", path.display(), e))
    })?;

    config.validate()?;

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing)
pub fn load_config_from_str(yaml_content: &str) -> Result<BridgeConfig, BridgeError> {
    let config: BridgeConfig = serde_yaml::from_str(yaml_content)
        .map_err(|e| BridgeError::Config(format!("YAML parse error: {}", e)))?;

    config.validate()?;

    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_CONFIG_YAML: &str = r#"
bridge:
  poll_interval_seconds: 2.0
  state_db_path: state/bridge.db
  feed:
    type: jsonl_file
    jsonl_path: data/events.jsonl
  dispatcher:
    queue_base_path: queue
    inbox_subdir: inbox
    processed_subdir: processed
    failed_subdir: failed
    max_write_retries: 3
    retry_backoff_seconds: 0.5
trading:
  symbol_map:
    XAUUSD: GOLD
"#;

    #[test]
    fn test_load_config_from_str_valid() {
        let config = load_config_from_str(VALID_CONFIG_YAML).unwrap();
        assert_eq!(config.bridge.poll_interval_seconds, 2.0);
        assert_eq!(config.bridge.dispatcher.max_write_retries, 3);
        assert_eq!(config.trading.symbol_map["XAUUSD"], "GOLD");
    }

    #[test]
    fn test_load_config_from_str_invalid_yaml() {
        let invalid_yaml = "invalid: yaml: content: [";
        let result = load_config_from_str(invalid_yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_from_str_validation_failure() {
        let invalid_config = r#"
bridge:
  poll_interval_seconds: 2.0
  state_db_path: state/bridge.db
  feed:
    type: jsonl_file
    jsonl_path: data/events.jsonl
  dispatcher:
    queue_base_path: queue
    inbox_subdir: inbox
    processed_subdir: processed
    failed_subdir: failed
    max_write_retries: 0
    retry_backoff_seconds: 0.5
"#;
        let result = load_config_from_str(invalid_config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("max_write_retries must be >= 1"));
    }

    #[test]
    fn test_load_config_unsupported_feed_type() {
        let invalid_config = r#"
bridge:
  poll_interval_seconds: 2.0
  state_db_path: state/bridge.db
  feed:
    type: smoke_signals
  dispatcher:
    queue_base_path: queue
    inbox_subdir: inbox
    processed_subdir: processed
    failed_subdir: failed
    max_write_retries: 3
    retry_backoff_seconds: 0.5
"#;
        let result = load_config_from_str(invalid_config);
        assert!(result.is_err(), "unsupported feed type must fail fast");
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Configuration file not found"));
    }

    #[test]
    fn test_load_config_from_file_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(VALID_CONFIG_YAML.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.bridge.feed.jsonl_path.as_deref(),
            Some("data/events.jsonl")
        );
    }

    #[test]
    fn test_load_config_from_file_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"invalid: [yaml: content").unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }
}
