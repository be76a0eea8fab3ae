//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

/// One day; anything longer is almost certainly a typo
const MAX_RETRY_PERIOD_SECS: u64 = 24 * 60 * 60;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{path_str}'"));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{path_str}'"));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{path_str}': {e}")),
    }
}

/// Validate the poll interval is a positive number of seconds
pub fn validate_retry_period(secs_str: &str) -> Result<u64, String> {
    let secs: u64 = secs_str
        .parse()
        .map_err(|_| format!("Retry period must be a positive number of seconds, got: '{secs_str}'"))?;

    if secs == 0 {
        return Err("Retry period must be greater than 0".to_string());
    }

    if secs > MAX_RETRY_PERIOD_SECS {
        return Err(format!(
            "Retry period cannot exceed {MAX_RETRY_PERIOD_SECS} seconds"
        ));
    }

    Ok(secs)
}

/// Validate the start timestamp is a non-negative Unix time
pub fn validate_from_date(ts_str: &str) -> Result<i64, String> {
    let ts: i64 = ts_str
        .trim()
        .parse()
        .map_err(|_| format!("From date must be a Unix timestamp in seconds, got: '{ts_str}'"))?;

    if ts < 0 {
        return Err("From date cannot be negative".to_string());
    }

    Ok(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_file_path_valid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[poller]\nretry_period = 60").unwrap();

        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());
    }

    #[test]
    fn test_config_file_path_missing() {
        let err = validate_config_file_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_config_file_path_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }

    #[test]
    fn test_retry_period_valid() {
        for (input, expected) in [("1", 1), ("600", 600), ("86400", 86400)] {
            assert_eq!(validate_retry_period(input), Ok(expected));
        }
    }

    #[test]
    fn test_retry_period_invalid() {
        for input in ["0", "86401", "-5", "abc", ""] {
            assert!(
                validate_retry_period(input).is_err(),
                "Retry period {input} should be invalid"
            );
        }
    }

    #[test]
    fn test_from_date_valid() {
        assert_eq!(validate_from_date("0"), Ok(0));
        assert_eq!(validate_from_date("1549962000"), Ok(1549962000));
    }

    #[test]
    fn test_from_date_invalid() {
        assert!(validate_from_date("-1").unwrap_err().contains("negative"));
        assert!(validate_from_date("yesterday").is_err());
        assert!(validate_from_date("").is_err());
    }
}
