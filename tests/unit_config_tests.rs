//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for parsing the optional harness configuration.
//!
//! 测试可选的测试工具配置的解析。

use coral_cts::config::{
    DataConfig, DetectionConfig, HarnessConfig, TEST_DATA_COMMIT, load_config, parse_config,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod defaults_tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.language, None);
        assert_eq!(config.data.commit, TEST_DATA_COMMIT);
        assert_eq!(
            config.data.base_url,
            "https://github.com/google-coral/test_data/archive/"
        );
        assert_eq!(config.data.dir_name, "test_data");
        assert!(!config.detection.enabled);
        assert_eq!(config.detection.assumed_tpus, 1);
        assert!(config.detection.gate);
        assert_eq!(config.detection.program, "lstpu");
        assert_eq!(config.thermal.sysfs_root, PathBuf::from("/sys/class/apex"));
    }
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = parse_config(
            r#"
            language = "zh-CN"

            [detection]
            enabled = true

            [thermal]
            sysfs_root = "/tmp/apex"
            "#,
        )
        .unwrap();

        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(
            config.detection,
            DetectionConfig {
                enabled: true,
                ..DetectionConfig::default()
            }
        );
        assert_eq!(config.thermal.sysfs_root, PathBuf::from("/tmp/apex"));
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_custom_data_source() {
        let config = parse_config(
            r#"
            [data]
            commit = "0123abcd"
            base_url = "https://mirror.example.com/archive/"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.commit, "0123abcd");
        assert_eq!(config.data.base_url, "https://mirror.example.com/archive/");
        assert_eq!(config.data.archive_prefix, "test_data");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[detection\nenabled = true").is_err());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(parse_config("[detection]\nassumed_tpus = \"two\"").is_err());
    }
}

#[cfg(test)]
mod load_config_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cts.toml");
        fs::write(&path, "[detection]\nenabled = true\ngate = false\n").unwrap();

        let config = load_config(&path).unwrap();

        assert!(config.detection.enabled);
        assert!(!config.detection.gate);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let error = load_config(&path).unwrap_err();

        assert!(format!("{error:#}").contains("missing.toml"));
    }
}
