//! # Configuration Module / 配置模块
//!
//! Optional TOML configuration for the harness. Every field has a default,
//! so running without a config file (or with an empty one) reproduces the
//! stock behavior: pinned test data, detection bypassed with one assumed
//! TPU, temperatures read from `/sys/class/apex`.
//!
//! 测试工具的可选 TOML 配置。每个字段都有默认值，
//! 因此不使用配置文件（或使用空文件）即为默认行为。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Commit of the google-coral/test_data repository the tests were built against.
pub const TEST_DATA_COMMIT: &str = "c21de4450f88a20ac5968628d375787745932a5a";

/// Top-level harness configuration.
/// 测试工具的顶层配置。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Language for console status messages (e.g., "en", "zh-CN").
    /// `--lang` takes precedence; the system locale is used when both are absent.
    ///
    /// 控制台状态消息的语言（例如 "en", "zh-CN"）。
    pub language: Option<String>,
    pub data: DataConfig,
    pub detection: DetectionConfig,
    pub thermal: ThermalConfig,
}

/// Where the test data archive comes from and where it lands.
/// 测试数据归档的来源及其存放位置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// Pinned commit; names both the archive and its top-level directory.
    pub commit: String,
    /// URL prefix the archive name `<commit>.zip` is appended to.
    pub base_url: String,
    /// Prefix of the directory inside the archive (`<prefix>-<commit>`).
    pub archive_prefix: String,
    /// Stable directory name under the working directory.
    pub dir_name: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            commit: TEST_DATA_COMMIT.to_string(),
            base_url: "https://github.com/google-coral/test_data/archive/".to_string(),
            archive_prefix: "test_data".to_string(),
            dir_name: "test_data".to_string(),
        }
    }
}

/// Accelerator detection policy.
/// 加速器检测策略。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Run `lstpu` before the tests. When `false` the detector is skipped and
    /// `assumed_tpus` is used instead, with no PCI/USB attachment known.
    pub enabled: bool,
    /// Device count assumed when detection is disabled.
    pub assumed_tpus: usize,
    /// With detection enabled, skip the test when no accelerator was found.
    pub gate: bool,
    /// Detection utility, resolved relative to the working directory.
    pub program: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            assumed_tpus: 1,
            gate: true,
            program: "lstpu".to_string(),
        }
    }
}

/// Temperature sampling settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThermalConfig {
    /// Directory holding one `apex_*` entry per PCI accelerator.
    pub sysfs_root: PathBuf,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            sysfs_root: PathBuf::from("/sys/class/apex"),
        }
    }
}

/// Loads a harness configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path of the configuration file
///
/// # Returns
/// The parsed configuration, or an error if the file can't be read or parsed
pub fn load_config(path: &Path) -> Result<HarnessConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parses a harness configuration from TOML text.
pub fn parse_config(content: &str) -> Result<HarnessConfig> {
    Ok(toml::from_str(content)?)
}
