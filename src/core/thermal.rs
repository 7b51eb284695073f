//! # Thermal Sampling Module / 温度采样模块
//!
//! Reads Edge TPU temperatures exposed by the apex driver. Each PCI
//! accelerator has a directory `apex_<n>` whose `temp` file holds the
//! temperature in millidegrees Celsius.
//!
//! 读取 apex 驱动暴露的 Edge TPU 温度。每个 PCI 加速器都有一个 `apex_<n>` 目录，
//! 其中的 `temp` 文件以毫摄氏度为单位保存温度。
//!
//! Sampling is best effort: missing directories, unreadable files and
//! non-numeric content yield no reading.

use std::fs;
use std::path::PathBuf;

use crate::core::config::ThermalConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThermalSampler {
    root: PathBuf,
}

impl Default for ThermalSampler {
    fn default() -> Self {
        Self::from_config(&ThermalConfig::default())
    }
}

impl ThermalSampler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &ThermalConfig) -> Self {
        Self::new(config.sysfs_root.clone())
    }

    /// Returns every temperature that could be read, in degrees Celsius.
    pub fn sample(&self) -> Vec<f64> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut devices: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("apex_"))
            .map(|entry| entry.path().join("temp"))
            .collect();
        devices.sort();

        devices
            .iter()
            .filter_map(|path| fs::read_to_string(path).ok())
            .flat_map(|content| parse_millidegrees(&content))
            .collect()
    }

    /// The hottest reading, if any.
    pub fn peak(&self) -> Option<f64> {
        self.sample().into_iter().reduce(f64::max)
    }
}

/// Converts each numeric line of a `temp` file to degrees Celsius.
pub fn parse_millidegrees(content: &str) -> Vec<f64> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|millidegrees| millidegrees / 1000.0)
        .collect()
}
