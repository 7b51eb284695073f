//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the harness,
//! including command execution, the test data download and file system operations.
//!
//! 此模块为测试工具提供基础设施服务，
//! 包括命令执行、测试数据下载和文件系统操作。

pub mod archive;
pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
