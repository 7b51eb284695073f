//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the harness,
//! including the run record, accelerator detection, the dispatch table
//! and the test suite that owns the output file.
//!
//! 此模块包含测试工具的核心功能，
//! 包括运行记录、加速器检测、调度表以及持有输出文件的测试套件。

pub mod catalog;
pub mod config;
pub mod detect;
pub mod execution;
pub mod models;
pub mod planner;
pub mod suite;
pub mod sysinfo;
pub mod thermal;

// Re-exports
pub use catalog::TestKind;
pub use config::HarnessConfig;
pub use detect::AttachmentState;
pub use execution::run_suite;
pub use suite::TestSuite;
