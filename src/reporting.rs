//! # Reporting Module / 报告模块
//!
//! This module composes the compatibility summary that is prepended to the
//! output file and renders it, with colors, on the console.
//!
//! 此模块生成添加到输出文件开头的兼容性摘要，
//! 并在控制台上以彩色方式显示。

pub mod console;
pub mod summary;

// Re-export common reporting functions
pub use console::print_summary;
pub use summary::{compose_summary, format_celsius, thermal_block};
