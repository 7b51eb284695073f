//! # Commands Module / 命令模块
//!
//! Implementations of the harness commands.
//!
//! 测试工具命令的实现。

pub mod run;
