//! # Coral CTS Library / Coral CTS 库
//!
//! This library provides the core functionality for the Coral Compatibility Test
//! Suite runner. It fetches the pinned test data, detects attached Edge TPUs,
//! runs one pre-built test executable and prepends a pass/fail summary to the
//! captured output file.
//!
//! 此库为 Coral 兼容性测试套件运行器提供核心功能。
//! 它获取固定版本的测试数据，检测已连接的 Edge TPU，
//! 运行一个预构建的测试可执行文件，并将通过/失败摘要添加到输出文件开头。
//!
//! ## Modules / 模块
//!
//! - `core` - Run record, accelerator detection, dispatch table and the suite itself
//! - `infra` - Process execution, archive download and file system helpers
//! - `reporting` - Summary composition and console rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 运行记录、加速器检测、调度表以及测试套件本身
//! - `infra` - 进程执行、归档下载和文件系统辅助功能
//! - `reporting` - 摘要生成和控制台渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::execution;
pub use core::suite;

/// Initializes the application's internationalization (i18n).
///
/// An explicitly requested language wins. Otherwise the system locale is
/// detected; the full locale (e.g., "zh-CN") is tried first, then just the
/// language code (e.g., "en"), and finally the default language ("en").
pub fn init(preferred: Option<&str>) {
    let locale = preferred
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
