//! # Summary Module / 摘要模块
//!
//! Text of the compatibility summary and the temperature block. The output
//! file format is fixed and not localized.
//!
//! 兼容性摘要和温度区块的文本。输出文件格式是固定的，不做本地化。

use crate::core::models::{RunRecord, ThermalRecord};

/// Banner that opens the summary.
pub const CTS_HEADER: &str = "#####################################################
        Coral Compatibility Test Suite
#####################################################\n\n";

/// Rule printed above and below section titles.
pub const SECTION_RULE: &str = "-----------------------------------------------------\n";

/// Separator between the summary and the captured output.
pub const SUMMARY_SEPARATOR: &str = "\n\n";

/// Renders a temperature the way the reports always have: at least one
/// decimal place (`52.0`, `41.5`).
pub fn format_celsius(celsius: f64) -> String {
    format!("{celsius:?}")
}

/// Text of a section header: a rule, the title, a rule.
pub fn section_header(title: &str) -> String {
    format!("\n{SECTION_RULE}{title}\n{SECTION_RULE}")
}

/// Composes the summary prepended to the output file.
///
/// # Output Format / 输出格式
/// ```text
/// #####################################################
///         Coral Compatibility Test Suite
/// #####################################################
///
/// lstpu: Passed
/// tflite_utils_test: Failed
///
/// Max Temperature (C): 52.0
/// Overall Compatibility: Failed
/// ```
///
/// The max temperature line is present only when temperatures were recorded.
/// Overall compatibility passes iff every recorded result passed, including
/// when nothing was recorded.
pub fn compose_summary(results: &RunRecord, thermals: &ThermalRecord) -> String {
    let mut summary = String::from(CTS_HEADER);
    for (test, passed) in results.iter() {
        summary.push_str(test);
        summary.push_str(": ");
        summary.push_str(verdict(*passed));
        summary.push('\n');
    }
    if let Some(max) = thermals.max_celsius() {
        summary.push_str("\nMax Temperature (C): ");
        summary.push_str(&format_celsius(max));
    }
    summary.push_str("\nOverall Compatibility: ");
    summary.push_str(verdict(results.all_passed()));
    summary.push('\n');
    summary
}

/// The "Temperatures During Tests" block written to the output before it is
/// finalized.
pub fn thermal_block(thermals: &ThermalRecord) -> String {
    let mut block = section_header("Temperatures During Tests");
    for (test, celsius) in thermals.iter() {
        block.push_str(&format!("{test}: {}\n", format_celsius(*celsius)));
    }
    block.push('\n');
    block
}

fn verdict(passed: bool) -> &'static str {
    if passed { "Passed" } else { "Failed" }
}
