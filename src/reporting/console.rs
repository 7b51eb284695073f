//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the composed summary to the console, coloring the
//! verdict of each line.
//!
//! 此模块将生成的摘要打印到控制台，并为每行的结论着色。

use colored::*;

/// Prints a summary composed by [`compose_summary`](super::compose_summary),
/// preceded by a blank line.
///
/// 打印摘要，前面加一个空行。
pub fn print_summary(summary: &str) {
    println!();
    for line in summary.lines() {
        println!("{}", colorize_line(line));
    }
}

/// Colors `Passed` green and `Failed` red at the end of a `name: verdict` line;
/// the overall verdict is also bold.
pub fn colorize_line(line: &str) -> String {
    let Some((label, verdict)) = line.rsplit_once(": ") else {
        return line.to_string();
    };
    let overall = label == "Overall Compatibility";
    let colored = match verdict {
        "Passed" => verdict.green(),
        "Failed" => verdict.red(),
        _ => return line.to_string(),
    };
    let colored = if overall { colored.bold() } else { colored };
    format!("{label}: {colored}")
}
