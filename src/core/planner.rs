//! # Run Planner Module / 运行计划模块
//!
//! Decides which test, if any, a run executes given the requested test name
//! and the number of accelerators known to be attached.
//!
//! 根据请求的测试名称和已知连接的加速器数量，决定本次运行执行哪个测试（如果有）。

use crate::core::catalog::TestKind;

/// The outcome of planning a run.
/// 运行计划的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunPlan {
    /// Run this test.
    Run(TestKind),
    /// The test needs more than one accelerator and fewer were found.
    NeedsMultipleTpus(TestKind),
    /// Detection gating is on and no accelerator was found.
    NoAccelerators,
    /// The name matched nothing in the catalog; nothing runs.
    Unrecognized(String),
}

/// Creates the plan for a run.
///
/// # Arguments
/// * `test_name` - The requested test, matched exactly
/// * `tpus` - Number of accelerators detected (or assumed)
/// * `gate_on_missing` - Skip everything when `tpus` is zero
pub fn plan_run(test_name: &str, tpus: usize, gate_on_missing: bool) -> RunPlan {
    if gate_on_missing && tpus == 0 {
        return RunPlan::NoAccelerators;
    }

    match TestKind::from_name(test_name) {
        Some(kind) if kind.requires_multiple_tpus() && tpus <= 1 => {
            RunPlan::NeedsMultipleTpus(kind)
        }
        Some(kind) => RunPlan::Run(kind),
        None => RunPlan::Unrecognized(test_name.to_string()),
    }
}
