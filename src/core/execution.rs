//! # Run Execution Module / 运行执行模块
//!
//! Drives one harness run against an open [`TestSuite`]: accelerator
//! detection (or the assumed count), system info, and exactly one test.
//! Steps run strictly one after another; no child process outlives its step.
//!
//! 针对已打开的 [`TestSuite`] 驱动一次运行：加速器检测（或假定数量）、
//! 系统信息，以及恰好一个测试。各步骤严格依次执行。

use colored::*;

use crate::core::config::DetectionConfig;
use crate::core::detect::AttachmentState;
use crate::core::planner::{self, RunPlan};
use crate::core::suite::TestSuite;
use crate::infra::command::ProcessRunner;
use crate::infra::t;

/// Runs the requested test inside `suite` and returns the plan that was
/// carried out. The suite is left open; finalizing it is up to the caller.
///
/// # Arguments
/// * `suite` - The open suite receiving output and results
/// * `runner` - Launches the detector, diagnostics and the test
/// * `test_name` - The `--test_name` selector
/// * `detection` - Whether to run the detector and gate on its result
pub async fn run_suite<R: ProcessRunner>(
    suite: &mut TestSuite,
    runner: &R,
    test_name: &str,
    detection: &DetectionConfig,
) -> RunPlan {
    let tpus = if detection.enabled {
        suite.detect_accelerators(runner, detection).await
    } else {
        suite.assume_attachment(AttachmentState::assumed(detection.assumed_tpus));
        suite.attachment().tpus
    };

    let plan = planner::plan_run(test_name, tpus, detection.enabled && detection.gate);
    if plan == RunPlan::NoAccelerators {
        println!("{}", t!("run.no_accelerators").red());
        return plan;
    }

    suite.print_system_info(runner).await;

    match &plan {
        RunPlan::Run(kind) => {
            println!("{}", t!("run.running_test", name = kind.name()).blue());
            let passed = suite.run_test(runner, &kind.invocation()).await;
            if passed {
                println!("{}", t!("run.test_passed", name = kind.name()).green());
            } else {
                println!("{}", t!("run.test_failed", name = kind.name()).red());
            }
        }
        RunPlan::NeedsMultipleTpus(kind) => {
            println!(
                "{}",
                t!("run.needs_multiple_tpus", name = kind.name(), count = tpus).yellow()
            );
        }
        RunPlan::Unrecognized(name) => {
            println!("{}", t!("run.unrecognized_test", name = name).yellow());
        }
        RunPlan::NoAccelerators => {}
    }

    plan
}
