//! # Run Command Module / 运行命令模块
//!
//! This module implements the harness run: fetch the test data if needed,
//! open the suite, run the selected test and write the summary.
//!
//! 此模块实现测试工具的运行流程：必要时获取测试数据，打开测试套件，
//! 运行所选测试并写入摘要。

use anyhow::{Context, Result};
use colored::*;
use std::env;

use crate::{
    cli::RunArgs,
    core::{
        config::{self, HarnessConfig},
        execution::run_suite,
        suite::TestSuite,
        thermal::ThermalSampler,
    },
    infra::{archive, command::SystemRunner, fs, t},
};

/// Executes a harness run with the provided arguments.
///
/// Test failures are recorded in the summary and do not make this return
/// an error. Errors come from loading the configuration, fetching the test
/// data or creating/rewriting the output file.
pub async fn execute(args: RunArgs) -> Result<()> {
    let work_dir = env::current_dir().context("Failed to determine the working directory")?;

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => HarnessConfig::default(),
    };
    if args.lang.is_none() {
        if let Some(language) = &config.language {
            crate::init(Some(language));
        }
    }

    let output_path = fs::output_path(&work_dir, &args.test_name, args.output.as_deref());

    archive::ensure_test_data(&work_dir, &config.data).await?;

    println!(
        "{}",
        t!("run.output_file", path = output_path.display()).cyan()
    );

    let runner = SystemRunner;
    let mut suite = TestSuite::create(
        &output_path,
        &work_dir,
        ThermalSampler::from_config(&config.thermal),
    )?;
    run_suite(&mut suite, &runner, &args.test_name, &config.detection).await;
    suite.finalize()
}
