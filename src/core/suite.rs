//! # Test Suite Module / 测试套件模块
//!
//! [`TestSuite`] owns everything one harness run accumulates: the output
//! sink, the pass/fail record, the temperature record and the attachment
//! state. When it is finalized, explicitly or on drop, the summary is
//! prepended to the output file.
//!
//! [`TestSuite`] 持有一次运行累积的所有内容：输出接收器、通过/失败记录、
//! 温度记录和连接状态。在显式完成或被丢弃时，摘要会被添加到输出文件开头。

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::config::DetectionConfig;
use crate::core::detect::AttachmentState;
use crate::core::models::{RunRecord, ThermalRecord};
use crate::core::sysinfo::{self, Diagnostic};
use crate::core::thermal::ThermalSampler;
use crate::infra::command::{Invocation, ProcessRunner};
use crate::infra::fs::{self, Sink};
use crate::reporting::{self, summary};

/// Result name under which accelerator detection is recorded.
pub const DETECTION_RESULT: &str = "lstpu";

pub struct TestSuite {
    sink: Sink,
    work_dir: PathBuf,
    results: RunRecord,
    thermals: ThermalRecord,
    attachment: Option<AttachmentState>,
    sampler: ThermalSampler,
    linux: bool,
    finalized: bool,
}

impl TestSuite {
    /// Opens a suite writing to `output`. Executables are resolved in `work_dir`.
    pub fn create(output: &Path, work_dir: &Path, sampler: ThermalSampler) -> Result<Self> {
        Ok(Self {
            sink: Sink::create(output)?,
            work_dir: work_dir.to_path_buf(),
            results: RunRecord::new(),
            thermals: ThermalRecord::new(),
            attachment: None,
            sampler,
            linux: sysinfo::is_linux(),
            finalized: false,
        })
    }

    /// Stops mirroring the output to stdout. The summary is still printed.
    pub fn quiet(mut self) -> Self {
        self.sink.set_echo(false);
        self
    }

    /// Overrides platform detection for the Linux-only steps
    /// (OS diagnostics and temperature sampling).
    pub fn with_linux(mut self, linux: bool) -> Self {
        self.linux = linux;
        self
    }

    pub fn results(&self) -> &RunRecord {
        &self.results
    }

    pub fn thermals(&self) -> &ThermalRecord {
        &self.thermals
    }

    /// The attachment state, or the empty state before detection.
    pub fn attachment(&self) -> AttachmentState {
        self.attachment.unwrap_or_default()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn record_result(&mut self, test: &str, passed: bool) {
        self.results.insert(test, passed);
    }

    pub fn record_thermal(&mut self, test: &str, celsius: f64) {
        self.thermals.insert(test, celsius);
    }

    /// Writes `text` to the output file and the console.
    pub fn print(&mut self, text: &str) {
        self.sink.print(text);
    }

    fn print_section(&mut self, title: &str) {
        self.sink.print(&summary::section_header(title));
    }

    /// Sets the attachment state without running the detector.
    /// Has no effect once a state is known.
    pub fn assume_attachment(&mut self, state: AttachmentState) {
        self.attachment.get_or_insert(state);
    }

    /// Runs the detection utility and records `lstpu` as passed iff at least
    /// one accelerator was listed. Returns the accelerator count.
    ///
    /// Has no effect once a state is known; the known count is returned.
    pub async fn detect_accelerators<R: ProcessRunner>(
        &mut self,
        runner: &R,
        detection: &DetectionConfig,
    ) -> usize {
        if let Some(state) = self.attachment {
            return state.tpus;
        }

        self.print_section("Detected TPUs (lstpu)");
        let invocation = Invocation::new(&detection.program, Vec::<String>::new())
            .resolved_in(&self.work_dir);

        let mut state = AttachmentState::default();
        let sink = &mut self.sink;
        let outcome = runner
            .run(&invocation, &mut |line: &str| {
                state.observe(line);
                sink.print_line(line);
            })
            .await;
        if let Err(e) = outcome {
            self.sink.print_line(&e.to_string());
        }

        self.attachment = Some(state);
        if state.tpus > 0 {
            self.record_result(DETECTION_RESULT, true);
        } else {
            self.record_result(DETECTION_RESULT, false);
            self.sink.print("No TPUs detected\n");
        }
        state.tpus
    }

    /// Prints the platform and, on Linux, the diagnostics matching the
    /// attachment state.
    pub async fn print_system_info<R: ProcessRunner>(&mut self, runner: &R) {
        self.print_section("System Info");
        self.sink.print_line(&sysinfo::platform_string());
        self.sink.print_line(&format!(
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S %z")
        ));

        if self.linux {
            for diagnostic in sysinfo::diagnostics_for(&self.attachment()) {
                self.run_system_command(runner, &diagnostic).await;
            }
        }
    }

    /// Runs a diagnostic command, echoing the lines that pass its filter.
    /// Failures are reported as text only.
    pub async fn run_system_command<R: ProcessRunner>(&mut self, runner: &R, diagnostic: &Diagnostic) {
        self.sink.print(&format!("\n***** {} *****\n", diagnostic.header));
        let filter = diagnostic.filter;
        let sink = &mut self.sink;
        let outcome = runner
            .run(&diagnostic.invocation, &mut |line: &str| {
                if filter.is_empty() || line.contains(filter) {
                    sink.print_line(line);
                }
            })
            .await;
        if let Err(e) = outcome {
            self.sink.print_line(&e.to_string());
        }
    }

    /// Runs a test executable from the working directory and records whether
    /// it exited with status zero.
    ///
    /// A launch failure is written to the output and recorded as a failure.
    /// After a completed run with a PCI accelerator on Linux, the peak
    /// temperature is recorded under the test name.
    pub async fn run_test<R: ProcessRunner>(&mut self, runner: &R, test: &Invocation) -> bool {
        let name = test.name();
        self.print_section(&name);

        let resolved = test.resolved_in(&self.work_dir);
        let sink = &mut self.sink;
        let outcome = runner
            .run(&resolved, &mut |line: &str| sink.print_line(line))
            .await;

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                self.sink.print_line(&e.to_string());
                self.record_result(&name, false);
                return false;
            }
        };

        if self.attachment().pci && self.linux {
            if let Some(peak) = self.sampler.peak() {
                self.record_thermal(&name, peak);
            }
        }

        let passed = outcome.success();
        self.record_result(&name, passed);
        passed
    }

    /// Writes the summary. Only the first call has any effect.
    ///
    /// The temperature block (if any) is appended to the output, the file is
    /// closed, the summary is printed and the file is rewritten as
    /// `summary + "\n\n" + captured output`. The summary reaches the console
    /// even when writing the output file failed.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }
        self.finalized = true;

        if !self.thermals.is_empty() {
            let block = summary::thermal_block(&self.thermals);
            self.sink.print(&block);
        }
        let closed = self.sink.close();

        let summary = reporting::compose_summary(&self.results, &self.thermals);
        reporting::print_summary(&summary);
        closed?;

        let mut header = summary;
        header.push_str(summary::SUMMARY_SEPARATOR);
        fs::prepend_to_file(self.sink.path(), &header)
    }
}

impl Drop for TestSuite {
    fn drop(&mut self) {
        if let Err(e) = self.finalize() {
            eprintln!("Failed to write summary: {:#}", e);
        }
    }
}
