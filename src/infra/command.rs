//! # Command Execution Module / 命令执行模块
//!
//! This module launches external programs and streams their merged
//! stdout/stderr line by line to a caller-provided callback.
//! The [`ProcessRunner`] trait is the only seam between the harness and real
//! processes, so tests can substitute a scripted runner.
//!
//! 此模块启动外部程序，并将其合并的 stdout/stderr 逐行传递给调用方提供的回调。
//! [`ProcessRunner`] trait 是测试工具与真实进程之间唯一的接缝，
//! 因此测试可以替换为脚本化的运行器。

use std::future::Future;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::sync::mpsc;

/// A program and its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a copy whose program path is joined onto `dir`.
    pub fn resolved_in(&self, dir: &Path) -> Self {
        Self {
            program: dir.join(&self.program),
            args: self.args.clone(),
        }
    }

    /// The bare program name, used as the test identifier.
    pub fn name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// How a launched process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// The exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessOutcome {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an [`Invocation`] to completion.
///
/// Every line of the merged stdout/stderr is passed to `on_line` as soon as
/// it is read, without its line terminator. An `Err` means the process could
/// not be launched or awaited.
///
/// 运行一个 [`Invocation`] 直到完成。
/// 合并后的 stdout/stderr 的每一行在读取后立即传递给 `on_line`（不含行终止符）。
/// 返回 `Err` 表示进程无法启动或等待。
pub trait ProcessRunner {
    fn run(
        &self,
        invocation: &Invocation,
        on_line: &mut dyn FnMut(&str),
    ) -> impl Future<Output = io::Result<ProcessOutcome>>;
}

/// [`ProcessRunner`] backed by `tokio::process`.
///
/// The child gets one pipe for both stdout and stderr, so lines arrive in the
/// order the child wrote them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        on_line: &mut dyn FnMut(&str),
    ) -> io::Result<ProcessOutcome> {
        let (reader, writer) = io::pipe()?;
        // The command holds copies of the write end; it must be dropped after
        // spawning or the reader never sees EOF.
        let mut child = {
            let mut command = tokio::process::Command::new(&invocation.program);
            command
                .args(&invocation.args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            command.spawn()?
        };

        let (tx, mut rx) = mpsc::unbounded_channel();
        let reader_handle = tokio::task::spawn_blocking(move || forward_lines(reader, tx));

        while let Some(line) = rx.recv().await {
            on_line(&line);
        }

        if let Err(e) = reader_handle.await {
            eprintln!("Failed to join output reader task: {}", e);
        }

        let status = child.wait().await?;
        Ok(ProcessOutcome {
            code: status.code(),
        })
    }
}

/// Reads `reader` line by line until EOF and sends each line to `tx`.
///
/// Invalid UTF-8 is replaced rather than ending the stream. A read error is
/// sent as a last line and ends the stream.
///
/// 逐行读取 `reader` 直到 EOF，并将每一行发送到 `tx`。
/// 读取错误会作为最后一行发送，并结束读取。
pub fn forward_lines<R: Read>(reader: R, tx: mpsc::UnboundedSender<String>) {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                if tx.send(line.to_string()).is_err() {
                    break;
                }
            }
            Err(e) => {
                if !buf.is_empty() {
                    let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
                }
                let _ = tx.send(format!("Failed to read process output: {e}"));
                break;
            }
        }
    }
}
