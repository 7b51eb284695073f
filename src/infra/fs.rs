//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the output sink (an append-only file mirrored to the
//! console), output path resolution and the atomic "prepend" rewrite used
//! when the summary is written.
//!
//! 此模块提供输出接收器（镜像到控制台的仅追加文件）、输出路径解析，
//! 以及写入摘要时使用的原子"前置"重写。

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Resolves the output file for a run.
///
/// The file is `<work_dir>/<test_name>.txt` unless an output name was
/// explicitly given, in which case it is `<work_dir>/<output>`.
///
/// # Arguments
/// * `work_dir` - Directory the harness was started in
/// * `test_name` - The `--test_name` selector
/// * `explicit_output` - The `--output` value if the user typed it
pub fn output_path(work_dir: &Path, test_name: &str, explicit_output: Option<&str>) -> PathBuf {
    match explicit_output {
        Some(output) => work_dir.join(output),
        None => work_dir.join(format!("{test_name}.txt")),
    }
}

/// Append-only text destination: every write goes to the output file
/// (flushed immediately) and, unless quiet, to stdout.
///
/// Write errors do not interrupt the run; the first one is kept and
/// reported when the sink is closed.
#[derive(Debug)]
pub struct Sink {
    path: PathBuf,
    file: Option<File>,
    echo: bool,
    write_error: Option<io::Error>,
}

impl Sink {
    /// Creates (truncating) the file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            echo: true,
            write_error: None,
        })
    }

    /// Turns mirroring of writes to stdout on or off.
    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `text` verbatim.
    pub fn print(&mut self, text: &str) {
        if let Some(file) = self.file.as_mut() {
            let written = file.write_all(text.as_bytes()).and_then(|_| file.flush());
            if let Err(e) = written {
                self.write_error.get_or_insert(e);
            }
        }
        if self.echo {
            let mut stdout = io::stdout().lock();
            let _ = stdout.write_all(text.as_bytes());
            let _ = stdout.flush();
        }
    }

    /// Appends `line` followed by a newline.
    pub fn print_line(&mut self, line: &str) {
        let mut text = String::with_capacity(line.len() + 1);
        text.push_str(line);
        text.push('\n');
        self.print(&text);
    }

    /// Closes the file. Later writes only reach the console.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()
                .with_context(|| format!("Failed to flush output file: {}", self.path.display()))?;
        }
        match self.write_error.take() {
            Some(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to write output file: {}", self.path.display()))),
            None => Ok(()),
        }
    }
}

/// Rewrites `path` as `header` followed by its previous contents.
///
/// The new contents are written to a temporary file in the same directory,
/// which then replaces `path` with a rename.
pub fn prepend_to_file(path: &Path, header: &str) -> Result<()> {
    let original =
        fs::read(path).with_context(|| format!("Failed to read output file: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    // Keep the mode of the file being replaced; temp files are created 0600.
    if let Ok(metadata) = fs::metadata(path) {
        let _ = temp.as_file().set_permissions(metadata.permissions());
    }
    temp.write_all(header.as_bytes())?;
    temp.write_all(&original)?;
    temp.flush()?;
    temp.persist(path)
        .with_context(|| format!("Failed to replace output file: {}", path.display()))?;
    Ok(())
}
