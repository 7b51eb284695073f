//! # Test Data Archive Module / 测试数据归档模块
//!
//! Makes sure the pinned test data directory exists, downloading and
//! unpacking the repository archive for the pinned commit when it doesn't.
//!
//! 确保固定版本的测试数据目录存在；若不存在，则下载并解压固定提交的仓库归档。
//!
//! The archive location is pinned by commit, so the download is made without
//! TLS certificate verification. Any failure here aborts the run; nothing is
//! retried.

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::core::config::DataConfig;
use crate::infra::t;

/// `<base_url><commit>.zip`
pub fn archive_url(data: &DataConfig) -> String {
    format!("{}{}.zip", data.base_url, data.commit)
}

/// Name of the top-level directory inside the archive.
pub fn extracted_dir_name(data: &DataConfig) -> String {
    format!("{}-{}", data.archive_prefix, data.commit)
}

/// Ensures `<work_dir>/<dir_name>` exists and returns its path.
///
/// # Arguments
/// * `work_dir` - Directory the test data lives under
/// * `data` - Archive location and directory names
///
/// # Returns
/// The test data directory, or an error if it had to be fetched and the
/// download or extraction failed
pub async fn ensure_test_data(work_dir: &Path, data: &DataConfig) -> Result<PathBuf> {
    let target = work_dir.join(&data.dir_name);
    if target.is_dir() {
        return Ok(target);
    }

    println!("{}", t!("archive.not_found").yellow());
    let url = archive_url(data);
    let bytes = download(&url).await?;

    let mut buffer = tempfile::tempfile().context("Failed to create temporary archive file")?;
    buffer
        .write_all(&bytes)
        .context("Failed to write temporary archive file")?;
    buffer.seek(SeekFrom::Start(0))?;

    println!("{}", t!("archive.extracting").yellow());
    let installed = install_archive(buffer, work_dir, data)?;
    println!(
        "{}",
        t!("archive.ready", path = installed.display()).green()
    );
    Ok(installed)
}

/// Fetches `url` into memory.
pub async fn download(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .build()
        .context("Failed to build HTTP client")?;
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download test data from {url}"))?
        .error_for_status()
        .with_context(|| format!("Test data download was rejected: {url}"))?;
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read test data from {url}"))?;
    Ok(bytes.to_vec())
}

/// Extracts a zip archive into `work_dir` and renames its
/// `<archive_prefix>-<commit>` directory to `<dir_name>`.
pub fn install_archive<R: Read + Seek>(
    reader: R,
    work_dir: &Path,
    data: &DataConfig,
) -> Result<PathBuf> {
    let mut archive = zip::ZipArchive::new(reader).context("Test data is not a valid zip archive")?;
    archive
        .extract(work_dir)
        .with_context(|| format!("Failed to extract test data into {}", work_dir.display()))?;

    let extracted = work_dir.join(extracted_dir_name(data));
    let target = work_dir.join(&data.dir_name);
    fs::rename(&extracted, &target).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            extracted.display(),
            target.display()
        )
    })?;
    Ok(target)
}
