//! File and directory copies with progress tracking.

use crate::error::Error;
use crate::progress::ProgressBarOpts;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Default chunk size for [`progress_copy`], one mebibyte.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Copy a file in chunks while a byte-oriented bar tracks the transfer.
///
/// The source must exist before any handle is opened, so a failed copy
/// never creates a destination file. The source size is queried up front to
/// size the bar, then data moves in `chunk_size` blocks until a read
/// returns zero bytes. Write errors propagate immediately and may leave the
/// destination partially written; no cleanup or retry is attempted.
///
/// Returns the number of bytes copied.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path
/// * `chunk_size` - Size of each chunk in bytes (see [`DEFAULT_CHUNK_SIZE`])
///
/// # Example
///
/// ```rust,no_run
/// use stride::fs::{progress_copy, DEFAULT_CHUNK_SIZE};
///
/// let copied = progress_copy("data.bin", "backup/data.bin", DEFAULT_CHUNK_SIZE)?;
/// println!("copied {} bytes", copied);
/// # Ok::<(), stride::Error>(())
/// ```
pub fn progress_copy(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    chunk_size: usize,
) -> crate::Result<u64> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if !src.exists() {
        return Err(Error::NotFound(src.display().to_string()));
    }

    let file_size = src.metadata()?.len();
    debug!("Copying {:?} to {:?} ({} bytes)", src, dst, file_size);

    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;

    let bar = ProgressBarOpts::with_bytes_style().to_progress_bar(file_size);
    let filename = src
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| src.display().to_string());
    bar.set_prefix(format!("Copying {}", filename));

    // A zero chunk size would read nothing and spin forever on a non-empty
    // source; clamp it to one byte.
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut copied = 0u64;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        copied += n as u64;
        bar.inc(n as u64);
    }
    writer.flush()?;

    bar.finish_and_clear();
    debug!("Copied {} bytes", copied);
    Ok(copied)
}

/// Copy a directory tree, one bar unit per file.
///
/// The source tree is walked first so the bar can show the total file
/// count, then each file is copied to the same relative path under `dst`,
/// creating directories as needed. Returns the number of files copied.
///
/// # Arguments
///
/// * `src` - Source directory
/// * `dst` - Destination directory
pub fn progress_copy_tree(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> crate::Result<u64> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if !src.exists() {
        return Err(Error::NotFound(src.display().to_string()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    debug!("Copying {} files from {:?} to {:?}", files.len(), src, dst);

    fs::create_dir_all(dst)?;

    let bar = ProgressBarOpts::with_detailed_style().to_progress_bar(files.len() as u64);
    bar.set_prefix("Copying files".to_string());

    for file in &files {
        let rel = file
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let target = dst.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &target)?;
        bar.inc(1);
    }

    bar.finish();
    Ok(files.len() as u64)
}
