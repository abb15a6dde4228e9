use std::fs;
use std::path::{Path, PathBuf};
use stride::progress::{ProgressBarOpts, ProgressContext};
use tempfile::TempDir;

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that two files have identical byte content
pub fn assert_same_content(left: &Path, right: &Path) {
    let left_bytes = fs::read(left).expect("Failed to read left file");
    let right_bytes = fs::read(right).expect("Failed to read right file");
    assert_eq!(
        left_bytes, right_bytes,
        "Content mismatch between {:?} and {:?}",
        left, right
    );
}

// === Progress Bar Helpers ===

/// Creates default test progress bar options (enabled, kept on completion)
pub fn create_test_progress_opts() -> ProgressBarOpts {
    ProgressBarOpts::new(None, None, true, false)
}

/// Creates hidden progress bar options for testing
pub fn create_hidden_progress_opts() -> ProgressBarOpts {
    ProgressBarOpts::hidden()
}

/// Creates custom progress bar options with template and chars
pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(
        Some(template.to_string()),
        Some(chars.to_string()),
        true,
        false,
    )
}

/// Creates a test context over a kept (non-clearing) bar
pub fn create_test_context(total: u64, desc: &str) -> ProgressContext {
    ProgressContext::new(total, desc, &create_test_progress_opts())
}

// === Assertion Helpers ===

/// Asserts that progress bar options produce an enabled bar
pub fn assert_progress_opts_enabled(opts: &ProgressBarOpts) {
    let pb = opts.clone().to_progress_bar(100);
    assert!(!pb.is_hidden(), "Progress bar should be enabled");
}

/// Asserts that progress bar options produce a hidden bar
pub fn assert_progress_opts_disabled(opts: &ProgressBarOpts) {
    let pb = opts.clone().to_progress_bar(100);
    assert!(pb.is_hidden(), "Progress bar should be disabled");
}
