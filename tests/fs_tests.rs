//! Tests for the progress-tracked filesystem operations.

use std::fs;
use stride::fs::{progress_copy, progress_copy_tree, DEFAULT_CHUNK_SIZE};
use stride::Error;

mod common;
use common::helpers::*;

#[test]
fn test_progress_copy_preserves_content() {
    let dir = create_temp_dir();
    let content = create_test_content(64 * 1024);
    let src = create_temp_file(dir.path(), "source.bin", &content);
    let dst = dir.path().join("copy.bin");

    let copied = progress_copy(&src, &dst, DEFAULT_CHUNK_SIZE).unwrap();

    assert_eq!(copied, content.len() as u64);
    assert_file_exists(&dst);
    assert_same_content(&src, &dst);
}

#[test]
fn test_progress_copy_chunk_smaller_than_file() {
    let dir = create_temp_dir();
    let content = create_test_content(1000);
    let src = create_temp_file(dir.path(), "small.bin", &content);
    let dst = dir.path().join("small-copy.bin");

    // 7 does not divide 1000, so the last chunk is short.
    let copied = progress_copy(&src, &dst, 7).unwrap();

    assert_eq!(copied, 1000);
    assert_same_content(&src, &dst);
}

#[test]
fn test_progress_copy_empty_file() {
    let dir = create_temp_dir();
    let src = create_temp_file(dir.path(), "empty.bin", b"");
    let dst = dir.path().join("empty-copy.bin");

    let copied = progress_copy(&src, &dst, DEFAULT_CHUNK_SIZE).unwrap();

    assert_eq!(copied, 0);
    assert_file_exists(&dst);
}

#[test]
fn test_progress_copy_missing_source() {
    let dir = create_temp_dir();
    let src = dir.path().join("does-not-exist.bin");
    let dst = dir.path().join("never-created.bin");

    let result = progress_copy(&src, &dst, DEFAULT_CHUNK_SIZE);

    assert!(matches!(result, Err(Error::NotFound(_))));
    // The existence check runs before any handle is opened.
    assert!(!dst.exists());
}

#[test]
fn test_progress_copy_overwrites_destination() {
    let dir = create_temp_dir();
    let src = create_temp_file(dir.path(), "new.bin", b"new content");
    let dst = create_temp_file(dir.path(), "old.bin", b"previous content that was longer");

    progress_copy(&src, &dst, DEFAULT_CHUNK_SIZE).unwrap();

    assert_same_content(&src, &dst);
}

#[test]
fn test_progress_copy_tree_reproduces_structure() {
    let dir = create_temp_dir();
    let src_root = dir.path().join("tree");
    fs::create_dir_all(src_root.join("nested/deeper")).unwrap();
    fs::write(src_root.join("top.txt"), b"top").unwrap();
    fs::write(src_root.join("nested/mid.txt"), b"mid").unwrap();
    fs::write(src_root.join("nested/deeper/leaf.txt"), b"leaf").unwrap();

    let dst_root = dir.path().join("tree-copy");
    let copied = progress_copy_tree(&src_root, &dst_root).unwrap();

    assert_eq!(copied, 3);
    assert_same_content(&src_root.join("top.txt"), &dst_root.join("top.txt"));
    assert_same_content(
        &src_root.join("nested/mid.txt"),
        &dst_root.join("nested/mid.txt"),
    );
    assert_same_content(
        &src_root.join("nested/deeper/leaf.txt"),
        &dst_root.join("nested/deeper/leaf.txt"),
    );
}

#[test]
fn test_progress_copy_tree_missing_source() {
    let dir = create_temp_dir();
    let result = progress_copy_tree(dir.path().join("missing"), dir.path().join("out"));
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_progress_copy_tree_empty_directory() {
    let dir = create_temp_dir();
    let src_root = dir.path().join("empty-tree");
    fs::create_dir_all(&src_root).unwrap();

    let dst_root = dir.path().join("empty-copy");
    let copied = progress_copy_tree(&src_root, &dst_root).unwrap();

    assert_eq!(copied, 0);
    assert!(dst_root.is_dir());
}
