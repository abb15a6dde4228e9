//! Tests for the progress module functionality.
//!
//! This file contains tests for progress bar styling, template assembly,
//! and multi-bar display management.

use stride::progress::{ColoredBar, ProgressBarOpts, ProgressGroup, TemplateOptions};

mod common;
use common::helpers::*;

#[test]
fn test_progress_bar_opts_default() {
    let opts = create_test_progress_opts();
    assert_progress_opts_enabled(&opts);
    let pb = opts.to_progress_bar(100);
    assert_eq!(pb.length(), Some(100));
}

#[test]
fn test_progress_bar_opts_new() {
    let opts = create_custom_progress_opts("{prefix}: {bar:40} {msg}", "abc");
    assert_progress_opts_enabled(&opts);
}

#[test]
fn test_progress_bar_opts_hidden() {
    let opts = create_hidden_progress_opts();
    assert_progress_opts_disabled(&opts);
}

#[test]
fn test_progress_bar_opts_presets_are_enabled() {
    assert_progress_opts_enabled(&ProgressBarOpts::with_minimal_style());
    assert_progress_opts_enabled(&ProgressBarOpts::with_detailed_style());
    assert_progress_opts_enabled(&ProgressBarOpts::with_metrics_style());
    assert_progress_opts_enabled(&ProgressBarOpts::with_bytes_style());
}

#[test]
fn test_progress_bar_opts_set_clear() {
    let mut opts = ProgressBarOpts::default();

    opts.set_clear(false);
    let pb = opts.clone().to_progress_bar(100);
    assert!(!pb.is_hidden());

    opts.set_clear(true);
    let pb2 = opts.to_progress_bar(100);
    assert!(!pb2.is_hidden());
}

#[test]
fn test_progress_bar_opts_to_spinner() {
    let pb = create_test_progress_opts().to_spinner();
    assert!(!pb.is_hidden());
    assert_eq!(pb.length(), None);

    let hidden = create_hidden_progress_opts().to_spinner();
    assert!(hidden.is_hidden());
}

#[test]
fn test_template_options_build_into_usable_opts() {
    let opts = TemplateOptions::default().to_opts();
    let pb = opts.to_progress_bar(50);
    assert!(!pb.is_hidden());
    assert_eq!(pb.length(), Some(50));
}

#[test]
fn test_template_options_flags_shape_the_template() {
    let full = TemplateOptions::default().build();
    assert!(full.contains("{percent"));
    assert!(full.contains("{pos}/{len}"));
    assert!(full.contains("{per_sec}"));
    assert!(full.contains("{elapsed}<{eta}"));

    let bare = TemplateOptions {
        percentage: false,
        count: false,
        rate: false,
        elapsed: false,
        remaining: false,
    }
    .build();
    assert!(bare.contains("{prefix}"));
    assert!(bare.contains("{bar"));
    assert!(!bare.contains("{percent"));
    assert!(!bare.contains("{eta}"));
}

#[test]
fn test_progress_group_worker_bars() {
    let group = ProgressGroup::new(create_test_progress_opts());

    let first = group.worker_bar(0, 100, "worker 0");
    let second = group.worker_bar(1, 200, "worker 1");

    assert_eq!(first.length(), Some(100));
    assert_eq!(second.length(), Some(200));

    first.inc(10);
    assert_eq!(first.position(), 10);

    group.finish_worker(first);
    group.finish_worker(second);
}

#[test]
fn test_progress_group_hidden_opts_hide_bars() {
    let group = ProgressGroup::new(create_hidden_progress_opts());
    let bar = group.worker_bar(0, 10, "invisible");
    assert!(bar.is_hidden());
}

#[test]
fn test_progress_group_add_appends_bars() {
    let group = ProgressGroup::new(create_test_progress_opts());
    let bar = group.add(42, "extra");
    assert_eq!(bar.length(), Some(42));
}

#[test]
fn test_progress_group_shared_across_threads() {
    let group = ProgressGroup::new(create_hidden_progress_opts());
    let handles: Vec<_> = (0..4)
        .map(|slot| {
            let bar = group.worker_bar(slot, 50, &format!("worker {}", slot));
            std::thread::spawn(move || {
                for _ in 0..50 {
                    bar.inc(1);
                }
                let position = bar.position();
                bar.finish();
                position
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 50);
    }
}

#[test]
fn test_colored_bar_reaches_final_zone() {
    let mut bar = ColoredBar::new(30, "coloring");
    assert!(bar.is_in_progress_colors());

    for _ in 0..30 {
        bar.inc(1);
    }
    assert_eq!(bar.bar().position(), 30);
    assert!(!bar.is_in_progress_colors());
}
