//! Example showing one slot-pinned progress bar per worker thread.

use rand::Rng;
use std::thread;
use std::time::Duration;
use stride::progress::{ProgressBarOpts, ProgressGroup};

fn main() {
    let group = ProgressGroup::new(ProgressBarOpts::with_detailed_style());

    let handles: Vec<_> = (0..4)
        .map(|slot| {
            let bar = group.worker_bar(slot, 120, &format!("worker {}", slot));
            thread::spawn(move || {
                let mut rng = rand::rng();
                for _ in 0..120 {
                    thread::sleep(Duration::from_millis(rng.random_range(5..25)));
                    bar.inc(1);
                }
                bar.finish();
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    println!("All workers done.");
}
