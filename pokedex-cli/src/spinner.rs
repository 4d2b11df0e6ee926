//! Spinner slots for in-flight item fetches.
//!
//! One line per concurrent fetch, keyed by the item's index in the catalog.
//! Slots are reused as fetches finish.

use std::collections::HashMap;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

pub(crate) struct SpinnerPool {
    _mp: MultiProgress,
    spinners: Vec<ProgressBar>,
    assigned: HashMap<usize, usize>,
    free: Vec<usize>,
}

impl SpinnerPool {
    /// Create `n` slots. All output is suppressed when `quiet` is set.
    pub(crate) fn new(n: usize, quiet: bool) -> Self {
        let mp = if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };

        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");

        let spinners = (0..n.max(1))
            .map(|_| {
                let pb = mp.add(ProgressBar::new_spinner());
                pb.set_style(style.clone());
                pb
            })
            .collect::<Vec<_>>();
        let free = (0..spinners.len()).rev().collect();

        Self {
            _mp: mp,
            spinners,
            assigned: HashMap::new(),
            free,
        }
    }

    /// Give `key` a slot showing `msg`. No-op when every slot is taken.
    pub(crate) fn claim(&mut self, key: usize, msg: String) {
        if let Some(slot) = self.free.pop() {
            let pb = &self.spinners[slot];
            pb.reset();
            pb.enable_steady_tick(TICK);
            pb.set_message(msg);
            self.assigned.insert(key, slot);
        }
    }

    /// Return `key`'s slot to the pool and clear its line.
    pub(crate) fn release(&mut self, key: usize) {
        if let Some(slot) = self.assigned.remove(&key) {
            let pb = &self.spinners[slot];
            pb.disable_steady_tick();
            pb.finish_and_clear();
            self.free.push(slot);
        }
    }

    pub(crate) fn clear_all(&mut self) {
        for pb in &self.spinners {
            pb.disable_steady_tick();
            pb.finish_and_clear();
        }
        self.assigned.clear();
        self.free = (0..self.spinners.len()).rev().collect();
    }
}
