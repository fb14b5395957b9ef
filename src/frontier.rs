/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Lock-free accumulation of the next breadth-first frontier.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A concurrently-appendable collection of worker-local buffers, plus a
/// running total of the nodes they contain.
///
/// Workers that finish a batch hand their local buffer over with
/// [`publish`](FrontierAccumulator::publish); ownership of the buffer
/// transfers to the accumulator, each buffer is appended atomically as a
/// unit, and no update is ever lost regardless of how many workers publish
/// concurrently. The buffers are backed by an unbounded channel, so
/// publication never blocks.
///
/// [`drain`](FrontierAccumulator::drain) must be called only after the
/// level barrier, when no worker may still publish; it takes `&mut self`
/// precisely so that outstanding shared borrows from the workers' scope
/// must have ended. Draining concatenates the buffers in arbitrary order
/// (the visit is order-agnostic, as each node appears in exactly one
/// buffer) and resets the accumulator, so no stale entry can leak into a
/// later level.
pub struct FrontierAccumulator {
    tx: Sender<Vec<usize>>,
    rx: Receiver<Vec<usize>>,
    total: AtomicUsize,
}

impl FrontierAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            total: AtomicUsize::new(0),
        }
    }

    /// Publishes a non-empty worker-local buffer.
    pub fn publish(&self, buf: Vec<usize>) {
        debug_assert!(!buf.is_empty(), "empty buffers must not be published");
        self.total.fetch_add(buf.len(), Ordering::Relaxed);
        // The accumulator owns the receiving endpoint, so the channel
        // cannot be disconnected.
        self.tx
            .send(buf)
            .expect("the accumulator owns the receiving endpoint");
    }

    /// Returns the total number of nodes published since the last drain.
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Concatenates all published buffers into the next frontier and
    /// resets the accumulator.
    pub fn drain(&mut self) -> Vec<usize> {
        let mut next = Vec::with_capacity(self.total.swap(0, Ordering::Relaxed));
        for buf in self.rx.try_iter() {
            next.extend_from_slice(&buf);
        }
        next
    }
}

impl Default for FrontierAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_then_drain() {
        let mut accumulator = FrontierAccumulator::new();
        accumulator.publish(vec![0, 1]);
        accumulator.publish(vec![2]);
        assert_eq!(accumulator.total(), 3);
        let mut next = accumulator.drain();
        next.sort_unstable();
        assert_eq!(next, [0, 1, 2]);
        assert_eq!(accumulator.total(), 0);
        assert!(accumulator.drain().is_empty());
    }

    #[test]
    fn test_concurrent_publication_loses_nothing() {
        const THREADS: usize = 8;
        const BUFFERS: usize = 100;
        let mut accumulator = FrontierAccumulator::new();
        std::thread::scope(|s| {
            let accumulator = &accumulator;
            for thread in 0..THREADS {
                s.spawn(move || {
                    for i in 0..BUFFERS {
                        accumulator.publish(vec![thread * BUFFERS + i]);
                    }
                });
            }
        });
        assert_eq!(accumulator.total(), THREADS * BUFFERS);
        let mut next = accumulator.drain();
        next.sort_unstable();
        let expected: Vec<usize> = (0..THREADS * BUFFERS).collect();
        assert_eq!(next, expected);
    }
}
