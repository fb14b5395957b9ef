/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The atomic visited set shared by the workers of a parallel visit.

use std::sync::atomic::Ordering;
use sux::bits::AtomicBitVec;
#[allow(unused_imports)]
use sux::traits::*;

/// A fixed-length array of per-node atomic visited flags.
///
/// The only permitted transition is unvisited to visited, performed by
/// [`try_claim`](VisitedSet::try_claim) with a single atomic fetch-and-set:
/// under arbitrary interleavings, exactly one caller observes the
/// transition for each node. This is the sole correctness-critical
/// guarantee of the parallel visit.
///
/// All operations use relaxed ordering, as in the visits of `webgraph`:
/// claimed node ids reach the next level through the frontier accumulator,
/// which provides the necessary synchronization.
pub struct VisitedSet {
    bits: AtomicBitVec,
    len: usize,
}

impl VisitedSet {
    /// Creates a visited set for `len` nodes, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            bits: AtomicBitVec::new(len),
            len,
        }
    }

    /// Returns the number of flags in the set.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set has no flags.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Atomically claims a node, transitioning it from unvisited to visited.
    ///
    /// Returns `true` exactly once per node across a whole visit, to the
    /// first caller racing on that node, and `false` to every other
    /// concurrent or later caller. Never blocks.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range; this is a programmer error, not a
    /// recoverable condition, as the visits validate bounds up front.
    #[inline(always)]
    pub fn try_claim(&self, node: usize) -> bool {
        !self.bits.swap(node, true, Ordering::Relaxed)
    }

    /// Returns whether a node has been visited.
    #[inline(always)]
    pub fn get(&self, node: usize) -> bool {
        self.bits.get(node, Ordering::Relaxed)
    }

    /// Returns the number of visited nodes.
    pub fn count_ones(&self) -> usize {
        (0..self.len).filter(|&node| self.get(node)).count()
    }

    /// Clears all flags, making the set reusable for a fresh visit.
    pub fn clear(&mut self) {
        self.bits.fill(false, Ordering::Relaxed);
    }
}
