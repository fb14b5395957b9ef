/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graph::{NodeOutOfRange, RandomAccessGraph};
use crate::visits::VisitError;
use std::collections::VecDeque;
use sux::bits::BitVec;
#[allow(unused_imports)]
use sux::traits::*;

/// A sequential breadth-first visit.
///
/// This is the classical textbook algorithm over a non-atomic bit vector
/// and a queue. It needs no synchronization and serves as the correctness
/// baseline for [`ParCursor`](crate::visits::ParCursor): both visits reach
/// exactly the same set of nodes from the same root.
///
/// # Examples
///
/// ```
/// use par_bfs::graph::AdjGraph;
/// use par_bfs::visits::Seq;
///
/// # fn main() -> Result<(), par_bfs::visits::VisitError> {
/// let graph = AdjGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0)])?;
/// let mut visit = Seq::new(&graph);
/// assert_eq!(visit.visit(0)?, 3);
/// assert!(!visit.visited(3));
/// # Ok(())
/// # }
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    /// Visits the graph from `root`, returning the number of nodes visited
    /// by this call.
    ///
    /// Returns `Ok(0)` if the root was already visited by a previous call.
    pub fn visit(&mut self, root: usize) -> Result<usize, VisitError> {
        let num_nodes = self.graph.num_nodes();
        if root >= num_nodes {
            return Err(NodeOutOfRange {
                node: root,
                num_nodes,
            }
            .into());
        }
        if self.visited[root] {
            return Ok(0);
        }

        let mut visited_count = 1;
        self.visited.set(root, true);
        self.queue.clear();
        self.queue.push_back(root);

        while let Some(node) = self.queue.pop_front() {
            for &succ in self.graph.successors(node) {
                if !self.visited[succ] {
                    self.visited.set(succ, true);
                    visited_count += 1;
                    self.queue.push_back(succ);
                }
            }
        }

        Ok(visited_count)
    }

    /// Returns whether a node has been visited.
    pub fn visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    /// Returns the number of visited nodes.
    pub fn visited_count(&self) -> usize {
        (0..self.graph.num_nodes())
            .filter(|&node| self.visited[node])
            .count()
    }

    /// Resets the visit status, making it possible to reuse the visit.
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.queue.clear();
    }
}
