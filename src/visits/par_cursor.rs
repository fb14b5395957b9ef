/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::frontier::FrontierAccumulator;
use crate::graph::{NodeOutOfRange, RandomAccessGraph};
use crate::visited::VisitedSet;
use crate::visits::VisitError;
use log::debug;
use rayon::ThreadPool;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// The default number of frontier nodes claimed per cursor advance.
pub const DEFAULT_BATCH_SIZE: usize = 256;

/// A level-synchronous parallel breadth-first visit with dynamic batch
/// assignment.
///
/// The visit expands one level at a time: the current frontier is divided
/// into fixed-size batches, and each pool thread repeatedly claims the next
/// unprocessed batch by advancing a shared atomic cursor with
/// fetch-and-add. Dynamic claiming, rather than a static per-thread
/// partition, balances the load when outdegrees are uneven across the
/// frontier; with one batch per thread it degenerates into the static
/// assignment. Newly discovered nodes are claimed with an atomic
/// fetch-and-set on the [visited set](VisitedSet), collected in
/// worker-local buffers, and published to a [lock-free
/// accumulator](FrontierAccumulator). The workers never block mid-level:
/// the only blocking point is the end-of-level barrier, where the calling
/// thread waits for every worker before draining the accumulator into the
/// next frontier. Levels with at most one batch are expanded inline on the
/// calling thread, skipping pool dispatch.
///
/// The pool is provided by the caller and reused across levels and visits;
/// build one with [`thread_pool!`](crate::thread_pool). Its size bounds the
/// number of workers per level.
///
/// # Examples
///
/// ```
/// use par_bfs::graph::AdjGraph;
/// use par_bfs::visits::ParCursor;
/// use par_bfs::thread_pool;
///
/// # fn main() -> Result<(), par_bfs::visits::VisitError> {
/// let graph = AdjGraph::from_arcs(5, [(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// let mut visit = ParCursor::with_batch_size(&graph, 2);
/// assert_eq!(visit.par_visit(0, &thread_pool![4])?, 4);
/// assert!(visit.visited().get(3));
/// assert!(!visit.visited().get(4));
/// # Ok(())
/// # }
/// ```
pub struct ParCursor<G: RandomAccessGraph> {
    graph: G,
    batch_size: usize,
    visited: VisitedSet,
}

impl<G: RandomAccessGraph> ParCursor<G> {
    /// Creates a parallel breadth-first visit with the default batch size
    /// of [`DEFAULT_BATCH_SIZE`] nodes.
    pub fn new(graph: G) -> Self {
        Self::with_batch_size(graph, DEFAULT_BATCH_SIZE)
    }

    /// Creates a parallel breadth-first visit with the given batch size.
    ///
    /// Small batches improve load balancing; large batches reduce
    /// claim-and-publish overhead. The batch size does not affect which
    /// nodes are visited.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is zero.
    pub fn with_batch_size(graph: G, batch_size: usize) -> Self {
        assert!(batch_size > 0, "the batch size must be positive");
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            batch_size,
            visited: VisitedSet::new(num_nodes),
        }
    }

    /// Returns the visited set.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Returns the number of visited nodes.
    pub fn visited_count(&self) -> usize {
        self.visited.count_ones()
    }

    /// Resets the visit status, making it possible to reuse the visit.
    pub fn reset(&mut self) {
        self.visited.clear();
    }
}

impl<G: RandomAccessGraph + Sync> ParCursor<G> {
    /// Visits the graph from `root`, returning the number of nodes visited
    /// by this call.
    ///
    /// Returns `Ok(0)` if the root was already visited by a previous call.
    ///
    /// # Panics
    ///
    /// A panic in a worker is propagated to the caller, but only after all
    /// workers of the current level have completed, so no pool thread is
    /// left running visit work.
    pub fn par_visit(&mut self, root: usize, thread_pool: &ThreadPool) -> Result<usize, VisitError> {
        self.par_visit_while(root, thread_pool, || true)
    }

    /// Visits the graph from `root`, polling a cancellation predicate.
    ///
    /// `keep_going` is polled on the calling thread at every level boundary
    /// and by every worker before each batch claim. As soon as it returns
    /// `false` the visit aborts with [`VisitError::Interrupted`], after the
    /// workers of the in-flight level have been awaited: no partial
    /// frontier is ever expanded. The visited set is then incomplete and
    /// must not be trusted; [`reset`](ParCursor::reset) the visit before
    /// reusing it.
    pub fn par_visit_while(
        &mut self,
        root: usize,
        thread_pool: &ThreadPool,
        keep_going: impl Fn() -> bool + Sync,
    ) -> Result<usize, VisitError> {
        let num_nodes = self.graph.num_nodes();
        if root >= num_nodes {
            return Err(NodeOutOfRange {
                node: root,
                num_nodes,
            }
            .into());
        }
        if !self.visited.try_claim(root) {
            return Ok(0);
        }

        let graph = &self.graph;
        let visited = &self.visited;
        let batch_size = self.batch_size;

        let mut frontier = vec![root];
        let mut visited_count = 1;
        let mut accumulator = FrontierAccumulator::new();
        let cursor = AtomicUsize::new(0);
        let interrupted = AtomicBool::new(false);
        let mut distance = 0;

        while !frontier.is_empty() {
            if !keep_going() {
                return Err(VisitError::Interrupted);
            }

            let level_size = frontier.len();
            let num_batches = level_size.div_ceil(batch_size);
            debug!("level {distance}: {level_size} nodes, {num_batches} batches");

            if num_batches <= 1 {
                // The root level and most tail levels end up here.
                let buf = expand_batch(&frontier, 0, level_size, graph, visited);
                if !buf.is_empty() {
                    accumulator.publish(buf);
                }
            } else {
                let workers = thread_pool.current_num_threads().min(num_batches).max(1);
                cursor.store(0, Ordering::Relaxed);
                let accumulator = &accumulator;
                let frontier = &frontier;
                let keep_going = &keep_going;
                let interrupted = &interrupted;
                let cursor = &cursor;
                thread_pool.scope(|scope| {
                    for _ in 0..workers {
                        scope.spawn(move |_| loop {
                            if !keep_going() {
                                interrupted.store(true, Ordering::Relaxed);
                                break;
                            }
                            let start = cursor.fetch_add(batch_size, Ordering::Relaxed);
                            if start >= level_size {
                                break;
                            }
                            let end = level_size.min(start + batch_size);
                            let buf = expand_batch(frontier, start, end, graph, visited);
                            if !buf.is_empty() {
                                accumulator.publish(buf);
                            }
                        });
                    }
                });
                // The scope has joined every worker of the level: this is
                // the level barrier, and nothing can publish past it.
                if interrupted.load(Ordering::Relaxed) {
                    return Err(VisitError::Interrupted);
                }
            }

            frontier = accumulator.drain();
            visited_count += frontier.len();
            distance += 1;
        }

        debug!("visit done: {visited_count} nodes in {distance} levels");
        Ok(visited_count)
    }
}

/// Expands the frontier nodes in `[start..end)`, claiming their unvisited
/// successors and accumulating them in a worker-local buffer.
///
/// A pure function of its inputs plus the shared visited set: the graph and
/// the frontier are only read. Empty ranges are a no-op, and duplicate
/// successors are harmless, as each node can be claimed at most once no
/// matter how many callers attempt it.
fn expand_batch<G: RandomAccessGraph>(
    frontier: &[usize],
    start: usize,
    end: usize,
    graph: &G,
    visited: &VisitedSet,
) -> Vec<usize> {
    let mut buf = Vec::new();
    for &node in &frontier[start..end] {
        for &succ in graph.successors(node) {
            if visited.try_claim(succ) {
                buf.push(succ);
            }
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjGraph;
    use anyhow::Result;

    /// A complete graph on `n` nodes, self-loops included.
    fn complete_graph(n: usize) -> AdjGraph {
        let mut graph = AdjGraph::new(n);
        for src in 0..n {
            for dst in 0..n {
                graph.add_arc(src, dst).unwrap();
            }
        }
        graph
    }

    #[test]
    fn test_expand_batch_empty_range() {
        let graph = complete_graph(4);
        let visited = VisitedSet::new(4);
        let buf = expand_batch(&[0, 1, 2, 3], 2, 2, &graph, &visited);
        assert!(buf.is_empty());
        assert_eq!(visited.count_ones(), 0);
    }

    #[test]
    fn test_expand_batch_claims_each_successor_once() {
        let graph = complete_graph(4);
        let visited = VisitedSet::new(4);
        // The same node twice in the frontier: the claim check makes the
        // duplicate expansion a no-op.
        let buf = expand_batch(&[0, 0], 0, 2, &graph, &visited);
        assert_eq!(buf.len(), 4);
        assert_eq!(visited.count_ones(), 4);
    }

    /// Workers race through the real claim-expand-publish path on a
    /// complete graph: the published total must equal the number of set
    /// visited bits, every run.
    #[test]
    fn test_no_lost_updates_under_contention() {
        const NODES: usize = 256;
        const THREADS: usize = 8;
        const BATCH_SIZE: usize = 4;
        let graph = complete_graph(NODES);
        let frontier: Vec<usize> = (0..NODES).collect();

        for _ in 0..10 {
            let visited = VisitedSet::new(NODES);
            let mut accumulator = FrontierAccumulator::new();
            let cursor = AtomicUsize::new(0);
            std::thread::scope(|s| {
                let visited = &visited;
                let accumulator = &accumulator;
                let cursor = &cursor;
                let graph = &graph;
                let frontier = frontier.as_slice();
                for _ in 0..THREADS {
                    s.spawn(move || loop {
                        let start = cursor.fetch_add(BATCH_SIZE, Ordering::Relaxed);
                        if start >= frontier.len() {
                            break;
                        }
                        let end = frontier.len().min(start + BATCH_SIZE);
                        let buf = expand_batch(frontier, start, end, graph, visited);
                        if !buf.is_empty() {
                            accumulator.publish(buf);
                        }
                    });
                }
            });
            assert_eq!(accumulator.total(), visited.count_ones());
            assert_eq!(accumulator.drain().len(), NODES);
        }
    }

    #[test]
    fn test_par_visit_complete_graph() -> Result<()> {
        let graph = complete_graph(100);
        let pool = crate::thread_pool![4];
        let mut visit = ParCursor::with_batch_size(&graph, 8);
        assert_eq!(visit.par_visit(0, &pool)?, 100);
        assert_eq!(visit.visited_count(), 100);
        Ok(())
    }

    #[test]
    fn test_par_visit_interrupted() {
        let graph = complete_graph(16);
        let pool = crate::thread_pool![2];
        let mut visit = ParCursor::new(&graph);
        assert_eq!(
            visit.par_visit_while(0, &pool, || false),
            Err(VisitError::Interrupted)
        );
    }
}
