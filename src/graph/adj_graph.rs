/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{NodeOutOfRange, RandomAccessGraph};

/// A mutable graph implementation based on a vector of successor vectors.
///
/// The number of nodes is fixed at construction. Arcs can be added in any
/// order; duplicate arcs from the same source to the same target are
/// suppressed, and self-loops are permitted. Once built, the graph is only
/// read by the visits, which makes shared access from the pool threads
/// synchronization-free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors, in insertion order.
    succ: Vec<Vec<usize>>,
}

impl AdjGraph {
    /// Creates a new graph with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: vec![Vec::new(); num_nodes],
        }
    }

    /// Adds an arc to the graph.
    ///
    /// Returns `true` if the arc was added, and `false` if an arc with the
    /// same source and target was already present.
    pub fn add_arc(&mut self, src: usize, dst: usize) -> Result<bool, NodeOutOfRange> {
        let num_nodes = self.succ.len();
        let max = src.max(dst);
        if max >= num_nodes {
            return Err(NodeOutOfRange {
                node: max,
                num_nodes,
            });
        }
        let succ = &mut self.succ[src];
        if succ.contains(&dst) {
            return Ok(false);
        }
        succ.push(dst);
        self.num_arcs += 1;
        Ok(true)
    }

    /// Creates a graph with `num_nodes` nodes from an iterator of arcs.
    pub fn from_arcs(
        num_nodes: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, NodeOutOfRange> {
        let mut graph = Self::new(num_nodes);
        for (src, dst) in arcs {
            graph.add_arc(src, dst)?;
        }
        Ok(graph)
    }
}

impl RandomAccessGraph for AdjGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_arc() -> Result<(), NodeOutOfRange> {
        let mut graph = AdjGraph::new(3);
        assert!(graph.add_arc(0, 1)?);
        assert!(graph.add_arc(0, 2)?);
        assert!(graph.add_arc(1, 2)?);
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_arcs(), 3);
        assert_eq!(graph.successors(0), &[1, 2]);
        assert_eq!(graph.successors(1), &[2]);
        assert!(graph.successors(2).is_empty());
        Ok(())
    }

    #[test]
    fn test_duplicate_arcs_are_suppressed() -> Result<(), NodeOutOfRange> {
        let mut graph = AdjGraph::new(2);
        assert!(graph.add_arc(0, 1)?);
        assert!(!graph.add_arc(0, 1)?);
        assert_eq!(graph.num_arcs(), 1);
        assert_eq!(graph.successors(0), &[1]);
        Ok(())
    }

    #[test]
    fn test_self_loops() -> Result<(), NodeOutOfRange> {
        let mut graph = AdjGraph::new(1);
        assert!(graph.add_arc(0, 0)?);
        assert_eq!(graph.successors(0), &[0]);
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        let mut graph = AdjGraph::new(2);
        assert_eq!(
            graph.add_arc(0, 2),
            Err(NodeOutOfRange {
                node: 2,
                num_nodes: 2
            })
        );
        assert_eq!(graph.num_arcs(), 0);
    }
}
