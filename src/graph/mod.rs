/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph representations and the access trait the visits are generic over.

use thiserror::Error;

mod adj_graph;
pub use adj_graph::AdjGraph;

pub mod random;

/// A node index outside the graph.
///
/// Raised synchronously by arc insertion and by the visit entry points,
/// before any traversal work is done.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("node {node} does not exist (the graph has {num_nodes} nodes)")]
pub struct NodeOutOfRange {
    /// The offending node index.
    pub node: usize,
    /// The number of nodes in the graph.
    pub num_nodes: usize,
}

/// A directed graph with random access to successor lists.
///
/// This is the seam between the visits and the graph storage: the visits
/// only need a fixed node count and successor enumeration in adjacency
/// order, and never mutate the graph.
pub trait RandomAccessGraph {
    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node, in adjacency order.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not a valid node index.
    fn successors(&self, node: usize) -> &[usize];
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }
}
