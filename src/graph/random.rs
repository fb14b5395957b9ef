/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Seeded random-graph generation for benchmarks and tests.

use super::AdjGraph;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Generates a random directed graph with `num_nodes` nodes by drawing
/// `num_arcs` arcs with uniformly distributed endpoints.
///
/// Duplicate arcs are suppressed by the graph, so the resulting arc count
/// may be smaller than `num_arcs`. Self-loops may occur. The generator is
/// seeded, so the same parameters always produce the same graph.
pub fn random_graph(num_nodes: usize, num_arcs: usize, seed: u64) -> AdjGraph {
    assert!(num_nodes > 0, "the graph must have at least one node");
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = AdjGraph::new(num_nodes);
    for _ in 0..num_arcs {
        let src = rng.random_range(0..num_nodes);
        let dst = rng.random_range(0..num_nodes);
        // The endpoints are in range by construction.
        graph.add_arc(src, dst).unwrap();
    }
    graph
}
