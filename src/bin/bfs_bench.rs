/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Timing harness comparing the sequential and the parallel visit on a
//! ladder of seeded random graphs.

use anyhow::{ensure, Result};
use dsi_progress_logger::prelude::*;
use par_bfs::graph::random::random_graph;
use par_bfs::graph::RandomAccessGraph;
use par_bfs::thread_pool;
use par_bfs::visits::{ParCursor, Seq};
use std::time::Instant;

/// The graph sizes of the original measurement ladder, as (nodes, arcs).
const LADDER: [(usize, usize); 7] = [
    (10, 50),
    (100, 500),
    (1000, 5000),
    (10_000, 50_000),
    (10_000, 100_000),
    (50_000, 1_000_000),
    (100_000, 1_000_000),
];

const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let num_threads = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => num_cpus::get(),
    };
    let pool = thread_pool![num_threads];

    let mut pl = ProgressLogger::default();
    pl.item_name("graph");
    pl.expected_updates(Some(LADDER.len()));
    pl.start(format!(
        "Benchmarking breadth-first visits on {} threads...",
        num_threads
    ));

    for (num_nodes, num_arcs) in LADDER {
        let graph = random_graph(num_nodes, num_arcs, SEED);

        let mut seq = Seq::new(&graph);
        let start = Instant::now();
        let seq_count = seq.visit(0)?;
        let seq_time = start.elapsed();

        let mut par = ParCursor::new(&graph);
        let start = Instant::now();
        let par_count = par.par_visit(0, &pool)?;
        let par_time = start.elapsed();

        ensure!(
            seq_count == par_count,
            "visit mismatch on {} nodes / {} arcs: sequential visited {}, parallel visited {}",
            num_nodes,
            num_arcs,
            seq_count,
            par_count
        );

        println!(
            "{:>7} nodes {:>9} arcs | visited {:>7} | sequential {:>12?} | parallel {:>12?}",
            graph.num_nodes(),
            graph.num_arcs(),
            par_count,
            seq_time,
            par_time
        );
        pl.update();
    }

    pl.done();
    Ok(())
}
