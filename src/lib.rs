/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Level-synchronous parallel breadth-first visits on in-memory graphs.
//!
//! The crate provides two visits over the same [graph
//! abstraction](crate::graph::RandomAccessGraph): a classical [sequential
//! visit](crate::visits::Seq), used as a correctness baseline, and a
//! [parallel visit](crate::visits::ParCursor) that expands one
//! breadth-first level at a time on a bounded [`rayon::ThreadPool`].
//!
//! The parallel visit never takes a lock: node visitation is claimed with a
//! single atomic fetch-and-set on a [visited bit array](crate::visited),
//! work is handed out to the pool threads through a shared atomic cursor
//! advanced with fetch-and-add, and newly discovered nodes are accumulated
//! in worker-local buffers that are published to a [lock-free
//! accumulator](crate::frontier). The only blocking point is the
//! end-of-level barrier, where the scheduling thread waits for every worker
//! of the current level before assembling the next frontier.
//!
//! # Examples
//!
//! ```
//! use par_bfs::graph::AdjGraph;
//! use par_bfs::visits::ParCursor;
//! use par_bfs::thread_pool;
//!
//! # fn main() -> Result<(), par_bfs::visits::VisitError> {
//! let graph = AdjGraph::from_arcs(4, [(0, 1), (0, 2), (1, 3), (2, 3)])?;
//! let mut visit = ParCursor::new(&graph);
//! assert_eq!(visit.par_visit(0, &thread_pool![4])?, 4);
//! # Ok(())
//! # }
//! ```

#![deny(unconditional_recursion)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]

pub mod frontier;
pub mod graph;
pub mod visited;
pub mod visits;

pub mod prelude {
    //! Re-exports of the types needed by most users of the crate.
    pub use crate::frontier::FrontierAccumulator;
    pub use crate::graph::{AdjGraph, NodeOutOfRange, RandomAccessGraph};
    pub use crate::visited::VisitedSet;
    pub use crate::visits::{ParCursor, Seq, VisitError};
}

/// Utility macro to create [`thread_pools`](`rayon::ThreadPool`).
///
/// There are two forms of this macro:
/// * Create a [`ThreadPool`](rayon::ThreadPool) with the default settings:
/// ```
/// # use par_bfs::thread_pool;
/// let t: rayon::ThreadPool = thread_pool![];
/// ```
/// * Create a [`ThreadPool`](rayon::ThreadPool) with a given number of threads:
/// ```
/// # use par_bfs::thread_pool;
/// let t: rayon::ThreadPool = thread_pool![7];
/// assert_eq!(t.current_num_threads(), 7);
/// ```
#[macro_export]
macro_rules! thread_pool {
    () => {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Cannot build a ThreadPool with default parameters")
    };
    ($num_threads:expr) => {
        rayon::ThreadPoolBuilder::new()
            .num_threads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Cannot build a ThreadPool with default parameters and {} threads",
                    $num_threads,
                )
            })
    };
}
