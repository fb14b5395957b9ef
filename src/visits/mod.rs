/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Both visits start from a single root, visit every node reachable from
//! it exactly once, and return the number of nodes visited by the call.
//! The visited state is kept between calls, so visiting a second root
//! continues the previous visit; use `reset` to start from scratch.
//!
//! [`Seq`] is the single-threaded reference implementation, used as the
//! correctness baseline of the [parallel visit](ParCursor) and preferable
//! for trivially small inputs. [`ParCursor`] expands one level at a time on
//! a caller-provided [`rayon::ThreadPool`], distributing fixed-size batches
//! of the current frontier to the pool threads through a shared atomic
//! cursor.

mod seq;
pub use seq::*;

mod par_cursor;
pub use par_cursor::*;

use crate::graph::NodeOutOfRange;
use thiserror::Error;

/// The ways a visit can fail.
///
/// There is no partial-result recovery: a failed visit leaves the visited
/// set in an unspecified, partially-populated state, and it must be reset
/// before the visit is reused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisitError {
    /// The root is not a node of the graph. Raised before any traversal
    /// work is done.
    #[error(transparent)]
    NodeOutOfRange(#[from] NodeOutOfRange),
    /// The caller-provided cancellation predicate requested an abort. The
    /// workers of the in-flight level have been awaited, but the visit is
    /// incomplete.
    #[error("the visit was interrupted")]
    Interrupted,
}
