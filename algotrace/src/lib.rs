//! Step-recording engines for classic algorithms.
//!
//! For timer-driven playback over a recorded trace, see the `algotrace-playback` crate.
//!
//! Each engine runs a textbook algorithm while appending an immutable [`Step`] per state
//! transition: an engine-specific event (what happened and which indices, keys or edges it
//! touched), an owned snapshot of the state right after it, and a human-readable message. A
//! trace can be replayed in any order since no step shares data with another.
//!
//! Sorting, graph and N-Queens engines run eagerly and return the whole trace. The
//! [`RedBlackTree`] and [`UnionFind`] structures persist across calls and produce a trace per
//! operation.
//!
//! ```
//! let steps = algotrace::quick_sort::trace(&[38, 27, 43, 3, 9, 82, 10]);
//! let last = steps.last().map(|s| s.state.array.clone());
//! assert_eq!(last, Some(vec![3, 9, 10, 27, 38, 43, 82]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod graph;
mod input;
mod key;
mod options;
mod snapshot;
mod trace;
mod types;

pub mod dijkstra;
pub mod heap_sort;
pub mod kruskal;
pub mod llrb;
pub mod merge_sort;
pub mod n_queens;
pub mod quick_sort;
pub mod union_find;

#[cfg(test)]
mod tests;

pub use error::InputError;
pub use graph::{Edge, Graph};
pub use input::{board_size, cap_len, element_count, parse_key, parse_values, random_values};
pub use key::NodeKey;
pub use llrb::RedBlackTree;
pub use options::TraceLimits;
pub use snapshot::{InvariantViolation, TreeNode, TreeSnapshot};
pub use trace::{Recorder, Step, StepKind, TraceStep};
pub use types::{Color, Distance, Side, Span};
pub use union_find::{DisjointSet, UnionFind};
