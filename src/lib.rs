//! A pointer-free order-statistic binary search tree.
//!
//! [`LinklessTree`] is an ordered set stored as an unbalanced binary search tree whose nodes are
//! addressed purely by arithmetic: position 0 is the root and the children of position `p` are
//! at `2p + 1` and `2p + 2`, as in a binary heap. Each position also records how many elements
//! live in the subtree below it, so the tree answers rank queries alongside the usual set
//! operations:
//!
//! - [`get`](LinklessTree::get) - Get the element at a given sorted position
//! - [`rank_of`](LinklessTree::rank_of) - Get the sorted position of an element
//! - Indexing by [`Rank`] - e.g., `tree[Rank(0)]` for the smallest element
//!
//! # Example
//!
//! ```
//! use linkless_tree::{LinklessTree, OutOfRange, Rank};
//!
//! let mut tree = LinklessTree::new();
//! for value in [5, 3, 8, 1, 4] {
//!     assert!(tree.insert(value));
//! }
//! assert!(!tree.insert(3));
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.get(0), Ok(&1));
//! assert_eq!(tree[Rank(4)], 8);
//! assert_eq!(tree.get(5), Err(OutOfRange { rank: 5, len: 5 }));
//!
//! assert!(tree.remove(&5));
//! let sorted: Vec<_> = (0..tree.len()).map(|rank| tree[Rank(rank)]).collect();
//! assert_eq!(sorted, [1, 3, 4, 8]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No pointers** - Two parallel arrays, one of elements and one of subtree sizes
//! - **Custom orders** - Any [`Compare`] capability, including plain closures
//! - **`tracing`** (cargo feature, off by default) - `trace!` events on array growth and on
//!   each promotion during removal
//!
//! # Implementation
//!
//! The tree does not rebalance. Each operation walks a single root-to-leaf path, so its cost
//! is the depth of the tree, which is logarithmic for random insertion orders and linear for
//! sorted ones. The arrays double in length whenever an insertion lands past the end, and
//! never shrink.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod linkless_tree;
mod order_statistic;
mod raw;

pub use compare::{Compare, Natural};
pub use linkless_tree::LinklessTree;
pub use order_statistic::{OutOfRange, Rank};
