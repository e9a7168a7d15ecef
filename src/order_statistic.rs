/// A zero-based rank into the sorted order of a tree.
///
/// # Examples
///
/// ```
/// use linkless_tree::{LinklessTree, Rank};
///
/// let mut tree = LinklessTree::new();
/// tree.insert("b");
/// tree.insert("a");
///
/// assert_eq!(tree[Rank(0)], "a");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

/// Returned when a rank does not name an element of the tree.
///
/// # Examples
///
/// ```
/// use linkless_tree::{LinklessTree, OutOfRange};
///
/// let tree: LinklessTree<u8> = LinklessTree::new();
/// assert_eq!(tree.get(0), Err(OutOfRange { rank: 0, len: 0 }));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("rank {rank} is out of range for a tree of length {len}")]
pub struct OutOfRange {
    /// The rank that was requested.
    pub rank: usize,
    /// The number of elements in the tree at the time of the request.
    pub len: usize,
}
