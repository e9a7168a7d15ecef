use core::ops::Index;

use super::LinklessTree;
use crate::compare::Compare;
use crate::{OutOfRange, Rank};

impl<T, C> LinklessTree<T, C> {
    /// Returns the element at position `rank` in sorted order.
    ///
    /// The rank is zero-based: `get(0)` is the smallest element and `get(len() - 1)` the
    /// largest.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `rank >= len()`.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::{LinklessTree, OutOfRange};
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(10);
    /// tree.insert(30);
    /// tree.insert(20);
    ///
    /// assert_eq!(tree.get(1), Ok(&20));
    /// assert_eq!(tree.get(3), Err(OutOfRange { rank: 3, len: 3 }));
    /// ```
    pub fn get(&self, rank: usize) -> Result<&T, OutOfRange> {
        self.raw.get_by_rank(rank)
    }
}

impl<T, C: Compare<T>> LinklessTree<T, C> {
    /// Returns the zero-based rank of `value` in sorted order, or `None` if the value is not
    /// present.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(10);
    /// tree.insert(20);
    ///
    /// assert_eq!(tree.rank_of(&20), Some(1));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, value: &T) -> Option<usize> {
        self.raw.rank_of(value)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use linkless_tree::{LinklessTree, Rank};
///
/// let mut tree = LinklessTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// assert_eq!(tree[Rank(1)], 20);
/// ```
impl<T, C> Index<Rank> for LinklessTree<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        match self.get(rank.0) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{LinklessTree, Rank};

    #[test]
    #[should_panic(expected = "rank 2 is out of range for a tree of length 2")]
    fn index_out_of_bounds_panics() {
        let mut tree = LinklessTree::new();
        tree.insert(1);
        tree.insert(2);
        let _ = tree[Rank(2)];
    }
}
