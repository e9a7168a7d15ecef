//! Position-level views of the implicit layout, for tests and debugging.

use super::LinklessTree;
use crate::compare::Compare;
use crate::raw::Position;

impl<T, C: Compare<T>> LinklessTree<T, C> {
    /// Returns the array position where a search for `value` stops.
    ///
    /// If `value` is present this is the position holding it; otherwise it is the empty
    /// position (possibly past the current [`capacity`](LinklessTree::capacity)) where `value`
    /// would be inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.find_index(&5), 0);
    /// assert_eq!(tree.find_index(&3), 1);
    /// // 4 would go right of 3.
    /// assert_eq!(tree.find_index(&4), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn find_index(&self, value: &T) -> usize {
        self.raw.search(value).position().to_index()
    }
}

impl<T, C> LinklessTree<T, C> {
    /// Returns the element stored at array position `index`, or `None` if that position is
    /// empty or past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(5);
    /// tree.insert(8);
    ///
    /// assert_eq!(tree.value_at(2), Some(&8));
    /// assert_eq!(tree.value_at(1), None);
    /// assert_eq!(tree.value_at(1_000), None);
    /// ```
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&T> {
        self.raw.value_at(Position::from_index(index))
    }

    /// Returns the number of elements in the subtree rooted at array position `index`, or 0
    /// past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// for value in [5, 3, 8, 1] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.subtree_size(0), 4);
    /// assert_eq!(tree.subtree_size(1), 2);
    /// assert_eq!(tree.subtree_size(2), 1);
    /// assert_eq!(tree.subtree_size(1_000), 0);
    /// ```
    #[must_use]
    pub fn subtree_size(&self, index: usize) -> usize {
        self.raw.subtree_size(Position::from_index(index))
    }
}
