use super::LinklessTree;

impl<T, C> LinklessTree<T, C> {
    /// Returns the number of positions the backing arrays can address.
    ///
    /// A new tree starts at 15. Inserting at a position past the end doubles the capacity as
    /// many times as needed; nothing ever shrinks it, not even [`clear`](LinklessTree::clear).
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// assert_eq!(tree.capacity(), 15);
    ///
    /// // Sorted input builds a right spine: positions 0, 2, 6, 14, 30.
    /// for value in 0..5 {
    ///     tree.insert(value);
    /// }
    /// assert_eq!(tree.capacity(), 60);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
