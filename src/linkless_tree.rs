use core::fmt;

use crate::compare::{Compare, Natural};
use crate::raw::RawLinklessTree;

mod capacity;
mod inspect;
mod order_statistic;

/// An ordered set stored as a binary search tree without links.
///
/// Nodes live in a flat array and are found by arithmetic: the root is at position 0 and the
/// children of position `p` are at `2p + 1` and `2p + 2`. Alongside each node the tree keeps the
/// number of elements in the subtree below it, which makes [`get`](LinklessTree::get) (the
/// element of a given rank) as cheap as [`contains`](LinklessTree::contains).
///
/// The tree never rebalances. Every operation costs O(depth), and depth depends entirely on the
/// order of insertion: random input gives logarithmic depth, sorted input gives a single spine
/// and linear depth, with the backing arrays growing exponentially in that depth.
///
/// Elements are ordered by a [`Compare`] capability. `LinklessTree<T>` uses [`Natural`], the
/// element's own [`Ord`]; [`with_comparator`](LinklessTree::with_comparator) accepts any other,
/// including a closure. It is a logic error for an element's ordering to change while it is in
/// the tree. The behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the tree that observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use linkless_tree::LinklessTree;
///
/// let mut tree = LinklessTree::new();
/// for value in [5, 3, 8, 1, 4] {
///     tree.insert(value);
/// }
///
/// assert_eq!(tree.len(), 5);
/// assert!(tree.contains(&8));
/// assert!(!tree.contains(&9));
///
/// // The median.
/// assert_eq!(tree.get(2), Ok(&4));
///
/// assert!(tree.remove(&5));
/// assert_eq!(tree.get(3), Ok(&8));
/// ```
pub struct LinklessTree<T, C = Natural> {
    raw: RawLinklessTree<T, C>,
}

impl<T: Ord> LinklessTree<T> {
    /// Makes a new, empty `LinklessTree` ordered by `T`'s [`Ord`].
    ///
    /// Allocates room for a balanced tree of four levels (15 positions).
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    ///
    /// // entries can now be inserted into the empty tree
    /// tree.insert(1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> LinklessTree<T, C> {
    /// Makes a new, empty `LinklessTree` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// tree.insert("ccc");
    /// tree.insert("a");
    ///
    /// // Same length counts as the same element.
    /// assert!(!tree.insert("b"));
    /// assert_eq!(tree.get(0), Ok(&"a"));
    /// ```
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        LinklessTree {
            raw: RawLinklessTree::new(compare),
        }
    }

    /// Returns the comparator ordering this tree.
    #[must_use]
    pub fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the tree, removing all elements.
    ///
    /// The backing arrays keep their length; they never shrink.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the smallest element in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// assert_eq!(tree.first(), None);
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the largest element in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// assert_eq!(tree.last(), None);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }
}

impl<T, C: Compare<T>> LinklessTree<T, C> {
    /// Returns `true` if the tree contains an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.contains(value)
    }

    /// Adds a value to the tree.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the tree did not previously contain an equal value, `true` is returned.
    /// - If the tree already contained an equal value, `false` is returned, and the tree is
    ///   left untouched.
    ///
    /// The backing arrays double in length as often as needed to reach the new position.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth), plus O(capacity) when the arrays grow.
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// Removes the element equal to `value`. Returns whether such an element was present.
    ///
    /// The vacated node is refilled from whichever child subtree holds more elements (the left
    /// one on ties): its largest element on the left or its smallest on the right moves up.
    /// Nothing is rotated, so removal never reduces depth on purpose.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(2);
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn remove(&mut self, value: &T) -> bool {
        self.raw.remove(value).is_some()
    }

    /// Removes and returns the element equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkless_tree::LinklessTree;
    ///
    /// let mut tree = LinklessTree::new();
    /// tree.insert(2);
    /// assert_eq!(tree.take(&2), Some(2));
    /// assert_eq!(tree.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.raw.remove(value)
    }
}

impl<T: Ord> Default for LinklessTree<T> {
    /// Creates an empty `LinklessTree`.
    fn default() -> LinklessTree<T> {
        LinklessTree::new()
    }
}

impl<T: Clone, C: Clone> Clone for LinklessTree<T, C> {
    fn clone(&self) -> Self {
        LinklessTree { raw: self.raw.clone() }
    }
}

/// Lists the elements in rank order.
impl<T: fmt::Debug, C> fmt::Debug for LinklessTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries((0..self.len()).filter_map(|rank| self.raw.get_by_rank(rank).ok())).finish()
    }
}
