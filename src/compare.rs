use core::cmp::Ordering;

/// A total order over `T`, supplied to a [`LinklessTree`](crate::LinklessTree) at construction.
///
/// The ordering must be strict and total: reflexive equality, antisymmetric, and transitive.
/// A comparator that breaks these rules is a logic error. The tree will give wrong answers but
/// never exhibit undefined behavior.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
///
/// # Examples
///
/// ```
/// use linkless_tree::LinklessTree;
///
/// // Largest first.
/// let mut tree = LinklessTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// tree.insert(1);
/// tree.insert(3);
/// tree.insert(2);
///
/// assert_eq!(tree.get(0), Ok(&3));
/// assert_eq!(tree.get(2), Ok(&1));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T`, as given by its [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
