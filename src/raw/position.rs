/// A node address in the implicit layout.
///
/// The root lives at index 0 and the children of `p` at `2p + 1` and `2p + 2`. Nothing
/// else is stored; every relationship between nodes is computed from the index alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub(crate) struct Position(usize);

impl Position {
    pub(crate) const ROOT: Self = Self(0);

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) const fn left(self) -> Self {
        Self(self.0 * 2 + 1)
    }

    #[inline]
    pub(crate) const fn right(self) -> Self {
        Self(self.0 * 2 + 2)
    }

    /// Returns the parent position, or `None` for the root.
    #[inline]
    pub(crate) const fn parent(self) -> Option<Self> {
        if self.0 == 0 { None } else { Some(Self((self.0 - 1) / 2)) }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // `Position` must stay a plain index.
    assert_eq_size!(Position, usize);

    #[test]
    fn root_has_no_parent() {
        assert_eq!(Position::ROOT.parent(), None);
        assert_eq!(Position::ROOT.left().to_index(), 1);
        assert_eq!(Position::ROOT.right().to_index(), 2);
    }

    #[test]
    fn fourth_level_fits_initial_capacity() {
        let deepest = Position::ROOT.right().right().right();
        assert_eq!(deepest.to_index(), 14);
    }

    proptest! {
        #[test]
        fn children_point_back_to_parent(index in 0..usize::MAX / 4) {
            let position = Position::from_index(index);
            prop_assert_eq!(position.left().parent(), Some(position));
            prop_assert_eq!(position.right().parent(), Some(position));
            prop_assert_eq!(position.left().to_index() % 2, 1);
            prop_assert_eq!(position.right().to_index() % 2, 0);
        }
    }
}
