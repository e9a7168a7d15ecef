/// Number of present elements in the subtree rooted at some position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(usize);

impl Size {
    pub(crate) const ZERO: Self = Self(0);

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub(crate) fn increment(&mut self) {
        self.0 = self.0.checked_add(1).expect("`Size::increment()` - subtree size overflowed!");
    }

    #[inline]
    pub(crate) fn decrement(&mut self) {
        self.0 = self.0.checked_sub(1).expect("`Size::decrement()` - subtree size is already zero!");
    }
}
