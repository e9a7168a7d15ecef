use alloc::vec::Vec;
use core::iter;

use super::position::Position;
use super::size::Size;

/// Capacity of a new tree: a perfectly balanced tree of four levels.
pub(crate) const INITIAL_CAPACITY: usize = 15;

/// The two parallel arrays backing a tree.
///
/// `elements[p]` is the element stored at position `p` (if any) and `sizes[p]` is the number
/// of elements in the subtree rooted at `p`. Both vectors always have the same length, and
/// that length only ever doubles. Positions past the end read as empty with size zero.
#[derive(Clone)]
pub(crate) struct Slots<T> {
    elements: Vec<Option<T>>,
    sizes: Vec<Size>,
}

impl<T> Slots<T> {
    pub(crate) fn new() -> Self {
        Self {
            elements: iter::repeat_with(|| None).take(INITIAL_CAPACITY).collect(),
            sizes: alloc::vec![Size::ZERO; INITIAL_CAPACITY],
        }
    }

    /// Number of addressable positions.
    pub(crate) fn capacity(&self) -> usize {
        debug_assert_eq!(self.elements.len(), self.sizes.len(), "`Slots` arrays out of step");
        self.elements.len()
    }

    #[inline]
    pub(crate) fn get(&self, position: Position) -> Option<&T> {
        self.elements.get(position.to_index()).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    #[inline]
    pub(crate) fn size(&self, position: Position) -> Size {
        self.sizes.get(position.to_index()).copied().unwrap_or(Size::ZERO)
    }

    #[inline]
    pub(crate) fn size_mut(&mut self, position: Position) -> &mut Size {
        self.sizes
            .get_mut(position.to_index())
            .expect("`Slots::size_mut()` - `position` is out of range!")
    }

    /// Doubles capacity until `position` is addressable.
    pub(crate) fn reserve(&mut self, position: Position) {
        let mut capacity = self.capacity();
        if position.to_index() < capacity {
            return;
        }
        while position.to_index() >= capacity {
            capacity = capacity.checked_mul(2).expect("`Slots::reserve()` - capacity overflowed!");
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(from = self.capacity(), to = capacity, position = position.to_index(), "growing slots");

        self.elements.resize_with(capacity, || None);
        self.sizes.resize(capacity, Size::ZERO);
    }

    pub(crate) fn put(&mut self, position: Position, element: T) {
        let slot = self
            .elements
            .get_mut(position.to_index())
            .expect("`Slots::put()` - `position` is out of range!");
        assert!(slot.is_none(), "`Slots::put()` - `position` is already occupied!");
        *slot = Some(element);
    }

    pub(crate) fn take(&mut self, position: Position) -> T {
        self.elements
            .get_mut(position.to_index())
            .and_then(Option::take)
            .expect("`Slots::take()` - `position` is empty!")
    }

    /// Empties every slot and zeroes every size without giving back capacity.
    pub(crate) fn clear(&mut self) {
        self.elements.iter_mut().for_each(|slot| *slot = None);
        self.sizes.iter_mut().for_each(|size| *size = Size::ZERO);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_slots_are_empty() {
        let slots: Slots<u32> = Slots::new();
        assert_eq!(slots.capacity(), INITIAL_CAPACITY);
        for index in 0..INITIAL_CAPACITY {
            assert!(!slots.is_occupied(Position::from_index(index)));
            assert!(slots.size(Position::from_index(index)).is_zero());
        }
    }

    #[test]
    fn out_of_range_reads_as_absent() {
        let slots: Slots<u32> = Slots::new();
        let far = Position::from_index(1_000);
        assert_eq!(slots.get(far), None);
        assert_eq!(slots.size(far), Size::ZERO);
    }

    #[test]
    #[should_panic(expected = "`Slots::put()` - `position` is out of range!")]
    fn put_past_end_panics() {
        let mut slots = Slots::new();
        slots.put(Position::from_index(INITIAL_CAPACITY), 1);
    }

    #[test]
    #[should_panic(expected = "`Slots::put()` - `position` is already occupied!")]
    fn put_twice_panics() {
        let mut slots = Slots::new();
        slots.put(Position::ROOT, 1);
        slots.put(Position::ROOT, 2);
    }

    #[test]
    #[should_panic(expected = "`Slots::take()` - `position` is empty!")]
    fn take_empty_panics() {
        let mut slots: Slots<u32> = Slots::new();
        let _ = slots.take(Position::ROOT);
    }

    #[test]
    fn reserve_doubles() {
        let mut slots: Slots<u32> = Slots::new();
        slots.reserve(Position::from_index(14));
        assert_eq!(slots.capacity(), 15);
        slots.reserve(Position::from_index(15));
        assert_eq!(slots.capacity(), 30);
        slots.reserve(Position::from_index(100));
        assert_eq!(slots.capacity(), 120);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut slots = Slots::new();
        slots.reserve(Position::from_index(40));
        slots.put(Position::from_index(40), 7);
        slots.size_mut(Position::from_index(40)).increment();
        slots.clear();
        assert_eq!(slots.capacity(), 60);
        assert!(!slots.is_occupied(Position::from_index(40)));
        assert!(slots.size(Position::from_index(40)).is_zero());
    }

    proptest! {
        #[test]
        fn growth_preserves_contents(positions in prop::collection::vec(0usize..2_000, 1..64)) {
            let mut slots: Slots<usize> = Slots::new();
            let mut placed = alloc::vec::Vec::new();

            for index in positions {
                let position = Position::from_index(index);
                slots.reserve(position);
                prop_assert!(slots.capacity() > index);
                prop_assert_eq!(slots.capacity() % INITIAL_CAPACITY, 0);
                if !slots.is_occupied(position) {
                    slots.put(position, index);
                    placed.push(index);
                }
                for &earlier in &placed {
                    prop_assert_eq!(slots.get(Position::from_index(earlier)), Some(&earlier));
                }
            }
        }
    }
}
