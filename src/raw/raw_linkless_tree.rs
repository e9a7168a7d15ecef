use core::cmp::Ordering::{Equal, Greater, Less};

use super::position::Position;
use super::size::Size;
use super::slots::Slots;
use crate::compare::Compare;
use crate::order_statistic::OutOfRange;

/// The core implicit-array tree backing `LinklessTree`.
///
/// Occupied positions always form a tree hanging off the root: an occupied position's parent
/// is occupied too, so every walk may stop at the first empty slot.
#[derive(Clone)]
pub(crate) struct RawLinklessTree<T, C> {
    /// Elements and subtree sizes, indexed by position.
    slots: Slots<T>,
    /// Total order over the elements.
    compare: C,
}

/// Where a search walk stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SearchResult {
    /// An equal element is stored at the position.
    Found(Position),
    /// No equal element; the position is empty (possibly past the end) and is where it would go.
    NotFound(Position),
}

impl SearchResult {
    pub(crate) const fn position(self) -> Position {
        match self {
            SearchResult::Found(position) | SearchResult::NotFound(position) => position,
        }
    }
}

/// Which neighbour refills a vacated position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Promotion {
    /// Largest element of the left subtree.
    Predecessor,
    /// Smallest element of the right subtree.
    Successor,
}

impl<T, C> RawLinklessTree<T, C> {
    /// Creates a new, empty tree ordered by `compare`.
    pub(crate) fn new(compare: C) -> Self {
        Self {
            slots: Slots::new(),
            compare,
        }
    }

    /// Returns the number of elements in the tree.
    pub(crate) fn len(&self) -> usize {
        self.slots.size(Position::ROOT).to_usize()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of addressable positions.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.compare
    }

    /// Drops every element. Capacity is kept.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    pub(crate) fn value_at(&self, position: Position) -> Option<&T> {
        self.slots.get(position)
    }

    pub(crate) fn subtree_size(&self, position: Position) -> usize {
        self.slots.size(position).to_usize()
    }

    /// Gets an element by its rank.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Result<&T, OutOfRange> {
        let len = self.len();
        if rank >= len {
            return Err(OutOfRange { rank, len });
        }

        let mut current = Position::ROOT;
        let mut remaining = rank;

        loop {
            debug_assert!(
                current.to_index() < self.capacity(),
                "get_by_rank: tree size invariant violated - rank {rank} ran past the end (len: {len})"
            );
            let left_size = self.slots.size(current.left()).to_usize();
            match remaining.cmp(&left_size) {
                Equal => {
                    return Ok(self
                        .slots
                        .get(current)
                        .expect("`RawLinklessTree::get_by_rank()` - ranked position is empty!"));
                }
                Greater => {
                    remaining -= left_size + 1;
                    current = current.right();
                }
                Less => current = current.left(),
            }
        }
    }

    /// Returns the smallest element.
    pub(crate) fn first(&self) -> Option<&T> {
        self.spine_end(Position::left)
    }

    /// Returns the largest element.
    pub(crate) fn last(&self) -> Option<&T> {
        self.spine_end(Position::right)
    }

    fn spine_end(&self, step: fn(Position) -> Position) -> Option<&T> {
        let mut current = Position::ROOT;
        let mut extremum = self.slots.get(current)?;
        loop {
            current = step(current);
            match self.slots.get(current) {
                Some(element) => extremum = element,
                None => return Some(extremum),
            }
        }
    }

    /// Applies `adjust` to the size of `target` and of every ancestor up to the root.
    fn adjust_path(&mut self, target: Position, adjust: fn(&mut Size)) {
        let mut current = Some(target);
        while let Some(position) = current {
            adjust(self.slots.size_mut(position));
            current = position.parent();
        }
    }

    /// Removes the element at `target`, refilling the hole from below.
    ///
    /// The caller has already decremented the sizes from the root down to `target`. Each step
    /// takes the heavier child subtree (the left one on ties), decrements the sizes along its
    /// spine, and moves its extremum up. The extremum's own slot is then the new hole, which
    /// is refilled the same way from its one remaining side until a leaf is emptied.
    fn vacate(&mut self, target: Position) -> T {
        let removed = self.slots.take(target);
        let mut hole = target;

        loop {
            let left_size = self.slots.size(hole.left());
            let right_size = self.slots.size(hole.right());
            let promotion = if !left_size.is_zero() && left_size >= right_size {
                Promotion::Predecessor
            } else if right_size > left_size {
                Promotion::Successor
            } else {
                break;
            };

            let source = self.detach_extremum(hole, promotion);

            #[cfg(feature = "tracing")]
            tracing::trace!(
                hole = hole.to_index(),
                source = source.to_index(),
                ?promotion,
                left_size = left_size.to_usize(),
                right_size = right_size.to_usize(),
                "promoting extremum"
            );

            let promoted = self.slots.take(source);
            self.slots.put(hole, promoted);
            hole = source;
        }

        debug_assert!(
            self.slots.size(hole).is_zero(),
            "vacate: emptied position {} still has a non-zero size",
            hole.to_index()
        );
        removed
    }

    /// Walks the spine of the child subtree chosen by `promotion`, decrementing each size on the
    /// way, and returns the position of the extremum at its end.
    fn detach_extremum(&mut self, hole: Position, promotion: Promotion) -> Position {
        let (mut current, step): (Position, fn(Position) -> Position) = match promotion {
            Promotion::Predecessor => (hole.left(), Position::right),
            Promotion::Successor => (hole.right(), Position::left),
        };

        loop {
            self.slots.size_mut(current).decrement();
            let next = step(current);
            if !self.slots.is_occupied(next) {
                return current;
            }
            current = next;
        }
    }
}

impl<T, C: Compare<T>> RawLinklessTree<T, C> {
    /// Walks from the root towards `value`.
    pub(crate) fn search(&self, value: &T) -> SearchResult {
        let mut current = Position::ROOT;
        while let Some(element) = self.slots.get(current) {
            match self.compare.compare(value, element) {
                Equal => return SearchResult::Found(current),
                Less => current = current.left(),
                Greater => current = current.right(),
            }
        }
        SearchResult::NotFound(current)
    }

    pub(crate) fn contains(&self, value: &T) -> bool {
        matches!(self.search(value), SearchResult::Found(_))
    }

    /// Inserts `value` unless an equal element is present. Returns whether it was inserted.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            SearchResult::Found(_) => false,
            SearchResult::NotFound(position) => {
                self.slots.reserve(position);
                self.slots.put(position, value);
                self.adjust_path(position, Size::increment);
                true
            }
        }
    }

    /// Removes and returns the element equal to `value`, if any.
    pub(crate) fn remove(&mut self, value: &T) -> Option<T> {
        let SearchResult::Found(target) = self.search(value) else {
            return None;
        };
        self.adjust_path(target, Size::decrement);
        Some(self.vacate(target))
    }

    /// Returns the rank of the element equal to `value`, if any.
    pub(crate) fn rank_of(&self, value: &T) -> Option<usize> {
        let mut current = Position::ROOT;
        let mut rank = 0;
        while let Some(element) = self.slots.get(current) {
            match self.compare.compare(value, element) {
                Equal => return Some(rank + self.slots.size(current.left()).to_usize()),
                Less => current = current.left(),
                Greater => {
                    rank += self.slots.size(current.left()).to_usize() + 1;
                    current = current.right();
                }
            }
        }
        None
    }
}
