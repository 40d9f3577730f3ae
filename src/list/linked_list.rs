use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use super::{At, Cursor, CursorMut, Iter, IterMut, Link, Node, NodeArena, Position};
#[doc(inline)]
pub use crate::util::error::{
    AccessError, BeforeBeginError, CapacityOverflow, EndPositionError, InsertError, PositionError,
    StalePositionError,
};
use crate::util::result::ResultExtension;

/// A list with links in one direction, which is modified relative to positions within it. See
/// also: [`Cursor`] and [`CursorMut`] for traversal, and [`Position`] for referring to an element
/// while the list is being mutated.
///
/// Every insertion and removal happens _after_ a position. The list has a sentinel position
/// preceding its first element ([`before_begin`](LinkedList::before_begin)), so the front of the
/// list is handled in exactly the same way as any other element.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)`* |
/// | `pop_front` | `O(1)` |
/// | `insert_after` | `O(1)`* |
/// | `erase_after` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized. Nodes are stored in a growable arena and removed nodes leave behind slots that
/// are reused by later insertions.
///
/// # Positions
/// Positions remain valid until the element they refer to is removed. Afterwards, any use of them
/// is detected and reported as a [`StalePositionError`] (or a panic), even if the node's storage
/// has since been reused. The same applies to positions taken from another list, and to positions
/// taken before the list was overwritten by [`clone_from`](Clone::clone_from). End and
/// before-begin positions never go stale.
pub struct LinkedList<T> {
    pub(crate) nodes: NodeArena<T>,
    /// The sentinel's link to the first element.
    pub(crate) head: Link,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            nodes: NodeArena::new(),
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.head {
            Some(index) => Some(&self.nodes.node(index).value),
            None => None,
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(index) => Some(&mut self.nodes.node_mut(index).value),
            None => None,
        }
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw()
    }

    /// Add the provided element to the front of the LinkedList, returning an [`Err`] if the list
    /// is unable to grow. The list is left unchanged on a failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.nodes.try_reserve_one()?;
        self.link_after(None, value);
        Ok(())
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(None)
    }

    /// Removes every element from the list. Elements are detached one at a time from the front, so
    /// the list is consistent while each one is dropped.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of this list with `other`. Positions remain attached to their
    /// elements, wherever those elements end up.
    pub fn swap(&mut self, other: &mut LinkedList<T>) {
        mem::swap(self, other);
    }

    /// Returns a cursor at the sentinel before the first element. Moving it forward once yields
    /// [`begin`](LinkedList::begin).
    pub const fn before_begin(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            pos: Position::new(At::BeforeBegin),
        }
    }

    /// Returns a read-only cursor at the sentinel before the first element.
    pub const fn cbefore_begin(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: Position::new(At::BeforeBegin),
        }
    }

    /// Returns a cursor at the first element, or at the end if the list is empty.
    pub fn begin(&mut self) -> CursorMut<'_, T> {
        let pos = self.begin_position();
        CursorMut {
            list: self,
            pos,
        }
    }

    pub fn cbegin(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: self.begin_position(),
        }
    }

    /// Returns a cursor one past the last element. It can't be read from or inserted after.
    pub const fn end(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            pos: Position::new(At::End),
        }
    }

    pub const fn cend(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: Position::new(At::End),
        }
    }

    /// Returns a read-only cursor at `pos`.
    pub const fn cursor(&self, pos: Position<T>) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos,
        }
    }

    /// Returns a cursor at `pos`.
    pub const fn cursor_mut(&mut self, pos: Position<T>) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            pos,
        }
    }

    /// Inserts `value` directly after `pos`, returning a cursor at the new element, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if `pos` is the end of the list or refers to a removed element, or if the list is
    /// unable to grow.
    pub fn insert_after(&mut self, pos: Position<T>, value: T) -> CursorMut<'_, T> {
        self.try_insert_after(pos, value).throw()
    }

    /// Inserts `value` directly after `pos`, returning a cursor at the new element, or an [`Err`]
    /// on a failure rather than panicking. The list is left unchanged on a failure.
    pub fn try_insert_after(
        &mut self,
        pos: Position<T>,
        value: T,
    ) -> Result<CursorMut<'_, T>, InsertError> {
        self.try_insert_after_with(pos, || value)
    }

    /// Inserts the result of `f` directly after `pos`, panicking on a failure.
    ///
    /// Space for the new element is claimed before `f` is invoked, so if `f` panics, the list is
    /// left exactly as it was.
    ///
    /// # Panics
    /// Panics if `pos` is the end of the list or refers to a removed element, or if the list is
    /// unable to grow.
    pub fn insert_after_with<F: FnOnce() -> T>(&mut self, pos: Position<T>, f: F) -> CursorMut<'_, T> {
        self.try_insert_after_with(pos, f).throw()
    }

    pub fn try_insert_after_with<F: FnOnce() -> T>(
        &mut self,
        pos: Position<T>,
        f: F,
    ) -> Result<CursorMut<'_, T>, InsertError> {
        let anchor = self.try_anchor(pos.at)?;
        self.nodes.try_reserve_one()?;

        let index = self.link_after(anchor, f());
        let pos = Position::new(At::Node(self.nodes.id(index)));

        Ok(CursorMut {
            list: self,
            pos,
        })
    }

    /// Removes the element directly after `pos`, returning a cursor at the element that now
    /// follows `pos` (or the end). Does nothing if `pos` is the last element.
    ///
    /// # Panics
    /// Panics if `pos` is the end of the list or refers to a removed element.
    pub fn erase_after(&mut self, pos: Position<T>) -> CursorMut<'_, T> {
        self.try_erase_after(pos).throw()
    }

    pub fn try_erase_after(&mut self, pos: Position<T>) -> Result<CursorMut<'_, T>, PositionError> {
        let anchor = self.try_anchor(pos.at)?;
        self.unlink_after(anchor);

        let pos = Position::new(self.at_link(self.next_link(anchor)));
        Ok(CursorMut {
            list: self,
            pos,
        })
    }

    /// Removes the element directly after `pos` and returns it, if there is one.
    ///
    /// # Panics
    /// Panics if `pos` is the end of the list or refers to a removed element.
    pub fn remove_after(&mut self, pos: Position<T>) -> Option<T> {
        self.try_remove_after(pos).throw()
    }

    pub fn try_remove_after(&mut self, pos: Position<T>) -> Result<Option<T>, PositionError> {
        let anchor = self.try_anchor(pos.at)?;
        Ok(self.unlink_after(anchor))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Inserts a clone of `value` directly after `pos`. If cloning panics, the list is left
    /// unchanged.
    ///
    /// # Panics
    /// Panics if `pos` is the end of the list or refers to a removed element, or if the list is
    /// unable to grow.
    pub fn insert_after_cloned(&mut self, pos: Position<T>, value: &T) -> CursorMut<'_, T> {
        self.insert_after_with(pos, || value.clone())
    }

    /// Creates a deep copy of the list, returning an [`Err`] rather than aborting if space for the
    /// copy can't be allocated.
    pub fn try_clone(&self) -> Result<LinkedList<T>, CapacityOverflow> {
        let mut copy = LinkedList {
            nodes: NodeArena::try_with_capacity(self.len)?,
            head: None,
            len: 0,
        };
        copy.extend_from_back(self.iter().cloned());
        Ok(copy)
    }
}

// Internal linking. An anchor is the node an operation happens after, where None is the sentinel.
impl<T> LinkedList<T> {
    pub(crate) fn begin_position(&self) -> Position<T> {
        Position::new(self.at_link(self.head))
    }

    pub(crate) fn at_link(&self, link: Link) -> At {
        match link {
            Some(index) => At::Node(self.nodes.id(index)),
            None => At::End,
        }
    }

    pub(crate) fn next_link(&self, anchor: Option<usize>) -> Link {
        match anchor {
            Some(index) => self.nodes.node(index).next,
            None => self.head,
        }
    }

    pub(crate) fn next_link_mut(&mut self, anchor: Option<usize>) -> &mut Link {
        match anchor {
            Some(index) => &mut self.nodes.node_mut(index).next,
            None => &mut self.head,
        }
    }

    pub(crate) fn try_anchor(&self, at: At) -> Result<Option<usize>, PositionError> {
        match at {
            At::BeforeBegin => Ok(None),
            At::Node(id) => self.nodes.resolve(id).map(Some).ok_or(StalePositionError.into()),
            At::End => Err(EndPositionError.into()),
        }
    }

    /// Resolves the position that follows `at`. The end is its own successor.
    pub(crate) fn try_successor(&self, at: At) -> Result<At, StalePositionError> {
        match at {
            At::BeforeBegin => Ok(self.at_link(self.head)),
            At::Node(id) => {
                let index = self.nodes.resolve(id).ok_or(StalePositionError)?;
                Ok(self.at_link(self.nodes.node(index).next))
            },
            At::End => Ok(At::End),
        }
    }

    pub(crate) fn try_value(&self, at: At) -> Result<&T, AccessError> {
        match at {
            At::BeforeBegin => Err(BeforeBeginError.into()),
            At::Node(id) => {
                let index = self.nodes.resolve(id).ok_or(StalePositionError)?;
                Ok(&self.nodes.node(index).value)
            },
            At::End => Err(EndPositionError.into()),
        }
    }

    pub(crate) fn try_value_mut(&mut self, at: At) -> Result<&mut T, AccessError> {
        match at {
            At::BeforeBegin => Err(BeforeBeginError.into()),
            At::Node(id) => {
                let index = self.nodes.resolve(id).ok_or(StalePositionError)?;
                Ok(&mut self.nodes.node_mut(index).value)
            },
            At::End => Err(EndPositionError.into()),
        }
    }

    /// Links a new node holding `value` after `anchor`, returning the node's index.
    pub(crate) fn link_after(&mut self, anchor: Option<usize>, value: T) -> usize {
        let next = self.next_link(anchor);
        let index = self.nodes.alloc(Node {
            value,
            next,
        });

        *self.next_link_mut(anchor) = Some(index);
        self.len += 1;
        index
    }

    /// Detaches the node after `anchor` from the chain before freeing it, returning its value.
    pub(crate) fn unlink_after(&mut self, anchor: Option<usize>) -> Option<T> {
        let index = self.next_link(anchor)?;
        let next = self.nodes.node(index).next;

        *self.next_link_mut(anchor) = next;
        self.len -= 1;
        Some(self.nodes.free(index).value)
    }

    /// Appends every item of `iter` after the current last element, in order.
    pub(crate) fn extend_from_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = None;
        let mut curr = self.head;
        while let Some(index) = curr {
            tail = Some(index);
            curr = self.nodes.node(index).next;
        }

        for item in iter {
            tail = Some(self.link_after(tail, item));
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut curr = self.head;
        while let Some(index) = curr {
            count += 1;
            assert!(count <= self.nodes.slots.len(), "cycle in node chain");
            curr = self.nodes.node(index).next;
        }
        assert_eq!(count, self.len, "length doesn't match the number of linked nodes");
    }
}

/// Exchanges the contents of two lists. See [`LinkedList::swap`].
pub fn swap<T>(lhs: &mut LinkedList<T>, rhs: &mut LinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend_from_back(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_from_back(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replaces the contents of this list with a copy of `source`. The copy is built in full before
    /// being swapped in, so if cloning an element panics, this list is left untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a LinkedList<T>);

impl<'a, T: Debug> Debug for DebugEntries<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
