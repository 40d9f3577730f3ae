use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr;

use derive_more::IsVariant;

use super::{LinkedList, NodeId};
use crate::util::error::{AccessError, InsertError, PositionError};
use crate::util::result::ResultExtension;

/// A location within a [`LinkedList`]: an element, the slot before the first element or the end
/// of the list.
///
/// Positions don't borrow the list they came from, which allows them to be handed back to the
/// list's mutating methods (e.g. [`LinkedList::insert_after`]). They can only be obtained from a
/// list or one of its cursors.
pub struct Position<T> {
    pub(crate) at: At,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum At {
    BeforeBegin,
    Node(NodeId),
    End,
}

impl<T> Position<T> {
    pub(crate) const fn new(at: At) -> Position<T> {
        Position {
            at,
            _phantom: PhantomData,
        }
    }

    /// Returns true if this position is one past the last element.
    pub const fn is_end(&self) -> bool {
        self.at.is_end()
    }

    /// Returns true if this position is the slot before the first element.
    pub const fn is_before_begin(&self) -> bool {
        self.at.is_before_begin()
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.at {
            At::BeforeBegin => write!(f, "Position::BeforeBegin"),
            At::Node(NodeId { arena, index, generation }) => f.debug_struct("Position::Node")
                .field("arena", &arena)
                .field("index", &index)
                .field("generation", &generation)
                .finish(),
            At::End => write!(f, "Position::End"),
        }
    }
}

/// A read-only view of a single position within a [`LinkedList`]. See
/// [`LinkedList::cbegin`] and [`LinkedList::cbefore_begin`] to create one.
pub struct Cursor<'a, T> {
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) pos: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub const fn position(&self) -> Position<T> {
        self.pos
    }

    pub const fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    pub const fn is_before_begin(&self) -> bool {
        self.pos.is_before_begin()
    }

    /// Returns a reference to the value at the cursor's position, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the cursor is at the end, before the beginning or on a removed element.
    pub fn get(&self) -> &'a T {
        self.try_get().throw()
    }

    /// Returns a reference to the value at the cursor's position, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self) -> Result<&'a T, AccessError> {
        self.list.try_value(self.pos.at)
    }

    /// Returns a reference to the value after the cursor's position, if there is one.
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = self.list.try_successor(self.pos.at).ok()?;
        self.list.try_value(next).ok()
    }

    /// Advances the cursor to the next position. Advancing past the last element moves the cursor
    /// to the end, where it stays.
    ///
    /// # Panics
    /// Panics if the cursor is on a removed element.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos.at = self.list.try_successor(self.pos.at).throw();
        self
    }

    /// Advances the cursor, returning a copy of it from before it was moved.
    ///
    /// # Panics
    /// Panics if the cursor is on a removed element.
    pub fn post_increment(&mut self) -> Self {
        let prior = *self;
        self.move_next();
        prior
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> From<Cursor<'a, T>> for Position<T> {
    fn from(value: Cursor<'a, T>) -> Self {
        value.pos
    }
}

impl<'a, T> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.pos).finish()
    }
}

/// A mutable view of a single position within a [`LinkedList`], which can also insert and remove
/// elements after itself. See [`LinkedList::begin`] and [`LinkedList::before_begin`] to create
/// one.
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) pos: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub const fn position(&self) -> Position<T> {
        self.pos
    }

    pub const fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    pub const fn is_before_begin(&self) -> bool {
        self.pos.is_before_begin()
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: &*self.list,
            pos: self.pos,
        }
    }

    /// # Panics
    /// Panics if the cursor is at the end, before the beginning or on a removed element.
    pub fn get(&self) -> &T {
        self.try_get().throw()
    }

    pub fn try_get(&self) -> Result<&T, AccessError> {
        self.list.try_value(self.pos.at)
    }

    /// Returns a mutable reference to the value at the cursor's position, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the cursor is at the end, before the beginning or on a removed element.
    pub fn get_mut(&mut self) -> &mut T {
        self.try_get_mut().throw()
    }

    pub fn try_get_mut(&mut self) -> Result<&mut T, AccessError> {
        self.list.try_value_mut(self.pos.at)
    }

    /// Consumes the cursor, returning a reference to its value that lives as long as the borrow of
    /// the list.
    ///
    /// # Panics
    /// Panics if the cursor is at the end, before the beginning or on a removed element.
    pub fn into_mut(self) -> &'a mut T {
        let CursorMut { list, pos } = self;
        list.try_value_mut(pos.at).throw()
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.as_cursor().peek_next()
    }

    /// # Panics
    /// Panics if the cursor is on a removed element.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos.at = self.list.try_successor(self.pos.at).throw();
        self
    }

    /// Advances the cursor, returning its position from before it was moved.
    ///
    /// # Panics
    /// Panics if the cursor is on a removed element.
    pub fn post_increment(&mut self) -> Position<T> {
        let prior = self.pos;
        self.move_next();
        prior
    }

    /// Inserts `value` directly after the cursor, returning the position of the new element. The
    /// cursor itself doesn't move.
    ///
    /// # Panics
    /// Panics if the cursor is at the end or on a removed element, or if the list can't grow.
    pub fn insert_after(&mut self, value: T) -> Position<T> {
        self.try_insert_after(value).throw()
    }

    pub fn try_insert_after(&mut self, value: T) -> Result<Position<T>, InsertError> {
        Ok(self.list.try_insert_after(self.pos, value)?.pos)
    }

    /// Removes the element directly after the cursor, returning the position that now follows the
    /// cursor.
    ///
    /// # Panics
    /// Panics if the cursor is at the end or on a removed element.
    pub fn erase_after(&mut self) -> Position<T> {
        self.try_erase_after().throw()
    }

    pub fn try_erase_after(&mut self) -> Result<Position<T>, PositionError> {
        Ok(self.list.try_erase_after(self.pos)?.pos)
    }

    /// Removes the element directly after the cursor and returns it, if there is one.
    ///
    /// # Panics
    /// Panics if the cursor is at the end or on a removed element.
    pub fn remove_after(&mut self) -> Option<T> {
        self.list.remove_after(self.pos)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Position<T> {
    fn from(value: CursorMut<'a, T>) -> Self {
        value.pos
    }
}

impl<'a, T> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.pos).finish()
    }
}

// Cursors are equal when they reference the same node of the same list. Every end position is
// equal, regardless of the list.
fn same_place<T>(a: &LinkedList<T>, a_pos: Position<T>, b: &LinkedList<T>, b_pos: Position<T>) -> bool {
    a_pos == b_pos && (a_pos.is_end() || ptr::eq(a, b))
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        same_place(&*self.list, self.pos, &*other.list, other.pos)
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        same_place(&*self.list, self.pos, &*other.list, other.pos)
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        same_place(&*self.list, self.pos, &*other.list, other.pos)
    }
}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        same_place(&*self.list, self.pos, &*other.list, other.pos)
    }
}

impl<'a, T> PartialEq<Position<T>> for Cursor<'a, T> {
    fn eq(&self, other: &Position<T>) -> bool {
        self.pos == *other
    }
}

impl<'a, T> PartialEq<Cursor<'a, T>> for Position<T> {
    fn eq(&self, other: &Cursor<'a, T>) -> bool {
        *self == other.pos
    }
}

impl<'a, T> PartialEq<Position<T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Position<T>) -> bool {
        self.pos == *other
    }
}

impl<'a, T> PartialEq<CursorMut<'a, T>> for Position<T> {
    fn eq(&self, other: &CursorMut<'a, T>) -> bool {
        *self == other.pos
    }
}
