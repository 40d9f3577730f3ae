//! The singly linked [`LinkedList`] and the position types used to traverse and modify it:
//! [`Position`], [`Cursor`] and [`CursorMut`].

mod cursor;
mod iter;
mod linked_list;
mod node;

pub use cursor::*;
pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
