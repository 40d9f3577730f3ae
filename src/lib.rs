//! A singly linked list which is traversed and modified through positions, in the style of a
//! forward list.
//!
//! # Purpose
//! [`LinkedList`] offers forward traversal, insertion and removal directly after any position, and
//! full value semantics (cloning, equality, lexicographic ordering and hashing). Cursors and
//! [`Position`]s stay meaningful while the list is modified: a position is only invalidated when
//! the element it refers to is removed.
//!
//! # Method
//! Nodes are stored in an arena rather than being individually allocated. Links are indices into
//! the arena, with vacated slots kept on a free list for reuse. Every slot carries a generation
//! that is bumped when its node is removed, so positions referring to a removed element are
//! detected rather than silently reading whichever element took its place.
//!
//! The list owns a sentinel before its first element. Inserting or removing "after the sentinel"
//! is how the front of the list is modified, so there are no special cases for the head.
//!
//! # Error Handling
//! Using a position which can't support an operation (reading the end or the sentinel, inserting
//! after the end, or using a stale position) is a bug on the caller's part, so the default methods
//! panic. Each of them has a `try_` counterpart that returns a strongly typed error instead. These
//! errors are enums of zero-sized structs that implement [`Error`](std::error::Error).
//!
//! Operations which may fail part way (cloning, insertion) either complete in full or leave the
//! list exactly as it was, including when a user-provided [`Clone`] implementation panics.
//! Removal, clearing and swapping can't fail.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod list;

pub(crate) mod util;

#[doc(inline)]
pub use list::{Cursor, CursorMut, LinkedList, Position};
