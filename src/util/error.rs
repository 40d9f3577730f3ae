use derive_more::{Display, Error, From, IsVariant};

/// The end position was used where an element or the sentinel was required.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("position is past the end of the list")]
pub struct EndPositionError;

/// The value of the sentinel before the first element was requested.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("position before the start of the list has no value")]
pub struct BeforeBeginError;

/// A position referred to an element that was removed, or to an element of a different list.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("position doesn't refer to a live element of this list")]
pub struct StalePositionError;

/// The list was unable to allocate space for another element.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// Errors produced when reading the value at a position.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum AccessError {
    /// See [`EndPositionError`].
    End(EndPositionError),
    /// See [`BeforeBeginError`].
    BeforeBegin(BeforeBeginError),
    /// See [`StalePositionError`].
    Stale(StalePositionError),
}

/// Errors produced when a position is used as the anchor of an insertion or removal.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum PositionError {
    /// See [`EndPositionError`].
    End(EndPositionError),
    /// See [`StalePositionError`].
    Stale(StalePositionError),
}

/// Errors produced when inserting after a position.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum InsertError {
    /// See [`EndPositionError`].
    End(EndPositionError),
    /// See [`StalePositionError`].
    Stale(StalePositionError),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}

impl From<PositionError> for InsertError {
    fn from(value: PositionError) -> Self {
        match value {
            PositionError::End(e) => e.into(),
            PositionError::Stale(e) => e.into(),
        }
    }
}
