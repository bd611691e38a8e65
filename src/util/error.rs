use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The error produced when removing or replacing a value in a container with no values. Check
/// emptiness first or handle the failure; there is no sentinel.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to take a value from a container with no elements!")
    }
}

impl Error for EmptyContainer {}

/// The error produced when looking up an index at or beyond the number of held values. Indices
/// below zero are unrepresentable, so `index >= len` is the only failing case.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for container with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The union of every error a container operation can produce, for callers propagating more than
/// one kind with `?`.
#[derive(Debug, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    EmptyContainer(EmptyContainer),
    IndexOutOfBounds(IndexOutOfBounds),
}
