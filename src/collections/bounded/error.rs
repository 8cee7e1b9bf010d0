use std::fmt;

use crate::collections::bounded::Capacity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Queue,
    Stack,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue => f.write_str("queue"),
            Self::Stack => f.write_str("stack"),
        }
    }
}

/// Rejected insertion. The container is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} has reached max capacity ({len} held + {additional} new > {capacity})")]
pub struct CapacityExceeded {
    pub kind: ContainerKind,
    pub capacity: Capacity,
    pub len: usize,
    pub additional: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} is empty")]
pub struct EmptyContainer {
    pub kind: ContainerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("item not found in {kind}")]
pub struct ItemNotFound {
    pub kind: ContainerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContainerError {
    #[error(transparent)]
    CapacityExceeded(#[from] CapacityExceeded),
    #[error(transparent)]
    Empty(#[from] EmptyContainer),
    #[error(transparent)]
    NotFound(#[from] ItemNotFound),
}

impl ContainerError {
    #[inline]
    pub fn kind(&self) -> ContainerKind {
        match self {
            Self::CapacityExceeded(err) => err.kind,
            Self::Empty(err) => err.kind,
            Self::NotFound(err) => err.kind,
        }
    }
}
