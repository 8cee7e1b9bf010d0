use std::fmt;

/// Maximum number of elements a bounded container may hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    Bounded(usize),
    #[default]
    Unbounded,
}

impl Capacity {
    #[inline]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Bounded(max) => Some(max),
            Self::Unbounded => None,
        }
    }

    #[inline]
    pub const fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded(_))
    }

    /// Whether `additional` more elements fit next to `len` existing ones.
    #[inline]
    pub const fn fits(self, len: usize, additional: usize) -> bool {
        match self {
            Self::Bounded(max) => match len.checked_add(additional) {
                Some(total) => total <= max,
                None => false,
            },
            Self::Unbounded => true,
        }
    }

    /// `None` when unbounded.
    #[inline]
    pub const fn remaining(self, len: usize) -> Option<usize> {
        match self {
            Self::Bounded(max) => Some(max.saturating_sub(len)),
            Self::Unbounded => None,
        }
    }

    /// Flattened form used by [`ContainerCommon::capacity`](crate::collections::ContainerCommon::capacity).
    #[inline]
    pub const fn as_usize(self) -> usize {
        match self {
            Self::Bounded(max) => max,
            Self::Unbounded => usize::MAX,
        }
    }
}

impl From<usize> for Capacity {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Bounded(value)
    }
}

impl From<Option<usize>> for Capacity {
    #[inline]
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Unbounded, Self::Bounded)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(max) => write!(f, "{max}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}
