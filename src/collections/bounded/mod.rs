//! FIFO and LIFO containers with a construction-time element ceiling.
//!
//! Both containers keep elements in arrival order. [`BoundedQueue`] removes
//! from the oldest end, [`BoundedStack`] from the newest. Insertions are
//! all-or-nothing: a batch that would overflow the ceiling is rejected whole.

pub mod capacity;
pub mod error;
pub mod queue;
pub mod stack;

use std::fmt;

pub use capacity::Capacity;
pub use error::{CapacityExceeded, ContainerError, ContainerKind, EmptyContainer, ItemNotFound};
pub use queue::BoundedQueue;
pub use stack::BoundedStack;

fn ensure_fits(
    kind: ContainerKind,
    capacity: Capacity,
    len: usize,
    additional: usize,
) -> Result<(), CapacityExceeded> {
    if capacity.fits(len, additional) {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        kind = %kind,
        capacity = %capacity,
        len,
        additional,
        "rejected insertion over capacity"
    );
    Err(CapacityExceeded {
        kind,
        capacity,
        len,
        additional,
    })
}

fn empty(kind: ContainerKind) -> EmptyContainer {
    #[cfg(feature = "tracing")]
    tracing::debug!(kind = %kind, "removal from empty container");
    EmptyContainer { kind }
}

/// 1-based position counted from the oldest element.
fn position<'a, T: PartialEq + 'a>(
    kind: ContainerKind,
    mut iter: impl Iterator<Item = &'a T>,
    item: &T,
) -> Result<usize, ItemNotFound> {
    match iter.position(|x| x == item) {
        Some(index) => Ok(index + 1),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(kind = %kind, "search missed");
            Err(ItemNotFound { kind })
        }
    }
}

fn write_joined<'a, T: fmt::Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    mut iter: impl Iterator<Item = &'a T>,
) -> fmt::Result {
    if let Some(first) = iter.next() {
        write!(f, "{first}")?;
        for item in iter {
            write!(f, ", {item}")?;
        }
    }
    Ok(())
}
