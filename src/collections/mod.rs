#[cfg(feature = "collections_adapter")]
pub mod adapter;
#[cfg(feature = "collections_adapter")]
pub use adapter::{ContainerCommon, Queue, QueueLike, Stack, StackLike};

#[cfg(feature = "collections_bounded")]
pub mod bounded;
#[cfg(feature = "collections_bounded")]
pub use bounded::{
    BoundedQueue, BoundedStack, Capacity, CapacityExceeded, ContainerError, ContainerKind,
    EmptyContainer, ItemNotFound,
};
