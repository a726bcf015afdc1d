//! Failure taxonomy shared by the containers and the orchestrator.

use thiserror::Error;

/// Recoverable failure of an inventory operation. Every operation that
/// returns one of these has left all state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("container is empty")]
    Empty,
    #[error("container is full")]
    CapacityExceeded,
    #[error("a piece is already reserved")]
    AlreadyReserved,
    #[error("no piece is reserved")]
    NotReserved,
    #[error("swap needs both the stack and the queue to be non-empty")]
    InsufficientElements,
    #[error(
        "invert would overflow: {stack_len} stack piece(s) into queue capacity {queue_capacity}, \
         {queue_len} queue piece(s) into stack capacity {stack_capacity}"
    )]
    WouldExceedCapacity {
        queue_len: usize,
        queue_capacity: usize,
        stack_len: usize,
        stack_capacity: usize,
    },
    #[error("no play to undo")]
    NoPendingUndo,
}

pub type InventoryResult<T> = Result<T, InventoryError>;
