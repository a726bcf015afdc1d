//! Read-only rendering of the whole inventory.

use std::fmt;

use crate::bounded_queue::BoundedQueue;
use crate::bounded_stack::BoundedStack;
use crate::types::Piece;

const EMPTY_MARKER: &str = "[empty]";

/// Borrowed view of the queue, stack, reservation and undo record.
#[derive(Clone, Copy)]
pub struct StateSnapshot<'a> {
    queue: &'a BoundedQueue<Piece>,
    stack: &'a BoundedStack<Piece>,
    reserved: Option<&'a Piece>,
    pending_undo: Option<&'a Piece>,
}

impl<'a> StateSnapshot<'a> {
    pub fn new(
        queue: &'a BoundedQueue<Piece>,
        stack: &'a BoundedStack<Piece>,
        reserved: Option<&'a Piece>,
        pending_undo: Option<&'a Piece>,
    ) -> Self {
        Self {
            queue,
            stack,
            reserved,
            pending_undo,
        }
    }

    /// Queue names front to back.
    pub fn queue_names(&self) -> Vec<&'a str> {
        self.queue.iter().map(Piece::name).collect()
    }

    /// Stack names top to bottom.
    pub fn stack_names(&self) -> Vec<&'a str> {
        self.stack.iter_top_down().map(Piece::name).collect()
    }

    pub fn stack_top_name(&self) -> Option<&'a str> {
        self.stack.peek_top().ok().map(Piece::name)
    }

    pub fn reserved_name(&self) -> Option<&'a str> {
        self.reserved.map(Piece::name)
    }

    pub fn pending_undo_name(&self) -> Option<&'a str> {
        self.pending_undo.map(Piece::name)
    }
}

impl fmt::Display for StateSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- CURRENT STATE ---")?;

        writeln!(
            f,
            "Queue (count={}/{}):",
            self.queue.len(),
            self.queue.capacity()
        )?;
        if self.queue.is_empty() {
            writeln!(f, "  {EMPTY_MARKER}")?;
        }
        for (position, piece) in self.queue.iter().enumerate() {
            writeln!(f, "  [{position}] {piece}")?;
        }

        writeln!(
            f,
            "Stack (count={}/{}):",
            self.stack.len(),
            self.stack.capacity()
        )?;
        if self.stack.is_empty() {
            writeln!(f, "  {EMPTY_MARKER}")?;
        }
        // Height from the bottom, printed top first.
        let height = self.stack.len();
        for (depth, piece) in self.stack.iter_top_down().enumerate() {
            writeln!(f, "  ({}) {piece}", height - 1 - depth)?;
        }

        match self.reserved {
            Some(piece) => writeln!(f, "Reservation: {piece}")?,
            None => writeln!(f, "Reservation: {EMPTY_MARKER}")?,
        }
        match self.pending_undo {
            Some(piece) => writeln!(f, "Undo available: yes (last play: {piece})")?,
            None => writeln!(f, "Undo available: no")?,
        }
        write!(f, "---------------------")
    }
}
