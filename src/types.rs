//! Shared piece model and capacity settings used across the system.

use std::fmt;

/// Longest piece name kept, in bytes.
pub const MAX_NAME_LEN: usize = 63;
/// Default queue capacity when none is given on the command line.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
/// Default stack capacity when none is given on the command line.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

/// Named token moved between the queue, the stack and the reservation slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Piece {
    name: String,
}

impl Piece {
    /// Construct a piece, stripping a trailing line terminator and truncating
    /// the name to `MAX_NAME_LEN` bytes on a char boundary.
    pub fn new(name: impl Into<String>) -> Self {
        let mut name = name.into();
        while name.ends_with('\n') || name.ends_with('\r') {
            name.pop();
        }
        if name.len() > MAX_NAME_LEN {
            let mut cut = MAX_NAME_LEN;
            while !name.is_char_boundary(cut) {
                cut -= 1;
            }
            name.truncate(cut);
        }
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fixed capacities for one inventory, decided once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacities {
    pub queue: usize,
    pub stack: usize,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            queue: DEFAULT_QUEUE_CAPACITY,
            stack: DEFAULT_STACK_CAPACITY,
        }
    }
}
