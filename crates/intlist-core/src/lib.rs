//! Singly linked list of integers
//!
//! `IntList` keeps its nodes in an index arena. Front insertion is O(1),
//! positional access walks the chain from the head. Every failure is a
//! [`ListError`]; nothing in this crate aborts the process.

use std::fmt;

mod arena;
pub mod compat;

use arena::{Arena, Node};
pub use arena::{ArenaStats, NodeId};

/// Errors returned by list operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("list is empty")]
    Empty,

    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("failed to allocate a list node")]
    Alloc,
}

/// Where an inserted value actually landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Index the caller asked for
    pub requested: usize,
    /// Index the value now occupies
    pub index: usize,
}

impl Insertion {
    /// True when the requested index was past the end and the value was
    /// appended instead
    #[must_use]
    pub const fn clamped(&self) -> bool {
        self.requested != self.index
    }
}

#[derive(Clone, Default)]
pub struct IntList {
    arena: Arena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl IntList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with room for `capacity` nodes
    ///
    /// # Errors
    ///
    /// Returns `ListError::Alloc` if the storage cannot be reserved
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Ok(Self {
            arena: Arena::with_capacity(capacity)?,
            ..Self::default()
        })
    }

    /// Build a list holding `values` in iteration order
    ///
    /// # Errors
    ///
    /// Returns `ListError::Alloc` if a node cannot be allocated
    pub fn try_from_iter<I>(values: I) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut list = Self::new();
        for value in values {
            list.push_back(value)?;
        }
        Ok(list)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` at the head
    ///
    /// # Errors
    ///
    /// Returns `ListError::Alloc` if the node cannot be allocated
    pub fn push_front(&mut self, value: i32) -> Result<(), ListError> {
        let id = self.arena.alloc(Node {
            value,
            next: self.head,
        })?;
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
        Ok(())
    }

    /// Insert `value` after the last element
    ///
    /// # Errors
    ///
    /// Returns `ListError::Alloc` if the node cannot be allocated
    pub fn push_back(&mut self, value: i32) -> Result<(), ListError> {
        let id = self.arena.alloc(Node { value, next: None })?;
        match self.tail {
            Some(tail) => self.arena.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        Ok(())
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// An index equal to the length appends. An index beyond the length is
    /// clamped: the value is appended and the returned [`Insertion`] reports
    /// the position it really took.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Alloc` if the node cannot be allocated
    pub fn insert_at(&mut self, value: i32, index: usize) -> Result<Insertion, ListError> {
        if index == 0 {
            self.push_front(value)?;
            return Ok(Insertion {
                requested: index,
                index: 0,
            });
        }

        if index >= self.len {
            let at = self.len;
            self.push_back(value)?;
            if index > at {
                tracing::debug!(requested = index, actual = at, "insert index clamped to back");
            }
            return Ok(Insertion {
                requested: index,
                index: at,
            });
        }

        let Some(prev) = self.nth_id(index - 1) else {
            return Err(self.out_of_range(index));
        };
        let next = self.arena.node(prev).next;
        let id = self.arena.alloc(Node { value, next })?;
        self.arena.node_mut(prev).next = Some(id);
        self.len += 1;

        Ok(Insertion {
            requested: index,
            index,
        })
    }

    /// Remove and return the head value
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` if there is nothing to remove
    pub fn remove_front(&mut self) -> Result<i32, ListError> {
        let head = self.head.ok_or(ListError::Empty)?;
        let node = self.arena.release(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Remove and return the last value
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` if there is nothing to remove
    pub fn remove_back(&mut self) -> Result<i32, ListError> {
        match self.len {
            0 => Err(ListError::Empty),
            1 => self.remove_front(),
            len => {
                let Some(penultimate) = self.nth_id(len - 2) else {
                    return Err(self.out_of_range(len - 1));
                };
                let Some(last) = self.arena.node_mut(penultimate).next.take() else {
                    return Err(self.out_of_range(len - 1));
                };
                self.tail = Some(penultimate);
                self.len -= 1;
                Ok(self.arena.release(last).value)
            }
        }
    }

    /// Remove and return the value at `index`
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` on an empty list and `ListError::OutOfRange`
    /// when `index >= len`
    pub fn remove_at(&mut self, index: usize) -> Result<i32, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            return self.remove_front();
        }

        let Some(prev) = self.nth_id(index - 1) else {
            return Err(self.out_of_range(index));
        };
        let Some(target) = self.arena.node(prev).next else {
            return Err(self.out_of_range(index));
        };
        let node = self.arena.release(target);
        self.arena.node_mut(prev).next = node.next;
        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Read the value at `index` without modifying the list
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfRange` when `index >= len`, including every
    /// index of an empty list
    pub fn get_at(&self, index: usize) -> Result<i32, ListError> {
        self.nth_id(index)
            .map(|id| self.arena.node(id).value)
            .ok_or_else(|| self.out_of_range(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.get_at(index).ok()
    }

    /// Release every node, leaving an empty list
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(id) = current {
            current = self.arena.release(id).next;
        }
        self.arena.compact();
        self.tail = None;
        self.len = 0;
    }

    /// Clear the list and return its final allocation counters
    #[must_use]
    pub fn into_stats(mut self) -> ArenaStats {
        self.clear();
        self.arena.stats()
    }

    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Render as `[v1, v2, ..., vn]`, or `[]` when empty
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn nth_id(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|id| self.arena.node(id).next);
        }
        current
    }

    const fn out_of_range(&self, index: usize) -> ListError {
        ListError::OutOfRange {
            index,
            len: self.len,
        }
    }
}

impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for IntList {}

/// Head-to-tail iterator over the values of an [`IntList`]
pub struct Iter<'a> {
    list: &'a IntList,
    next: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.list.arena.node(self.next?);
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IntList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
