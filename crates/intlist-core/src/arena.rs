//! Node storage for [`IntList`](crate::IntList)
//!
//! Nodes live in a single `Vec` of slots and link to each other by index.
//! Released slots are threaded onto a free list and reused before the vector
//! grows again.

use crate::ListError;

/// Index of a node slot inside the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single list element and its link to the next one
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub value: i32,
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeId> },
}

/// Allocation counters, used to check that every node is released exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStats {
    /// Nodes currently owned by the list
    pub live: usize,
    /// Nodes ever handed out
    pub allocations: u64,
    /// Nodes ever returned
    pub releases: u64,
    /// Slots the arena can hold without growing
    pub capacity: usize,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Option<NodeId>,
    live: usize,
    allocations: u64,
    releases: u64,
}

impl Arena {
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ListError::Alloc)?;
        Ok(Self {
            slots,
            ..Self::default()
        })
    }

    /// Store `node` and return its id, reusing a vacant slot when one exists.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Alloc` if the slot vector cannot grow
    pub fn alloc(&mut self, node: Node) -> Result<NodeId, ListError> {
        let id = match self.free {
            Some(id) => {
                let Slot::Vacant { next_free } = self.slots[id.0] else {
                    unreachable!("free list points at an occupied slot");
                };
                self.free = next_free;
                self.slots[id.0] = Slot::Occupied(node);
                id
            }
            None => {
                if let Err(err) = self.slots.try_reserve(1) {
                    tracing::debug!(live = self.live, %err, "node arena reservation failed");
                    return Err(ListError::Alloc);
                }
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        };

        self.live += 1;
        self.allocations += 1;
        Ok(id)
    }

    /// Vacate the slot behind `id` and hand back the node it held
    pub fn release(&mut self, id: NodeId) -> Node {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.live -= 1;
                self.releases += 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("node {} released twice", id.0),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling link to node {}", id.0),
        }
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling link to node {}", id.0),
        }
    }

    /// Drop every slot once all nodes have been released
    pub fn compact(&mut self) {
        debug_assert_eq!(self.live, 0);
        self.slots.clear();
        self.free = None;
    }

    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            live: self.live,
            allocations: self.allocations,
            releases: self.releases,
            capacity: self.slots.capacity(),
        }
    }
}
