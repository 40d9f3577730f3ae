use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::util::error::CapacityOverflow;

/// The index of the next node in the arena, or [`None`] at the end of the chain.
pub(crate) type Link = Option<usize>;

/// A checked reference to an arena slot. The arena and generation both have to match for the id
/// to resolve, so ids to removed nodes are never confused with whatever node reuses the slot, and
/// ids from one arena never resolve in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    pub arena: u64,
    pub index: usize,
    pub generation: u64,
}

/// Zero is reserved for arenas which haven't allocated yet.
static NEXT_ARENA: AtomicU64 = AtomicU64::new(1);

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}

pub(crate) enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Link },
}

pub(crate) struct Slot<T> {
    pub generation: u64,
    pub entry: Entry<T>,
}

/// Backing storage for the nodes of a list. Vacant slots form a stack through `next_free`, with
/// `free` as its top.
///
/// Each arena takes a unique `owner` on its first allocation. It travels with the slots, so a
/// list that swaps arenas keeps its ids valid for the nodes it received, and a replaced arena
/// never resolves the ids of the one before it.
pub(crate) struct NodeArena<T> {
    pub slots: Vec<Slot<T>>,
    pub free: Link,
    pub owner: u64,
}

impl<T> NodeArena<T> {
    pub const fn new() -> NodeArena<T> {
        NodeArena {
            slots: Vec::new(),
            free: None,
            owner: 0,
        }
    }

    pub fn try_with_capacity(capacity: usize) -> Result<NodeArena<T>, CapacityOverflow> {
        let mut arena = NodeArena::new();
        arena.slots.try_reserve_exact(capacity).map_err(|_| CapacityOverflow)?;
        Ok(arena)
    }

    /// Ensures that the next call to [`alloc`](NodeArena::alloc) won't need to grow the arena.
    pub fn try_reserve_one(&mut self) -> Result<(), CapacityOverflow> {
        match self.free {
            Some(_) => Ok(()),
            None => self.slots.try_reserve(1).map_err(|_| CapacityOverflow),
        }
    }

    pub fn alloc(&mut self, node: Node<T>) -> usize {
        if self.owner == 0 {
            self.owner = NEXT_ARENA.fetch_add(1, Ordering::Relaxed);
        }

        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                match mem::replace(&mut slot.entry, Entry::Occupied(node)) {
                    Entry::Vacant { next_free } => self.free = next_free,
                    Entry::Occupied(_) => unreachable!("free list contained an occupied slot"),
                }
                index
            },
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });
                self.slots.len() - 1
            },
        }
    }

    /// Vacates the slot at `index`, returning its node. Bumping the generation invalidates every
    /// [`NodeId`] that still refers to it.
    pub fn free(&mut self, index: usize) -> Node<T> {
        let slot = &mut self.slots[index];
        let vacant = Entry::Vacant { next_free: self.free };

        match mem::replace(&mut slot.entry, vacant) {
            Entry::Occupied(node) => {
                slot.generation = slot.generation.wrapping_add(1);
                self.free = Some(index);
                node
            },
            Entry::Vacant { .. } => unreachable!("attempted to free a vacant slot"),
        }
    }

    pub fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link pointed to a vacant slot"),
        }
    }

    pub fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link pointed to a vacant slot"),
        }
    }

    pub fn id(&self, index: usize) -> NodeId {
        NodeId {
            arena: self.owner,
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Resolves `id` to the index of a live node in this arena, if it still refers to one.
    pub fn resolve(&self, id: NodeId) -> Option<usize> {
        if id.arena != self.owner {
            return None;
        }

        match self.slots.get(id.index) {
            Some(Slot { generation, entry: Entry::Occupied(_) }) if *generation == id.generation => {
                Some(id.index)
            },
            _ => None,
        }
    }
}
