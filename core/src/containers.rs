//! Fixed-capacity work containers used by the traversal and shortest-path
//! engines.
//!
//! Each query allocates its own containers sized from the graph and drops
//! them on return. None of them grow: exceeding the capacity is reported as
//! [`GraphError::CapacityExceeded`], which the engines treat as fatal.

use crate::error::{GraphError, Result};
use crate::graph::VertexId;

/// FIFO ring buffer of vertex ids.
#[derive(Debug)]
pub struct BoundedQueue {
    slots: Vec<VertexId>,
    front: usize,
    len: usize,
}

impl BoundedQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
            front: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn enqueue(&mut self, v: VertexId) -> Result<()> {
        let capacity = self.capacity();
        if self.len == capacity {
            return Err(GraphError::CapacityExceeded {
                container: "queue",
                capacity,
            });
        }
        let back = (self.front + self.len) % capacity;
        self.slots[back] = v;
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<VertexId> {
        if self.len == 0 {
            return None;
        }
        let v = self.slots[self.front];
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        Some(v)
    }

    /// Linear membership test over the queued elements.
    pub fn contains(&self, v: VertexId) -> bool {
        self.iter().any(|x| x == v)
    }

    /// Queued elements, front to back.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.len).map(move |i| self.slots[(self.front + i) % self.slots.len()])
    }
}

/// LIFO stack of vertex ids.
#[derive(Debug)]
pub struct BoundedStack {
    elements: Vec<VertexId>,
    capacity: usize,
}

impl BoundedStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, v: VertexId) -> Result<()> {
        if self.elements.len() == self.capacity {
            return Err(GraphError::CapacityExceeded {
                container: "stack",
                capacity: self.capacity,
            });
        }
        self.elements.push(v);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<VertexId> {
        self.elements.pop()
    }
}

/// Membership set over vertex ids, indexed directly by id.
#[derive(Debug)]
pub struct BoundedSet {
    members: Vec<bool>,
    len: usize,
}

impl BoundedSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            members: vec![false; capacity],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark `v` as a member. Returns `Ok(false)` if it already was.
    pub fn add(&mut self, v: VertexId) -> Result<bool> {
        let capacity = self.members.len();
        let slot = self.members.get_mut(v).ok_or(GraphError::CapacityExceeded {
            container: "set",
            capacity,
        })?;
        if *slot {
            return Ok(false);
        }
        *slot = true;
        self.len += 1;
        Ok(true)
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.members.get(v).copied().unwrap_or(false)
    }
}
