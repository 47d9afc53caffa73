use std::collections::VecDeque;

use crate::core::types::RecordId;

/// FIFO of record ids in first-insert order.
///
/// Content updates never re-enqueue an id, so the front is always the oldest
/// live insert. There is no removal by value; ids are consumed strictly via
/// [`EvictionQueue::pop`].
#[derive(Debug, Default)]
pub struct EvictionQueue {
    items: VecDeque<RecordId>,
}

impl EvictionQueue {
    pub fn new() -> Self {
        EvictionQueue {
            items: VecDeque::new(),
        }
    }

    /// Appends `id` as the newest entry.
    pub fn push(&mut self, id: RecordId) {
        self.items.push_back(id);
    }

    /// Removes and returns the oldest entry, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<RecordId> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
