//! `PriorityQueue` — array-backed binary min-heap.
//!
//! The router needs only three operations: insert, extract-min, and an
//! emptiness check.  There is no decrease-key; Dijkstra re-inserts a
//! location whenever its distance improves and skips the stale copies when
//! they surface later (lazy deletion).
//!
//! # Tie-breaking
//!
//! Sift-up moves a child above its parent only when the child is strictly
//! smaller, and sift-down prefers the left child when both children are
//! equal.  The extraction order among equal priorities is therefore fixed by
//! the insertion sequence, which keeps routing results reproducible.

/// One heap slot.
#[derive(Clone, Debug)]
struct Entry<T, P> {
    item:     T,
    priority: P,
}

/// Binary min-heap keyed by a numeric priority.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P = f64> {
    entries: Vec<Entry<T, P>>,
}

impl<T, P: PartialOrd + Copy> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Add `item` with `priority`.  O(log n).
    pub fn insert(&mut self, item: T, priority: P) {
        self.entries.push(Entry { item, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the entry with the smallest priority.  O(log n).
    ///
    /// Returns `None` on an empty queue.
    pub fn extract_min(&mut self) -> Option<(T, P)> {
        if self.entries.is_empty() {
            return None;
        }
        // Last element moves into the root slot.
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((min.item, min.priority))
    }

    /// The entry `extract_min` would return, without removing it.
    pub fn peek_min(&self) -> Option<(&T, P)> {
        self.entries.first().map(|e| (&e.item, e.priority))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].priority < self.entries[parent].priority {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            // Right must beat the current candidate strictly: left wins ties.
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.entries.len())
            .all(|i| self.entries[(i - 1) / 2].priority <= self.entries[i].priority)
    }
}

impl<T, P: PartialOrd + Copy> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd + Copy> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.insert(item, priority);
        }
    }
}

impl<T, P: PartialOrd + Copy> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
