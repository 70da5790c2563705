//! Priority frontier with lazy invalidation.
//!
//! Entries live in an arena and are referred to by [`EntryId`]. Pushing a
//! state that already has a pending entry marks the older one invalid instead
//! of removing it from the heap; invalid entries are dropped when they reach
//! the top. This avoids any decrease-key operation on the heap.
//!
//! Popped entries stay in the arena so routes can be rebuilt by following
//! `parent` links.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Handle to an entry in the frontier arena.
pub type EntryId = usize;

/// A pending (or already expanded) search entry.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry<S> {
    pub state: S,
    /// Accumulated cost from the search origin.
    pub cost: u64,
    /// `cost` plus the heuristic estimate; the heap key.
    pub priority: u64,
    pub parent: Option<EntryId>,
    /// Cleared when a cheaper entry for the same state supersedes this one.
    pub valid: bool,
}

/// Heap handle, ordered so that `BinaryHeap` pops the smallest priority
/// first, then the smallest state, then the oldest entry.
#[derive(Clone, Copy, PartialEq, Eq)]
struct HeapRef<S> {
    priority: u64,
    state: S,
    id: EntryId,
}

impl<S: Ord> Ord for HeapRef<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.state.cmp(&self.state))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl<S: Ord> PartialOrd for HeapRef<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier over states of type `S`.
pub struct Frontier<S> {
    entries: Vec<FrontierEntry<S>>,
    heap: BinaryHeap<HeapRef<S>>,
    latest: FxHashMap<S, EntryId>,
}

impl<S: Copy + Ord + Hash> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy + Ord + Hash> Frontier<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            heap: BinaryHeap::new(),
            latest: FxHashMap::default(),
        }
    }

    /// Adds an entry for `state`, invalidating any earlier entry for it.
    pub fn push(
        &mut self,
        state: S,
        cost: u64,
        priority: u64,
        parent: Option<EntryId>,
    ) -> EntryId {
        let id = self.entries.len();
        if let Some(previous) = self.latest.insert(state, id) {
            self.invalidate(previous);
        }
        self.entries.push(FrontierEntry {
            state,
            cost,
            priority,
            parent,
            valid: true,
        });
        self.heap.push(HeapRef {
            priority,
            state,
            id,
        });
        id
    }

    /// Cost of the most recent entry pushed for `state`, which is the
    /// cheapest cost known for it as long as callers only push improvements.
    #[inline]
    pub fn best_cost(&self, state: &S) -> Option<u64> {
        self.latest.get(state).map(|&id| self.entries[id].cost)
    }

    /// Number of distinct states ever pushed.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.latest.len()
    }

    /// Marks an entry as superseded. It will be skipped when popped.
    #[inline]
    pub fn invalidate(&mut self, id: EntryId) {
        self.entries[id].valid = false;
    }

    /// Removes and returns the lowest-priority valid entry.
    pub fn pop(&mut self) -> Option<EntryId> {
        while let Some(top) = self.heap.pop() {
            if self.entries[top.id].valid {
                return Some(top.id);
            }
        }
        None
    }

    #[inline]
    pub fn entry(&self, id: EntryId) -> &FrontierEntry<S> {
        &self.entries[id]
    }

    /// Number of heap slots still queued, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total entries ever pushed.
    #[inline]
    pub fn arena_len(&self) -> usize {
        self.entries.len()
    }

    /// States from the root of `id`'s predecessor chain down to `id`.
    pub fn path_to(&self, id: EntryId) -> Vec<S> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let entry = &self.entries[current];
            path.push(entry.state);
            cursor = entry.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut frontier = Frontier::new();
        frontier.push((0, 0), 0, 5, None);
        frontier.push((1, 0), 0, 1, None);
        frontier.push((2, 0), 0, 3, None);

        let popped: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        let order: Vec<_> = popped.iter().map(|&id| frontier.entry(id).priority).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn test_equal_priorities_break_ties_by_state() {
        let mut frontier = Frontier::new();
        frontier.push((2, 0), 0, 4, None);
        frontier.push((0, 1), 0, 4, None);
        frontier.push((0, 0), 0, 4, None);

        let popped: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        let states: Vec<_> = popped.iter().map(|&id| frontier.entry(id).state).collect();
        assert_eq!(states, vec![(0, 0), (0, 1), (2, 0)]);
    }

    #[test]
    fn test_superseded_entry_is_skipped() {
        let mut frontier = Frontier::new();
        let stale = frontier.push((1, 1), 9, 9, None);
        let fresh = frontier.push((1, 1), 4, 4, None);
        frontier.push((0, 0), 6, 6, None);

        assert!(!frontier.entry(stale).valid);
        assert_eq!(frontier.pop(), Some(fresh));
        let next = frontier.pop().unwrap();
        assert_eq!(frontier.entry(next).state, (0, 0));
        assert_eq!(frontier.pop(), None, "stale entry must not be returned");
        assert!(frontier.is_empty());
        assert_eq!(frontier.arena_len(), 3);
    }

    #[test]
    fn test_best_cost_tracks_latest_entry() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.best_cost(&(3, 3)), None);
        frontier.push((3, 3), 9, 12, None);
        frontier.push((3, 3), 7, 10, None);
        frontier.push((0, 1), 2, 2, None);
        assert_eq!(frontier.best_cost(&(3, 3)), Some(7));
        assert_eq!(frontier.best_cost(&(0, 1)), Some(2));
        assert_eq!(frontier.state_count(), 2);

        // popping does not forget the cost
        while frontier.pop().is_some() {}
        assert_eq!(frontier.best_cost(&(3, 3)), Some(7));
    }

    #[test]
    fn test_path_to_follows_parents() {
        let mut frontier = Frontier::new();
        let a = frontier.push((0, 0), 0, 0, None);
        let b = frontier.push((1, 0), 1, 1, Some(a));
        let c = frontier.push((1, 1), 2, 2, Some(b));
        assert_eq!(frontier.path_to(c), vec![(0, 0), (1, 0), (1, 1)]);
        assert_eq!(frontier.path_to(a), vec![(0, 0)]);
    }
}
