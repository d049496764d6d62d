use std::collections::VecDeque;

/// An object that can hand out snapshots of itself and roll back to them.
///
/// The snapshot type is opaque to everybody else: only the originator knows
/// how to read it.
pub trait Originator {
    type Snapshot;

    /// Full, detached copy of the current state.
    fn capture(&self) -> Self::Snapshot;

    /// Replaces the current state wholesale.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

/// LIFO stack of snapshots (the caretaker).
///
/// Unbounded unless built with [`History::with_limit`], in which case the
/// oldest snapshot is dropped once the limit is exceeded.
#[derive(Debug, Clone)]
pub struct History<S> {
    snapshots: VecDeque<S>,
    limit: Option<usize>,
}

impl<S> History<S> {
    pub fn new() -> Self {
        History {
            snapshots: VecDeque::new(),
            limit: None,
        }
    }

    /// A `limit` of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        History {
            snapshots: VecDeque::new(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn from_limit(limit: Option<usize>) -> Self {
        match limit {
            Some(limit) => Self::with_limit(limit),
            None => Self::new(),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn push(&mut self, snapshot: S) {
        self.snapshots.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
                tracing::debug!(limit, "history full, dropped oldest snapshot");
            }
        }
        tracing::trace!(depth = self.snapshots.len(), "snapshot pushed");
    }

    /// Most recent snapshot, or `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<S> {
        let snapshot = self.snapshots.pop_back();
        tracing::trace!(
            depth = self.snapshots.len(),
            found = snapshot.is_some(),
            "snapshot popped"
        );
        snapshot
    }

    pub fn peek(&self) -> Option<&S> {
        self.snapshots.back()
    }

    /// Index 0 is the oldest snapshot still kept.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &S> + '_ {
        self.snapshots.iter()
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}
