use std::sync::{Arc, RwLock};

/// Concurrent list that only ever grows.
///
/// Registrations may race with in-flight resolution passes, so readers take
/// a point-in-time snapshot instead of iterating the live list. An append
/// that completes mid-pass is simply not part of that pass's snapshot.
pub struct AppendOnly<T> {
    entries: RwLock<Vec<Arc<T>>>,
}

impl<T> AppendOnly<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Appends a value and returns its index.
    pub fn push(&self, value: T) -> usize {
        let mut entries = self.entries.write().unwrap();
        entries.push(Arc::new(value));
        entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Arc<T>> {
        self.entries.read().unwrap().get(index).map(Arc::clone)
    }

    /// Point-in-time view of the list contents, in insertion order.
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.entries.read().unwrap().iter().map(Arc::clone).collect()
    }
}

impl<T> Default for AppendOnly<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for AppendOnly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.read().unwrap().iter())
            .finish()
    }
}
