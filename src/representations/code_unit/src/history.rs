use crate::{CodeUnit, UnitId};

/// One accepted unit together with its session-scoped state.
///
/// The compiled artifact and evaluation result live and die with the entry;
/// truncating the entry out of the history releases both.
#[derive(Debug)]
pub struct HistoryEntry<A, V> {
    unit: CodeUnit,
    artifact: A,
    value: Option<V>,
}

impl<A, V> HistoryEntry<A, V> {
    pub fn unit(&self) -> &CodeUnit {
        &self.unit
    }

    pub fn artifact(&self) -> &A {
        &self.artifact
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn record_value(&mut self, value: V) {
        self.value = Some(value);
    }

    pub fn into_unit(self) -> CodeUnit {
        self.unit
    }
}

/// Ordered record of the units a session has accepted.
///
/// Ids are strictly increasing and removal only ever takes a contiguous
/// suffix, never an interior entry.
#[derive(Debug)]
pub struct History<A, V> {
    entries: Vec<HistoryEntry<A, V>>,
}

impl<A, V> History<A, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry<A, V>] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry<A, V>> {
        self.entries.last()
    }

    pub fn position(&self, id: UnitId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.unit.id() == id)
    }

    pub fn entry_mut(&mut self, id: UnitId) -> Option<&mut HistoryEntry<A, V>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.unit.id() == id)
    }

    pub fn push(&mut self, unit: CodeUnit, artifact: A) -> UnitId {
        if let Some(last) = self.entries.last() {
            assert!(
                last.unit.id() < unit.id(),
                "history ids must be strictly increasing"
            );
        }

        let id = unit.id();
        self.entries.push(HistoryEntry {
            unit,
            artifact,
            value: None,
        });
        id
    }

    /// Removes every entry strictly after `target`, returning the removed
    /// suffix most recently accepted first. `None` when `target` is not
    /// present; the history is untouched in that case.
    pub fn truncate_after(&mut self, target: UnitId) -> Option<Vec<HistoryEntry<A, V>>> {
        let position = self.position(target)?;

        let mut discarded = self.entries.split_off(position + 1);
        discarded.reverse();
        Some(discarded)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<A, V> Default for History<A, V> {
    fn default() -> Self {
        Self::new()
    }
}
