use crate::core::Politician;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Append-only curated list shared by concurrent curation tasks.
///
/// The id check and the append happen under one lock, so the buffer never
/// holds two records with the same id.
#[derive(Debug, Default)]
pub struct CuratedBuffer {
    inner: Mutex<BufferState>,
}

#[derive(Debug, Default)]
struct BufferState {
    ids: HashSet<String>,
    politicians: Vec<Politician>,
}

impl CuratedBuffer {
    pub fn new(existing: Vec<Politician>) -> Self {
        let mut state = BufferState::default();
        for politician in existing {
            if state.ids.insert(politician.id.clone()) {
                state.politicians.push(politician);
            } else {
                log::warn!(
                    "Dropping duplicate curated record {} ({})",
                    politician.id,
                    politician.display_name()
                );
            }
        }
        Self {
            inner: Mutex::new(state),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().ids.contains(id)
    }

    /// Append unless a record with the same id is already present.
    /// Returns whether the record was added.
    pub fn insert_if_absent(&self, politician: Politician) -> bool {
        let mut state = self.inner.lock();
        if state.ids.insert(politician.id.clone()) {
            state.politicians.push(politician);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.lock().politicians.len()
    }

    /// Move the collected records out, leaving the buffer empty.
    pub fn take(&self) -> Vec<Politician> {
        std::mem::take(&mut self.inner.lock().politicians)
    }
}
