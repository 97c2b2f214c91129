use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::{CoachKey, CoachRecord, CoachRepository, CoreError};

/// Simple in-memory repository for tests, keyed by the exact (pk, sk) pair.
pub struct InMemoryCoachRepo {
    inner: Mutex<BTreeMap<CoachKey, CoachRecord>>,
}

impl InMemoryCoachRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
        }
    }

    /// Seed a record, replacing any record stored under the same key.
    pub fn insert(&self, record: CoachRecord) -> Result<(), CoreError> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| CoreError::Repository("mutex poisoned".into()))?;
        map.insert(record.key(), record);
        Ok(())
    }
}

impl Default for InMemoryCoachRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<CoachRecord> for InMemoryCoachRepo {
    fn from_iter<I: IntoIterator<Item = CoachRecord>>(iter: I) -> Self {
        let map = iter.into_iter().map(|r| (r.key(), r)).collect();
        Self {
            inner: Mutex::new(map),
        }
    }
}

impl CoachRepository for InMemoryCoachRepo {
    fn get(&self, key: &CoachKey) -> Result<Option<CoachRecord>, CoreError> {
        let map = self
            .inner
            .lock()
            .map_err(|_| CoreError::Repository("mutex poisoned".into()))?;
        Ok(map.get(key).cloned())
    }
}

/// Repository whose every read fails, standing in for an unreachable store.
pub struct UnavailableRepo {
    reason: String,
}

impl UnavailableRepo {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl CoachRepository for UnavailableRepo {
    fn get(&self, _key: &CoachKey) -> Result<Option<CoachRecord>, CoreError> {
        Err(CoreError::Repository(self.reason.clone()))
    }
}
