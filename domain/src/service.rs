use crate::answer::render;
use crate::validate::CoachQuery;
use crate::{CoachKey, CoachRecord, CoachRepository, CoreError};

/// Result of a single point-read, keeping store faults apart from misses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(CoachRecord),
    NotFound,
    StoreFault(CoreError),
}

/// Rendered reply plus what the lookup saw, for logging.
#[derive(Clone, Debug)]
pub struct Answer {
    pub key: CoachKey,
    pub record: Option<CoachRecord>,
    /// Set when the store failed and the reply was rendered as a miss.
    pub fault: Option<CoreError>,
    pub text: String,
}

/// Application service answering coach queries.
///
/// Generic over the repository so the domain stays testable without AWS.
/// Performs exactly one read per query and never retries.
pub struct CoachService<R: CoachRepository> {
    repo: R,
}

impl<R: CoachRepository> CoachService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Point-read `key` and classify the result.
    pub fn lookup(&self, key: &CoachKey) -> LookupOutcome {
        match self.repo.get(key) {
            Ok(Some(record)) => LookupOutcome::Found(record),
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => LookupOutcome::StoreFault(e),
        }
    }

    /// Look up the query and render the reply sentence.
    ///
    /// A store fault is rendered exactly like a miss; the caller only learns
    /// about it through `Answer::fault`.
    pub fn answer(&self, query: &CoachQuery) -> Answer {
        let key = query.key();
        let (record, fault) = match self.lookup(&key) {
            LookupOutcome::Found(record) => (Some(record), None),
            LookupOutcome::NotFound => (None, None),
            LookupOutcome::StoreFault(e) => (None, Some(e)),
        };
        let text = render(query, record.as_ref());
        Answer { key, record, fault, text }
    }
}
