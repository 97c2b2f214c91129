//! Domain library for the coach lookup service.
//!
//! This crate is dependency-free and holds the domain types,
//! the repository port, and error definitions. Keep adapters and IO concerns
//! out of this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One name/value argument supplied by the calling agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Exact-match key of a coach record: partition (`pk`) and sort (`sk`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoachKey {
    partition: String,
    sort: String,
}

impl CoachKey {
    /// Build a key from already-normalized components.
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }
}

/// Read-only view of a coach item owned by the external store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoachRecord {
    pub partition: String,
    pub sort: String,
    /// Name of the coach. Items written without a `Coach` attribute map to `None`.
    pub coach: Option<String>,
}

impl CoachRecord {
    pub fn new(key: &CoachKey, coach: Option<String>) -> Self {
        Self {
            partition: key.partition().to_string(),
            sort: key.sort().to_string(),
            coach,
        }
    }

    pub fn key(&self) -> CoachKey {
        CoachKey::new(self.partition.clone(), self.sort.clone())
    }
}

/// Repository port for point-reads of coach records.
pub trait CoachRepository: Send + Sync {
    /// Fetch the record stored under exactly `key`, or `None` on a miss.
    fn get(&self, key: &CoachKey) -> Result<Option<CoachRecord>, CoreError>;
}

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Required request parameters were absent or empty (logical names).
    MissingParameters(Vec<&'static str>),
    Repository(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::MissingParameters(names) => {
                write!(f, "missing required parameters: {}", names.join(", "))
            }
            CoreError::Repository(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

impl Error for CoreError {}

pub mod adapters;
pub mod answer;
pub mod key;
pub mod params;
pub mod service;
pub mod validate;
