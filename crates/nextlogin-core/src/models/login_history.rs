use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::IngestError;

/// Ordered login instants for one user.
///
/// Always non-empty and non-decreasing. Forecasters only read it and derive
/// their own working copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LoginHistory {
    logins: Vec<DateTime<Utc>>,
}

impl LoginHistory {
    /// Build a history, sorting the instants ascending.
    pub fn new(mut logins: Vec<DateTime<Utc>>) -> Result<Self, IngestError> {
        if logins.is_empty() {
            return Err(IngestError::EmptyHistory);
        }
        logins.sort_unstable();
        Ok(Self { logins })
    }

    pub fn len(&self) -> usize {
        self.logins.len()
    }

    /// Never true for a constructed history; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.logins
    }

    pub fn first(&self) -> DateTime<Utc> {
        self.logins[0]
    }

    pub fn last(&self) -> DateTime<Utc> {
        self.logins[self.logins.len() - 1]
    }

    /// Epoch seconds for each login, ascending.
    pub fn epoch_seconds(&self) -> Vec<i64> {
        self.logins.iter().map(DateTime::timestamp).collect()
    }
}

impl TryFrom<Vec<DateTime<Utc>>> for LoginHistory {
    type Error = IngestError;

    fn try_from(logins: Vec<DateTime<Utc>>) -> Result<Self, Self::Error> {
        Self::new(logins)
    }
}
