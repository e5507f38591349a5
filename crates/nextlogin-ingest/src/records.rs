//! User record validation and first-seen deduplication.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use nextlogin_core::{timefmt, LoginHistory};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// A validated user ready for prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct UserHistory {
    pub id: String,
    pub name: String,
    pub history: LoginHistory,
}

/// Why a row did not become a [`UserHistory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAnObject,
    MissingId,
    EmptyId,
    MissingName,
    MissingLogins,
    NoValidLogins,
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotAnObject => "record is not an object",
            Self::MissingId => "missing or non-scalar id",
            Self::EmptyId => "empty id",
            Self::MissingName => "missing name",
            Self::MissingLogins => "missing or empty logins",
            Self::NoValidLogins => "no parseable login timestamps",
            Self::Duplicate => "duplicate id",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the row in the payload.
    pub index: usize,
    pub id: Option<String>,
    pub reason: SkipReason,
    /// Payload index of the accepted row, for `Duplicate` skips.
    pub duplicate_of: Option<usize>,
}

/// Accepted users in first-seen order, plus every skipped row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestOutcome {
    pub users: Vec<UserHistory>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Deserialize)]
struct RawUserRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    logins: Value,
}

/// Validate rows and keep the first accepted record per id.
///
/// A row only claims its id once accepted: an invalid row does not shadow a
/// later valid row with the same id.
pub fn ingest_rows(rows: &[Value]) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    // id -> payload index of the accepted row.
    let mut accepted: HashMap<String, usize> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        match validate_row(row, &accepted) {
            Ok(user) => {
                accepted.insert(user.id.clone(), index);
                outcome.users.push(user);
            }
            Err((id, reason)) => {
                let mut duplicate_of = None;
                if reason == SkipReason::Duplicate {
                    duplicate_of = id.as_ref().and_then(|id| accepted.get(id)).copied();
                    debug!(index, id = ?id, ?duplicate_of, "skipping duplicate user");
                } else {
                    warn!(index, id = ?id, %reason, "skipping user record");
                }
                outcome.skipped.push(SkippedRecord {
                    index,
                    id,
                    reason,
                    duplicate_of,
                });
            }
        }
    }
    outcome
}

fn validate_row(
    row: &Value,
    accepted: &HashMap<String, usize>,
) -> Result<UserHistory, (Option<String>, SkipReason)> {
    if !row.is_object() {
        return Err((None, SkipReason::NotAnObject));
    }
    let raw = RawUserRecord::deserialize(row).map_err(|_| (None, SkipReason::NotAnObject))?;

    let id = normalize_id(&raw.id).ok_or((None, SkipReason::MissingId))?;
    if id.is_empty() {
        return Err((Some(id), SkipReason::EmptyId));
    }
    if accepted.contains_key(&id) {
        return Err((Some(id), SkipReason::Duplicate));
    }

    let name = match &raw.name {
        Value::Null => return Err((Some(id), SkipReason::MissingName)),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let entries = match &raw.logins {
        Value::Array(entries) if !entries.is_empty() => entries,
        _ => return Err((Some(id), SkipReason::MissingLogins)),
    };
    let logins = parse_logins(&id, entries);
    let history =
        LoginHistory::new(logins).map_err(|_| (Some(id.clone()), SkipReason::NoValidLogins))?;

    Ok(UserHistory { id, name, history })
}

/// Strings are trimmed; numbers are rendered as JSON text. Other types have no id.
fn normalize_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_logins(id: &str, entries: &[Value]) -> Vec<DateTime<Utc>> {
    entries
        .iter()
        .filter_map(|entry| {
            let parsed = entry
                .as_str()
                .ok_or(())
                .and_then(|s| timefmt::parse(s).map_err(|_| ()));
            if parsed.is_err() {
                warn!(user_id = %id, login = %entry, "dropping unparseable login");
            }
            parsed.ok()
        })
        .collect()
}
