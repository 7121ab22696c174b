//! Browser-side waitlist record.
//!
//! Sign-ups are appended to a JSON array kept in local storage under
//! [`STORAGE_KEY`]. There is no dedup and no validation beyond a non-empty
//! address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "wellnex_waitlist";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("Please add an email")]
    EmptyEmail,
    #[error("Could not save to the waitlist: {0}")]
    Storage(String),
}

/// Trim and reject blank addresses.
pub fn normalize_email(email: &str) -> Result<String, WaitlistError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(WaitlistError::EmptyEmail);
    }
    Ok(email.to_string())
}

/// Read the stored list. A missing or garbled value reads as empty.
pub fn parse_entries(raw: Option<&str>) -> Vec<WaitlistEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable waitlist record");
            Vec::new()
        }
    }
}

/// Append `email` to the stored list and return the new serialized list.
pub fn append_entry(
    raw: Option<&str>,
    email: &str,
    now: DateTime<Utc>,
) -> Result<String, WaitlistError> {
    let email = normalize_email(email)?;
    let mut entries = parse_entries(raw);
    entries.push(WaitlistEntry {
        email,
        timestamp: now,
    });
    serde_json::to_string(&entries).map_err(|e| WaitlistError::Storage(e.to_string()))
}

/// Append a sign-up to the browser's local storage.
#[cfg(feature = "hydrate")]
pub fn record_locally(email: &str) -> Result<(), WaitlistError> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or_else(|| WaitlistError::Storage("local storage unavailable".into()))?;

    let current = storage
        .get_item(STORAGE_KEY)
        .map_err(|_| WaitlistError::Storage("could not read waitlist".into()))?;
    let updated = append_entry(current.as_deref(), email, Utc::now())?;
    storage
        .set_item(STORAGE_KEY, &updated)
        .map_err(|_| WaitlistError::Storage("could not write waitlist".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn blank_email_is_rejected() {
        assert!(matches!(append_entry(None, "   ", at(0)), Err(WaitlistError::EmptyEmail)));
        assert_eq!(WaitlistError::EmptyEmail.to_string(), "Please add an email");
    }

    #[test]
    fn appends_without_dedup() {
        let first = append_entry(None, "a@b.co", at(1)).unwrap();
        let second = append_entry(Some(&first), " a@b.co ", at(2)).unwrap();

        let entries = parse_entries(Some(&second));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].email, "a@b.co");
        assert_eq!(entries[1].timestamp, at(2));
    }

    #[test]
    fn stored_shape_uses_email_and_date_keys() {
        let raw = append_entry(None, "a@b.co", at(0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["email"], "a@b.co");
        assert_eq!(value[0]["date"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn garbled_record_starts_fresh() {
        let raw = append_entry(Some("{not a list"), "a@b.co", at(0)).unwrap();
        assert_eq!(parse_entries(Some(&raw)).len(), 1);
    }
}
