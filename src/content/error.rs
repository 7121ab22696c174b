use std::fmt;

/// Why a single candidate location could not supply the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("malformed document: {0}")]
    Parse(String),
    #[error("timed out")]
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationFailure {
    pub location: String,
    pub reason: FailureReason,
}

impl fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

/// Errors surfaced to callers of [`ContentLoader`](super::ContentLoader).
///
/// `Clone` because a single fetch result fans out to every coalesced caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content document unreachable ({})", summarize(.failures))]
    Unreachable { failures: Vec<LocationFailure> },
    #[error("section '{0}' not found in content document")]
    SectionNotFound(String),
    #[error("section '{section}' is malformed: {reason}")]
    Malformed { section: String, reason: String },
}

impl ContentError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ContentError::Unreachable { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::SectionNotFound(_))
    }
}

fn summarize(failures: &[LocationFailure]) -> String {
    if failures.is_empty() {
        return "no candidate locations configured".to_string();
    }
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_lists_every_location() {
        let err = ContentError::Unreachable {
            failures: vec![
                LocationFailure {
                    location: "/data/data.json".into(),
                    reason: FailureReason::Status(404),
                },
                LocationFailure {
                    location: "data/data.json".into(),
                    reason: FailureReason::TimedOut,
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/data.json: HTTP status 404"));
        assert!(msg.contains("data/data.json: timed out"));
        assert!(err.is_unreachable());
        assert!(!err.is_not_found());
    }

    #[test]
    fn unreachable_without_candidates() {
        let err = ContentError::Unreachable { failures: vec![] };
        assert!(err.to_string().contains("no candidate locations"));
    }
}
