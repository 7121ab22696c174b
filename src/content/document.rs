use serde_json::{Map, Value};

use super::error::{ContentError, FailureReason};

/// The parsed site content: one JSON object keyed by section name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigDocument {
    sections: Map<String, Value>,
}

impl ConfigDocument {
    pub fn new(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    /// Parse a response body. Anything other than a top-level JSON object is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, FailureReason> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(sections)) => Ok(Self { sections }),
            Ok(other) => Err(FailureReason::Parse(format!(
                "expected a JSON object at the top level, found {}",
                kind_of(&other)
            ))),
            Err(e) => Err(FailureReason::Parse(e.to_string())),
        }
    }

    pub fn section(&self, name: &str) -> Result<&Value, ContentError> {
        self.sections
            .get(name)
            .ok_or_else(|| ContentError::SectionNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_object_document() {
        let doc = ConfigDocument::from_slice(br#"{"hero": {"title": "X"}, "navbar": {"logo": "Y"}}"#)
            .unwrap();
        assert_eq!(doc.section("hero").unwrap(), &json!({"title": "X"}));
        assert!(doc.contains("navbar"));
        assert_eq!(doc.section_names().count(), 2);
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = ConfigDocument::from_slice(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FailureReason::Parse(ref msg) if msg.contains("an array")));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = ConfigDocument::from_slice(b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, FailureReason::Parse(_)));
    }

    #[test]
    fn missing_section_is_reported_by_name() {
        let doc = ConfigDocument::from_slice(br#"{"hero": {}}"#).unwrap();
        assert_eq!(
            doc.section("footer").unwrap_err(),
            ContentError::SectionNotFound("footer".into())
        );
    }
}
