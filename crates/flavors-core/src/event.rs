//! Recorded flavor text occurrences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::FlavorText;

/// One recorded occurrence of a flavor text.
///
/// Events are immutable once recorded. Timestamps are not unique: several
/// phrases ingested in the same instant share an `occurred_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorEvent {
    /// The phrase that was seen.
    pub text: FlavorText,
    /// When the phrase was ingested.
    pub occurred_at: DateTime<Utc>,
}

impl FlavorEvent {
    pub const fn new(text: FlavorText, occurred_at: DateTime<Utc>) -> Self {
        Self { text, occurred_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization_roundtrip() {
        let event = FlavorEvent::new(
            FlavorText::new("Moonwalking").unwrap(),
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );

        let json = serde_json::to_string(&event).unwrap();
        let parsed: FlavorEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, event);
    }

    #[test]
    fn event_rejects_empty_text() {
        let json = r#"{
            "text": "",
            "occurred_at": "2024-01-01T00:00:00Z"
        }"#;
        let result: Result<FlavorEvent, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
