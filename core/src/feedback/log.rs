use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

fn default_source() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub id: String,
    pub verdict: String,
    pub upvote: bool,
    #[serde(default = "default_source")]
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub event_id: String,
    pub recorded_at: String,
    pub id: String,
    pub verdict: String,
    pub upvote: bool,
    pub source: String,
}

/// Append-only in-memory vote log shared across requests.
#[derive(Debug, Default)]
pub struct FeedbackLog {
    events: Mutex<Vec<FeedbackEvent>>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, req: FeedbackRequest) -> FeedbackEvent {
        let event = FeedbackEvent {
            event_id: format!("fb_{}", Ulid::new()),
            recorded_at: now_rfc3339_utc(),
            id: req.id,
            verdict: req.verdict,
            upvote: req.upvote,
            source: req.source,
        };
        self.events.lock().push(event.clone());
        tracing::info!(
            event_id = %event.event_id,
            verdict_id = %event.id,
            upvote = event.upvote,
            source = %event.source,
            "feedback recorded"
        );
        event
    }

    pub fn events(&self) -> Vec<FeedbackEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

fn now_rfc3339_utc() -> String {
    let now = time::OffsetDateTime::now_utc();
    now.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn vote(id: &str, upvote: bool) -> FeedbackRequest {
        FeedbackRequest {
            id: id.to_string(),
            verdict: "Likely False".to_string(),
            upvote,
            source: default_source(),
        }
    }

    #[test]
    fn records_in_order_with_ids_and_timestamps() {
        let log = FeedbackLog::new();
        assert!(log.is_empty());
        let a = log.record(vote("v1", true));
        let b = log.record(vote("v2", false));
        assert_ne!(a.event_id, b.event_id);
        assert!(a.event_id.starts_with("fb_"));
        assert!(time::OffsetDateTime::parse(
            &a.recorded_at,
            &time::format_description::well_known::Rfc3339
        )
        .is_ok());
        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "v1");
        assert!(!events[1].upvote);
    }

    #[test]
    fn source_defaults_to_unknown() {
        let req: FeedbackRequest =
            serde_json::from_str(r#"{"id": "x", "verdict": "True", "upvote": true}"#).unwrap();
        assert_eq!(req.source, "unknown");
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let log = Arc::new(FeedbackLog::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        log.record(vote(&format!("t{}_{}", t, i), i % 2 == 0));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(log.len(), 400);
    }
}
