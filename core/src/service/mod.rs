pub mod config;

use crate::error::CoreResult;
use crate::evidence::cache::ClaimsIndex;
use crate::evidence::reliability::ReliabilityTable;
use crate::evidence::retriever::{EvidenceRetriever, Retrieval};
use crate::feedback::log::{FeedbackEvent, FeedbackLog, FeedbackRequest};
use crate::verdict::check::{self, ClaimRequest};
use crate::verdict::payload::{DemoPayload, VerdictRecord};
use serde::{Deserialize, Serialize};

pub use config::ServiceConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Process-lifetime state behind the claim-checking endpoints. Everything but
/// the feedback log is read-only after `load`, so one instance is shared by
/// `Arc` across concurrent requests.
#[derive(Debug)]
pub struct InfoGuardService {
    payload: DemoPayload,
    index: ClaimsIndex,
    table: ReliabilityTable,
    feedback: FeedbackLog,
}

impl InfoGuardService {
    pub fn new(payload: DemoPayload, index: ClaimsIndex, table: ReliabilityTable) -> Self {
        Self {
            payload,
            index,
            table,
            feedback: FeedbackLog::new(),
        }
    }

    pub fn load(cfg: &ServiceConfig) -> CoreResult<Self> {
        let payload = DemoPayload::load(cfg.demo_payload_path())?;
        let index = ClaimsIndex::load(cfg.claims_index_path())?;
        Ok(Self::new(payload, index, ReliabilityTable::builtin().clone()))
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            message: "InfoGuard API is running".to_string(),
        }
    }

    pub fn check_claim(&self, req: &ClaimRequest) -> CoreResult<VerdictRecord> {
        check::check_claim(&self.payload, &self.table, req)
    }

    /// Stored verdict for the claim, without confidence re-scoring.
    pub fn lookup_verdict(&self, req: &ClaimRequest) -> CoreResult<VerdictRecord> {
        check::lookup_verdict(&self.payload, req)
    }

    pub fn retrieve(&self, claim_text: &str) -> Retrieval {
        EvidenceRetriever::new(&self.index, &self.table).retrieve(claim_text)
    }

    pub fn get_demo(&self, category_tag: &str, language: &str) -> CoreResult<VerdictRecord> {
        check::get_demo(&self.payload, category_tag, language)
    }

    pub fn record_feedback(&self, req: FeedbackRequest) -> FeedbackEvent {
        self.feedback.record(req)
    }

    pub fn feedback_log(&self) -> &FeedbackLog {
        &self.feedback
    }

    pub fn payload(&self) -> &DemoPayload {
        &self.payload
    }

    pub fn claims_index(&self) -> &ClaimsIndex {
        &self.index
    }
}
