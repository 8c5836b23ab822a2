//! Advice service with deterministic fallback
//!
//! `request_advice` always resolves to an [`AdviceOutcome`]. Model output is
//! tagged `Generated`; every failure, whatever its cause, becomes `Fallback`
//! carrying the fixed tips and the reason.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use super::parser::parse_tips;
use super::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use crate::errors::Result;
use crate::stats::StatsSnapshot;

/// Tips returned whenever the model cannot be used
pub const FALLBACK_TIPS: [&str; 3] = [
    "Try the 20-20-20 rule: every 20 minutes, look at something 20 feet away for 20 seconds.",
    "Set a 'gray-scale' mode on your most distracting apps to reduce their appeal.",
    "Go for a 5-minute tech-free walk to reset your focus.",
];

/// Prompt and system instruction for one advice call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    pub prompt: String,
    pub system_instruction: String,
}

/// Text-generation transport used by the service
#[async_trait]
pub trait AdviceBackend: Send + Sync {
    /// Return the raw response text for a request
    async fn generate(&self, request: &AdviceRequest) -> Result<String>;
}

/// Result of one advice request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdviceOutcome {
    /// Tips produced by the model, unmodified
    Generated { tips: Vec<String> },
    /// Fixed tips used because the model call failed
    Fallback { tips: Vec<String>, cause: String },
}

impl AdviceOutcome {
    pub fn fallback(cause: impl Into<String>) -> Self {
        AdviceOutcome::Fallback {
            tips: FALLBACK_TIPS.iter().map(|t| t.to_string()).collect(),
            cause: cause.into(),
        }
    }

    pub fn tips(&self) -> &[String] {
        match self {
            AdviceOutcome::Generated { tips } | AdviceOutcome::Fallback { tips, .. } => tips,
        }
    }

    pub fn into_tips(self) -> Vec<String> {
        match self {
            AdviceOutcome::Generated { tips } | AdviceOutcome::Fallback { tips, .. } => tips,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AdviceOutcome::Fallback { .. })
    }

    /// Why the fallback was used, if it was
    pub fn cause(&self) -> Option<&str> {
        match self {
            AdviceOutcome::Fallback { cause, .. } => Some(cause),
            AdviceOutcome::Generated { .. } => None,
        }
    }
}

/// Advice service
#[derive(Clone)]
pub struct AdviceService {
    backend: Arc<dyn AdviceBackend>,
}

impl AdviceService {
    pub fn new(backend: Arc<dyn AdviceBackend>) -> Self {
        Self { backend }
    }

    /// Request tips for a snapshot
    ///
    /// Single attempt, no retry. Never fails: errors are logged and mapped to
    /// [`AdviceOutcome::Fallback`].
    pub async fn request_advice(&self, snapshot: &StatsSnapshot) -> AdviceOutcome {
        match self.try_request(snapshot).await {
            Ok(tips) => {
                info!(count = tips.len(), range = %snapshot.range, "coach generated advice");
                AdviceOutcome::Generated { tips }
            }
            Err(e) => {
                warn!(error = %e, "error fetching AI advice, using fallback tips");
                AdviceOutcome::fallback(e.to_string())
            }
        }
    }

    async fn try_request(&self, snapshot: &StatsSnapshot) -> Result<Vec<String>> {
        let request = AdviceRequest {
            prompt: build_prompt(snapshot)?,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        };
        let text = self.backend.generate(&request).await?;
        parse_tips(&text)
    }
}
