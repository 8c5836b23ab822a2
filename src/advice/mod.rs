//! Advice service
//!
//! Turns a [`StatsSnapshot`](crate::stats::StatsSnapshot) into coaching tips
//! via a hosted language model, falling back to fixed tips on any failure.

pub mod client;
pub mod parser;
pub mod prompt;
pub mod service;

// Re-export commonly used types
pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use parser::parse_tips;
pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};
pub use service::{AdviceBackend, AdviceOutcome, AdviceRequest, AdviceService, FALLBACK_TIPS};
