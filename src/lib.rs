//! Typed view over Amazon Lex V2 code-hook events.
//!
//! [`LexResponseProcessor`] maps the decoded event into bot, interpretation
//! and session-state records and answers three questions about it: which
//! interpretation scored highest, which intent is active, and whether Lex
//! is asking for fulfillment.

pub mod config;
pub mod error;
pub mod fields;
pub mod processor;
pub mod types;

/// The sample event bundled with the crate.
pub const SAMPLE_EVENT: &str = include_str!("../fixtures/sample_event.json");

pub use error::{LexError, LexResult};
pub use processor::{LexResponseProcessor, FULFILLMENT_CODE_HOOK};
pub use types::{BotData, IntentData, ProcessorSummary, SessionState};
