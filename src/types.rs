use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// One intent as reported by Lex, either a recognition candidate or the
/// session's active intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentData {
    pub name: String,
    /// e.g. "ReadyForFulfillment". Kept as reported, not validated.
    pub state: String,
    pub confirmation_state: String,
    /// Slot name -> slot value, passed through untouched. Empty when omitted.
    pub slots: Map<String, Value>,
    /// Only set on interpretations; the session intent never carries one.
    /// `None` ranks below every score.
    pub nlu_confidence: Option<f64>,
    pub interpretation_source: Option<String>,
}

impl IntentData {
    pub fn slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    pub fn has_confidence(&self) -> bool {
        self.nlu_confidence.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotData {
    pub name: String,
    pub version: String,
    pub locale_id: String,
    pub id: String,
    pub alias_id: String,
    pub alias_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub session_attributes: HashMap<String, String>,
    /// Context descriptors in the order Lex sent them. Opaque.
    pub active_contexts: Vec<Value>,
    pub intent: IntentData,
    pub originating_request_id: String,
}

impl SessionState {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.session_attributes.get(key).map(String::as_str)
    }
}

/// Serializable digest of a processed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessorSummary {
    pub session_id: String,
    pub bot_name: String,
    pub input_transcript: String,
    pub highest_confidence_intent: Option<String>,
    pub active_intent: String,
    pub fulfillment_required: bool,
}
