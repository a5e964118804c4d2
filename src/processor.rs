use serde_json::Value;
use tracing::{debug, trace};

use crate::error::LexResult;
use crate::fields::FieldReader;
use crate::types::{BotData, IntentData, ProcessorSummary, SessionState};

/// `invocationSource` value Lex sends when the intent is ready to be fulfilled.
pub const FULFILLMENT_CODE_HOOK: &str = "FulfillmentCodeHook";

/// Typed, read-only view over one Amazon Lex V2 event.
///
/// Construction is all-or-nothing: the first missing or mistyped required
/// key fails the whole build. After that nothing mutates, so a processor
/// can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct LexResponseProcessor {
    raw: Value,
    session_id: String,
    input_transcript: String,
    message_version: String,
    invocation_source: String,
    response_content_type: String,
    input_mode: String,
    bot: BotData,
    /// Recognition candidates, in the order Lex ranked them.
    interpretations: Vec<IntentData>,
    session_state: SessionState,
}

impl LexResponseProcessor {
    pub fn new(raw: Value) -> LexResult<Self> {
        let root = FieldReader::root(&raw)?;

        let session_id = root.required_str("sessionId")?;
        let input_transcript = root.required_str("inputTranscript")?;
        let message_version = root.required_str("messageVersion")?;
        let invocation_source = root.required_str("invocationSource")?;
        let response_content_type = root.required_str("responseContentType")?;
        let input_mode = root.required_str("inputMode")?;
        let bot = parse_bot(&root.required_object("bot")?)?;
        let interpretations = root
            .required_objects("interpretations")?
            .iter()
            .map(parse_interpretation)
            .collect::<LexResult<Vec<_>>>()?;
        let session_state = parse_session_state(&root.required_object("sessionState")?)?;

        debug!(
            session_id = %session_id,
            bot = %bot.name,
            interpretations = interpretations.len(),
            invocation_source = %invocation_source,
            "Lex event processed"
        );

        Ok(Self {
            raw,
            session_id,
            input_transcript,
            message_version,
            invocation_source,
            response_content_type,
            input_mode,
            bot,
            interpretations,
            session_state,
        })
    }

    pub fn from_json_str(json: &str) -> LexResult<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> LexResult<Self> {
        Self::new(serde_json::from_slice(bytes)?)
    }

    /// Interpretation with the highest `nluConfidence`.
    ///
    /// A missing confidence ranks below every explicit score, 0 and
    /// negatives included. Ties go to the earliest interpretation. `None`
    /// only when Lex sent no interpretations at all.
    pub fn get_highest_confidence_intent(&self) -> Option<&IntentData> {
        let mut best: Option<&IntentData> = None;
        for candidate in &self.interpretations {
            match best {
                Some(current) if candidate.nlu_confidence <= current.nlu_confidence => {}
                _ => best = Some(candidate),
            }
        }

        if let Some(intent) = best {
            trace!(
                intent = %intent.name,
                score = ?intent.nlu_confidence,
                "highest confidence intent"
            );
        }
        best
    }

    pub fn get_active_intent(&self) -> &IntentData {
        &self.session_state.intent
    }

    pub fn is_fulfillment_required(&self) -> bool {
        self.invocation_source == FULFILLMENT_CODE_HOOK
    }

    pub fn summary(&self) -> ProcessorSummary {
        ProcessorSummary {
            session_id: self.session_id.clone(),
            bot_name: self.bot.name.clone(),
            input_transcript: self.input_transcript.clone(),
            highest_confidence_intent: self
                .get_highest_confidence_intent()
                .map(|intent| intent.name.clone()),
            active_intent: self.get_active_intent().name.clone(),
            fulfillment_required: self.is_fulfillment_required(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn input_transcript(&self) -> &str {
        &self.input_transcript
    }

    pub fn message_version(&self) -> &str {
        &self.message_version
    }

    pub fn invocation_source(&self) -> &str {
        &self.invocation_source
    }

    pub fn response_content_type(&self) -> &str {
        &self.response_content_type
    }

    pub fn input_mode(&self) -> &str {
        &self.input_mode
    }

    pub fn bot(&self) -> &BotData {
        &self.bot
    }

    pub fn interpretations(&self) -> &[IntentData] {
        &self.interpretations
    }

    pub fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    /// The event exactly as it was handed in.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

fn parse_bot(bot: &FieldReader<'_>) -> LexResult<BotData> {
    Ok(BotData {
        name: bot.required_str("name")?,
        version: bot.required_str("version")?,
        locale_id: bot.required_str("localeId")?,
        id: bot.required_str("id")?,
        alias_id: bot.required_str("aliasId")?,
        alias_name: bot.required_str("aliasName")?,
    })
}

// Shared by interpretations and the session intent; only interpretations
// fill in confidence and source afterwards.
fn parse_intent(intent: &FieldReader<'_>) -> LexResult<IntentData> {
    Ok(IntentData {
        name: intent.required_str("name")?,
        state: intent.required_str("state")?,
        confirmation_state: intent.required_str("confirmationState")?,
        slots: intent.optional_map("slots"),
        nlu_confidence: None,
        interpretation_source: None,
    })
}

fn parse_interpretation(interpretation: &FieldReader<'_>) -> LexResult<IntentData> {
    let mut intent = parse_intent(&interpretation.required_object("intent")?)?;
    intent.nlu_confidence = interpretation.optional_f64("nluConfidence");
    intent.interpretation_source = interpretation.optional_str("interpretationSource");
    Ok(intent)
}

fn parse_session_state(state: &FieldReader<'_>) -> LexResult<SessionState> {
    Ok(SessionState {
        session_attributes: state.optional_string_map("sessionAttributes"),
        active_contexts: state.optional_list("activeContexts"),
        intent: parse_intent(&state.required_object("intent")?)?,
        originating_request_id: state.required_str("originatingRequestId")?,
    })
}
