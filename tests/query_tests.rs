use lex_response::LexResponseProcessor;
use serde_json::{json, Value};

fn intent(name: &str) -> Value {
    json!({ "name": name, "state": "InProgress", "confirmationState": "None" })
}

// Minimal valid event around the given interpretations and invocation source.
fn event(interpretations: Vec<Value>, invocation_source: &str) -> Value {
    json!({
        "sessionId": "s-1",
        "inputTranscript": "hello",
        "messageVersion": "1.0",
        "invocationSource": invocation_source,
        "responseContentType": "text/plain; charset=utf-8",
        "inputMode": "Text",
        "bot": {
            "name": "Bot", "version": "1", "localeId": "en_US",
            "id": "B1", "aliasId": "A1", "aliasName": "Live"
        },
        "interpretations": interpretations,
        "sessionState": {
            "intent": intent("Active"),
            "originatingRequestId": "req-1"
        }
    })
}

fn scored(name: &str, confidence: Option<f64>) -> Value {
    let mut interp = json!({ "intent": intent(name), "interpretationSource": "Lex" });
    if let Some(c) = confidence {
        interp["nluConfidence"] = json!(c);
    }
    interp
}

fn highest(interpretations: Vec<Value>) -> Option<String> {
    let processor = LexResponseProcessor::new(event(interpretations, "DialogCodeHook")).unwrap();
    processor.get_highest_confidence_intent().map(|i| i.name.clone())
}

#[test]
fn test_empty_interpretations_has_no_highest() {
    assert_eq!(highest(vec![]), None);
}

#[test]
fn test_all_absent_picks_first() {
    let result = highest(vec![scored("First", None), scored("Second", None)]);
    assert_eq!(result.as_deref(), Some("First"));
}

#[test]
fn test_zero_beats_absent() {
    let result = highest(vec![scored("NoScore", None), scored("Zero", Some(0.0))]);
    assert_eq!(result.as_deref(), Some("Zero"));
}

#[test]
fn test_tie_keeps_first_occurrence() {
    let result = highest(vec![
        scored("Low", Some(0.2)),
        scored("TieA", Some(0.8)),
        scored("TieB", Some(0.8)),
    ]);
    assert_eq!(result.as_deref(), Some("TieA"));
}

#[test]
fn test_negative_score_beats_absent() {
    let result = highest(vec![scored("NoScore", None), scored("Negative", Some(-2.0))]);
    assert_eq!(result.as_deref(), Some("Negative"));
}

#[test]
fn test_later_higher_score_wins() {
    let result = highest(vec![
        scored("A", Some(0.1)),
        scored("B", None),
        scored("C", Some(0.95)),
    ]);
    assert_eq!(result.as_deref(), Some("C"));
}

#[test]
fn test_fulfillment_only_for_fulfillment_hook() {
    let fulfil = LexResponseProcessor::new(event(vec![], "FulfillmentCodeHook")).unwrap();
    assert!(fulfil.is_fulfillment_required());

    for source in ["DialogCodeHook", "fulfillmentcodehook", ""] {
        let processor = LexResponseProcessor::new(event(vec![], source)).unwrap();
        assert!(!processor.is_fulfillment_required(), "{:?} must not require fulfillment", source);
    }
}

#[test]
fn test_optional_session_fields_default_empty() {
    let processor = LexResponseProcessor::new(event(vec![], "DialogCodeHook")).unwrap();
    let state = processor.session_state();

    assert!(state.session_attributes.is_empty());
    assert!(state.active_contexts.is_empty());
    assert_eq!(processor.get_active_intent().name, "Active");
    assert!(processor.get_active_intent().slots.is_empty());
}

#[test]
fn test_session_attributes_and_contexts_pass_through() {
    let mut ev = event(vec![], "DialogCodeHook");
    ev["sessionState"]["sessionAttributes"] = json!({ "city": "Tokyo" });
    ev["sessionState"]["activeContexts"] = json!([
        { "name": "first", "timeToLive": { "turnsToLive": 2 } },
        { "name": "second" }
    ]);

    let processor = LexResponseProcessor::new(ev).unwrap();
    let state = processor.session_state();

    assert_eq!(state.attribute("city"), Some("Tokyo"));
    assert_eq!(state.attribute("missing"), None);
    assert_eq!(state.active_contexts.len(), 2);
    assert_eq!(state.active_contexts[0]["name"], "first");
    assert_eq!(state.active_contexts[1]["name"], "second");
}

#[test]
fn test_slots_passed_through_as_is() {
    let slot = json!({
        "shape": "Scalar",
        "value": {
            "originalValue": "tokyo",
            "interpretedValue": "Tokyo",
            "resolvedValues": ["Tokyo"]
        }
    });
    let mut interp = scored("BookHotel", Some(0.9));
    interp["intent"]["slots"] = json!({ "City": slot.clone(), "Nights": null });

    let processor = LexResponseProcessor::new(event(vec![interp], "DialogCodeHook")).unwrap();
    let book = &processor.interpretations()[0];

    assert_eq!(book.slot("City"), Some(&slot));
    assert_eq!(book.slot("Nights"), Some(&Value::Null));
    assert_eq!(book.slot("Missing"), None);
    assert!(book.has_confidence());
}

#[test]
fn test_summary_with_no_interpretations() {
    let processor = LexResponseProcessor::new(event(vec![], "DialogCodeHook")).unwrap();
    let summary = processor.summary();

    assert_eq!(summary.highest_confidence_intent, None);
    assert_eq!(summary.active_intent, "Active");
    assert!(!summary.fulfillment_required);
}
