use super::*;

fn src(name: &str, score: f64) -> Source {
    Source {
        source: name.to_string(),
        score,
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        "\"assistant\""
    );
}

#[test]
fn query_request_always_sends_double_vector() {
    let request = QueryRequest::new("¿Qué es un dictamen CGR?", "1700000000000");
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["query"], "¿Qué es un dictamen CGR?");
    assert_eq!(json["use_two_vectors"], true);
    assert_eq!(json["session_id"], "1700000000000");
}

#[test]
fn response_defaults_missing_sources_to_empty() {
    let response: QueryResponse = serde_json::from_str(r#"{"response":"Un dictamen es..."}"#).unwrap();

    assert_eq!(response.response, "Un dictamen es...");
    assert!(response.sources.is_empty());
    assert!(response.session_id.is_none());
}

#[test]
fn response_tolerates_backend_extras() {
    // The backend echoes the session id and the accumulated history
    let body = r#"{
        "response": "Un dictamen es...",
        "sources": [{"source": "Dictamen 12345", "score": 0.95}],
        "session_id": "1700000000000",
        "history": [{"role": "user", "content": "hola"}]
    }"#;
    let response: QueryResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.sources, vec![src("Dictamen 12345", 0.95)]);
    assert_eq!(response.session_id.as_deref(), Some("1700000000000"));
}

#[test]
fn dedupe_keeps_first_occurrence_in_order() {
    let kept = dedupe_sources(vec![src("A", 0.9), src("B", 0.8), src("A", 0.5)]);

    assert_eq!(kept, vec![src("A", 0.9), src("B", 0.8)]);
}

#[test]
fn dedupe_caps_at_three_unique_sources() {
    let kept = dedupe_sources(vec![
        src("A", 0.9),
        src("B", 0.8),
        src("C", 0.7),
        src("D", 0.6),
        src("E", 0.5),
    ]);

    assert_eq!(kept.len(), MAX_DISPLAY_SOURCES);
    assert_eq!(kept, vec![src("A", 0.9), src("B", 0.8), src("C", 0.7)]);
}

#[test]
fn assistant_constructor_canonicalizes_sources() {
    let message = Message::assistant(
        "texto",
        vec![src("A", 0.9), src("A", 0.5), src("B", 0.8)],
    );

    assert_eq!(message.role, Role::Assistant);
    assert_eq!(message.sources, vec![src("A", 0.9), src("B", 0.8)]);
}

#[test]
fn user_message_serializes_without_sources_field() {
    let json = serde_json::to_value(Message::user("hola")).unwrap();

    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "hola");
    assert!(json.get("sources").is_none());
}
