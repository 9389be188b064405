use serde_json::{json, Value};

use lern_core::protocol::{handle, AppState};
use lern_core::services::content;

fn state_in(dir: &tempfile::TempDir) -> AppState {
    let content = content::load().expect("bundled content loads");
    AppState::with_prefs_path(content, dir.path().join("preferences.json"))
}

fn request(state: &AppState, cmd: &str, payload: Value) -> Value {
    let req = json!({ "id": 1, "cmd": cmd, "payload": payload }).to_string();
    serde_json::from_str(&handle(state, &req)).expect("response is json")
}

#[test]
fn ping_answers_ok() {
    let dir = tempfile::tempdir().unwrap();
    let resp = request(&state_in(&dir), "ping", Value::Null);
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["payload"]["message"], "lern-core alive");
}

#[test]
fn invalid_json_is_an_error_response() {
    let dir = tempfile::tempdir().unwrap();
    let resp: Value = serde_json::from_str(&handle(&state_in(&dir), "not json")).unwrap();
    assert_eq!(resp["status"], "error");
    assert_eq!(resp["message"], "invalid json");
}

#[test]
fn unknown_command_is_an_error_response() {
    let dir = tempfile::tempdir().unwrap();
    let resp = request(&state_in(&dir), "does.not.exist", Value::Null);
    assert_eq!(resp["status"], "error");
    assert_eq!(resp["message"], "unknown command");
}

#[test]
fn search_finds_digraph_spellings() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "search", json!({ "query": "koennen" }));
    assert_eq!(resp["status"], "ok");

    let results = resp["payload"]["results"].as_array().unwrap();
    assert!(results.iter().any(|r| r["german"] == "können"));
}

#[test]
fn empty_query_returns_no_results() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "search", json!({ "query": "   " }));
    assert_eq!(resp["payload"]["results"].as_array().unwrap().len(), 0);

    // Missing query behaves the same way.
    let resp = request(&state, "search", Value::Null);
    assert_eq!(resp["payload"]["results"].as_array().unwrap().len(), 0);
}

#[test]
fn search_results_carry_navigation_fields() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "search", json!({ "query": "gehen" }));
    let results = resp["payload"]["results"].as_array().unwrap();
    let gehen = results.iter().find(|r| r["id"] == "verb-gehen").unwrap();

    assert_eq!(gehen["link"], "/verbs");
    assert_eq!(gehen["is_verb"], true);
    assert_eq!(gehen["category"], "verb");
    assert!(gehen["section_id"].is_string());
}

#[test]
fn index_stats_counts_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "index.stats", Value::Null);
    let payload = &resp["payload"];

    let total = payload["total"].as_u64().unwrap();
    let by_category = payload["by_category"].as_object().unwrap();
    let sum: u64 = by_category.values().map(|v| v.as_u64().unwrap()).sum();

    assert_eq!(total, sum);
    assert!(total > 0);
}

#[test]
fn quiz_start_returns_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "quiz.start", json!({ "category": "all" }));
    let questions = resp["payload"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 10);

    for q in questions {
        let answer = q["answer"].as_str().unwrap();
        let options: Vec<&str> = q["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_str().unwrap())
            .collect();
        assert_eq!(options.iter().filter(|&&o| o == answer).count(), 1);
    }
}

#[test]
fn quiz_filter_keeps_only_requested_category() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "quiz.start", json!({ "category": "Verbs" }));
    let questions = resp["payload"]["questions"].as_array().unwrap();
    assert!(!questions.is_empty());
    assert!(questions.iter().all(|q| q["category"] == "Verbs"));
}

#[test]
fn quiz_rejects_unknown_category() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "quiz.start", json!({ "category": "Nouns" }));
    assert_eq!(resp["status"], "error");
    assert_eq!(resp["message"], "unknown quiz category: Nouns");
}

#[test]
fn preference_defaults_then_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "pref.get", Value::Null);
    assert_eq!(resp["payload"]["lang"], "en");

    let resp = request(&state, "pref.set", json!({ "lang": "ro" }));
    assert_eq!(resp["status"], "ok");

    let resp = request(&state, "pref.get", Value::Null);
    assert_eq!(resp["payload"]["lang"], "ro");
}

#[test]
fn pref_set_requires_a_lang() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(&dir);

    let resp = request(&state, "pref.set", json!({}));
    assert_eq!(resp["status"], "error");
    assert_eq!(resp["message"], "payload.lang is required");
}
