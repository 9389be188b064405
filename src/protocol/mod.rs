use serde_json::{json, Map, Value};
use std::path::PathBuf;

use crate::model::content::Content;
use crate::model::entry::{Category, SearchEntry};
use crate::model::question::QuizCategory;
use crate::services::preference::{self, Preferences};
use crate::services::quiz::generator;
use crate::services::search::{builder, matcher};

mod command;
use command::Command;

/// Everything the line protocol operates on. The content and the index are
/// built once at startup and read-only afterwards.
pub struct AppState {
    pub content: Content,
    pub index: Vec<SearchEntry>,
    pub prefs_path: PathBuf,
}

impl AppState {
    pub fn new(content: Content) -> AppState {
        AppState::with_prefs_path(content, PathBuf::from(preference::PREFS_FILE))
    }

    pub fn with_prefs_path(content: Content, prefs_path: PathBuf) -> AppState {
        let index = builder::build_index(&content);
        AppState { content, index, prefs_path }
    }
}

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload<'a>(req: &'a Value) -> &'a Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

pub fn handle(state: &AppState, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "lern-core alive" })),

        Command::Search => {
            let query = payload.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let results = matcher::filter_entries(query, &state.index);
            ok(id, json!({ "results": results }))
        }

        Command::IndexStats => {
            let mut by_category = Map::new();
            for category in Category::ALL {
                let count = state.index.iter().filter(|e| e.category == category).count();
                by_category.insert(category.as_str().to_string(), json!(count));
            }
            ok(
                id,
                json!({
                    "total": state.index.len(),
                    "by_category": by_category
                }),
            )
        }

        Command::QuizStart => {
            let category = payload
                .get("category")
                .and_then(|v| v.as_str())
                .unwrap_or("all");

            let filter = if category.is_empty() || category == "all" {
                None
            } else {
                match QuizCategory::from_name(category) {
                    Some(c) => Some(c),
                    None => return err(id, format!("unknown quiz category: {category}")),
                }
            };

            let questions = generator::session(&state.content, filter, &mut rand::thread_rng());
            ok(id, json!({ "questions": questions }))
        }

        Command::PrefGet => {
            let prefs = preference::load(&state.prefs_path);
            ok(id, json!({ "lang": prefs.lang }))
        }

        Command::PrefSet => {
            let lang = payload.get("lang").and_then(|v| v.as_str()).unwrap_or("");
            if lang.is_empty() {
                return err(id, "payload.lang is required");
            }

            let prefs = Preferences { lang: lang.to_string() };
            match preference::save(&state.prefs_path, &prefs) {
                Ok(()) => ok(id, json!({ "lang": prefs.lang })),
                Err(e) => err(id, e),
            }
        }

        Command::Unknown => err(id, "unknown command"),
    }
}
