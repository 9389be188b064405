use std::io::{self, BufRead, Write};

use lern_core::protocol;
use lern_core::services::content;

fn main() {
    let content = match content::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[CORE] {e}");
            std::process::exit(1);
        }
    };

    let state = protocol::AppState::new(content);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(|| protocol::handle(&state, &line));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => serde_json::json!({
                "status": "error",
                "message": "internal core error"
            })
            .to_string(),
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}
