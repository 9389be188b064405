use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const PREFS_FILE: &str = "preferences.json";

const DEFAULT_LANG: &str = "en";

/// The one value persisted across sessions: the interface language code.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences { lang: default_lang() }
    }
}

/// Missing, unreadable or corrupt files all degrade to the default; there is
/// no state worth failing over.
pub fn load(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    let data = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[PREF] failed to read {}: {e}", path.display());
            return Preferences::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("[PREF] failed to parse {}: {e}", path.display());
            Preferences::default()
        }
    }
}

pub fn save(path: &Path, prefs: &Preferences) -> Result<(), String> {
    let json = serde_json::to_string_pretty(prefs).map_err(|e| e.to_string())?;
    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    fs::write(&tmp, bytes).map_err(|e| e.to_string())?;

    if path.exists() {
        fs::remove_file(path).map_err(|e| e.to_string())?;
    }

    fs::rename(&tmp, path).map_err(|e| e.to_string())?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "prefs".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
