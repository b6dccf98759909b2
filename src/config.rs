//! Client Configuration
//!
//! Defaults baked in, optionally overridden by a `window.TASKLIFT_CONFIG`
//! object that the hosting page may define before the bundle loads.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const GLOBAL_NAME: &str = "TASKLIFT_CONFIG";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every backend path; empty means same origin
    pub api_base: String,
    pub search_debounce_ms: u32,
    pub note_preview_chars: usize,
    pub task_preview_chars: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_debounce_ms: 300,
            note_preview_chars: 150,
            task_preview_chars: 120,
        }
    }
}

/// Partial override as read from the page; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub search_debounce_ms: Option<u32>,
    pub note_preview_chars: Option<usize>,
    pub task_preview_chars: Option<usize>,
}

impl ClientConfig {
    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base) = overrides.api_base {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(ms) = overrides.search_debounce_ms {
            self.search_debounce_ms = ms;
        }
        if let Some(n) = overrides.note_preview_chars.filter(|n| *n > 0) {
            self.note_preview_chars = n;
        }
        if let Some(n) = overrides.task_preview_chars.filter(|n| *n > 0) {
            self.task_preview_chars = n;
        }
        self
    }

    /// Read the page-level override object, falling back to defaults.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value::<ConfigOverrides>(raw) {
            Ok(overrides) => {
                tracing::info!(?overrides, "applying page config overrides");
                Self::default().merged(overrides)
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed {}", GLOBAL_NAME);
                Self::default()
            }
        }
    }
}
