use std::cmp::Ordering;

use crate::config::RuntimeConfig;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

pub fn log_event(config: &RuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(line) = render_event(config.log_level, level, event, fields, now_unix_seconds()) {
        emit(level, &line);
    }
}

/// Builds the JSON line for an event, or `None` when `level` is below `threshold`.
fn render_event(
    threshold: LogLevel,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
    ts: u64,
) -> Option<String> {
    if level < threshold {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), serde_json::Value::Number(serde_json::Number::from(ts)));
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload).to_string())
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert_eq!(LogLevel::Warn.max(LogLevel::Debug), LogLevel::Warn);
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn events_below_threshold_are_dropped() {
        let line = render_event(
            LogLevel::Info,
            LogLevel::Debug,
            "lightbox_navigated",
            serde_json::json!({ "index": 2 }),
            1_700_000_000,
        );

        assert_eq!(line, None);
    }

    #[test]
    fn rendered_event_merges_fields_after_envelope() {
        let line = render_event(
            LogLevel::Info,
            LogLevel::Warn,
            "catalog_invalid",
            serde_json::json!({ "message": "duplicate slug" }),
            1_700_000_000,
        )
        .expect("warn passes an info threshold");

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("line is valid JSON");
        assert_eq!(parsed["ts"], 1_700_000_000u64);
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "catalog_invalid");
        assert_eq!(parsed["message"], "duplicate slug");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = render_event(LogLevel::Debug, LogLevel::Info, "app_mounted", serde_json::Value::Null, 5)
            .expect("info passes a debug threshold");

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("line is valid JSON");
        assert_eq!(parsed.as_object().map(|object| object.len()), Some(3));
    }
}
