use crate::logging::LogLevel;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_SCROLL_OFFSET_PX: u32 = 100;
const DEFAULT_FEATURED_SLUG: &str = "nom";

const SCROLL_OFFSET_PX_BOUNDS: (u32, u32) = (0, 1_000);

pub const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";
pub const SCROLL_OFFSET_ATTRIBUTE: &str = "data-scroll-offset";
pub const FEATURED_ATTRIBUTE: &str = "data-featured";

/// Settings read once from the mount element when the app starts.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub log_level: LogLevel,
    pub scroll_offset: f64,
    pub featured_slug: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            scroll_offset: f64::from(DEFAULT_SCROLL_OFFSET_PX),
            featured_slug: DEFAULT_FEATURED_SLUG.to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = parse_non_empty(&lookup, LOG_LEVEL_ATTRIBUTE)
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let scroll_offset = parse_u32_with_bounds(
            &lookup,
            SCROLL_OFFSET_ATTRIBUTE,
            DEFAULT_SCROLL_OFFSET_PX,
            SCROLL_OFFSET_PX_BOUNDS,
        );
        let featured_slug = parse_non_empty(&lookup, FEATURED_ATTRIBUTE)
            .unwrap_or_else(|| DEFAULT_FEATURED_SLUG.to_string());

        Self {
            log_level,
            scroll_offset: f64::from(scroll_offset),
            featured_slug,
        }
    }
}

fn parse_non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| attributes.get(name).cloned()
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.scroll_offset, 100.0);
        assert_eq!(config.featured_slug, "nom");
    }

    #[test]
    fn valid_attributes_override_defaults() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_ATTRIBUTE, "debug"),
            (SCROLL_OFFSET_ATTRIBUTE, " 240 "),
            (FEATURED_ATTRIBUTE, "hoopgang"),
        ]));

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.scroll_offset, 240.0);
        assert_eq!(config.featured_slug, "hoopgang");
    }

    #[test]
    fn out_of_range_scroll_offset_falls_back() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[(SCROLL_OFFSET_ATTRIBUTE, "5000")]));
        assert_eq!(config.scroll_offset, 100.0);

        let config = RuntimeConfig::from_lookup(lookup_from(&[(SCROLL_OFFSET_ATTRIBUTE, "-3")]));
        assert_eq!(config.scroll_offset, 100.0);
    }

    #[test]
    fn unknown_level_and_blank_slug_fall_back() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_ATTRIBUTE, "verbose"),
            (FEATURED_ATTRIBUTE, "   "),
        ]));

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.featured_slug, "nom");
    }
}
