//! Locale and timezone defaults for new accounts

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;

/// Locale assigned when a user does not choose one
pub const DEFAULT_LOCALE: &str = "en";

static SUPPORTED_LOCALES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "de", "en", "es", "fr", "it", "ja", "ko", "nl", "pl", "pt-BR", "ro", "ru", "tr", "uk",
        "zh-CN", "zh-TW",
    ]
    .into_iter()
    .collect()
});

/// Whether the locale is one the service can render
pub fn is_valid_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(locale)
}

/// Timezone settings for a user who has not configured any
pub fn default_user_timezone() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("automaticTimezone".to_string(), String::new()),
        ("manualTimezone".to_string(), String::new()),
        ("useAutomaticTimezone".to_string(), "true".to_string()),
    ])
}
