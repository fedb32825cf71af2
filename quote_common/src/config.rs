//! Hierarchical configuration lookup.
//!
//! A value is taken from the environment variable named by its key and falls
//! back to a compiled-in default. Providers resolve their keys once at startup
//! into a plain struct and never look at the environment again.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::sync::Arc;

/// Resolve `key` from the process environment, falling back to `default`.
pub fn resolve(key: &str, default: &str) -> String {
    resolve_with(|k| env::var(k).ok(), key, default)
}

/// Resolve `key` through `lookup`, falling back to `default`.
///
/// Blank values are treated as unset.
pub fn resolve_with<F>(lookup: F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Process-wide settings handed to every provider factory.
///
/// Backed by the process environment unless a custom lookup is supplied.
#[derive(Clone, Default)]
pub struct QuoteConfig {
    lookup: Option<Lookup>,
}

impl QuoteConfig {
    /// Configuration backed by the process environment.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Configuration backed by a custom lookup.
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Some(Arc::new(lookup)),
        }
    }

    /// Configuration backed by a fixed table; keys not in the table use their defaults.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::with_lookup(move |key| table.get(key).cloned())
    }

    /// Resolve `key`, falling back to `default`.
    pub fn get(&self, key: &str, default: &str) -> String {
        match &self.lookup {
            Some(lookup) => resolve_with(lookup.as_ref(), key, default),
            None => resolve(key, default),
        }
    }
}

impl fmt::Debug for QuoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.lookup.is_some() { "custom" } else { "environment" };
        f.debug_struct("QuoteConfig").field("source", &source).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(key: &str) -> Option<String> {
        match key {
            "SET" => Some("value".to_string()),
            "BLANK" => Some("   ".to_string()),
            _ => None,
        }
    }

    #[test]
    fn lookup_wins_over_default() {
        assert_eq!(resolve_with(table, "SET", "fallback"), "value");
    }

    #[test]
    fn missing_and_blank_fall_back() {
        assert_eq!(resolve_with(table, "MISSING", "fallback"), "fallback");
        assert_eq!(resolve_with(table, "BLANK", "fallback"), "fallback");
    }

    #[test]
    fn config_uses_custom_lookup() {
        let config = QuoteConfig::with_lookup(table);
        assert_eq!(config.get("SET", "x"), "value");
        assert_eq!(config.get("OTHER", "x"), "x");
    }

    #[test]
    fn config_from_pairs() {
        let config = QuoteConfig::from_pairs([("QUOTE_SERVICE_TEST_URL", "http://localhost:1234")]);
        assert_eq!(config.get("QUOTE_SERVICE_TEST_URL", "x"), "http://localhost:1234");
        assert_eq!(config.get("QUOTE_SERVICE_TEST_NAME", "Test"), "Test");
    }

    #[test]
    fn env_lookup_falls_back_for_unset_key() {
        assert_eq!(
            resolve("QUOTE_COMMON_TEST_SURELY_UNSET_KEY", "fallback"),
            "fallback"
        );
    }
}
