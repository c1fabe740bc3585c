//! CDN caching configuration.

use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One day, the CDN shared-cache lifetime.
pub const ONE_DAY: Duration = Duration::from_secs(60 * 60 * 24);

/// Environment variable that turns CDN caching off when set to `true`.
pub const DISABLE_CDN_CACHE_ENV: &str = "DISABLE_CDN_CACHE";

/// Process-wide CDN caching configuration.
///
/// Built once at startup and never mutated; pass it to
/// [`CacheHeaders::new`](crate::CacheHeaders::new) rather than reading the
/// environment per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnCacheConfig {
    /// Skip `cdn-cache-control` and `cache-tag` entirely.
    pub disable_cdn_cache: bool,
    /// Shared-cache lifetime, sent as `s-maxage`.
    #[serde(rename = "one_day_secs", with = "duration_secs")]
    pub one_day: Duration,
}

impl Default for CdnCacheConfig {
    fn default() -> Self {
        Self {
            disable_cdn_cache: false,
            one_day: ONE_DAY,
        }
    }
}

impl CdnCacheConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let disable_cdn_cache = parse_disable_flag(lookup(DISABLE_CDN_CACHE_ENV).as_deref());
        if disable_cdn_cache {
            tracing::info!("CDN caching disabled via {}", DISABLE_CDN_CACHE_ENV);
        }

        Self {
            disable_cdn_cache,
            ..Self::default()
        }
    }

    /// Configuration read from the environment on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<CdnCacheConfig> = OnceLock::new();
        GLOBAL.get_or_init(Self::from_env)
    }

    /// Set whether CDN caching is disabled.
    pub fn with_cdn_cache_disabled(mut self, disabled: bool) -> Self {
        self.disable_cdn_cache = disabled;
        self
    }

    /// Set the shared-cache lifetime.
    pub fn with_one_day(mut self, one_day: Duration) -> Self {
        self.one_day = one_day;
        self
    }

    /// Whether CDN headers should be emitted.
    pub fn cdn_cache_enabled(&self) -> bool {
        !self.disable_cdn_cache
    }
}

/// Only a case-insensitive `true` disables; unset and anything else do not.
pub fn parse_disable_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.to_lowercase() == "true")
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, DISABLE_CDN_CACHE_ENV);
            value.map(String::from)
        }
    }

    #[test]
    fn test_default_enables_cdn_cache() {
        let config = CdnCacheConfig::default();
        assert!(config.cdn_cache_enabled());
        assert_eq!(config.one_day.as_secs(), 86_400);
    }

    #[test]
    fn test_true_in_any_case_disables() {
        for value in ["true", "TRUE", "True", "tRuE"] {
            let config = CdnCacheConfig::from_lookup(lookup(Some(value)));
            assert!(config.disable_cdn_cache, "{value} should disable");
        }
    }

    #[test]
    fn test_unset_and_other_values_enable() {
        assert!(CdnCacheConfig::from_lookup(lookup(None)).cdn_cache_enabled());
        for value in ["", "false", "1", "yes", " true"] {
            let config = CdnCacheConfig::from_lookup(lookup(Some(value)));
            assert!(config.cdn_cache_enabled(), "{value:?} should not disable");
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: CdnCacheConfig = serde_json::from_str(r#"{"disable_cdn_cache":true}"#).unwrap();
        assert!(config.disable_cdn_cache);
        assert_eq!(config.one_day, ONE_DAY);

        let config: CdnCacheConfig = serde_json::from_str(r#"{"one_day_secs":60}"#).unwrap();
        assert!(config.cdn_cache_enabled());
        assert_eq!(config.one_day, Duration::from_secs(60));
    }

    #[test]
    fn test_builders() {
        let config = CdnCacheConfig::default()
            .with_cdn_cache_disabled(true)
            .with_one_day(Duration::from_secs(10));
        assert!(!config.cdn_cache_enabled());
        assert_eq!(config.one_day.as_secs(), 10);
    }
}
