//! Site configuration with environment overrides.

use std::time::Duration;

use serde::Deserialize;

use crate::render::Locale;

/// Default storage key prefix (`yoloo_games`, ...).
pub const DEFAULT_KEY_PREFIX: &str = "yoloo";

/// Tunables for one hosted site. Every field has a default, so a partial
/// JSON document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub key_prefix: String,
    pub slide_interval_ms: u64,
    pub toast_ms: u64,
    pub showcase_limit: usize,
    pub blog_preview_limit: usize,
    /// Minutes east of UTC used when formatting dates.
    pub utc_offset_minutes: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            slide_interval_ms: 5_000,
            toast_ms: 3_000,
            showcase_limit: 5,
            blog_preview_limit: 3,
            utc_offset_minutes: 7 * 60,
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by `YOLOO_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let key_prefix = match std::env::var("YOLOO_KEY_PREFIX") {
            Ok(prefix) if !prefix.trim().is_empty() => prefix.trim().to_string(),
            _ => defaults.key_prefix,
        };

        Self {
            key_prefix,
            slide_interval_ms: env_parse_with_default(
                "YOLOO_SLIDE_INTERVAL_MS",
                defaults.slide_interval_ms,
            ),
            toast_ms: env_parse_with_default("YOLOO_TOAST_MS", defaults.toast_ms),
            showcase_limit: env_parse_with_default("YOLOO_SHOWCASE_LIMIT", defaults.showcase_limit),
            blog_preview_limit: env_parse_with_default(
                "YOLOO_BLOG_PREVIEW_LIMIT",
                defaults.blog_preview_limit,
            ),
            utc_offset_minutes: env_parse_with_default(
                "YOLOO_UTC_OFFSET_MINUTES",
                defaults.utc_offset_minutes,
            ),
        }
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn locale(&self) -> Locale {
        Locale::from_offset_minutes(self.utc_offset_minutes)
    }
}

/// Parse an environment variable, falling back to `default` when unset.
/// A set but unparseable value logs a warning and also falls back.
fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
