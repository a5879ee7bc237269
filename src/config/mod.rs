use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_API_URL: &str = "https://graphql.anilist.co";
pub(crate) const DEFAULT_TRENDING_PER_PAGE: u32 = 100;

/// Upper bound for `TRENDING_PER_PAGE`.
const MAX_TRENDING_PER_PAGE: u32 = 500;

/// Runtime settings read from the optional `window.ENV` object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub trending_per_page: u32,
    #[serde(skip, default = "default_log_level")]
    pub log_level: LevelFilter,
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            trending_per_page: DEFAULT_TRENDING_PER_PAGE,
            log_level: default_log_level(),
        }
    }
}

impl EnvConfig {
    /// Reads `window.ENV`, falling back to defaults field by field.
    ///
    /// Both `API_URL` and the older `api_url` spelling are accepted.
    pub fn new() -> Self {
        let mut config = Self::default();

        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return config;
        };

        let get_s = |k: &str| {
            js_sys::Reflect::get(&env, &k.into())
                .ok()
                .and_then(|v| {
                    v.as_string()
                        .or_else(|| v.as_f64().map(|n| n.to_string()))
                })
        };

        if let Some(url) = get_s("API_URL").or_else(|| get_s("api_url")) {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }

        if let Some(n) = get_s("TRENDING_PER_PAGE").and_then(|s| parse_per_page(&s)) {
            config.trending_per_page = n;
        }

        if let Some(level) = get_s("LOG_LEVEL").and_then(|s| parse_log_level(&s)) {
            config.log_level = level;
        }

        config
    }
}

pub(crate) fn parse_log_level(s: &str) -> Option<LevelFilter> {
    s.trim().parse::<LevelFilter>().ok()
}

pub(crate) fn parse_per_page(s: &str) -> Option<u32> {
    let n = s.trim().parse::<f64>().ok()?;
    if !n.is_finite() || n < 1.0 {
        return None;
    }
    Some((n as u32).min(MAX_TRENDING_PER_PAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EnvConfig::default();
        assert_eq!(c.api_url, "https://graphql.anilist.co");
        assert_eq!(c.trending_per_page, 100);
        assert_eq!(c.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn test_parse_per_page() {
        assert_eq!(parse_per_page("50"), Some(50));
        assert_eq!(parse_per_page("25.0"), Some(25));
        assert_eq!(parse_per_page("0"), None);
        assert_eq!(parse_per_page("-3"), None);
        assert_eq!(parse_per_page("many"), None);
        assert_eq!(parse_per_page("100000"), Some(500));
    }
}
