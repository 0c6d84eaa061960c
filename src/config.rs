//! Runtime configuration read from environment variables.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory holding the JSON content files.
    pub content_dir: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    pub port: u16,
    /// Rendered-page cache lifetime. Zero disables the cache.
    pub page_cache_ttl_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            port: 3000,
            page_cache_ttl_secs: 0,
        }
    }
}

impl SiteConfig {
    /// `CONTENT_DIR`, `STATIC_DIR`, `PORT`, `PAGE_CACHE_TTL_SECS`.
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            content_dir: lookup("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            page_cache_ttl_secs: lookup("PAGE_CACHE_TTL_SECS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.page_cache_ttl_secs),
        }
    }

    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    pub fn with_page_cache_ttl(mut self, secs: u64) -> Self {
        self.page_cache_ttl_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.page_cache_ttl_secs, 0);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("CONTENT_DIR", "/srv/content"),
            ("PORT", "8080"),
            ("PAGE_CACHE_TTL_SECS", "60"),
        ]));
        assert_eq!(config.content_dir, PathBuf::from("/srv/content"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.page_cache_ttl_secs, 60);
    }

    #[test]
    fn test_bad_port_keeps_default() {
        let config = SiteConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(config.port, 3000);
    }
}
