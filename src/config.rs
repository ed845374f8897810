// src/config.rs
use std::env;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Backend connection settings, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    backend_url: String,
}

impl Config {
    /// Read `BACKEND_URL` from the environment, falling back to the local
    /// development address when unset or empty.
    pub fn from_env() -> Self {
        let url = env::var("BACKEND_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self::new(url)
    }

    pub fn new(backend_url: impl Into<String>) -> Self {
        let mut backend_url = backend_url.into();
        // Endpoint paths below always start with '/'.
        while backend_url.ends_with('/') {
            backend_url.pop();
        }
        Self { backend_url }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let cfg = Config::new("http://localhost:8000/");
        assert_eq!(cfg.backend_url(), "http://localhost:8000");
    }

    #[test]
    fn default_points_at_local_dev() {
        assert_eq!(Config::default().backend_url(), "http://localhost:8000");
    }
}
