//! Backend configuration
//!
//! The capability flag normally comes from a probe. `RAWBUF_BACKEND` can
//! force either backing: `native`, `polyfill`, or `auto` (the default).

use std::env;

use crate::dispatch::Backend;

/// Environment variable consulted by [`Config::from_env`]
pub const BACKEND_ENV: &str = "RAWBUF_BACKEND";

/// How the backend should be chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendChoice {
    /// Ask the capability probe
    #[default]
    Auto,
    Native,
    Polyfill,
}

impl BackendChoice {
    /// Parse a choice, case-insensitively; unknown names give `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Some(BackendChoice::Auto),
            "native" => Some(BackendChoice::Native),
            "polyfill" => Some(BackendChoice::Polyfill),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub backend: BackendChoice,
}

impl Config {
    pub fn new(backend: BackendChoice) -> Self {
        Self { backend }
    }

    /// Read the choice from the environment, falling back to `Auto`
    pub fn from_env() -> Self {
        let backend = match env::var(BACKEND_ENV) {
            Ok(raw) => BackendChoice::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "ignoring unrecognized {}", BACKEND_ENV);
                BackendChoice::Auto
            }),
            Err(_) => BackendChoice::Auto,
        };
        Self { backend }
    }

    /// Resolve to a backend; `probe` runs only for `Auto`
    pub fn backend(&self, probe: impl FnOnce() -> bool) -> Backend {
        match self.backend {
            BackendChoice::Auto => Backend::detect(probe),
            BackendChoice::Native => Backend::Native,
            BackendChoice::Polyfill => Backend::Polyfill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_choices() {
        assert_eq!(BackendChoice::parse("Native"), Some(BackendChoice::Native));
        assert_eq!(BackendChoice::parse(" polyfill "), Some(BackendChoice::Polyfill));
        assert_eq!(BackendChoice::parse(""), Some(BackendChoice::Auto));
        assert_eq!(BackendChoice::parse("wasm"), None);
    }

    #[test]
    fn forced_choice_skips_probe() {
        let config = Config::new(BackendChoice::Polyfill);
        let backend = config.backend(|| panic!("probe must not run"));
        assert_eq!(backend, Backend::Polyfill);
    }

    #[test]
    fn auto_consults_probe() {
        let config = Config::default();
        assert_eq!(config.backend(|| true), Backend::Native);
        assert_eq!(config.backend(|| false), Backend::Polyfill);
    }
}
