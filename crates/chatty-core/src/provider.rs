//! Provider endpoint and credential lookup.
//!
//! The base URL comes from `OPENAI_API_BASE`; the API key variable is chosen
//! from the base URL so that one binary can talk to any OpenAI-compatible
//! provider.

use crate::error::{ChatError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const API_BASE_ENV: &str = "OPENAI_API_BASE";

const DEFAULT_KEY_ENV: &str = "OPENAI_API_KEY";

/// Base URL prefix -> environment variable holding that provider's key.
const KEY_ENV_BY_PREFIX: &[(&str, &str)] = &[
    ("https://api.groq.com", "GROQ_API_KEY"),
    ("https://api.fireworks.ai", "FIREWORKS_API_KEY"),
    ("https://api.mistral.ai", "MISTRAL_API_KEY"),
    ("https://api.hyperbolic.xyz", "HYPERBOLIC_API_KEY"),
    ("https://api.deepseek.com", "DEEPSEEK_API_KEY"),
    ("https://api.llama.com", "LLAMA_API_KEY"),
    ("https://api.moonshot.ai", "MOONSHOT_API_KEY"),
];

/// Name of the environment variable holding the key for `base_url`.
pub fn key_env_for(base_url: &str) -> &'static str {
    KEY_ENV_BY_PREFIX
        .iter()
        .find(|(prefix, _)| base_url.starts_with(prefix))
        .map(|(_, env)| *env)
        .unwrap_or(DEFAULT_KEY_ENV)
}

/// A resolved endpoint plus the credential to use against it.
#[derive(Clone)]
pub struct Provider {
    base_url: String,
    api_key: String,
}

impl Provider {
    /// Create a provider from explicit values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve the provider from the process environment.
    ///
    /// `fallback_base` is used when `OPENAI_API_BASE` is unset (typically the
    /// `base_url` from config.toml).
    pub fn from_env(fallback_base: Option<&str>) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), fallback_base)
    }

    /// Resolve the provider through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, fallback_base: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_BASE_ENV)
            .filter(|s| !s.is_empty())
            .or_else(|| fallback_base.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let env_var = key_env_for(&base_url);
        let api_key = lookup(env_var)
            .filter(|s| !s.is_empty())
            .ok_or(ChatError::InvalidKey { env_var })?;

        log::debug!("using provider {} (key from {})", base_url, env_var);
        Ok(Self { base_url, api_key })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full chat-completions endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

// Keep the key out of debug output.
impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_to_openai() {
        let provider =
            Provider::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")]), None).unwrap();
        assert_eq!(provider.base_url(), DEFAULT_API_BASE);
        assert_eq!(
            provider.chat_url(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(provider.bearer(), "Bearer sk-test");
    }

    #[test]
    fn test_key_env_selected_by_base_prefix() {
        assert_eq!(key_env_for("https://api.groq.com/openai/v1"), "GROQ_API_KEY");
        assert_eq!(key_env_for("https://api.moonshot.ai/v1"), "MOONSHOT_API_KEY");
        assert_eq!(key_env_for("https://api.deepseek.com"), "DEEPSEEK_API_KEY");
        assert_eq!(key_env_for("http://localhost:8080/v1"), "OPENAI_API_KEY");
    }

    #[test]
    fn test_missing_key_names_variable() {
        let err = Provider::from_lookup(
            lookup_from(&[("OPENAI_API_BASE", "https://api.mistral.ai/v1")]),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChatError::InvalidKey {
                env_var: "MISTRAL_API_KEY"
            }
        ));
    }

    #[test]
    fn test_env_base_wins_over_fallback() {
        let provider = Provider::from_lookup(
            lookup_from(&[
                ("OPENAI_API_BASE", "https://api.groq.com/openai/v1"),
                ("GROQ_API_KEY", "gk"),
            ]),
            Some("http://localhost:1234/v1"),
        )
        .unwrap();
        assert_eq!(provider.base_url(), "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_fallback_base_used_when_env_unset() {
        let provider = Provider::from_lookup(
            lookup_from(&[("OPENAI_API_KEY", "k")]),
            Some("http://localhost:1234/v1/"),
        )
        .unwrap();
        assert_eq!(provider.chat_url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn test_debug_redacts_key() {
        let provider = Provider::new("https://example.test", "secret");
        assert!(!format!("{:?}", provider).contains("secret"));
    }
}
