//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use openai_client::CompletionParams;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::openai_llm::DEFAULT_MODEL;

/// Default OpenAI-compatible endpoint base (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn params(&self) -> CompletionParams;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn model(&self) -> &str {
        &self.model
    }
    fn params(&self) -> CompletionParams {
        CompletionParams {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            timeout: self.timeout,
        }
    }
}

impl EnvLlmConfig {
    /// Load from environment variables. A missing API key or an unparseable number is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CompletionParams::default();
        let api_key = lookup("LLM_API_KEY")
            .or_else(|| lookup("OPENAI_API_KEY"))
            .filter(|s| !s.trim().is_empty())
            .context("LLM_API_KEY (or OPENAI_API_KEY) not set")?;
        let base_url = lookup("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = lookup("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let max_tokens = parse_or(&lookup, "LLM_MAX_TOKENS", defaults.max_tokens)?;
        let temperature = parse_or(&lookup, "LLM_TEMPERATURE", defaults.temperature)?;
        let timeout_secs = parse_or(&lookup, "LLM_TIMEOUT_SECS", defaults.timeout.as_secs())?;
        Ok(Self {
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has invalid value {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_set() {
        let cfg = EnvLlmConfig::from_lookup(lookup(&[("LLM_API_KEY", "gsk_abc")])).unwrap();
        assert_eq!(cfg.api_key(), "gsk_abc");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.model(), DEFAULT_MODEL);
        assert_eq!(cfg.params(), CompletionParams::default());
    }

    #[test]
    fn openai_key_is_fallback() {
        let cfg = EnvLlmConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-x")])).unwrap();
        assert_eq!(cfg.api_key, "sk-x");
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = EnvLlmConfig::from_lookup(lookup(&[("MODEL", "m")])).unwrap_err();
        assert!(err.to_string().contains("LLM_API_KEY"));
        assert!(EnvLlmConfig::from_lookup(lookup(&[("LLM_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn overrides_and_invalid_numbers() {
        let cfg = EnvLlmConfig::from_lookup(lookup(&[
            ("LLM_API_KEY", "k"),
            ("LLM_MAX_TOKENS", "256"),
            ("LLM_TEMPERATURE", "0.4"),
            ("LLM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.max_tokens, 256);
        assert_eq!(cfg.timeout, Duration::from_secs(5));

        let err = EnvLlmConfig::from_lookup(lookup(&[
            ("LLM_API_KEY", "k"),
            ("LLM_MAX_TOKENS", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("LLM_MAX_TOKENS"));
    }
}
