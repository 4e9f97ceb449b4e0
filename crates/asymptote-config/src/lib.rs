//! Configuration loading for Asymptote.
//! Reads asymptote.toml from the current directory or the path in the
//! ASYMPTOTE_CONFIG env var. Every field has a default, so a missing file
//! is not an error.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown LLM backend: {0} (expected \"gemini\" or \"ollama\")")]
    UnknownBackend(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_bind()       -> String { "127.0.0.1:5000".to_string() }
fn default_static_dir() -> String { "crates/asymptote-web/static".to_string() }
fn default_title()      -> String { "Code Complexity Analyzer".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: default_static_dir(),
            title: default_title(),
        }
    }
}

/// Which completion backend answers `/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Gemini,
    Ollama,
}

impl BackendKind {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            _ => Err(ConfigError::UnknownBackend(name.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_backend()     -> String { "gemini".to_string() }
fn default_max_tokens()  -> u32    { 4096 }
fn default_temperature() -> f32    { 0.1 }

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            gemini: GeminiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

impl LlmConfig {
    pub fn backend_kind(&self) -> Result<BackendKind, ConfigError> {
        BackendKind::parse(&self.backend)
    }
}

#[derive(Debug, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Usually left out of the file and supplied through GEMINI_API_KEY.
    #[serde(default, deserialize_with = "deserialize_secret")]
    pub api_key: Option<SecretString>,
}

fn default_gemini_model()    -> String { "gemini-1.5-flash".to_string() }
fn default_gemini_base_url() -> String { "https://generativelanguage.googleapis.com".to_string() }

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_ollama_base_url")]
    pub base_url: String,
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_base_url() -> String { "http://localhost:11434".to_string() }
fn default_ollama_model()    -> String { "llama3:8b".to_string() }

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            model: default_ollama_model(),
        }
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(SecretString::from))
}


impl Config {
    /// Load configuration.
    /// Reads `.env` first, then ASYMPTOTE_CONFIG or ./asymptote.toml, then
    /// applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }

        let path = std::env::var("ASYMPTOTE_CONFIG")
            .unwrap_or_else(|_| "asymptote.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            Self::load_from(&path)?
        } else {
            tracing::info!("Config file {} not found, using defaults", path);
            Self::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Environment wins over the file. `lookup` is `std::env::var` in
    /// production and a map in tests.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("ASYMPTOTE_BIND").filter(|v| !v.is_empty()) {
            self.server.bind = bind;
        }
        if let Some(backend) = lookup("ASYMPTOTE_LLM_BACKEND").filter(|v| !v.is_empty()) {
            self.llm.backend = backend;
        }
        let key = lookup("ASYMPTOTE_GEMINI_API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .filter(|v| !v.is_empty());
        if let Some(key) = key {
            self.llm.gemini.api_key = Some(SecretString::from(key));
        }
    }
}
