use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// Both provider credentials are optional: a missing catalog key degrades
/// the search adapter to its static fallback tables, and a missing
/// generative key degrades classification to the deterministic matcher.
/// Neither is a startup failure.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Movie catalog (TMDB) API key
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// Movie catalog API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Generative text provider API key
    #[serde(default)]
    pub llm_api_key: Option<String>,

    /// Generative text provider chat endpoint (OpenAI-compatible)
    #[serde(default = "default_llm_api_url")]
    pub llm_api_url: String,

    /// Model identifier sent to the generative provider
    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_llm_api_url() -> String {
    "https://api.fireworks.ai/inference/v1/chat/completions".to_string()
}

fn default_llm_model() -> String {
    "accounts/fireworks/models/llama-v3p1-8b-instruct".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
