//! Relay Configuration
//!
//! All knobs for the relay, resolved once at startup:
//! - Bind address and port
//! - Upstream router URL and model (fixed)
//! - Default HF API key (used when the request carries none)

/// Hugging Face router chat-completions endpoint
pub const HF_ROUTER_URL: &str = "https://router.huggingface.co/v1/chat/completions";

/// Model requested from the router for every prompt
pub const MODEL: &str = "meta-llama/Meta-Llama-3-8B-Instruct";

/// System prompt prepended to every conversation
pub const SYSTEM_PROMPT: &str =
    "You are Dhruv's assistant. Be concise, friendly, direct. Avoid overclaiming; note learning areas.";

/// Completion token cap per request
pub const MAX_TOKENS: u32 = 150;

/// Sampling temperature for every request
pub const TEMPERATURE: f32 = 0.7;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Upstream chat-completions URL
    pub api_url: String,
    /// Model sent upstream and reported by /health
    pub model: String,
    /// Default API key, used when the request does not carry one
    pub api_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            api_url: HF_ROUTER_URL.to_string(),
            model: MODEL.to_string(),
            // Empty key is as good as no key
            api_key: std::env::var("HF_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::default()
    }
}
