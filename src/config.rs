//! Plugin configuration, sourced from the environment.
//!
//! Every setting has a default except the API key, which defaults to empty
//! and is validated by the translation pipeline itself so that a missing
//! credential surfaces as a proper parameter error instead of a startup
//! crash.

/// Default chat-completions endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";

#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Zhipu API key, blank when unset
    pub api_key: String,

    /// Model identifier sent in the request body
    pub model: String,

    /// Optional prompt template with {text}/{from}/{to} placeholders
    pub custom_prompt: Option<String>,

    /// Sampling temperature
    pub temperature: f32,

    /// Upper bound on the remote call, whole seconds
    pub timeout_secs: u64,

    /// Base URL of the chat-completions API (overridable for tests)
    pub api_base_url: String,
}

impl PluginConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("ZHIPU_API_KEY").unwrap_or_default(),

            model: std::env::var("ZHIPU_MODEL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "glm-4-flash".to_string()),

            custom_prompt: std::env::var("ZHIPU_CUSTOM_PROMPT")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            temperature: std::env::var("ZHIPU_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.1),

            timeout_secs: std::env::var("ZHIPU_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            api_base_url: std::env::var("ZHIPU_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}
