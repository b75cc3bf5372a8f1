//! Translation backend for the Bob translate plugin, targeting the Zhipu
//! GLM chat-completions API.
//!
//! The host hands over a text with source/target language selectors; the
//! pipeline validates the credential, resolves "auto" sources by script
//! detection, short-circuits no-op pairs, and otherwise issues exactly one
//! chat-completions request built for fast non-reasoning output.
//!
//! ```rust,ignore
//! use bob_zhipu_translator::{translate, PluginConfig, TranslationRequest};
//!
//! let config = PluginConfig::from_env();
//! let client = reqwest::Client::new();
//! let request = TranslationRequest {
//!     text: "你好".to_string(),
//!     from: "auto".to_string(),
//!     to: "en".to_string(),
//! };
//! let result = translate(&client, &config, &request).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod lang;
pub mod prompt;
pub mod translate;

pub use config::PluginConfig;
pub use error::{ErrorPayload, PluginError};
pub use translate::{support_languages, translate, TranslationRequest, TranslationResult};
