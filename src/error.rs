//! Error types for the translation pipeline.
//!
//! Every failure a translation can hit maps to one of three categories the
//! host understands, and each category carries a fixed wire discriminator.
//! User-facing messages are Chinese because that is what the host displays
//! to its (predominantly Chinese-speaking) users.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Translation pipeline errors, as surfaced to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// Request rejected before any network call (missing credential, blank text)
    #[error("{message}")]
    InvalidParameter {
        message: String,
        hint: Option<String>,
    },

    /// Source/target pair missing from the language table
    #[error("不支持的语言对: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    /// Chat-completions call failed: transport error, bad status, or unusable body
    #[error("{message}")]
    ApiFailure { message: String },
}

impl PluginError {
    /// The API key setting is blank.
    pub fn missing_api_key() -> Self {
        PluginError::InvalidParameter {
            message: "请在插件配置中设置智谱 AI 的 API Key".to_string(),
            hint: Some("请前往 https://open.bigmodel.cn/ 获取 API Key".to_string()),
        }
    }

    /// The text to translate is empty.
    pub fn empty_text() -> Self {
        PluginError::InvalidParameter {
            message: "翻译文本不能为空".to_string(),
            hint: None,
        }
    }

    /// One side of the requested pair is not a supported language.
    pub fn unsupported_pair(from: &str, to: &str) -> Self {
        PluginError::UnsupportedLanguagePair {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// The request never produced an HTTP response.
    pub fn network(err: &reqwest::Error) -> Self {
        PluginError::ApiFailure {
            message: format!("网络请求失败: {}", err),
        }
    }

    /// The endpoint answered with a non-success status.
    pub fn api_status(status: u16, detail: &str) -> Self {
        PluginError::ApiFailure {
            message: format!("API 请求失败 ({}): {}", status, detail),
        }
    }

    /// The endpoint answered 2xx but the body had no usable translation.
    pub fn malformed_response() -> Self {
        PluginError::ApiFailure {
            message: "API 返回数据格式错误".to_string(),
        }
    }

    /// Stable discriminator in the host's error vocabulary.
    pub fn kind(&self) -> &'static str {
        match self {
            PluginError::InvalidParameter { .. } => "param",
            PluginError::UnsupportedLanguagePair { .. } => "unsupportLanguage",
            PluginError::ApiFailure { .. } => "api",
        }
    }

    /// Build the wire payload the host renders.
    ///
    /// Pair and API failures always carry a fixed remediation hint; parameter
    /// errors carry one only when the constructor set it.
    pub fn to_payload(&self) -> ErrorPayload {
        let hint = match self {
            PluginError::InvalidParameter { hint, .. } => hint.clone(),
            PluginError::UnsupportedLanguagePair { .. } => {
                Some("请检查源语言和目标语言设置".to_string())
            }
            PluginError::ApiFailure { .. } => Some("请检查网络连接和 API Key 设置".to_string()),
        };

        ErrorPayload {
            kind: self.kind().to_string(),
            message: self.to_string(),
            hint,
        }
    }
}

/// Wire-format error body handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// One of "param", "unsupportLanguage", "api"
    #[serde(rename = "type")]
    pub kind: String,

    /// User-facing description of what went wrong
    pub message: String,

    /// Optional remediation advice, omitted from JSON when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
