//! Translation orchestrator: validation, language resolution, and the single
//! remote call.
//!
//! One invocation issues at most one outbound request. Every failure path
//! resolves to a `PluginError`, so a pending host call always gets exactly
//! one terminal outcome.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::client::request_translation;
use crate::config::PluginConfig;
use crate::error::PluginError;
use crate::lang::{LanguageDetector, LanguageRegistry, AUTO};
use crate::prompt::build_translate_prompt;

/// One translation request from the host.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,

    /// Source language code, possibly "auto"
    pub from: String,

    /// Target language code
    pub to: String,
}

/// Successful translation payload handed back to the host.
///
/// `from` always carries the resolved source code, never "auto".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub from: String,
    pub to: String,
    pub paragraphs: Vec<String>,
}

/// Translate one request against the configured GLM endpoint.
///
/// Validation happens before any network activity: a blank API key or blank
/// text fails immediately, an unknown source or target fails once the source
/// is resolved. When source and target coincide the original text is echoed
/// back untouched, which keeps no-op translations lossless and free of quota
/// cost.
pub async fn translate(
    client: &reqwest::Client,
    config: &PluginConfig,
    request: &TranslationRequest,
) -> Result<TranslationResult, PluginError> {
    if config.api_key.trim().is_empty() {
        return Err(PluginError::missing_api_key());
    }

    if request.text.trim().is_empty() {
        return Err(PluginError::empty_text());
    }

    let from: &str = if request.from == AUTO {
        let detected = LanguageDetector::detect(&request.text);
        debug!("Detected source language {} for auto request", detected);
        detected
    } else {
        &request.from
    };
    let to: &str = &request.to;

    // Both sides must map to a provider code; the codes themselves are not
    // sent anywhere, the prompt speaks display names.
    let registry = LanguageRegistry::get();
    if registry.provider_code_of(from).is_none() || registry.provider_code_of(to).is_none() {
        return Err(PluginError::unsupported_pair(from, to));
    }

    if from == to {
        debug!("Source equals target ({}), echoing text back", from);
        return Ok(TranslationResult {
            from: from.to_string(),
            to: to.to_string(),
            paragraphs: vec![request.text.clone()],
        });
    }

    let prompt = build_translate_prompt(&request.text, from, to, config.custom_prompt.as_deref());

    let translated = match request_translation(client, config, &prompt).await {
        Ok(translated) => translated,
        Err(err) => {
            error!("Translation {} -> {} failed: {}", from, to, err);
            return Err(err);
        }
    };

    debug!(
        "Translated {} chars {} -> {}",
        request.text.chars().count(),
        from,
        to
    );

    Ok(TranslationResult {
        from: from.to_string(),
        to: to.to_string(),
        paragraphs: vec![translated],
    })
}

/// Language codes the plugin advertises to the host, in registration order,
/// "auto" included.
pub fn support_languages() -> &'static [&'static str] {
    LanguageRegistry::get().all_codes()
}
