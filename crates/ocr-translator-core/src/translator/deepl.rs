use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::traits::{Translator, TranslatorInfo};
use crate::catalog::LangCode;
use crate::error::{Error, Result};

/// Default API endpoint (free tier). The paid tier uses `api.deepl.com`.
pub const DEFAULT_API_BASE: &str = "https://api-free.deepl.com";

/// DeepL REST API translator.
///
/// One request per run, no retry or backoff: a failed translation is
/// reported to the caller as-is, and the caller decides whether to rerun.
pub struct DeepLTranslator {
    client: Client,
    /// Base URL for the API
    pub api_base: String,
    /// Account API key; requests are refused locally when absent
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

impl DeepLTranslator {
    /// Create a translator against the default endpoint.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created, which should only happen
    /// in extreme circumstances (e.g., TLS backend unavailable on the system).
    #[allow(clippy::expect_used)]
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_api_base(DEFAULT_API_BASE.to_string(), api_key)
    }

    /// Create a translator against a custom endpoint (paid tier, test server).
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created.
    #[allow(clippy::expect_used)]
    pub fn with_api_base(api_base: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base,
            api_key,
        }
    }

    async fn request(&self, text: &str, target: &LangCode) -> Result<String> {
        let Some(ref key) = self.api_key else {
            return Err(Error::TranslationMissingApiKey);
        };

        let url = format!("{}/v2/translate", self.api_base.trim_end_matches('/'));
        debug!("Translation request to {} (target {})", url, target);

        let params = [("text", text), ("target_lang", target.as_str())];
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {key}"))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::TranslationTimeout
                } else {
                    Error::TranslationRequest(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let parsed: TranslateResponse = response
                .json()
                .await
                .map_err(|e| Error::TranslationInvalidResponse(e.to_string()))?;
            return parsed
                .translations
                .into_iter()
                .next()
                .map(|t| t.text)
                .ok_or_else(|| {
                    Error::TranslationInvalidResponse("no translations in response".to_string())
                });
        }

        if status == StatusCode::FORBIDDEN || status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            warn!("Translation auth failure: {body}");
            return Err(Error::TranslationAuth(body));
        }

        // DeepL-specific: account quota exhausted
        if status.as_u16() == 456 {
            return Err(Error::TranslationQuotaExceeded);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::BAD_REQUEST && body.contains("target_lang") {
            return Err(Error::TranslationUnsupportedLanguage(target.to_string()));
        }

        warn!("Translation API error: {status} - {body}");
        Err(Error::TranslationRequest(format!("HTTP {status}: {body}")))
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "DeepL",
            requires_api_key: true,
        }
    }

    async fn translate(&self, text: &str, target: &LangCode) -> Result<String> {
        // Nothing to translate; avoids burning quota on blank documents
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        self.request(text, target).await
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_is_rejected_locally() {
        let translator = DeepLTranslator::new(None);
        let result = translator.translate("bonjour", &LangCode::new("EN-US")).await;
        assert!(matches!(result, Err(Error::TranslationMissingApiKey)));
        assert!(!translator.is_available());
    }

    #[tokio::test]
    async fn empty_text_short_circuits_without_a_key() {
        let translator = DeepLTranslator::new(None);
        let result = translator.translate("  \n ", &LangCode::new("DE")).await;
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn info_requires_api_key() {
        let translator = DeepLTranslator::new(Some("k".into()));
        assert!(translator.info().requires_api_key);
        assert_eq!(translator.name(), "DeepL");
        assert!(translator.is_available());
    }
}
