use async_trait::async_trait;

use crate::catalog::LangCode;
use crate::error::Result;

/// Information about a translator backend
#[derive(Debug, Clone)]
pub struct TranslatorInfo {
    /// Human-readable name
    pub name: &'static str,
    /// Whether this translator requires an API key
    pub requires_api_key: bool,
}

/// Trait for translation backends.
///
/// The source language is never supplied: providers detect it from the text
/// itself, which is what downstream cleanup in [`crate::normalize`] is
/// calibrated for.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get information about this translator
    fn info(&self) -> TranslatorInfo;

    /// Get the translator name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Translate text into the target language
    async fn translate(&self, text: &str, target: &LangCode) -> Result<String>;

    /// Check if the translator is available (e.g., API key configured)
    fn is_available(&self) -> bool {
        true
    }
}
