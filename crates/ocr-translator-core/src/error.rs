use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for ocr-translator-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Document reading and rasterization
/// - Optical character recognition
/// - Translation (API requests, auth, quota)
/// - Document persistence
/// - Preference storage
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Document Errors
    // ==========================================================================
    /// Failed to open, parse or rasterize the source document
    #[error("failed to read document: {0}")]
    DocumentRead(String),

    // ==========================================================================
    // OCR Errors
    // ==========================================================================
    /// Character recognition failed on a page
    #[error("OCR failed on page {page}: {reason}")]
    Ocr { page: usize, reason: String },

    // ==========================================================================
    // Translation Errors
    // ==========================================================================
    /// Translation API request failed
    #[error("translation request failed: {0}")]
    TranslationRequest(String),

    /// Invalid response from translation API
    #[error("invalid translation response: {0}")]
    TranslationInvalidResponse(String),

    /// Translation API rejected the configured credentials
    #[error("translation authorization failed: {0}")]
    TranslationAuth(String),

    /// Translation quota exhausted for the configured account
    #[error("translation quota exceeded")]
    TranslationQuotaExceeded,

    /// API key not configured for the translation service
    #[error("translation API key not configured")]
    TranslationMissingApiKey,

    /// Unsupported target language for translation
    #[error("unsupported target language: {0}")]
    TranslationUnsupportedLanguage(String),

    /// Translation request timed out
    #[error("translation request timed out")]
    TranslationTimeout,

    // ==========================================================================
    // Persistence Errors
    // ==========================================================================
    /// Failed to write an output document
    #[error("failed to persist document {path}: {reason}")]
    Persist { path: PathBuf, reason: String },

    /// Failed to write the preference record
    #[error("failed to save preferences: {0}")]
    PreferenceWrite(String),

    // ==========================================================================
    // Pipeline Errors
    // ==========================================================================
    /// The background worker terminated without delivering a result
    #[error("pipeline worker terminated without a result")]
    WorkerLost,

    // ==========================================================================
    // I/O Errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
