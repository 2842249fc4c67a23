//! OCR Translator Core Library
//!
//! This library provides the core functionality for turning scanned PDF
//! documents into translated text:
//! - PDF rasterization and per-page OCR preprocessing
//! - Text assembly and cleanup
//! - Translation via the DeepL API
//! - Persistence of the original and translated documents
//! - Durable language preferences with first-run locale detection
//!
//! The graphical shell, the OCR engine itself, and credential entry are host
//! concerns wired in through the capability traits ([`Rasterizer`],
//! [`OcrEngine`], [`Translator`], [`DocumentSink`]).

pub mod catalog;
pub mod document;
pub mod error;
pub mod locale;
pub mod normalize;
pub mod ocr;
pub mod pipeline;
pub mod prefs;
pub mod preprocess;
pub mod rasterize;
pub mod translator;
pub mod util;

pub use catalog::{
    CANONICAL_CODES, Catalog, CatalogEntry, DEFAULT_DISPLAY_LOCALE, DEFAULT_TARGET_CODE, LangCode,
    catalog_for,
};
pub use document::{DocumentSink, TextDocumentWriter};
pub use error::{Error, Result};
pub use ocr::OcrEngine;
pub use pipeline::{
    Pipeline, PipelineConfig, RunHandle, RunOutput, RunRejected, Stage,
};
pub use prefs::{PreferenceState, PreferenceStore};
pub use rasterize::{MupdfRasterizer, Rasterizer};
pub use translator::{DeepLTranslator, Translator, TranslatorInfo, create_translator};

use std::sync::Arc;

/// Wire the production capability set into a [`Pipeline`].
///
/// The OCR engine is the one capability without a bundled implementation;
/// the host supplies it. The translator key comes from the preference
/// store's credential record.
pub fn build_pipeline(
    ocr_engine: Arc<dyn OcrEngine>,
    api_key: Option<String>,
    config: PipelineConfig,
) -> Pipeline {
    Pipeline::new(
        Arc::new(MupdfRasterizer::new()),
        ocr_engine,
        create_translator(api_key),
        Arc::new(TextDocumentWriter),
        config,
    )
}
