//! The document processing pipeline: rasterize, OCR each page, assemble and
//! clean the text, persist the original, translate, persist the translation.
//!
//! Each run executes on one background task and delivers exactly one
//! terminal message over a oneshot channel; the caller polls or awaits the
//! [`RunHandle`]. At most one run per [`Pipeline`] instance is in flight;
//! a second `start` while one is running is refused synchronously and does
//! not disturb the running one.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::catalog::LangCode;
use crate::document::DocumentSink;
use crate::error::{Error, Result};
use crate::normalize;
use crate::ocr::OcrEngine;
use crate::preprocess;
use crate::rasterize::Rasterizer;
use crate::translator::Translator;

/// Default file name for the untranslated output document
pub const DEFAULT_ORIGINAL_FILE: &str = "original_text.txt";
/// Default file name for the translated output document
pub const DEFAULT_TRANSLATED_FILE: &str = "translated_text.txt";

/// Pipeline stages, in execution order. Used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Rasterizing,
    Ocr,
    Assembling,
    PersistingOriginal,
    Translating,
    PersistingTranslation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rasterizing => "rasterizing",
            Self::Ocr => "ocr",
            Self::Assembling => "assembling",
            Self::PersistingOriginal => "persisting original",
            Self::Translating => "translating",
            Self::PersistingTranslation => "persisting translation",
        };
        write!(f, "{name}")
    }
}

/// Output locations for the two persisted documents.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory the output documents are written into
    pub output_dir: PathBuf,
    /// File name of the untranslated document
    pub original_file_name: String,
    /// File name of the translated document
    pub translated_file_name: String,
}

impl PipelineConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            original_file_name: DEFAULT_ORIGINAL_FILE.to_string(),
            translated_file_name: DEFAULT_TRANSLATED_FILE.to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Terminal result of a successful (or partially successful) run.
///
/// The original document is always persisted when this value exists. A
/// translation-side failure leaves `translated_text` empty and records the
/// cause in `translation_error`; the run as a whole still succeeded.
#[derive(Debug)]
pub struct RunOutput {
    /// Cleaned, untranslated document text
    pub original_text: String,
    /// Translated text; empty when translation failed
    pub translated_text: String,
    /// Where the original document was written
    pub original_path: PathBuf,
    /// Where the translated document was written, if persisting it succeeded
    pub translated_path: Option<PathBuf>,
    /// Human-readable cause when translation or its persistence failed
    pub translation_error: Option<String>,
}

impl RunOutput {
    /// Whether both artifacts were produced without a translation-side error.
    pub const fn is_fully_translated(&self) -> bool {
        self.translation_error.is_none()
    }
}

/// A `start` call found another run in flight. This is a no-op signal, not
/// an error: the prior run continues untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRejected;

impl fmt::Display for RunRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a pipeline run is already in flight")
    }
}

/// Receiver side of a run's single terminal message.
pub struct RunHandle {
    rx: oneshot::Receiver<Result<RunOutput>>,
}

impl RunHandle {
    /// Await the terminal message of the run.
    pub async fn join(self) -> Result<RunOutput> {
        self.rx.await.unwrap_or(Err(Error::WorkerLost))
    }
}

/// Orchestrates the capabilities into one document-to-documents run.
pub struct Pipeline {
    rasterizer: Arc<dyn Rasterizer>,
    ocr: Arc<dyn OcrEngine>,
    translator: Arc<dyn Translator>,
    sink: Arc<dyn DocumentSink>,
    config: PipelineConfig,
    busy: Arc<AtomicBool>,
}

impl Pipeline {
    pub fn new(
        rasterizer: Arc<dyn Rasterizer>,
        ocr: Arc<dyn OcrEngine>,
        translator: Arc<dyn Translator>,
        sink: Arc<dyn DocumentSink>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            rasterizer,
            ocr,
            translator,
            sink,
            config,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a run is currently in flight.
    pub fn is_running(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start a run on a background task.
    ///
    /// Refused synchronously with [`RunRejected`] when a run is already in
    /// flight; there is no queueing. On acceptance the returned handle
    /// yields the run's single terminal message.
    pub fn start(
        &self,
        document_path: impl AsRef<Path>,
        target: LangCode,
    ) -> std::result::Result<RunHandle, RunRejected> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Run request refused: pipeline busy");
            return Err(RunRejected);
        }

        let worker = Worker {
            rasterizer: Arc::clone(&self.rasterizer),
            ocr: Arc::clone(&self.ocr),
            translator: Arc::clone(&self.translator),
            sink: Arc::clone(&self.sink),
            config: self.config.clone(),
        };
        let document_path = document_path.as_ref().to_path_buf();
        let busy = Arc::clone(&self.busy);
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = worker.execute(&document_path, &target).await;
            // Release the run slot before the terminal send so the receiver
            // may start a new run immediately after observing completion.
            busy.store(false, Ordering::Release);
            if tx.send(result).is_err() {
                warn!("Pipeline result discarded: caller dropped the run handle");
            }
        });

        Ok(RunHandle { rx })
    }
}

/// Owned capability set for one background run.
struct Worker {
    rasterizer: Arc<dyn Rasterizer>,
    ocr: Arc<dyn OcrEngine>,
    translator: Arc<dyn Translator>,
    sink: Arc<dyn DocumentSink>,
    config: PipelineConfig,
}

impl Worker {
    async fn execute(&self, document_path: &Path, target: &LangCode) -> Result<RunOutput> {
        debug!(stage = %Stage::Rasterizing, "Processing {}", document_path.display());
        let pages = self.rasterizer.rasterize(document_path)?;
        info!("Rasterized {} pages from {}", pages.len(), document_path.display());

        // A page that recognizes to nothing still contributes its separator
        // line, so page numbering downstream stays aligned with the source.
        debug!(stage = %Stage::Ocr, "Recognizing {} pages", pages.len());
        let mut page_texts = Vec::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            let binary = preprocess::binarize(page);
            let text = self.ocr.recognize(&binary).map_err(|e| match e {
                already @ Error::Ocr { .. } => already,
                other => Error::Ocr {
                    page: index,
                    reason: other.to_string(),
                },
            })?;
            page_texts.push(text);
        }
        drop(pages);

        debug!(stage = %Stage::Assembling, "Assembling {} page texts", page_texts.len());
        let cleaned = normalize::clean(&page_texts.join("\n"));

        let original_path = self.config.output_dir.join(&self.config.original_file_name);
        debug!(stage = %Stage::PersistingOriginal, "Writing {}", original_path.display());
        self.sink.persist(&cleaned, &original_path)?;
        self.sink.open_externally(&original_path);

        debug!(stage = %Stage::Translating, "Translating into {target}");
        let (translated_text, mut translation_error) =
            match self.translator.translate(&cleaned, target).await {
                Ok(text) => (text, None),
                Err(e) => {
                    warn!("Translation failed, original artifact kept: {e}");
                    (String::new(), Some(e.to_string()))
                }
            };

        let translated_path = self.config.output_dir.join(&self.config.translated_file_name);
        debug!(stage = %Stage::PersistingTranslation, "Writing {}", translated_path.display());
        let translated_path = match self.sink.persist(&translated_text, &translated_path) {
            Ok(()) => {
                self.sink.open_externally(&translated_path);
                Some(translated_path)
            }
            Err(e) => {
                warn!("Failed to persist translated document: {e}");
                translation_error.get_or_insert_with(|| e.to_string());
                None
            }
        };

        info!(
            "Run complete: {} chars original, {} chars translated",
            cleaned.len(),
            translated_text.len()
        );
        Ok(RunOutput {
            original_text: cleaned,
            translated_text,
            original_path,
            translated_path,
            translation_error,
        })
    }
}
