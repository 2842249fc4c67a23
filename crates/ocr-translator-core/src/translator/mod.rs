mod deepl;
mod traits;

pub use deepl::{DEFAULT_API_BASE, DeepLTranslator};
pub use traits::{Translator, TranslatorInfo};

use std::sync::Arc;

/// Create the default translator backend for a stored API key.
pub fn create_translator(api_key: Option<String>) -> Arc<dyn Translator> {
    Arc::new(DeepLTranslator::new(api_key))
}
