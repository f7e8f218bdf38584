use std::error::Error;
use std::future::Future;

/// Error returned by a text generator
pub type GeneratorError = Box<dyn Error + Send + Sync>;

/// Something that turns a query into free text in the labeled-block format.
///
/// Live implementations (a language model with web search, for example)
/// live outside this crate and own their credentials, retries and
/// timeouts.
pub trait TextGenerator {
    /// Generate text answering the query
    fn generate(&self, query: &str) -> impl Future<Output = Result<String, GeneratorError>> + Send;
}

/// Generator that always answers with the same text
#[derive(Debug, Clone, Default)]
pub struct CannedText {
    text: String,
}

impl CannedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextGenerator for CannedText {
    fn generate(&self, query: &str) -> impl Future<Output = Result<String, GeneratorError>> + Send {
        ::log::debug!("Canned generator answering query ({} chars)", query.len());
        let text = self.text.clone();
        async move { Ok(text) }
    }
}
