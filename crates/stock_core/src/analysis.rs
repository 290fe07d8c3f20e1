/// Analysis document returned by the backend for one ticker symbol.
///
/// `content` is a Markdown document. The value is immutable once created and
/// is replaced wholesale by the next successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    content: String,
}

impl AnalysisResult {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
