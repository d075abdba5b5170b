use serde::{Deserialize, Serialize};

/// Body of `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizationRequest {
    pub text: String,
    /// Maximum token length for the summary
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    /// Minimum token length for the summary
    #[serde(default = "default_min_length")]
    pub min_length: u32,
}

impl SummarizationRequest {
    pub const DEFAULT_MAX_LENGTH: u32 = 150;
    pub const DEFAULT_MIN_LENGTH: u32 = 30;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_length: Self::DEFAULT_MAX_LENGTH,
            min_length: Self::DEFAULT_MIN_LENGTH,
        }
    }

    pub fn with_lengths(mut self, min_length: u32, max_length: u32) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }
}

fn default_max_length() -> u32 {
    SummarizationRequest::DEFAULT_MAX_LENGTH
}

fn default_min_length() -> u32 {
    SummarizationRequest::DEFAULT_MIN_LENGTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub model: String,
    pub version: String,
}
