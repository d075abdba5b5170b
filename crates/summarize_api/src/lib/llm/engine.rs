use std::{fmt::Display, future::Future};

use serde::{Deserialize, Serialize};

/// A pretrained sequence-to-sequence model able to produce a summary
/// bounded by minimum/maximum output lengths.
pub trait SummarizationEngine {
    type Error: Display;

    /// Identifier of the underlying model, e.g. `facebook/bart-large-cnn`
    fn model(&self) -> &str;

    fn generate(
        &self,
        text: &str,
        params: GenerationParams,
    ) -> impl Future<Output = Result<Vec<SummaryCandidate>, Self::Error>> + Send;
}

impl<T: SummarizationEngine + Sync> SummarizationEngine for &T {
    type Error = T::Error;

    fn model(&self) -> &str {
        (**self).model()
    }

    async fn generate(
        &self,
        text: &str,
        params: GenerationParams,
    ) -> Result<Vec<SummaryCandidate>, Self::Error> {
        (**self).generate(text, params).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub min_length: u32,
    pub max_length: u32,
    /// `false` disables sampling, making generation deterministic
    pub do_sample: bool,
}

impl GenerationParams {
    pub fn deterministic(min_length: u32, max_length: u32) -> Self {
        Self {
            min_length,
            max_length,
            do_sample: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    pub summary_text: String,
}
