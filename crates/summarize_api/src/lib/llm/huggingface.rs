use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{GenerationParams, SummarizationEngine, SummaryCandidate};

/// Hosted inference API client for seq2seq summarization models.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_token: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HuggingFaceError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
    parameters: GenerationParams,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceErrorBody {
    error: String,
}

impl HuggingFaceClient {
    pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference";
    pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: None,
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: model.into(),
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    #[tracing::instrument(skip(self, text), fields(model = %self.model, text_len = text.len()))]
    pub async fn send_summarization_request(
        &self,
        text: &str,
        params: GenerationParams,
    ) -> Result<Vec<SummaryCandidate>, HuggingFaceError> {
        let payload = InferencePayload {
            inputs: text,
            parameters: params,
            // the model is loaded once on the inference side instead of failing with 503
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut request = self.client.post(self.model_url()).json(&payload);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<InferenceErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            tracing::error!(status, %message, "Inference API returned an error");
            return Err(HuggingFaceError::Api { status, message });
        }

        Ok(resp.json::<Vec<SummaryCandidate>>().await?)
    }
}

impl SummarizationEngine for HuggingFaceClient {
    type Error = HuggingFaceError;

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        text: &str,
        params: GenerationParams,
    ) -> Result<Vec<SummaryCandidate>, Self::Error> {
        self.send_summarization_request(text, params).await
    }
}
