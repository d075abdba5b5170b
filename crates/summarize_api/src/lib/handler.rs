use crate::{
    error::{ApiError, ValidationIssue},
    GenerationParams, SummarizationEngine, SummarizationRequest, SummarizationResponse,
};

/// Validates a [`SummarizationRequest`], runs it through the injected engine
/// with sampling disabled and maps any engine failure to [`ApiError::Internal`].
#[derive(Debug)]
pub struct SummarizationHandler<E: SummarizationEngine> {
    engine: E,
}

impl<E: SummarizationEngine> SummarizationHandler<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[tracing::instrument(
        skip_all,
        fields(
            model = %self.engine.model(),
            text_len = request.text.len(),
            min_length = request.min_length,
            max_length = request.max_length,
        )
    )]
    pub async fn handle(
        &self,
        request: SummarizationRequest,
    ) -> Result<SummarizationResponse, ApiError> {
        validate(&request)?;

        let params = GenerationParams::deterministic(request.min_length, request.max_length);
        let candidates = self
            .engine
            .generate(&request.text, params)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        let summary = candidates
            .into_iter()
            .next()
            .map(|c| c.summary_text)
            .ok_or_else(|| {
                ApiError::Internal("summarization engine returned no candidates".into())
            })?;

        if summary.trim().is_empty() {
            return Err(ApiError::Internal(
                "summarization engine returned an empty summary".into(),
            ));
        }

        Ok(SummarizationResponse { summary })
    }
}

/// Rejects requests the engine should never see: blank text, zero lengths
/// and `min_length > max_length`.
pub fn validate(request: &SummarizationRequest) -> Result<(), ApiError> {
    let mut issues = Vec::new();

    if request.text.trim().is_empty() {
        issues.push(ValidationIssue::new(
            &["body", "text"],
            "text must not be empty",
            "value_error",
        ));
    }

    for (field, value) in [
        ("max_length", request.max_length),
        ("min_length", request.min_length),
    ] {
        if value == 0 {
            issues.push(ValidationIssue::new(
                &["body", field],
                format!("{field} must be a positive integer"),
                "greater_than",
            ));
        }
    }

    if request.min_length > request.max_length {
        issues.push(ValidationIssue::new(
            &["body", "min_length"],
            format!(
                "min_length ({}) must not exceed max_length ({})",
                request.min_length, request.max_length
            ),
            "value_error",
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(issues))
    }
}
