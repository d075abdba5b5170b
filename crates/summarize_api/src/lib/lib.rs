pub mod error;
pub mod handler;
mod llm;
mod server;
pub mod tracing;
pub mod types;

pub use error::{ApiError, ValidationIssue};
pub use handler::SummarizationHandler;
pub use llm::engine::{GenerationParams, SummarizationEngine, SummaryCandidate};
pub use llm::huggingface;
pub use server::{builder::SummarizeApiBuilder, SummarizeApi};
pub use types::{HealthResponse, SummarizationRequest, SummarizationResponse};
