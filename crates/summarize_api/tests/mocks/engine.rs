use std::sync::{Arc, Mutex};
use summarize_api::{GenerationParams, SummarizationEngine, SummaryCandidate};

#[derive(Clone)]
pub enum MockBehavior {
    Fixed(String),
    /// Keeps the first `max_length` words of the input
    Truncate,
    Fail(String),
    Panic(String),
    NoCandidates,
}

#[derive(Clone)]
pub struct MockEngine {
    pub behavior: MockBehavior,
    pub calls: Arc<Mutex<Vec<(String, GenerationParams)>>>,
}

impl MockEngine {
    pub const MODEL: &'static str = "mock-bart";

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn new(summary: &str) -> Self {
        Self::with_behavior(MockBehavior::Fixed(summary.to_string()))
    }

    pub fn truncating() -> Self {
        Self::with_behavior(MockBehavior::Truncate)
    }

    pub fn failing(msg: &str) -> Self {
        Self::with_behavior(MockBehavior::Fail(msg.to_string()))
    }

    pub fn panicking(msg: &str) -> Self {
        Self::with_behavior(MockBehavior::Panic(msg.to_string()))
    }

    pub fn empty() -> Self {
        Self::with_behavior(MockBehavior::NoCandidates)
    }
}

impl SummarizationEngine for MockEngine {
    type Error = anyhow::Error;

    fn model(&self) -> &str {
        Self::MODEL
    }

    async fn generate(
        &self,
        text: &str,
        params: GenerationParams,
    ) -> Result<Vec<SummaryCandidate>, Self::Error> {
        self.calls.lock().unwrap().push((text.to_string(), params));

        let summary_text = match &self.behavior {
            MockBehavior::Fixed(summary) => summary.clone(),
            MockBehavior::Truncate => text
                .split_whitespace()
                .take(params.max_length as usize)
                .collect::<Vec<_>>()
                .join(" "),
            MockBehavior::Fail(msg) => return Err(anyhow::anyhow!("{}", msg)),
            MockBehavior::Panic(msg) => panic!("{}", msg),
            MockBehavior::NoCandidates => return Ok(Vec::new()),
        };

        Ok(vec![SummaryCandidate { summary_text }])
    }
}
