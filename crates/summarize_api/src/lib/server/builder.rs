use std::sync::Arc;

use crate::{handler::SummarizationHandler, SummarizationEngine, SummarizeApi};

pub struct SummarizeApiBuilder<E = ()> {
    engine: E,
    cors: bool,
}

impl SummarizeApiBuilder {
    pub fn new() -> Self {
        Self {
            engine: (),
            cors: true,
        }
    }
}

impl Default for SummarizeApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SummarizeApiBuilder<E> {
    pub fn engine<E2: SummarizationEngine + Send + Sync + 'static>(
        self,
        engine: E2,
    ) -> SummarizeApiBuilder<E2> {
        SummarizeApiBuilder {
            engine,
            cors: self.cors,
        }
    }

    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }
}

impl<E> SummarizeApiBuilder<E>
where
    E: SummarizationEngine + Send + Sync + 'static,
{
    pub fn build(self) -> SummarizeApi<E> {
        SummarizeApi {
            handler: Arc::new(SummarizationHandler::new(self.engine)),
            cors: self.cors,
        }
    }
}
