//! # HTTP surface
//!
//! Routes, payload extraction and error-to-response mapping around a
//! [`SummarizationHandler`].

pub mod builder;

use std::{any::Any, future::Future, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::ApiError, handler::SummarizationHandler, HealthResponse, SummarizationEngine,
    SummarizationRequest, SummarizationResponse,
};

pub struct SummarizeApi<E>
where
    E: SummarizationEngine + Send + Sync + 'static,
{
    handler: Arc<SummarizationHandler<E>>,
    cors: bool,
}

struct AppState<E>
where
    E: SummarizationEngine + Send + Sync + 'static,
{
    handler: Arc<SummarizationHandler<E>>,
}

impl<E> Clone for AppState<E>
where
    E: SummarizationEngine + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<E> SummarizeApi<E>
where
    E: SummarizationEngine + Send + Sync + 'static,
{
    pub const SERVICE_NAME: &str = "BART Summarization API";

    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/summarize", post(summarize::<E>))
            .route("/health", get(health::<E>))
            .with_state(AppState {
                handler: Arc::clone(&self.handler),
            })
            // any text is forwarded to the model, however long
            .layer(DefaultBodyLimit::disable())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http());

        if self.cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Serves the router on `listener` until `shutdown` resolves
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        tracing::info!(
            addr = %listener.local_addr()?,
            model = %self.handler.engine().model(),
            "Starting summarization server"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Summarization server stopped");
        Ok(())
    }
}

async fn summarize<E>(
    State(state): State<AppState<E>>,
    payload: Result<Json<SummarizationRequest>, JsonRejection>,
) -> Result<Json<SummarizationResponse>, ApiError>
where
    E: SummarizationEngine + Send + Sync + 'static,
{
    let Json(request) = payload?;
    let response = state.handler.handle(request).await?;
    Ok(Json(response))
}

async fn health<E>(State(state): State<AppState<E>>) -> Json<HealthResponse>
where
    E: SummarizationEngine + Send + Sync + 'static,
{
    Json(HealthResponse {
        status: "ok".into(),
        service: SummarizeApi::<E>::SERVICE_NAME.into(),
        model: state.handler.engine().model().into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    ApiError::Internal(detail).into_response()
}
