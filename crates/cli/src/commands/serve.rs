use std::sync::Arc;

use anyhow::Result;

use climateqa_http::{create_router, AppState};
use climateqa_llm::{AnswerGenerator, LlmClient};
use climateqa_service::QueryService;
use climateqa_storage::PgStorage;

use crate::{get_api_key, get_base_url, get_database_url, get_fallback_model, get_primary_model};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = Arc::new(PgStorage::new(&get_database_url()?).await?);

    let client = LlmClient::new(get_api_key()?, get_base_url())?;
    let generator =
        Arc::new(AnswerGenerator::new(client, get_primary_model(), get_fallback_model()));

    let query_service = Arc::new(QueryService::new(storage.clone(), storage, generator));
    let state = Arc::new(AppState { query_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
