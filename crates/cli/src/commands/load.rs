use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use climateqa_embeddings::EmbeddingService;
use climateqa_service::Loader;
use climateqa_storage::PgStorage;

use crate::get_database_url;

pub(crate) async fn run(file: PathBuf) -> Result<()> {
    let storage = Arc::new(PgStorage::new(&get_database_url()?).await?);
    let embedder = Arc::new(EmbeddingService::new()?);

    let loader = Loader::new(storage, embedder);
    let count = loader.load(&file).await?;

    println!("Loaded {count} climate records from {}", file.display());
    Ok(())
}
