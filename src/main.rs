use poi_service::config::Config;
use poi_service::db::PgPool;
use poi_service::engine::Engine;
use poi_service::error::Error;
use poi_service::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let PgPool(pool) = PgPool::new(&config.database_url, config.max_connections).await?;

    let engine = Engine::new(pool);

    if config.ensure_schema {
        engine.ensure_schema().await?;
    }

    serve(engine, &config).await
}
