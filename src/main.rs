use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use contextify::application::services::ConversionService;
use contextify::infrastructure::observability::{TracingConfig, init_tracing};
use contextify::infrastructure::text_processing::PdfAdapter;
use contextify::infrastructure::web::HttpWebImporter;
use contextify::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let extractor = Arc::new(PdfAdapter::new());
    let web_importer = Arc::new(HttpWebImporter::new(Duration::from_secs(
        settings.fetch.timeout_seconds,
    ))?);

    let conversion_service = Arc::new(ConversionService::new(extractor, web_importer));

    let state = AppState {
        conversion_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let listener = TcpListener::bind(format!(
        "{}:{}",
        settings.server.host, settings.server.port
    ))
    .await?;

    tracing::info!(
        "Listening on {}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, router).await?;

    Ok(())
}
