use dotenvy::dotenv;
use storefront::config::get_configuration;
use storefront::observability::init_tracing;
use storefront::startup::Application;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("info");

    let application = Application::build(configuration).await?;
    info!("Starting storefront on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
