use dotenvy::dotenv;
use pantry_cache::{app::App, config, errors::Result, repositories::ScreenRepository};
use tokio::runtime::Handle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Open the cache and bind the dispatcher to this runtime
    let (app, mut queue) = App::start(&app_config, Handle::current())
        .await
        .inspect_err(|e| error!("Failed to start application services: {}", e))?;

    // 5. Load the stock overview once and report what the cache holds
    app.stock_overview().load_from_database(
        |bundle| {
            info!(
                products = bundle.products().len(),
                stock_items = bundle.stock_items().len(),
                locations = bundle.locations().len(),
                shopping_list_items = bundle.shopping_list_items().len(),
                "Stock overview loaded."
            );
        },
        |e| error!("Failed to load stock overview: {}", e),
    );
    queue.deliver_next().await;

    app.shutdown().await
}
