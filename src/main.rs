use dotenvy::dotenv;
use tracing::{info, warn};

use textile_design_studio::config::CONFIG;
use textile_design_studio::server;
use textile_design_studio::utils::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _guards = init_logging();

    if CONFIG.gateway_api_key.trim().is_empty() {
        warn!("LOVABLE_API_KEY is not set; generation and assistant requests will fail until it is configured");
    }

    info!("Starting textile design studio gateway");
    server::serve().await
}
