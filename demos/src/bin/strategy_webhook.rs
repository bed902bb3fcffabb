use openalgo::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let host = std::env::var("OPENALGO_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let webhook_id = std::env::var("OPENALGO_WEBHOOK_ID")?;
    let strategy = Strategy::new(host, webhook_id)?;
    info!("Posting to {}", strategy.webhook_url());

    let reply = strategy.strategy_order("RELIANCE", "BUY", None).await?;
    info!("Long entry: {}", reply);

    // BOTH mode strategies need the target position
    let reply = strategy.strategy_order("RELIANCE", "SELL", Some(0)).await?;
    info!("Exit: {}", reply);

    Ok(())
}
