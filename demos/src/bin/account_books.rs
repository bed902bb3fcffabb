use openalgo::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let client = Client::from_env()?;

    let analyzer = client.analyzer_status().await?;
    info!("Analyzer: {}", analyzer);

    let funds = client.funds().await?;
    info!("Funds: {}", funds);

    let orders = client.order_book().await?;
    println!("{orders}");

    let trades = client.trade_book().await?;
    println!("{trades}");

    let positions = client.position_book().await?;
    println!("{positions}");

    let holdings = client.holdings().await?;
    println!("{holdings}");

    Ok(())
}
