use openalgo::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // OPENALGO_API_KEY and OPENALGO_HOST are read from the environment or .env
    let client = Client::from_env()?;
    info!("Connected to {}", client.config().rest_api.base_url());

    let order = PlaceOrderRequest::market("YESBANK", Action::Buy, EXCHANGE_NSE, 1)
        .with_strategy("Demo")
        .with_product(Product::Mis);
    let response = client.place_order(&order).await?;
    info!("Order placed: {}", response);

    if let Some(order_id) = response.orderid.as_deref() {
        let status = client
            .order_status(&OrderRefRequest::new(order_id, "Demo"))
            .await?;
        info!("Order status: {}", status);
    }

    let smart = SmartOrderRequest::new(
        PlaceOrderRequest::market("YESBANK", Action::Buy, EXCHANGE_NSE, 1).with_strategy("Demo"),
        2,
    );
    info!("Smart order: {}", client.place_smart_order(&smart).await?);

    let basket = BasketOrderRequest::new("Demo")
        .with_order(PlaceOrderRequest::market("BHEL", Action::Buy, EXCHANGE_NSE, 1))
        .with_order(PlaceOrderRequest::market("ZOMATO", Action::Sell, EXCHANGE_NSE, 1));
    let results = client.basket_order(&basket).await?;
    for leg in &results.results {
        info!("Basket leg: {}", leg);
    }

    let open = client
        .open_position(&OpenPositionRequest::new(
            "Demo",
            "YESBANK",
            EXCHANGE_NSE,
            Product::Mis,
        ))
        .await?;
    info!("Open position: {:?}", open.quantity);

    let closed = client.close_position(&StrategyRequest::new("Demo")).await?;
    info!("Close position: {}", closed);

    Ok(())
}
