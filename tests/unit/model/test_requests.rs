use assert_json_diff::assert_json_eq;
use chrono::NaiveDate;
use openalgo::constants::{DEFAULT_STRATEGY, EXCHANGE_NFO, EXCHANGE_NSE, EXCHANGE_NSE_INDEX};
use openalgo::error::AppError;
use openalgo::model::requests::{
    BasketOrderRequest, ExpiryRequest, HistoryRequest, MarginRequest, ModifyOrderRequest,
    OptionChainRequest, OptionGreeksRequest, OptionLeg, OptionSymbolRequest,
    OptionsMultiOrderRequest, OptionsOrderRequest, PlaceOrderRequest, SearchRequest,
    SmartOrderRequest, SplitOrderRequest, StrategyRequest, SyntheticFutureRequest,
    TelegramRequest,
};
use openalgo::presentation::order::{Action, InstrumentKind, OptionType, PriceType, Product};
use serde_json::json;

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn place_order_defaults() {
    let order = PlaceOrderRequest::new("RELIANCE", Action::Buy, EXCHANGE_NSE);

    assert_eq!(order.strategy, DEFAULT_STRATEGY);
    assert_eq!(order.price_type, PriceType::Market);
    assert_eq!(order.product, Product::Mis);
    assert_eq!(order.quantity, 1);
    assert_eq!(order.price, None);

    assert_json_eq!(
        json_value(&order),
        json!({
            "strategy": "Python",
            "symbol": "RELIANCE",
            "action": "BUY",
            "exchange": "NSE",
            "pricetype": "MARKET",
            "product": "MIS",
            "quantity": "1"
        })
    );
}

#[test]
fn stop_loss_order_serializes_prices_as_strings() {
    let order = PlaceOrderRequest::limit("SBIN", Action::Sell, EXCHANGE_NSE, 25, 790.0)
        .with_price_type(PriceType::StopLoss)
        .with_trigger_price(792.5)
        .with_disclosed_quantity(5);

    let json = json_value(&order);
    assert_eq!(json["pricetype"], "SL");
    assert_eq!(json["price"], "790");
    assert_eq!(json["trigger_price"], "792.5");
    assert_eq!(json["disclosed_quantity"], "5");
    assert_eq!(json["quantity"], "25");
}

#[test]
fn smart_order_flattens_order_fields() {
    let order = SmartOrderRequest::new(
        PlaceOrderRequest::market("TATAMOTORS", Action::Buy, EXCHANGE_NSE, 5),
        0,
    );
    let json = json_value(&order);
    assert_eq!(json["symbol"], "TATAMOTORS");
    assert_eq!(json["position_size"], "0");
    assert!(json.get("order").is_none());
}

#[test]
fn basket_items_drop_per_order_strategy() {
    let basket = BasketOrderRequest::new("Basket")
        .with_order(PlaceOrderRequest::market("BHEL", Action::Buy, EXCHANGE_NSE, 1).with_strategy("Other"));
    assert!(basket.validate().is_ok());

    let json = json_value(&basket);
    assert_eq!(json["strategy"], "Basket");
    assert!(json["orders"][0].get("strategy").is_none());
    assert_eq!(json["orders"][0]["quantity"], "1");
}

#[test]
fn empty_basket_fails_validation() {
    let basket = BasketOrderRequest::new("Basket");
    assert!(matches!(basket.validate(), Err(AppError::InvalidInput(_))));
}

#[test]
fn split_order_copies_order_fields() {
    let order = SplitOrderRequest::new(
        PlaceOrderRequest::limit("YESBANK", Action::Buy, EXCHANGE_NSE, 105, 16.5),
        20,
    );
    assert!(order.validate().is_ok());

    let json = json_value(&order);
    assert_eq!(json["splitsize"], "20");
    assert_eq!(json["quantity"], "105");
    assert_eq!(json["pricetype"], "LIMIT");
    assert_eq!(json["price"], "16.5");

    let zero = SplitOrderRequest::new(PlaceOrderRequest::new("YESBANK", Action::Buy, EXCHANGE_NSE), 0);
    assert!(matches!(zero.validate(), Err(AppError::InvalidInput(_))));
}

#[test]
fn modify_order_builders() {
    let order = ModifyOrderRequest::new("1", "SBIN", Action::Buy, EXCHANGE_NSE, 10, 800.0)
        .with_price_type(PriceType::StopLoss)
        .with_trigger_price(799.0)
        .with_strategy("Scalper");

    let json = json_value(&order);
    assert_eq!(json["orderid"], "1");
    assert_eq!(json["strategy"], "Scalper");
    assert_eq!(json["pricetype"], "SL");
    assert_eq!(json["trigger_price"], "799");
    assert_eq!(json["disclosed_quantity"], "0");
}

#[test]
fn strategy_request_default() {
    assert_eq!(StrategyRequest::default().strategy, "Python");
}

#[test]
fn margin_position_from_order() {
    let request = MarginRequest::default()
        .with_position(PlaceOrderRequest::market("NIFTY25NOV2525000CE", Action::Sell, EXCHANGE_NFO, 75).with_product(Product::Nrml));
    let json = json_value(&request);
    assert_json_eq!(
        json,
        json!({
            "positions": [{
                "symbol": "NIFTY25NOV2525000CE",
                "exchange": "NFO",
                "action": "SELL",
                "quantity": "75",
                "product": "NRML",
                "pricetype": "MARKET"
            }]
        })
    );
}

#[test]
fn history_request_from_dates() {
    let request = HistoryRequest::from_dates(
        "SBIN",
        EXCHANGE_NSE,
        "5m",
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    );
    assert_eq!(request.start_date, "2025-01-01");
    assert_eq!(request.end_date, "2025-01-31");
}

#[test]
fn search_request_with_exchange() {
    let request = SearchRequest::new("RELIANCE");
    assert_json_eq!(json_value(&request), json!({"query": "RELIANCE"}));

    let request = request.with_exchange(EXCHANGE_NSE);
    assert_json_eq!(
        json_value(&request),
        json!({"query": "RELIANCE", "exchange": "NSE"})
    );
}

#[test]
fn option_greeks_request_optional_fields() {
    let request = OptionGreeksRequest::new("NIFTY25NOV2526000CE", EXCHANGE_NFO);
    assert_json_eq!(
        json_value(&request),
        json!({"symbol": "NIFTY25NOV2526000CE", "exchange": "NFO"})
    );

    let request = request.with_interest_rate(6.5).with_expiry_time("15:30");
    let json = json_value(&request);
    assert_eq!(json["interest_rate"], 6.5);
    assert_eq!(json["expiry_time"], "15:30");
}

#[test]
fn options_order_inherits_symbol_strategy() {
    let symbol = OptionSymbolRequest::new("BANKNIFTY", EXCHANGE_NSE_INDEX, "25NOV25", "ATM", OptionType::Pe)
        .with_strategy("Hedge")
        .with_strike_int(100);
    let order = OptionsOrderRequest::new(symbol, Action::Buy, 35)
        .with_price_type(PriceType::Limit)
        .with_price(120.0)
        .with_split_size(15);

    assert_eq!(order.strategy, "Hedge");
    let json = json_value(&order);
    assert_eq!(json["strike_int"], 100);
    assert_eq!(json["option_type"], "PE");
    assert_eq!(json["splitsize"], "15");
    assert_eq!(json["price"], "120");
}

#[test]
fn options_order_defaults_strategy() {
    let symbol = OptionSymbolRequest::new("NIFTY", EXCHANGE_NSE_INDEX, "25NOV25", "ATM", OptionType::Ce);
    let order = OptionsOrderRequest::new(symbol, Action::Sell, 75);
    assert_eq!(order.strategy, DEFAULT_STRATEGY);
    assert!(json_value(&order).get("splitsize").is_none());
}

#[test]
fn option_legs_and_validation() {
    let leg = OptionLeg::new("OTM2", OptionType::Ce, Action::Sell, 75)
        .with_limit_price(12.5)
        .with_product(Product::Nrml)
        .with_expiry_date("02DEC25");
    let json = json_value(&leg);
    assert_eq!(json["pricetype"], "LIMIT");
    assert_eq!(json["price"], "12.5");
    assert_eq!(json["product"], "NRML");
    assert_eq!(json["expiry_date"], "02DEC25");

    let calendar = OptionsMultiOrderRequest::new("Calendar", "NIFTY", EXCHANGE_NSE_INDEX)
        .with_leg(leg)
        .with_leg(OptionLeg::new("OTM2", OptionType::Ce, Action::Buy, 75).with_expiry_date("30DEC25"));
    assert!(calendar.validate().is_ok());

    let bare = OptionsMultiOrderRequest::new("Calendar", "NIFTY", EXCHANGE_NSE_INDEX);
    assert!(matches!(bare.validate(), Err(AppError::InvalidInput(_))));
}

#[test]
fn telegram_request_default_priority() {
    let request = TelegramRequest::new("trader", "hello");
    assert_eq!(request.priority, 5);
    assert_eq!(json_value(&request)["priority"], 5);
}

#[test]
fn order_requests_read_back_their_own_json() {
    let order = PlaceOrderRequest::limit("SBIN", Action::Sell, EXCHANGE_NSE, 25, 790.5)
        .with_price_type(PriceType::StopLoss)
        .with_trigger_price(792.0)
        .with_disclosed_quantity(5);
    let parsed: PlaceOrderRequest = serde_json::from_value(json_value(&order)).unwrap();
    assert_eq!(parsed, order);

    let defaults = PlaceOrderRequest::new("RELIANCE", Action::Buy, EXCHANGE_NSE);
    let parsed: PlaceOrderRequest = serde_json::from_value(json_value(&defaults)).unwrap();
    assert_eq!(parsed, defaults);

    let smart = SmartOrderRequest::new(
        PlaceOrderRequest::market("TATAMOTORS", Action::Sell, EXCHANGE_NSE, 5),
        -10,
    );
    let parsed: SmartOrderRequest = serde_json::from_value(json_value(&smart)).unwrap();
    assert_eq!(parsed, smart);

    let modify = ModifyOrderRequest::new("1", "SBIN", Action::Buy, EXCHANGE_NSE, 10, 800.25);
    let parsed: ModifyOrderRequest = serde_json::from_value(json_value(&modify)).unwrap();
    assert_eq!(parsed, modify);

    let basket = BasketOrderRequest::new("Basket")
        .with_order(PlaceOrderRequest::limit("BHEL", Action::Buy, EXCHANGE_NSE, 1, 250.0));
    let parsed: BasketOrderRequest = serde_json::from_value(json_value(&basket)).unwrap();
    assert_eq!(parsed, basket);
}

#[test]
fn options_requests_read_back_their_own_json() {
    let symbol = OptionSymbolRequest::new("NIFTY", EXCHANGE_NSE_INDEX, "25NOV25", "ITM2", OptionType::Ce);
    let order = OptionsOrderRequest::new(symbol, Action::Buy, 150)
        .with_price_type(PriceType::Limit)
        .with_price(45.5)
        .with_split_size(75);
    let parsed: OptionsOrderRequest = serde_json::from_value(json_value(&order)).unwrap();
    assert_eq!(parsed, order);

    let spread = OptionsMultiOrderRequest::new("Spread", "NIFTY", EXCHANGE_NSE_INDEX)
        .with_expiry_date("25NOV25")
        .with_leg(OptionLeg::new("ATM", OptionType::Ce, Action::Buy, 75))
        .with_leg(OptionLeg::new("OTM2", OptionType::Ce, Action::Sell, 75).with_limit_price(12.5));
    let parsed: OptionsMultiOrderRequest = serde_json::from_value(json_value(&spread)).unwrap();
    assert_eq!(parsed, spread);
}

#[test]
fn order_request_accepts_plain_numbers() {
    let parsed: SplitOrderRequest = serde_json::from_value(json!({
        "strategy": "Python",
        "symbol": "YESBANK",
        "exchange": "NSE",
        "action": "BUY",
        "quantity": 105,
        "splitsize": 20,
        "pricetype": "MARKET",
        "product": "MIS"
    }))
    .unwrap();
    assert_eq!(parsed.quantity, 105);
    assert_eq!(parsed.split_size, 20);
    assert_eq!(parsed.price, None);

    let bad = serde_json::from_value::<PlaceOrderRequest>(json!({
        "strategy": "Python",
        "symbol": "SBIN",
        "exchange": "NSE",
        "action": "BUY",
        "pricetype": "MARKET",
        "product": "MIS",
        "quantity": "ten"
    }));
    assert!(bad.is_err());
}

#[test]
fn lookup_request_builders() {
    let expiry = ExpiryRequest::new("NIFTY", EXCHANGE_NFO, InstrumentKind::Futures);
    assert_json_eq!(
        json_value(&expiry),
        json!({"symbol": "NIFTY", "exchange": "NFO", "instrumenttype": "futures"})
    );

    let chain = OptionChainRequest::new("NIFTY", EXCHANGE_NSE_INDEX, "30DEC25");
    assert!(json_value(&chain).get("strike_count").is_none());
    assert_eq!(json_value(&chain.with_strike_count(10))["strike_count"], 10);

    let future = SyntheticFutureRequest::new("BANKNIFTY", EXCHANGE_NSE_INDEX, "25NOV25");
    assert_json_eq!(
        json_value(&future),
        json!({"underlying": "BANKNIFTY", "exchange": "NSE_INDEX", "expiry_date": "25NOV25"})
    );
}
