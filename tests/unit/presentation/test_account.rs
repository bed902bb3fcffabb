use openalgo::presentation::account::{Holdings, OrderBook, PositionBook, TradeBook};
use serde_json::json;

#[test]
fn test_order_book_table_lists_orders() {
    let book: OrderBook = serde_json::from_value(json!({
        "orders": [
            {"orderid": "1", "symbol": "RELIANCE", "action": "BUY", "order_status": "complete", "quantity": 1, "price": 1186},
            {"orderid": "2", "symbol": "YESBANK", "action": "SELL", "order_status": "trigger pending", "quantity": "10"}
        ],
        "statistics": {"total_buy_orders": 1, "total_sell_orders": 1}
    }))
    .unwrap();

    assert_eq!(book.open_orders().count(), 1);
    let table = book.to_string();
    assert!(table.contains("RELIANCE"));
    assert!(table.contains("YESBANK"));
}

#[test]
fn test_empty_books_deserialize() {
    let book: OrderBook = serde_json::from_value(json!({})).unwrap();
    assert!(book.orders.is_empty());

    let trades: TradeBook = serde_json::from_value(json!([])).unwrap();
    assert!(trades.0.is_empty());

    let positions: PositionBook = serde_json::from_value(json!([])).unwrap();
    assert_eq!(positions.open().count(), 0);
}

#[test]
fn test_holdings_table() {
    let holdings: Holdings = serde_json::from_value(json!({
        "holdings": [
            {"symbol": "TATASTEEL", "exchange": "NSE", "product": "CNC", "quantity": 1, "pnl": 3.27, "pnlpercent": 13.04}
        ],
        "statistics": {"totalholdingvalue": 36.46, "totalinvvalue": 34.97, "totalprofitandloss": 1.49, "totalpnlpercentage": 4.25}
    }))
    .unwrap();

    let table = holdings.to_string();
    assert!(table.contains("TATASTEEL"));
    assert!(table.contains("36.46"));
}
