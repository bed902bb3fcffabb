use openalgo::model::responses::{
    BasketOrderResponse, CancelAllResponse, DataResponse, OrderResponse, ResultsResponse,
    SplitOrderResponse,
};
use openalgo::presentation::account::Funds;
use openalgo::presentation::market::MultiQuote;
use serde_json::json;

#[test]
fn data_response_with_mode() {
    let response: DataResponse<Funds> = serde_json::from_value(json!({
        "status": "success",
        "mode": "analyze",
        "data": {"availablecash": 1000}
    }))
    .unwrap();

    assert_eq!(response.mode.as_deref(), Some("analyze"));
    assert_eq!(response.data.available_cash, Some(1000.0));
}

#[test]
fn data_response_requires_data() {
    let result = serde_json::from_value::<DataResponse<Funds>>(json!({"status": "success"}));
    assert!(result.is_err());
}

#[test]
fn results_response_missing_results() {
    let response: ResultsResponse<MultiQuote> =
        serde_json::from_value(json!({"status": "success"})).unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn order_response_in_analyze_mode() {
    let response: OrderResponse = serde_json::from_value(json!({
        "status": "success",
        "orderid": 25031100000123u64,
        "mode": "analyze"
    }))
    .unwrap();
    assert_eq!(response.orderid.as_deref(), Some("25031100000123"));
    assert_eq!(response.message, None);
}

#[test]
fn basket_response_partial_failure() {
    let response: BasketOrderResponse = serde_json::from_value(json!({
        "status": "success",
        "results": [
            {"symbol": "BHEL", "status": "success", "orderid": "1"},
            {"symbol": "ZOMATO", "status": "error", "message": "RMS rejection"}
        ]
    }))
    .unwrap();

    let failed: Vec<_> = response
        .results
        .iter()
        .filter(|r| r.status.as_deref() == Some("error"))
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].orderid, None);
}

#[test]
fn split_response_accepts_string_counts() {
    let response: SplitOrderResponse = serde_json::from_value(json!({
        "status": "success",
        "split_size": "20",
        "total_quantity": "105",
        "results": [{"order_num": "1", "quantity": "20", "status": "success", "orderid": 101}]
    }))
    .unwrap();

    assert_eq!(response.split_size, Some(20));
    assert_eq!(response.results[0].order_num, Some(1));
    assert_eq!(response.results[0].orderid.as_deref(), Some("101"));
}

#[test]
fn cancel_all_response_without_lists() {
    let response: CancelAllResponse =
        serde_json::from_value(json!({"status": "success", "message": "No open orders"})).unwrap();
    assert!(response.canceled_orders.is_empty());
    assert!(response.failed_cancellations.is_empty());
}

#[test]
fn null_result_lists_become_empty() {
    let cancel: CancelAllResponse = serde_json::from_value(json!({
        "status": "success",
        "canceled_orders": null,
        "failed_cancellations": null
    }))
    .unwrap();
    assert!(cancel.canceled_orders.is_empty());
    assert!(cancel.failed_cancellations.is_empty());

    let basket: BasketOrderResponse =
        serde_json::from_value(json!({"status": "success", "results": null})).unwrap();
    assert!(basket.results.is_empty());

    let split: SplitOrderResponse =
        serde_json::from_value(json!({"status": "error", "results": null})).unwrap();
    assert!(split.results.is_empty());
}
