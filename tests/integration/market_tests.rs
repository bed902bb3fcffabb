// Integration tests for market data endpoints

use crate::common::{API_KEY, create_test_client, mock_post, success};
use mockito::Matcher;
use openalgo::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_quotes() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "quotes",
        json!({"symbol": "RELIANCE", "exchange": "NSE"}),
        success(json!({
            "ask": 1261.1,
            "bid": 1260.9,
            "high": 1270.0,
            "low": 1250.0,
            "ltp": 1261.0,
            "open": 1255.0,
            "prev_close": 1250.0,
            "volume": 5_000_000
        })),
    )
    .await;

    let client = create_test_client(&server);
    let quote = client
        .quotes(&SymbolRequest::new("RELIANCE", EXCHANGE_NSE))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(quote.ltp, Some(1261.0));
    let mid = quote.mid().unwrap();
    assert!((mid - 1261.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_multi_quotes_reads_results() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "multiquotes",
        json!({
            "symbols": [
                {"symbol": "RELIANCE", "exchange": "NSE"},
                {"symbol": "UNKNOWN", "exchange": "NSE"}
            ]
        }),
        json!({
            "status": "success",
            "results": [
                {"symbol": "RELIANCE", "exchange": "NSE", "data": {"ltp": 1261.0}},
                {"symbol": "UNKNOWN", "exchange": "NSE", "error": "Symbol not found"}
            ]
        })
        .to_string(),
    )
    .await;

    let client = create_test_client(&server);
    let request = MultiQuotesRequest::default()
        .with_symbol("RELIANCE", EXCHANGE_NSE)
        .with_symbol("UNKNOWN", EXCHANGE_NSE);
    let quotes = client.multi_quotes(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].data.as_ref().and_then(|q| q.ltp), Some(1261.0));
    assert!(quotes[1].data.is_none());
    assert_eq!(quotes[1].error.as_deref(), Some("Symbol not found"));
}

#[tokio::test]
async fn test_multi_quotes_without_symbols_is_rejected() {
    let server = mockito::Server::new_async().await;
    let client = create_test_client(&server);
    let result = client.multi_quotes(&MultiQuotesRequest::default()).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_depth() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "depth",
        json!({"symbol": "SBIN", "exchange": "NSE"}),
        success(json!({
            "bids": [{"price": 800.1, "quantity": 100}, {"price": 800.0, "quantity": 250}],
            "asks": [{"price": 800.2, "quantity": "40"}],
            "ltp": 800.15,
            "totalbuyqty": 350,
            "totalsellqty": 40
        })),
    )
    .await;

    let client = create_test_client(&server);
    let depth = client
        .depth(&SymbolRequest::new("SBIN", EXCHANGE_NSE))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(depth.bids.len(), 2);
    assert_eq!(depth.asks[0].quantity, 40.0);
    assert_eq!(depth.total_buy_qty, Some(350.0));
}

#[tokio::test]
async fn test_history_is_sorted_deduplicated_and_in_ist() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "history",
        json!({
            "symbol": "SBIN",
            "exchange": "NSE",
            "interval": "1m",
            "start_date": "2023-11-14",
            "end_date": "2023-11-15"
        }),
        success(json!([
            {"timestamp": 1700000060, "open": 3, "high": 3, "low": 3, "close": 3, "volume": 30, "oi": 0},
            {"timestamp": 1700000000, "open": 2, "high": 2, "low": 2, "close": 2, "volume": 20, "oi": 0},
            {"timestamp": 1699999940, "open": 1, "high": 1, "low": 1, "close": 1, "volume": 10, "oi": 0},
            {"timestamp": 1700000000, "open": 9, "high": 9, "low": 9, "close": 9, "volume": 90, "oi": 0}
        ])),
    )
    .await;

    let client = create_test_client(&server);
    let request = HistoryRequest::new("SBIN", EXCHANGE_NSE, "1m", "2023-11-14", "2023-11-15");
    let history = client.history(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history.close(), vec![1.0, 2.0, 3.0]);
    assert_eq!(history.volume(), vec![10.0, 20.0, 30.0]);

    let first = history.candles()[0].timestamp;
    assert_eq!(first.offset().local_minus_utc(), IST_OFFSET_SECS);
    assert_eq!(first.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-11-15 03:42:20");
}

#[tokio::test]
async fn test_history_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_post(
        &mut server,
        "history",
        json!({
            "symbol": "SBIN",
            "exchange": "NSE",
            "interval": "D",
            "start_date": "2024-01-01",
            "end_date": "2024-01-01"
        }),
        success(json!([])),
    )
    .await;

    let client = create_test_client(&server);
    let request = HistoryRequest::new("SBIN", EXCHANGE_NSE, "D", "2024-01-01", "2024-01-01");
    let history = client.history(&request).await.unwrap();
    assert!(history.is_empty());
    assert!(history.last().is_none());
}

#[tokio::test]
async fn test_intervals() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "intervals",
        json!({}),
        success(json!({
            "seconds": [],
            "minutes": ["1m", "3m", "5m"],
            "hours": ["1h"],
            "days": ["D"],
            "weeks": ["W"],
            "months": ["M"]
        })),
    )
    .await;

    let client = create_test_client(&server);
    let intervals = client.intervals().await.unwrap();

    mock.assert_async().await;
    assert!(intervals.supports("5m"));
    assert!(intervals.supports("D"));
    assert!(!intervals.supports("2m"));
    assert_eq!(intervals.all().count(), 7);
}

#[tokio::test]
async fn test_symbol_info() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "symbol",
        json!({"symbol": "NIFTY25NOV2526000CE", "exchange": "NFO"}),
        success(json!({
            "brexchange": "NFO",
            "brsymbol": "NIFTY25NOV2526000CE",
            "exchange": "NFO",
            "expiry": "25-NOV-25",
            "instrumenttype": "CE",
            "lotsize": 75,
            "name": "NIFTY",
            "strike": 26000.0,
            "symbol": "NIFTY25NOV2526000CE",
            "tick_size": 0.05,
            "token": 47275
        })),
    )
    .await;

    let client = create_test_client(&server);
    let info = client
        .symbol(&SymbolRequest::new("NIFTY25NOV2526000CE", EXCHANGE_NFO))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(info.lot_size, Some(75));
    assert_eq!(info.token.as_deref(), Some("47275"));
    assert_eq!(info.instrument_type.as_deref(), Some("CE"));
}

#[tokio::test]
async fn test_search_omits_missing_exchange() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "search",
        json!({"query": "NIFTY 26000 DEC CE"}),
        success(json!([
            {"symbol": "NIFTY30DEC2526000CE", "exchange": "NFO", "lotsize": "75"},
            {"symbol": "NIFTY24DEC2526000CE", "exchange": "NFO", "lotsize": "75"}
        ])),
    )
    .await;

    let client = create_test_client(&server);
    let request = SearchRequest::new("NIFTY 26000 DEC CE");
    let results = client.search(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|s| s.lot_size == Some(75)));
}

#[tokio::test]
async fn test_expiry() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "expiry",
        json!({"symbol": "NIFTY", "exchange": "NFO", "instrumenttype": "options"}),
        success(json!(["10-JUL-25", "17-JUL-25", "31-JUL-25"])),
    )
    .await;

    let client = create_test_client(&server);
    let request = ExpiryRequest::new("NIFTY", EXCHANGE_NFO, InstrumentKind::Options);
    let expiries = client.expiry(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(expiries, vec!["10-JUL-25", "17-JUL-25", "31-JUL-25"]);
}

#[tokio::test]
async fn test_instruments_uses_get_with_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/instruments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), API_KEY.into()),
            Matcher::UrlEncoded("exchange".into(), "NSE".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success(json!([
            {"symbol": "SBIN", "exchange": "NSE", "token": "3045", "lotsize": 1},
            {"symbol": "RELIANCE", "exchange": "NSE", "token": "2885", "lotsize": 1}
        ])))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let instruments = client.instruments(Some(EXCHANGE_NSE)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(instruments.len(), 2);
    assert_eq!(instruments.0[0].token.as_deref(), Some("3045"));
}
