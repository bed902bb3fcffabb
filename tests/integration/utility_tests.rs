// Integration tests for market calendar and notification endpoints

use crate::common::{create_test_client, mock_post, success};
use openalgo::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_holidays() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "market/holidays",
        json!({"year": 2025}),
        success(json!([
            {
                "date": "2025-02-26",
                "description": "Maha Shivaratri",
                "holiday_type": "TRADING_HOLIDAY",
                "closed_exchanges": ["NSE", "BSE", "NFO", "BFO", "CDS", "BCD", "MCX"],
                "open_exchanges": []
            },
            {
                "date": "2025-03-14",
                "description": "Holi",
                "holiday_type": "TRADING_HOLIDAY",
                "closed_exchanges": ["NSE", "BSE", "NFO", "BFO", "CDS", "BCD"],
                "open_exchanges": [
                    {"exchange": "MCX", "start_time": 1741951800000i64, "end_time": 1741976700000i64}
                ]
            }
        ])),
    )
    .await;

    let client = create_test_client(&server);
    let holidays = client.holidays(2025).await.unwrap();

    mock.assert_async().await;
    assert_eq!(holidays.0.len(), 2);
    assert_eq!(holidays.closed_for(EXCHANGE_MCX).count(), 1);
    assert_eq!(holidays.closed_for(EXCHANGE_NSE).count(), 2);

    let session = &holidays.0[1].open_exchanges[0];
    let start = session.start().unwrap();
    assert_eq!(start.format("%H:%M").to_string(), "17:00");
}

#[tokio::test]
async fn test_timings() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "market/timings",
        json!({"date": "2025-01-02"}),
        success(json!([
            {"exchange": "NSE", "start_time": 1735789500000i64, "end_time": 1735812000000i64},
            {"exchange": "MCX", "start_time": 1735788600000i64, "end_time": 1735842300000i64}
        ])),
    )
    .await;

    let client = create_test_client(&server);
    let timings = client.timings("2025-01-02").await.unwrap();

    mock.assert_async().await;
    let nse = timings.for_exchange(EXCHANGE_NSE).unwrap();
    assert_eq!(nse.start().unwrap().format("%H:%M").to_string(), "09:15");
    assert_eq!(nse.end().unwrap().format("%H:%M").to_string(), "15:30");
    assert!(timings.for_exchange(EXCHANGE_BSE).is_none());
}

#[tokio::test]
async fn test_timings_on_holiday_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_post(
        &mut server,
        "market/timings",
        json!({"date": "2025-01-26"}),
        success(json!([])),
    )
    .await;

    let client = create_test_client(&server);
    let timings = client.timings("2025-01-26").await.unwrap();
    assert!(timings.0.is_empty());
}

#[tokio::test]
async fn test_telegram_notify() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_post(
        &mut server,
        "telegram/notify",
        json!({"username": "trader", "message": "NIFTY crossed 26000", "priority": 8}),
        json!({"status": "success", "message": "Notification sent"}).to_string(),
    )
    .await;

    let client = create_test_client(&server);
    let request = TelegramRequest::new("trader", "NIFTY crossed 26000").with_priority(8);
    let response = client.telegram(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.message.as_deref(), Some("Notification sent"));
}

#[tokio::test]
async fn test_telegram_priority_out_of_range_is_rejected() {
    let server = mockito::Server::new_async().await;
    let client = create_test_client(&server);

    for priority in [0, 11] {
        let request = TelegramRequest::new("trader", "hello").with_priority(priority);
        assert!(matches!(
            client.telegram(&request).await,
            Err(AppError::InvalidInput(_))
        ));
    }
}
