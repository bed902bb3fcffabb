use openalgo::error::AppError;
use openalgo::indicators::{
    IchimokuParams, alma, atr, dema, ema, frama, hma, ichimoku, kama, sma, supertrend, t3, tema,
    vwma, wma, zlema,
};
use openalgo::presentation::market::History;
use serde_json::json;

fn sample_history() -> History {
    let rows: Vec<_> = (0..60)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.2;
            json!({
                "timestamp": 1_735_789_500 + i * 60,
                "open": base,
                "high": base + 1.5,
                "low": base - 1.5,
                "close": base + 0.25,
                "volume": 1000 + i * 10
            })
        })
        .collect();
    History::from_value(json!(rows)).unwrap()
}

fn assert_same_length(series: &[f64], expected: usize) {
    assert_eq!(series.len(), expected);
}

#[test]
fn test_moving_averages_keep_length() {
    let history = sample_history();
    let close = history.close();
    let n = close.len();

    assert_same_length(&sma(&close, 10).unwrap(), n);
    assert_same_length(&ema(&close, 10).unwrap(), n);
    assert_same_length(&wma(&close, 10).unwrap(), n);
    assert_same_length(&dema(&close, 10).unwrap(), n);
    assert_same_length(&tema(&close, 10).unwrap(), n);
    assert_same_length(&hma(&close, 9).unwrap(), n);
    assert_same_length(&vwma(&close, &history.volume(), 10).unwrap(), n);
    assert_same_length(&alma(&close, 9, 0.85, 6.0).unwrap(), n);
    assert_same_length(&kama(&close, 10, 2, 30).unwrap(), n);
    assert_same_length(&zlema(&close, 10).unwrap(), n);
    assert_same_length(&t3(&close, 5, 0.7).unwrap(), n);
    assert_same_length(&frama(&close, 16).unwrap(), n);
}

#[test]
fn test_sma_warm_up_and_value() {
    let history = sample_history();
    let close = history.close();
    let out = sma(&close, 10).unwrap();

    assert!(out[..9].iter().all(|v| v.is_nan()));
    let expected: f64 = close[..10].iter().sum::<f64>() / 10.0;
    assert!((out[9] - expected).abs() < 1e-9);
}

#[test]
fn test_ema_stays_within_price_range() {
    let history = sample_history();
    let close = history.close();
    let out = ema(&close, 10).unwrap();
    let min = close.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = close.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(
        out.iter()
            .filter(|v| !v.is_nan())
            .all(|v| *v >= min - 1e-9 && *v <= max + 1e-9)
    );
}

#[test]
fn test_supertrend_on_history() {
    let history = sample_history();
    let out = supertrend(&history.high(), &history.low(), &history.close(), 10, 3.0).unwrap();

    assert_eq!(out.line.len(), history.len());
    assert!(
        out.direction
            .iter()
            .all(|d| *d == 0.0 || *d == 1.0 || *d == -1.0)
    );
    assert!(out.direction[20..].iter().all(|d| *d != 0.0));
}

#[test]
fn test_atr_is_positive() {
    let history = sample_history();
    let out = atr(&history.high(), &history.low(), &history.close(), 14).unwrap();
    assert!(out[13..].iter().all(|v| *v > 0.0));
}

#[test]
fn test_ichimoku_default_params() {
    let history = sample_history();
    let out = ichimoku(
        &history.high(),
        &history.low(),
        &history.close(),
        IchimokuParams::default(),
    )
    .unwrap();

    assert_eq!(out.tenkan_sen.len(), history.len());
    assert!(out.tenkan_sen[8].is_finite());
    assert!(out.tenkan_sen[7].is_nan());
    assert!(out.kijun_sen[25].is_finite());
}

#[test]
fn test_invalid_periods() {
    let history = sample_history();
    let close = history.close();
    assert!(matches!(sma(&close, 0), Err(AppError::InvalidInput(_))));
    assert!(matches!(ema(&close, 61), Err(AppError::InvalidInput(_))));
    assert!(matches!(hma(&close, 1), Err(AppError::InvalidInput(_))));
}
