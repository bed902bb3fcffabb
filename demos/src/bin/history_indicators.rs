use chrono::{Duration, Local};
use openalgo::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let client = Client::from_env()?;

    let intervals = client.intervals().await?;
    let interval = if intervals.supports("5m") { "5m" } else { "D" };

    let end = Local::now().date_naive();
    let start = end - Duration::days(30);
    let request = HistoryRequest::from_dates("SBIN", EXCHANGE_NSE, interval, start, end);
    let history = client.history(&request).await?;
    info!("Fetched {} {} candles", history.len(), interval);

    if history.len() < 52 {
        info!("Not enough candles for the indicators");
        return Ok(());
    }

    let close = history.close();
    let ema_20 = ema(&close, 20)?;
    let st = supertrend(&history.high(), &history.low(), &close, 10, 3.0)?;
    let cloud = ichimoku(
        &history.high(),
        &history.low(),
        &close,
        IchimokuParams::default(),
    )?;

    if let (Some(last), Some(e), Some(line), Some(dir)) = (
        history.last(),
        ema_20.last(),
        st.line.last(),
        st.direction.last(),
    ) {
        let trend = if *dir > 0.0 { "up" } else { "down" };
        info!(
            "{} close {:.2}, EMA20 {:.2}, supertrend {:.2} ({}), tenkan {:.2}",
            last.timestamp,
            last.close,
            e,
            line,
            trend,
            cloud.tenkan_sen.last().copied().unwrap_or(f64::NAN)
        );
    }

    Ok(())
}
