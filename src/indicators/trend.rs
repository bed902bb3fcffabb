/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use crate::indicators::{align, validate_period};
use serde::Serialize;

/// Simple moving average
pub fn sma(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    let mut out = vec![f64::NAN; data.len()];
    let p = period as f64;
    let mut sum: f64 = data[..period].iter().sum();
    out[period - 1] = sum / p;
    for i in period..data.len() {
        sum += data[i] - data[i - period];
        out[i] = sum / p;
    }
    Ok(out)
}

/// Exponential moving average, `alpha = 2 / (period + 1)`
///
/// Leading `NaN`s are skipped: the average is seeded with the SMA of the
/// first `period` valid values, so EMAs can be chained.
pub fn ema(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    Ok(ema_unchecked(data, period))
}

fn ema_unchecked(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    let mut out = vec![f64::NAN; n];
    let Some(start) = data.iter().position(|v| !v.is_nan()) else {
        return out;
    };
    let seeded = start + period;
    if seeded > n {
        return out;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    out[seeded - 1] = data[start..seeded].iter().sum::<f64>() / period as f64;
    for i in seeded..n {
        out[i] = alpha * data[i] + (1.0 - alpha) * out[i - 1];
    }
    out
}

/// Weighted moving average, linear weights `1..=period`
pub fn wma(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    Ok(wma_unchecked(data, period))
}

fn wma_unchecked(data: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; data.len()];
    let weight_sum = (period * (period + 1) / 2) as f64;
    for i in period - 1..data.len() {
        let weighted: f64 = data[i + 1 - period..=i]
            .iter()
            .enumerate()
            .map(|(j, v)| v * (j + 1) as f64)
            .sum();
        out[i] = weighted / weight_sum;
    }
    out
}

/// Double exponential moving average: `2·EMA - EMA(EMA)`
pub fn dema(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    let ema1 = ema(data, period)?;
    let ema2 = ema_unchecked(&ema1, period);
    Ok(ema1.iter().zip(&ema2).map(|(a, b)| 2.0 * a - b).collect())
}

/// Triple exponential moving average: `3·EMA - 3·EMA² + EMA³`
pub fn tema(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    let ema1 = ema(data, period)?;
    let ema2 = ema_unchecked(&ema1, period);
    let ema3 = ema_unchecked(&ema2, period);
    Ok(ema1
        .iter()
        .zip(&ema2)
        .zip(&ema3)
        .map(|((a, b), c)| 3.0 * a - 3.0 * b + c)
        .collect())
}

/// Hull moving average: `WMA(2·WMA(n/2) - WMA(n), √n)`
pub fn hma(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    if period < 2 {
        return Err(AppError::InvalidInput(
            "HMA period must be at least 2".to_string(),
        ));
    }
    let half = wma_unchecked(data, period / 2);
    let full = wma_unchecked(data, period);
    let diff: Vec<f64> = half.iter().zip(&full).map(|(h, f)| 2.0 * h - f).collect();
    let sqrt_period = ((period as f64).sqrt() as usize).max(1);
    Ok(wma_unchecked(&diff, sqrt_period))
}

/// Volume weighted moving average
///
/// Windows without volume take the current price.
pub fn vwma(data: &[f64], volume: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    let [data, volume] = align([data, volume]);
    validate_period(period, data.len())?;
    let mut out = vec![f64::NAN; data.len()];
    for i in period - 1..data.len() {
        let window = i + 1 - period..=i;
        let sum_pv: f64 = window.clone().map(|j| data[j] * volume[j]).sum();
        let sum_v: f64 = window.map(|j| volume[j]).sum();
        out[i] = if sum_v > 0.0 { sum_pv / sum_v } else { data[i] };
    }
    Ok(out)
}

/// Arnaud Legoux moving average
///
/// `offset` in `[0, 1]` moves the Gaussian window towards recent prices;
/// `sigma` controls its width. Usual values: 21, 0.85, 6.0.
pub fn alma(data: &[f64], period: usize, offset: f64, sigma: f64) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    if !(0.0..=1.0).contains(&offset) {
        return Err(AppError::InvalidInput(format!(
            "ALMA offset must be between 0 and 1, got {offset}"
        )));
    }
    if !(sigma > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "ALMA sigma must be positive, got {sigma}"
        )));
    }

    let m = offset * (period as f64 - 1.0);
    let s = period as f64 / sigma;
    let mut weights: Vec<f64> = (0..period)
        .map(|i| (-((i as f64 - m).powi(2)) / (2.0 * s * s)).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    weights.iter_mut().for_each(|w| *w /= total);

    let mut out = vec![f64::NAN; data.len()];
    for i in period - 1..data.len() {
        out[i] = data[i + 1 - period..=i]
            .iter()
            .zip(&weights)
            .map(|(v, w)| v * w)
            .sum();
    }
    Ok(out)
}

/// Kaufman adaptive moving average
///
/// The smoothing constant moves between the EMA constants of `fast_period`
/// and `slow_period` with the efficiency ratio over `period`. Usual values:
/// 10, 2, 30.
pub fn kama(
    data: &[f64],
    period: usize,
    fast_period: usize,
    slow_period: usize,
) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    if fast_period == 0 || slow_period == 0 {
        return Err(AppError::InvalidInput(
            "KAMA fast and slow periods must be positive".to_string(),
        ));
    }
    if fast_period >= slow_period {
        return Err(AppError::InvalidInput(
            "KAMA fast period must be less than slow period".to_string(),
        ));
    }

    let fast_sc = 2.0 / (fast_period as f64 + 1.0);
    let slow_sc = 2.0 / (slow_period as f64 + 1.0);
    let mut out = vec![f64::NAN; data.len()];
    out[period - 1] = data[period - 1];
    for i in period..data.len() {
        let direction = (data[i] - data[i - period]).abs();
        let volatility: f64 = (0..period).map(|j| (data[i - j] - data[i - j - 1]).abs()).sum();
        let er = if volatility > 0.0 {
            direction / volatility
        } else {
            0.0
        };
        let sc = (er * (fast_sc - slow_sc) + slow_sc).powi(2);
        out[i] = out[i - 1] + sc * (data[i] - out[i - 1]);
    }
    Ok(out)
}

/// Zero lag exponential moving average: EMA of `2·price - price[lag]`,
/// `lag = (period - 1) / 2`
pub fn zlema(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    let lag = (period - 1) / 2;
    let adjusted: Vec<f64> = (0..data.len())
        .map(|i| {
            if i < lag {
                data[i]
            } else {
                2.0 * data[i] - data[i - lag]
            }
        })
        .collect();
    Ok(ema_unchecked(&adjusted, period))
}

// Generalized DEMA; seeded with the first value rather than an SMA
fn generalized_dema(data: &[f64], period: usize, v_factor: f64) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let smooth = |input: &[f64]| {
        let mut out = Vec::with_capacity(input.len());
        for (i, &v) in input.iter().enumerate() {
            let value = if i == 0 {
                v
            } else {
                alpha * v + (1.0 - alpha) * out[i - 1]
            };
            out.push(value);
        }
        out
    };
    let ema1 = smooth(data);
    let ema2 = smooth(&ema1);
    ema1.iter()
        .zip(&ema2)
        .map(|(a, b)| (1.0 + v_factor) * a - v_factor * b)
        .collect()
}

/// Tillson T3: the generalized DEMA applied three times. Usual values: 21, 0.7
pub fn t3(data: &[f64], period: usize, v_factor: f64) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    let gd1 = generalized_dema(data, period, v_factor);
    let gd2 = generalized_dema(&gd1, period, v_factor);
    Ok(generalized_dema(&gd2, period, v_factor))
}

fn window_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn window_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Fractal adaptive moving average; `period` of at least 4, usually 16
pub fn frama(data: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    validate_period(period, data.len())?;
    if period < 4 {
        return Err(AppError::InvalidInput(
            "FRAMA period must be at least 4".to_string(),
        ));
    }

    let n1 = period / 2;
    let n2 = period - n1;
    let alpha = 2.0 / (period as f64 + 1.0);
    let w = (2.0 / alpha).ln() / 2f64.ln();

    let mut out = vec![f64::NAN; data.len()];
    out[period - 1] = data[period - 1];
    for i in period..data.len() {
        let first = &data[i + 1 - period..i + 1 - n2];
        let second = &data[i + 1 - n2..=i];
        let whole = &data[i + 1 - period..=i];
        let r1 = window_max(first) - window_min(first);
        let r2 = window_max(second) - window_min(second);
        let r3 = window_max(whole) - window_min(whole);

        let d = if r1 > 0.0 && r2 > 0.0 && r3 > 0.0 {
            (r1.ln() + r2.ln() - r3.ln()) / 2f64.ln()
        } else {
            1.0
        };
        let d = d.clamp(1.0, 2.0);
        let alpha_adj = 2.0 / (w * d + 1.0);
        out[i] = alpha_adj * data[i] + (1.0 - alpha_adj) * out[i - 1];
    }
    Ok(out)
}

fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    (0..high.len())
        .map(|i| {
            let hl = high[i] - low[i];
            if i == 0 {
                hl
            } else {
                let hc = (high[i] - close[i - 1]).abs();
                let lc = (low[i] - close[i - 1]).abs();
                hl.max(hc).max(lc)
            }
        })
        .collect()
}

fn atr_unchecked(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let tr = true_range(high, low, close);
    let mut out = vec![f64::NAN; tr.len()];
    let p = period as f64;
    out[period - 1] = tr[..period].iter().sum::<f64>() / p;
    for i in period..tr.len() {
        out[i] = (out[i - 1] * (p - 1.0) + tr[i]) / p;
    }
    out
}

/// Average true range with Wilder smoothing
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>, AppError> {
    let [high, low, close] = align([high, low, close]);
    validate_period(period, close.len())?;
    Ok(atr_unchecked(high, low, close, period))
}

/// Supertrend line and trend direction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupertrendOutput {
    /// Active band
    pub line: Vec<f64>,
    /// `1.0` uptrend, `-1.0` downtrend, `0.0` while warming up
    pub direction: Vec<f64>,
}

/// Supertrend over ATR bands around the bar midpoint. Usual values: 10, 3.0
pub fn supertrend(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<SupertrendOutput, AppError> {
    let [high, low, close] = align([high, low, close]);
    validate_period(period, close.len())?;
    if !(multiplier > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "supertrend multiplier must be positive, got {multiplier}"
        )));
    }

    let n = close.len();
    let atr = atr_unchecked(high, low, close, period);
    let upper: Vec<f64> = (0..n)
        .map(|i| (high[i] + low[i]) / 2.0 + multiplier * atr[i])
        .collect();
    let lower: Vec<f64> = (0..n)
        .map(|i| (high[i] + low[i]) / 2.0 - multiplier * atr[i])
        .collect();

    let mut final_upper = vec![f64::NAN; n];
    let mut final_lower = vec![f64::NAN; n];
    let mut line = vec![f64::NAN; n];
    let mut direction = vec![0.0; n];

    let first = period - 1;
    final_upper[first] = upper[first];
    final_lower[first] = lower[first];
    line[first] = final_upper[first];
    direction[first] = 1.0;

    for i in first + 1..n {
        final_upper[i] = if upper[i] < final_upper[i - 1] || close[i - 1] > final_upper[i - 1] {
            upper[i]
        } else {
            final_upper[i - 1]
        };
        final_lower[i] = if lower[i] > final_lower[i - 1] || close[i - 1] < final_lower[i - 1] {
            lower[i]
        } else {
            final_lower[i - 1]
        };

        let uptrend = if direction[i - 1] == 1.0 {
            close[i] > final_lower[i]
        } else {
            close[i] >= final_upper[i]
        };
        if uptrend {
            line[i] = final_upper[i];
            direction[i] = 1.0;
        } else {
            line[i] = final_lower[i];
            direction[i] = -1.0;
        }
    }

    Ok(SupertrendOutput { line, direction })
}

/// Ichimoku periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IchimokuParams {
    /// Conversion line period
    pub tenkan_period: usize,
    /// Base line period
    pub kijun_period: usize,
    /// Leading span B period
    pub senkou_b_period: usize,
    /// Bars the leading spans are shifted forward and the lagging span back
    pub displacement: usize,
}

impl Default for IchimokuParams {
    fn default() -> Self {
        Self {
            tenkan_period: 9,
            kijun_period: 26,
            senkou_b_period: 52,
            displacement: 26,
        }
    }
}

/// Ichimoku cloud lines, each as long as the input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IchimokuOutput {
    /// Conversion line
    pub tenkan_sen: Vec<f64>,
    /// Base line
    pub kijun_sen: Vec<f64>,
    /// Leading span A, shifted forward
    pub senkou_span_a: Vec<f64>,
    /// Leading span B, shifted forward
    pub senkou_span_b: Vec<f64>,
    /// Lagging span, close shifted back
    pub chikou_span: Vec<f64>,
}

fn channel_midpoint(high: &[f64], low: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; high.len()];
    for i in period.saturating_sub(1)..high.len() {
        let window = i + 1 - period..=i;
        out[i] = (window_max(&high[window.clone()]) + window_min(&low[window])) / 2.0;
    }
    out
}

/// Ichimoku cloud
///
/// Leading spans projected beyond the last bar are dropped, so every line
/// keeps the input length.
pub fn ichimoku(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    params: IchimokuParams,
) -> Result<IchimokuOutput, AppError> {
    let [high, low, close] = align([high, low, close]);
    for (period, name) in [
        (params.tenkan_period, "tenkan_period"),
        (params.kijun_period, "kijun_period"),
        (params.senkou_b_period, "senkou_b_period"),
    ] {
        if period == 0 {
            return Err(AppError::InvalidInput(format!(
                "{name} must be greater than zero"
            )));
        }
    }

    let n = close.len();
    let shift = params.displacement;
    let tenkan_sen = channel_midpoint(high, low, params.tenkan_period);
    let kijun_sen = channel_midpoint(high, low, params.kijun_period);
    let span_b = channel_midpoint(high, low, params.senkou_b_period);

    let mut senkou_span_a = vec![f64::NAN; n];
    let start = params.tenkan_period.max(params.kijun_period) - 1;
    for i in start..n.saturating_sub(shift) {
        senkou_span_a[i + shift] = (tenkan_sen[i] + kijun_sen[i]) / 2.0;
    }

    let mut senkou_span_b = vec![f64::NAN; n];
    for i in params.senkou_b_period - 1..n.saturating_sub(shift) {
        senkou_span_b[i + shift] = span_b[i];
    }

    let mut chikou_span = vec![f64::NAN; n];
    for i in shift..n {
        chikou_span[i] = close[i - shift];
    }

    Ok(IchimokuOutput {
        tenkan_sen,
        kijun_sen,
        senkou_span_a,
        senkou_span_b,
        chikou_span,
    })
}
