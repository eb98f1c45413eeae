use advisor_core::Trend;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Mean of the last `period` values, or of all values when fewer are
/// available. `data` must be non-empty.
pub fn sma_last(data: &[f64], period: usize) -> f64 {
    let start = data.len().saturating_sub(period);
    mean(&data[start..])
}

/// RSI over the last `period` close-over-close deltas, simple averages.
///
/// Returns the neutral 50.0 when the series is too short for a full
/// delta window, and 100.0 when the window has no losing days.
pub fn rsi(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period + 1 {
        return 50.0;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let window = &deltas[deltas.len() - period..];

    let avg_gain = window.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
    let avg_loss = window.iter().filter(|d| **d < 0.0).map(|d| d.abs()).sum::<f64>()
        / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    round2(100.0 - (100.0 / (1.0 + rs)))
}

/// Classic pivot point and the first two support/resistance bands.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotLevels {
    pub pivot: f64,
    pub resistance1: f64,
    pub support1: f64,
    pub resistance2: f64,
    pub support2: f64,
    pub recent_high: f64,
    pub recent_low: f64,
}

/// Pivot levels from the extremes of the last `lookback` bars.
pub fn pivot_levels(highs: &[f64], lows: &[f64], last_close: f64, lookback: usize) -> PivotLevels {
    let high_start = highs.len().saturating_sub(lookback);
    let low_start = lows.len().saturating_sub(lookback);

    let recent_high = highs[high_start..].iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let recent_low = lows[low_start..].iter().copied().fold(f64::INFINITY, f64::min);

    let pivot = (recent_high + recent_low + last_close) / 3.0;
    let range = recent_high - recent_low;

    PivotLevels {
        pivot: round2(pivot),
        resistance1: round2(2.0 * pivot - recent_low),
        support1: round2(2.0 * pivot - recent_high),
        resistance2: round2(pivot + range),
        support2: round2(pivot - range),
        recent_high,
        recent_low,
    }
}

/// Latest volume relative to the average of the last `period` volumes
/// (or all volumes if fewer). Defaults to 1.0 when the average is zero.
pub fn volume_ratio(volumes: &[f64], period: usize) -> f64 {
    let last = match volumes.last() {
        Some(v) => *v,
        None => return 1.0,
    };
    let start = volumes.len().saturating_sub(period);
    let avg = mean(&volumes[start..]);
    if avg > 0.0 {
        last / avg
    } else {
        1.0
    }
}

/// Classify the trend by comparing the last 5 closes against the 5
/// before them (or everything before them when fewer than 10 exist).
/// A relative change above 2% upgrades the trend to STRONG.
pub fn classify_trend(closes: &[f64]) -> Trend {
    if closes.len() < 5 {
        return Trend::Neutral;
    }

    let recent = &closes[closes.len() - 5..];
    let older = if closes.len() >= 10 {
        &closes[closes.len() - 10..closes.len() - 5]
    } else {
        &closes[..closes.len() - 5]
    };
    if older.is_empty() {
        return Trend::Neutral;
    }

    let recent_avg = mean(recent);
    let older_avg = mean(older);

    if recent_avg == older_avg {
        return Trend::Neutral;
    }

    let strength = if older_avg != 0.0 {
        ((recent_avg - older_avg) / older_avg * 100.0).abs()
    } else {
        f64::INFINITY
    };

    if recent_avg > older_avg {
        if strength > 2.0 {
            Trend::StrongUptrend
        } else {
            Trend::WeakUptrend
        }
    } else if strength > 2.0 {
        Trend::StrongDowntrend
    } else {
        Trend::WeakDowntrend
    }
}
