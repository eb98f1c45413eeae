use advisor_core::{AnalysisError, DailyChange, Series, WeeklyPerformance};

/// Bars required for a weekly reading.
pub const MIN_WEEKLY_BARS: usize = 2;

/// Trading days in the weekly window.
const WEEKLY_WINDOW: usize = 7;

/// Summarizes the trailing week (up to the last 7 bars) of a series:
/// total move, per-day changes with best/worst day, and the window's
/// return volatility.
pub fn weekly_performance(series: &Series) -> Result<WeeklyPerformance, AnalysisError> {
    let bars = series.bars();
    if bars.len() < MIN_WEEKLY_BARS {
        return Err(AnalysisError::InsufficientData {
            needed: MIN_WEEKLY_BARS,
            available: bars.len(),
        });
    }

    let window = &bars[bars.len().saturating_sub(WEEKLY_WINDOW)..];
    let first = &window[0];
    let last = &window[window.len() - 1];

    let weekly_change = last.close - first.close;
    let weekly_change_pct = if first.close != 0.0 {
        weekly_change / first.close * 100.0
    } else {
        0.0
    };

    let daily_changes: Vec<DailyChange> = window
        .windows(2)
        .map(|pair| {
            let change = pair[1].close - pair[0].close;
            let change_pct = if pair[0].close != 0.0 {
                change / pair[0].close * 100.0
            } else {
                0.0
            };
            DailyChange {
                date: pair[1].date,
                price: pair[1].close,
                change,
                change_pct,
            }
        })
        .collect();

    let best_day = daily_changes
        .iter()
        .max_by(|a, b| a.change_pct.total_cmp(&b.change_pct))
        .cloned();
    let worst_day = daily_changes
        .iter()
        .min_by(|a, b| a.change_pct.total_cmp(&b.change_pct))
        .cloned();

    let closes: Vec<f64> = window.iter().map(|b| b.close).collect();
    let returns = risk_assessment::daily_returns(&closes);
    let volatility_pct = risk_assessment::population_std_dev(&returns) * 100.0;
    let avg_daily_return_pct = if returns.is_empty() {
        0.0
    } else {
        returns.iter().sum::<f64>() / returns.len() as f64 * 100.0
    };

    Ok(WeeklyPerformance {
        start_date: first.date,
        end_date: last.date,
        start_price: first.close,
        end_price: last.close,
        weekly_change,
        weekly_change_pct,
        best_day,
        worst_day,
        volatility_pct: round2(volatility_pct),
        avg_daily_return_pct: round2(avg_daily_return_pct),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
