use advisor_core::{AnalysisError, IndicatorAnalyzer, IndicatorSet, Series};
use async_trait::async_trait;

use crate::indicators::{classify_trend, pivot_levels, rsi, sma_last, volume_ratio};

/// Bars required before any indicator is reported.
pub const MIN_INDICATOR_BARS: usize = 5;

/// Bars the RSI needs for a full 14-delta window.
const RSI_PERIOD: usize = 14;

/// Lookback for pivot-based support/resistance.
const PIVOT_LOOKBACK: usize = 10;

/// Lookback for the volume average.
const VOLUME_PERIOD: usize = 20;

/// Computes the indicator snapshot for the latest bar of a series.
///
/// Pure and stateless: the same series always yields the same set.
pub struct IndicatorCalculator;

impl IndicatorCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, series: &Series) -> Result<IndicatorSet, AnalysisError> {
        let bars = series.bars();
        if bars.len() < MIN_INDICATOR_BARS {
            return Err(AnalysisError::InsufficientData {
                needed: MIN_INDICATOR_BARS,
                available: bars.len(),
            });
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

        let current_price = closes[closes.len() - 1];

        // SMAs degrade to the mean of whatever is available; sma5 falls
        // all the way back to the latest close below 5 bars.
        let sma5 = if closes.len() >= 5 {
            sma_last(&closes, 5)
        } else {
            current_price
        };
        let sma20 = sma_last(&closes, 20);
        let sma50 = sma_last(&closes, 50);

        let levels = pivot_levels(&highs, &lows, current_price, PIVOT_LOOKBACK);

        Ok(IndicatorSet {
            sma5,
            sma20,
            sma50,
            price_vs_sma5_pct: percent_above(current_price, sma5),
            price_vs_sma20_pct: percent_above(current_price, sma20),
            rsi: rsi(&closes, RSI_PERIOD),
            pivot: levels.pivot,
            resistance1: levels.resistance1,
            support1: levels.support1,
            resistance2: levels.resistance2,
            support2: levels.support2,
            recent_high: levels.recent_high,
            recent_low: levels.recent_low,
            volume_ratio: volume_ratio(&volumes, VOLUME_PERIOD),
            trend: classify_trend(&closes),
        })
    }
}

fn percent_above(price: f64, average: f64) -> f64 {
    if average != 0.0 {
        (price - average) / average * 100.0
    } else {
        0.0
    }
}

#[async_trait]
impl IndicatorAnalyzer for IndicatorCalculator {
    async fn analyze(&self, series: &Series) -> Result<IndicatorSet, AnalysisError> {
        self.compute(series)
    }
}

impl Default for IndicatorCalculator {
    fn default() -> Self {
        Self::new()
    }
}
