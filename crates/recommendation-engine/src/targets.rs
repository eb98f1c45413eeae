use advisor_core::{AnalysisError, IndicatorSet, PriceTargets};

/// Fallback band when no pivot levels are available.
const DEFAULT_BAND_PCT: f64 = 0.05;

/// Label for the horizon the targets apply to.
const TARGET_TIMEFRAME: &str = "1-4 weeks";

/// Fixed confidence tag on targets; not derived from the data.
const TARGET_CONFIDENCE: &str = "MODERATE";

/// Derives near-term price targets from pivot levels, falling back to
/// a +-5% band around the current price.
pub struct PriceTargetGenerator;

impl PriceTargetGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        current_price: f64,
        indicators: Option<&IndicatorSet>,
    ) -> Result<PriceTargets, AnalysisError> {
        if current_price <= 0.0 {
            return Err(AnalysisError::UnavailableTarget);
        }

        let upside_target = indicators
            .map(|i| i.resistance1)
            .unwrap_or(current_price * (1.0 + DEFAULT_BAND_PCT));
        let downside_target = indicators
            .map(|i| i.support1)
            .unwrap_or(current_price * (1.0 - DEFAULT_BAND_PCT));

        let upside_pct = (upside_target - current_price) / current_price * 100.0;
        let downside_pct = (current_price - downside_target) / current_price * 100.0;

        let risk_reward_ratio = if downside_pct > 0.0 {
            upside_pct / downside_pct
        } else {
            upside_pct
        };

        Ok(PriceTargets {
            current_price: round2(current_price),
            upside_target: round2(upside_target),
            downside_target: round2(downside_target),
            upside_pct: round2(upside_pct),
            downside_pct: round2(downside_pct),
            risk_reward_ratio: round2(risk_reward_ratio),
            target_timeframe: TARGET_TIMEFRAME.to_string(),
            confidence_level: TARGET_CONFIDENCE.to_string(),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Default for PriceTargetGenerator {
    fn default() -> Self {
        Self::new()
    }
}
