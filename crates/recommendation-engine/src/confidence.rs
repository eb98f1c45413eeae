use advisor_core::{DataSummary, IndicatorSet, RiskProfile};

/// Starting score before any data-quality credit.
const BASE_SCORE: i32 = 50;

/// Scores how much observable input backed the analysis, 0-100.
///
/// Each available input earns credit; elevated weekly volatility takes
/// some back. The result is clamped to the documented range.
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        summary: Option<&DataSummary>,
        indicators: Option<&IndicatorSet>,
        risk: Option<&RiskProfile>,
    ) -> u8 {
        let mut score = BASE_SCORE;

        if let Some(summary) = summary {
            if summary.current_price > 0.0 {
                score += 10;
            }
            if summary.weekly_return_pct.is_some() {
                score += 10;
            }
            if summary.volatility_pct.is_some() {
                score += 10;
            }
        }

        if let Some(indicators) = indicators {
            if indicators.rsi > 0.0 {
                score += 10;
            }
            // Trend is always classified once indicators exist
            score += 10;
            if indicators.support1 > 0.0 && indicators.resistance1 > 0.0 {
                score += 10;
            }
        }

        if risk.is_some() {
            // +5 for the rating, +5 for the volatility figure
            score += 10;
        }

        let weekly_volatility = summary.and_then(|s| s.volatility_pct).unwrap_or(0.0);
        if weekly_volatility > 10.0 {
            score -= 10;
        } else if weekly_volatility > 5.0 {
            score -= 5;
        }

        score.clamp(0, 100) as u8
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new()
    }
}
