use advisor_core::{
    AnalysisError, RiskAnalyzer, RiskInsight, RiskProfile, RiskRating, Series, Suitability,
    VolatilityBand,
};
use async_trait::async_trait;

/// Bars required before risk is assessed.
pub const MIN_RISK_BARS: usize = 10;

/// Drawdowns above this mark the profile as a drawdown concern.
const DRAWDOWN_CONCERN_PCT: f64 = 15.0;

/// Rates a price series by return volatility and maximum drawdown.
pub struct RiskAssessor;

impl RiskAssessor {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, series: &Series) -> Result<RiskProfile, AnalysisError> {
        let bars = series.bars();
        if bars.len() < MIN_RISK_BARS {
            return Err(AnalysisError::InsufficientData {
                needed: MIN_RISK_BARS,
                available: bars.len(),
            });
        }

        let closes = series.closes();
        let returns = daily_returns(&closes);
        let volatility = population_std_dev(&returns) * 100.0;
        let drawdown = max_drawdown(&closes);

        let risk_rating = rate_volatility(volatility);

        Ok(RiskProfile {
            volatility_pct: round2(volatility),
            max_drawdown_pct: round2(drawdown),
            risk_rating,
            risk_score: risk_rating.score(),
            risk_factors: vec![
                format!("Price volatility: {volatility:.1}%"),
                format!("Maximum drawdown: {drawdown:.1}%"),
            ],
        })
    }

    /// Qualitative reading of an assessed profile.
    pub fn interpret(&self, profile: &RiskProfile) -> RiskInsight {
        RiskInsight {
            risk_level: profile.risk_rating,
            volatility_assessment: volatility_band(profile.volatility_pct),
            drawdown_concern: profile.max_drawdown_pct > DRAWDOWN_CONCERN_PCT,
            suitability: match profile.risk_rating {
                RiskRating::Low => Suitability::SuitableForConservativeInvestors,
                RiskRating::Medium => Suitability::SuitableForModerateInvestors,
                RiskRating::High => Suitability::SuitableForAggressiveInvestorsOnly,
            },
        }
    }
}

/// Simple close-over-close returns, skipping zero denominators.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Population standard deviation; 0.0 for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Largest percentage decline from a running peak. 0.0 when the price
/// never closes below a prior peak.
pub fn max_drawdown(prices: &[f64]) -> f64 {
    let mut peak = match prices.first() {
        Some(p) => *p,
        None => return 0.0,
    };
    let mut max_dd: f64 = 0.0;

    for &price in &prices[1..] {
        if price > peak {
            peak = price;
        } else if peak > 0.0 {
            let drawdown = (peak - price) / peak * 100.0;
            max_dd = max_dd.max(drawdown);
        }
    }

    max_dd
}

fn rate_volatility(volatility_pct: f64) -> RiskRating {
    if volatility_pct < 2.0 {
        RiskRating::Low
    } else if volatility_pct < 5.0 {
        RiskRating::Medium
    } else {
        RiskRating::High
    }
}

fn volatility_band(volatility_pct: f64) -> VolatilityBand {
    if volatility_pct < 2.0 {
        VolatilityBand::LowVolatilityStable
    } else if volatility_pct < 5.0 {
        VolatilityBand::ModerateVolatilityNormal
    } else if volatility_pct < 10.0 {
        VolatilityBand::HighVolatilityRisky
    } else {
        VolatilityBand::VeryHighVolatilitySpeculative
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[async_trait]
impl RiskAnalyzer for RiskAssessor {
    async fn analyze(&self, series: &Series) -> Result<RiskProfile, AnalysisError> {
        self.assess(series)
    }
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new()
    }
}
