use advisor_core::{FinancialSnapshot, ProfitabilityTrend, StatementKind};

/// Periods compared when reading the profit trend.
const TREND_PERIODS: usize = 4;

/// Relative change that separates IMPROVING/DECLINING from STABLE.
const TREND_BAND: f64 = 0.1;

/// Revenue reported by the most recent income statement, when positive.
pub fn latest_revenue(snapshot: &FinancialSnapshot) -> Option<f64> {
    snapshot
        .of_kind(StatementKind::Income)
        .next()
        .and_then(|s| s.revenue)
        .filter(|revenue| *revenue > 0.0)
}

/// Direction of net income across up to the last four income
/// statements (most recent first). Statements without a figure count
/// as zero, matching how missing periods are tolerated upstream.
pub fn profitability_trend(snapshot: &FinancialSnapshot) -> ProfitabilityTrend {
    let profits: Vec<f64> = snapshot
        .of_kind(StatementKind::Income)
        .take(TREND_PERIODS)
        .map(|s| s.net_income.unwrap_or(0.0))
        .collect();

    if profits.len() < 2 {
        return ProfitabilityTrend::InsufficientData;
    }

    let recent = profits[0];
    let oldest = profits[profits.len() - 1];

    if recent > oldest * (1.0 + TREND_BAND) {
        ProfitabilityTrend::Improving
    } else if recent < oldest * (1.0 - TREND_BAND) {
        ProfitabilityTrend::Declining
    } else {
        ProfitabilityTrend::Stable
    }
}
