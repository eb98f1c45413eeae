use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, SectionError};

/// One daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default)]
    pub turnover: Option<f64>,
}

impl Bar {
    fn validate(&self) -> Result<(), AnalysisError> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AnalysisError::MalformedInput(format!(
                    "{name} is not a finite number on {}",
                    self.date
                )));
            }
        }
        if let Some(turnover) = self.turnover {
            if !turnover.is_finite() {
                return Err(AnalysisError::MalformedInput(format!(
                    "turnover is not a finite number on {}",
                    self.date
                )));
            }
        }
        Ok(())
    }
}

/// Ordered daily price history, strictly ascending by date.
///
/// Validated once at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    pub fn new(bars: Vec<Bar>) -> Result<Self, AnalysisError> {
        for window in bars.windows(2) {
            if window[1].date <= window[0].date {
                return Err(AnalysisError::MalformedInput(format!(
                    "bar dates must be strictly ascending: {} follows {}",
                    window[1].date, window[0].date
                )));
            }
        }
        for bar in &bars {
            bar.validate()?;
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

impl TryFrom<Vec<Bar>> for Series {
    type Error = AnalysisError;

    fn try_from(bars: Vec<Bar>) -> Result<Self, Self::Error> {
        Series::new(bars)
    }
}

impl From<Series> for Vec<Bar> {
    fn from(series: Series) -> Self {
        series.bars
    }
}

/// Five-way trend classification from recent vs older average closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    StrongUptrend,
    WeakUptrend,
    Neutral,
    WeakDowntrend,
    StrongDowntrend,
}

/// Technical indicator snapshot for the latest bar of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma5: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub price_vs_sma5_pct: f64,
    pub price_vs_sma20_pct: f64,
    pub rsi: f64,
    pub pivot: f64,
    pub resistance1: f64,
    pub support1: f64,
    pub resistance2: f64,
    pub support2: f64,
    pub recent_high: f64,
    pub recent_low: f64,
    pub volume_ratio: f64,
    pub trend: Trend,
}

/// Volatility-derived risk rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

impl RiskRating {
    pub fn score(&self) -> u8 {
        match self {
            RiskRating::Low => 1,
            RiskRating::Medium => 2,
            RiskRating::High => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub volatility_pct: f64,
    pub max_drawdown_pct: f64,
    pub risk_rating: RiskRating,
    pub risk_score: u8,
    pub risk_factors: Vec<String>,
}

/// Directional call attached to a signal or recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MomentumLevel {
    Overbought,
    Oversold,
    Neutral,
}

/// RSI-based momentum signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumSignal {
    pub level: MomentumLevel,
    pub value: f64,
    pub signal: TradeAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Uptrend,
    Downtrend,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendStrength {
    Strong,
    Weak,
    Neutral,
}

/// Trend signal with the price's distance from the 20-day average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSignal {
    pub trend_direction: TrendDirection,
    pub trend_strength: TrendStrength,
    pub price_vs_moving_average: f64,
    pub signal: TradeAction,
}

/// Distances from the nearest pivot-derived levels, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDistances {
    pub support1: f64,
    pub resistance1: f64,
    pub support_distance_pct: f64,
    pub resistance_distance_pct: f64,
}

/// Support/resistance proximity signal. `levels` is absent when the
/// inputs needed to measure proximity are missing or non-positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelsSignal {
    pub signal: TradeAction,
    pub levels: Option<LevelDistances>,
}

/// The three directional signals derived from one indicator set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    pub momentum: MomentumSignal,
    pub trend: TrendSignal,
    pub levels: LevelsSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolatilityBand {
    LowVolatilityStable,
    ModerateVolatilityNormal,
    HighVolatilityRisky,
    VeryHighVolatilitySpeculative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suitability {
    SuitableForConservativeInvestors,
    SuitableForModerateInvestors,
    SuitableForAggressiveInvestorsOnly,
}

/// Qualitative reading of a risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInsight {
    pub risk_level: RiskRating,
    pub volatility_assessment: VolatilityBand,
    pub drawdown_concern: bool,
    pub suitability: Suitability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Strong,
    Moderate,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeHorizon {
    ShortTerm,
    MediumTerm,
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub buy_score: u32,
    pub sell_score: u32,
    pub hold_score: u32,
}

/// Final buy/sell/hold call with the additive score trail behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: TradeAction,
    pub urgency: Urgency,
    pub score_breakdown: ScoreBreakdown,
    pub reasoning: Vec<String>,
    pub time_horizon: TimeHorizon,
}

/// Near-term price targets anchored on pivot levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTargets {
    pub current_price: f64,
    pub upside_target: f64,
    pub downside_target: f64,
    pub upside_pct: f64,
    pub downside_pct: f64,
    pub risk_reward_ratio: f64,
    pub target_timeframe: String,
    pub confidence_level: String,
}

/// Close-over-close move for one day of the weekly window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChange {
    pub date: NaiveDate,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
}

/// Performance over the trailing week (up to the last 7 bars).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPerformance {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_price: f64,
    pub end_price: f64,
    pub weekly_change: f64,
    pub weekly_change_pct: f64,
    pub best_day: Option<DailyChange>,
    pub worst_day: Option<DailyChange>,
    pub volatility_pct: f64,
    pub avg_daily_return_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfitabilityTrend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

/// Kind of periodic financial statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Income,
    Balance,
    CashFlow,
}

/// One periodic financial statement, reduced to the figures the
/// analysis consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub report_date: NaiveDate,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub net_income: Option<f64>,
}

/// Financial statements for one instrument, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub statements: Vec<Statement>,
}

impl FinancialSnapshot {
    pub fn of_kind(&self, kind: StatementKind) -> impl Iterator<Item = &Statement> {
        self.statements.iter().filter(move |s| s.kind == kind)
    }
}

/// Headline figures gathered alongside the technical pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub current_price: f64,
    pub daily_change_pct: Option<f64>,
    pub volume: f64,
    pub weekly_return_pct: Option<f64>,
    pub volatility_pct: Option<f64>,
    pub best_day: Option<DailyChange>,
    pub worst_day: Option<DailyChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profitability_trend: Option<ProfitabilityTrend>,
}

/// A report slice that either computed cleanly or carries the error
/// that stopped it. Sibling sections are unaffected either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ready(T),
    Unavailable { error: SectionError },
}

impl<T> Section<T> {
    pub fn from_result(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(value) => Section::Ready(value),
            Err(err) => Section::Unavailable { error: err.into() },
        }
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            Section::Unavailable { .. } => None,
        }
    }

    pub fn err(&self) -> Option<&SectionError> {
        match self {
            Section::Ready(_) => None,
            Section::Unavailable { error } => Some(error),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready(_))
    }
}

/// Signal and risk readings attached to the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<SignalSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskInsight>,
}

/// Immutable result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub data_summary: DataSummary,
    pub technical_analysis: Section<IndicatorSet>,
    pub risk_assessment: Section<RiskProfile>,
    pub weekly_performance: Section<WeeklyPerformance>,
    pub insights: Insights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_targets: Option<Section<PriceTargets>>,
    pub confidence_score: u8,
}
