use advisor_core::{
    AnalysisError, DataSummary, FinancialSnapshot, IndicatorAnalyzer, IndicatorSet, Insights,
    Report, RiskAnalyzer, Section, Series,
};
use chrono::Utc;
use recommendation_engine::{
    ConfidenceScorer, PriceTargetGenerator, RecommendationSynthesizer, SignalInterpreter,
};
use risk_assessment::RiskAssessor;
use technical_indicators::IndicatorCalculator;

pub mod fundamentals;
pub mod weekly;


/// Computes the indicator snapshot for a series without assembling a
/// full report.
pub fn compute_indicators(series: &Series) -> Result<IndicatorSet, AnalysisError> {
    IndicatorCalculator::new().compute(series)
}

/// Runs the full analysis pipeline and assembles one immutable report.
///
/// Stage failures are recovered into per-section error markers; only an
/// empty series fails the whole run.
pub struct ReportAssembler {
    indicators: IndicatorCalculator,
    risk: RiskAssessor,
    interpreter: SignalInterpreter,
    synthesizer: RecommendationSynthesizer,
    targets: PriceTargetGenerator,
    confidence: ConfidenceScorer,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self {
            indicators: IndicatorCalculator::new(),
            risk: RiskAssessor::new(),
            interpreter: SignalInterpreter::new(),
            synthesizer: RecommendationSynthesizer::new(),
            targets: PriceTargetGenerator::new(),
            confidence: ConfidenceScorer::new(),
        }
    }

    pub async fn analyze(
        &self,
        series: &Series,
        snapshot: Option<&FinancialSnapshot>,
        include_recommendation: bool,
    ) -> Result<Report, AnalysisError> {
        if series.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }

        tracing::info!(
            bars = series.len(),
            include_recommendation,
            "starting analysis run"
        );

        // Indicators and risk have no data dependency on each other
        let (indicators_result, risk_result) = tokio::join!(
            IndicatorAnalyzer::analyze(&self.indicators, series),
            RiskAnalyzer::analyze(&self.risk, series),
        );

        if let Err(err) = &indicators_result {
            tracing::warn!(%err, "technical analysis unavailable");
        }
        if let Err(err) = &risk_result {
            tracing::warn!(%err, "risk assessment unavailable");
        }

        let weekly_result = weekly::weekly_performance(series);
        let summary = self.build_summary(series, weekly_result.as_ref().ok(), snapshot);

        let technical = Section::from_result(indicators_result);
        let risk = Section::from_result(risk_result);
        let weekly = Section::from_result(weekly_result);

        let insights = Insights {
            technical: technical
                .ok()
                .map(|set| self.interpreter.interpret(set, summary.current_price)),
            risk: risk.ok().map(|profile| self.risk.interpret(profile)),
        };

        let (recommendation, price_targets, confidence_score) = if include_recommendation {
            let recommendation = self.synthesizer.synthesize(
                insights.technical.as_ref(),
                risk.ok(),
                summary.weekly_return_pct,
            );
            let price_targets =
                Section::from_result(self.targets.generate(summary.current_price, technical.ok()));
            let confidence_score =
                self.confidence
                    .score(Some(&summary), technical.ok(), risk.ok());
            (Some(recommendation), Some(price_targets), confidence_score)
        } else {
            (None, None, 0)
        };

        tracing::debug!(
            technical = technical.is_ready(),
            risk = risk.is_ready(),
            confidence_score,
            "analysis run assembled"
        );

        Ok(Report {
            generated_at: Utc::now(),
            data_summary: summary,
            technical_analysis: technical,
            risk_assessment: risk,
            weekly_performance: weekly,
            insights,
            recommendation,
            price_targets,
            confidence_score,
        })
    }

    fn build_summary(
        &self,
        series: &Series,
        weekly: Option<&advisor_core::WeeklyPerformance>,
        snapshot: Option<&FinancialSnapshot>,
    ) -> DataSummary {
        let bars = series.bars();
        let last = &bars[bars.len() - 1];

        let daily_change_pct = if bars.len() >= 2 {
            let prev = bars[bars.len() - 2].close;
            (prev != 0.0).then(|| (last.close - prev) / prev * 100.0)
        } else {
            None
        };

        DataSummary {
            current_price: last.close,
            daily_change_pct,
            volume: last.volume,
            weekly_return_pct: weekly.map(|w| w.weekly_change_pct),
            volatility_pct: weekly.map(|w| w.volatility_pct),
            best_day: weekly.and_then(|w| w.best_day.clone()),
            worst_day: weekly.and_then(|w| w.worst_day.clone()),
            latest_revenue: snapshot.and_then(fundamentals::latest_revenue),
            profitability_trend: snapshot.map(fundamentals::profitability_trend),
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
