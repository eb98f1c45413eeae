use advisor_core::{
    Recommendation, RiskProfile, RiskRating, ScoreBreakdown, SignalSet, TimeHorizon, TradeAction,
    Urgency,
};

/// Weekly return beyond +-5% contributes a contrarian factor.
const WEEKLY_RETURN_SWING_PCT: f64 = 5.0;

/// Volatility above this adds to the hold bucket.
const HIGH_VOLATILITY_PCT: f64 = 10.0;

/// Drawdown above this adds to the sell bucket.
const DEEP_DRAWDOWN_PCT: f64 = 20.0;

/// Winning margin that upgrades urgency to STRONG.
const STRONG_MARGIN: u32 = 3;

/// Folds signals, risk and weekly performance into one scored call.
///
/// Scoring is additive over three buckets; factors with unavailable
/// inputs are skipped rather than defaulted.
pub struct RecommendationSynthesizer;

impl RecommendationSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(
        &self,
        signals: Option<&SignalSet>,
        risk: Option<&RiskProfile>,
        weekly_return_pct: Option<f64>,
    ) -> Recommendation {
        let mut scores = ScoreBreakdown::default();
        let mut reasoning = Vec::new();

        if let Some(signals) = signals {
            match signals.momentum.signal {
                TradeAction::Buy => {
                    scores.buy_score += 2;
                    reasoning.push(format!(
                        "RSI indicates oversold conditions ({:.1})",
                        signals.momentum.value
                    ));
                }
                TradeAction::Sell => {
                    scores.sell_score += 2;
                    reasoning.push(format!(
                        "RSI indicates overbought conditions ({:.1})",
                        signals.momentum.value
                    ));
                }
                TradeAction::Hold => scores.hold_score += 1,
            }

            match signals.trend.signal {
                TradeAction::Buy => {
                    scores.buy_score += 3;
                    reasoning.push("Technical trend shows upward momentum".to_string());
                }
                TradeAction::Sell => {
                    scores.sell_score += 3;
                    reasoning.push("Technical trend shows downward momentum".to_string());
                }
                TradeAction::Hold => scores.hold_score += 1,
            }

            match signals.levels.signal {
                TradeAction::Buy => {
                    scores.buy_score += 2;
                    reasoning.push("Price near support level".to_string());
                }
                TradeAction::Sell => {
                    scores.sell_score += 2;
                    reasoning.push("Price near resistance level".to_string());
                }
                TradeAction::Hold => {}
            }
        }

        if let Some(risk) = risk {
            match risk.risk_rating {
                RiskRating::High => {
                    scores.sell_score += 1;
                    reasoning.push("High risk level requires caution".to_string());
                }
                RiskRating::Low => {
                    scores.buy_score += 1;
                    reasoning.push("Low risk profile is favorable".to_string());
                }
                RiskRating::Medium => {}
            }

            if risk.volatility_pct > HIGH_VOLATILITY_PCT {
                scores.hold_score += 1;
                reasoning
                    .push("High volatility suggests waiting for clearer signals".to_string());
            }

            if risk.max_drawdown_pct > DEEP_DRAWDOWN_PCT {
                scores.sell_score += 1;
                reasoning.push(
                    "Large maximum drawdown indicates significant downside risk".to_string(),
                );
            }
        }

        if let Some(weekly_return) = weekly_return_pct {
            if weekly_return < -WEEKLY_RETURN_SWING_PCT {
                scores.buy_score += 1;
                reasoning
                    .push("Recent price decline may present buying opportunity".to_string());
            } else if weekly_return > WEEKLY_RETURN_SWING_PCT {
                scores.sell_score += 1;
                reasoning.push("Recent strong gains suggest taking profits".to_string());
            }
        }

        let (action, urgency) = decide(&scores);
        let time_horizon = match urgency {
            Urgency::Strong => TimeHorizon::ShortTerm,
            Urgency::Moderate | Urgency::Neutral => TimeHorizon::MediumTerm,
        };

        Recommendation {
            action,
            urgency,
            score_breakdown: scores,
            reasoning,
            time_horizon,
        }
    }
}

/// Tie-break rule: an action wins only with a strictly higher score
/// than both other buckets; every tie resolves to HOLD.
pub fn decide(scores: &ScoreBreakdown) -> (TradeAction, Urgency) {
    if scores.buy_score > scores.sell_score && scores.buy_score > scores.hold_score {
        let urgency = if scores.buy_score >= scores.sell_score + STRONG_MARGIN {
            Urgency::Strong
        } else {
            Urgency::Moderate
        };
        (TradeAction::Buy, urgency)
    } else if scores.sell_score > scores.buy_score && scores.sell_score > scores.hold_score {
        let urgency = if scores.sell_score >= scores.buy_score + STRONG_MARGIN {
            Urgency::Strong
        } else {
            Urgency::Moderate
        };
        (TradeAction::Sell, urgency)
    } else {
        (TradeAction::Hold, Urgency::Neutral)
    }
}

impl Default for RecommendationSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
