use advisor_core::{
    IndicatorSet, LevelDistances, LevelsSignal, MomentumLevel, MomentumSignal, SignalSet,
    TradeAction, Trend, TrendDirection, TrendSignal, TrendStrength,
};

/// RSI at or above this reads as overbought.
const RSI_OVERBOUGHT: f64 = 70.0;

/// RSI at or below this reads as oversold.
const RSI_OVERSOLD: f64 = 30.0;

/// Price within this percent of a level counts as "near" it.
const LEVEL_PROXIMITY_PCT: f64 = 2.0;

/// Maps an indicator set to the three directional signals. Pure, no I/O.
pub struct SignalInterpreter;

impl SignalInterpreter {
    pub fn new() -> Self {
        Self
    }

    pub fn interpret(&self, indicators: &IndicatorSet, current_price: f64) -> SignalSet {
        SignalSet {
            momentum: self.momentum(indicators.rsi),
            trend: self.trend(indicators.trend, indicators.price_vs_sma20_pct),
            levels: self.levels(current_price, indicators.support1, indicators.resistance1),
        }
    }

    pub fn momentum(&self, rsi: f64) -> MomentumSignal {
        let (level, signal) = if rsi >= RSI_OVERBOUGHT {
            (MomentumLevel::Overbought, TradeAction::Sell)
        } else if rsi <= RSI_OVERSOLD {
            (MomentumLevel::Oversold, TradeAction::Buy)
        } else {
            (MomentumLevel::Neutral, TradeAction::Hold)
        };
        MomentumSignal {
            level,
            value: rsi,
            signal,
        }
    }

    pub fn trend(&self, trend: Trend, price_vs_sma20_pct: f64) -> TrendSignal {
        let (trend_direction, trend_strength, signal) = match trend {
            Trend::StrongUptrend => {
                (TrendDirection::Uptrend, TrendStrength::Strong, TradeAction::Buy)
            }
            Trend::WeakUptrend => {
                (TrendDirection::Uptrend, TrendStrength::Weak, TradeAction::Buy)
            }
            Trend::Neutral => {
                (TrendDirection::Neutral, TrendStrength::Neutral, TradeAction::Hold)
            }
            Trend::WeakDowntrend => {
                (TrendDirection::Downtrend, TrendStrength::Weak, TradeAction::Sell)
            }
            Trend::StrongDowntrend => {
                (TrendDirection::Downtrend, TrendStrength::Strong, TradeAction::Sell)
            }
        };
        TrendSignal {
            trend_direction,
            trend_strength,
            price_vs_moving_average: round2(price_vs_sma20_pct),
            signal,
        }
    }

    pub fn levels(&self, current_price: f64, support1: f64, resistance1: f64) -> LevelsSignal {
        if current_price <= 0.0 || support1 <= 0.0 || resistance1 <= 0.0 {
            return LevelsSignal {
                signal: TradeAction::Hold,
                levels: None,
            };
        }

        let support_distance_pct = (current_price - support1) / support1 * 100.0;
        let resistance_distance_pct = (resistance1 - current_price) / current_price * 100.0;

        let signal = if support_distance_pct < LEVEL_PROXIMITY_PCT {
            TradeAction::Buy
        } else if resistance_distance_pct < LEVEL_PROXIMITY_PCT {
            TradeAction::Sell
        } else {
            TradeAction::Hold
        };

        LevelsSignal {
            signal,
            levels: Some(LevelDistances {
                support1,
                resistance1,
                support_distance_pct: round2(support_distance_pct),
                resistance_distance_pct: round2(resistance_distance_pct),
            }),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Default for SignalInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
