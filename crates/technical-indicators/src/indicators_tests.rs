#[cfg(test)]
mod tests {
    use super::super::calculator::*;
    use super::super::indicators::*;
    use advisor_core::{AnalysisError, Bar, Series, Trend};
    use chrono::NaiveDate;

    // Helper to build a validated series from close prices
    fn series_from_closes(closes: &[f64]) -> Series {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                date: start + chrono::Duration::days(i as i64),
                open: close,
                high: close + 0.5,
                low: close - 0.5,
                close,
                volume: 1_000_000.0,
                turnover: None,
            })
            .collect();
        Series::new(bars).unwrap()
    }

    fn linear_closes(start: f64, step: f64, count: usize) -> Vec<f64> {
        (0..count).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn test_sma_last_full_window() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((sma_last(&data, 3) - 4.0).abs() < 1e-9); // (3+4+5)/3
    }

    #[test]
    fn test_sma_last_degrades_to_all_values() {
        let data = vec![2.0, 4.0];
        assert!((sma_last(&data, 20) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_neutral_below_window() {
        let data = linear_closes(100.0, 1.0, 10);
        assert_eq!(rsi(&data, 14), 50.0);
    }

    #[test]
    fn test_rsi_is_100_for_monotonic_rise() {
        let data = linear_closes(100.0, 1.0, 20);
        assert_eq!(rsi(&data, 14), 100.0);
    }

    #[test]
    fn test_rsi_is_0_for_monotonic_fall() {
        let data = linear_closes(100.0, -1.0, 20);
        assert_eq!(rsi(&data, 14), 0.0);
    }

    #[test]
    fn test_rsi_bounded() {
        let data = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ];
        let value = rsi(&data, 14);
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn test_pivot_levels_classic_formula() {
        let highs = vec![10.0; 10];
        let lows = vec![8.0; 10];
        let levels = pivot_levels(&highs, &lows, 9.0, 10);

        // pivot = (10 + 8 + 9) / 3 = 9
        assert_eq!(levels.pivot, 9.0);
        assert_eq!(levels.resistance1, 10.0); // 2*9 - 8
        assert_eq!(levels.support1, 8.0); // 2*9 - 10
        assert_eq!(levels.resistance2, 11.0); // 9 + 2
        assert_eq!(levels.support2, 7.0); // 9 - 2
        assert_eq!(levels.recent_high, 10.0);
        assert_eq!(levels.recent_low, 8.0);
    }

    #[test]
    fn test_pivot_levels_use_only_recent_bars() {
        let mut highs = vec![100.0; 5];
        highs.extend(vec![10.0; 10]);
        let mut lows = vec![1.0; 5];
        lows.extend(vec![8.0; 10]);
        let levels = pivot_levels(&highs, &lows, 9.0, 10);

        // The 100/1 extremes sit outside the 10-bar lookback
        assert_eq!(levels.recent_high, 10.0);
        assert_eq!(levels.recent_low, 8.0);
    }

    #[test]
    fn test_volume_ratio_against_average() {
        let volumes = vec![100.0, 100.0, 100.0, 200.0];
        // avg = 125, last = 200
        assert!((volume_ratio(&volumes, 20) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_volume_ratio_defaults_on_zero_average() {
        let volumes = vec![0.0, 0.0, 0.0];
        assert_eq!(volume_ratio(&volumes, 20), 1.0);
    }

    #[test]
    fn test_trend_strong_uptrend() {
        // Last 5 average well above the previous 5
        let closes = linear_closes(100.0, 2.0, 10);
        assert_eq!(classify_trend(&closes), Trend::StrongUptrend);
    }

    #[test]
    fn test_trend_weak_downtrend() {
        // Gentle drift down, under the 2% strength threshold
        let closes = linear_closes(100.0, -0.1, 10);
        assert_eq!(classify_trend(&closes), Trend::WeakDowntrend);
    }

    #[test]
    fn test_trend_neutral_when_flat_or_short() {
        assert_eq!(classify_trend(&[100.0; 12]), Trend::Neutral);
        assert_eq!(classify_trend(&[100.0, 101.0, 102.0]), Trend::Neutral);
        // Exactly 5 closes leave nothing to compare against
        assert_eq!(classify_trend(&linear_closes(100.0, 1.0, 5)), Trend::Neutral);
    }

    #[test]
    fn test_calculator_rejects_fewer_than_five_bars() {
        let series = series_from_closes(&[100.0, 101.0, 102.0]);
        let result = IndicatorCalculator::new().compute(&series);
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientData { needed: 5, available: 3 })
        ));
    }

    #[test]
    fn test_calculator_degrades_smas_below_full_window() {
        let closes = linear_closes(100.0, 1.0, 8);
        let series = series_from_closes(&closes);
        let set = IndicatorCalculator::new().compute(&series).unwrap();

        // sma20/sma50 fall back to the mean of all 8 closes
        let all_mean = closes.iter().sum::<f64>() / closes.len() as f64;
        assert!((set.sma20 - all_mean).abs() < 1e-9);
        assert!((set.sma50 - all_mean).abs() < 1e-9);
        // Too short for a full RSI window
        assert_eq!(set.rsi, 50.0);
    }

    #[test]
    fn test_calculator_thirty_bar_uptrend_scenario() {
        // Closes rise 100.00 -> 129.00 at 1.00/day, highs/lows = close +/- 0.5
        let series = series_from_closes(&linear_closes(100.0, 1.0, 30));
        let set = IndicatorCalculator::new().compute(&series).unwrap();

        assert!((set.sma5 - 127.0).abs() < 1e-9);
        assert!((set.sma20 - 119.5).abs() < 1e-9);
        assert_eq!(set.rsi, 100.0);
        assert_eq!(set.trend, Trend::StrongUptrend);

        // Last 10 bars: highs 120.5..129.5, lows 119.5..128.5
        assert_eq!(set.recent_high, 129.5);
        assert_eq!(set.recent_low, 119.5);
        assert_eq!(set.pivot, 126.0); // (129.5 + 119.5 + 129) / 3
        assert_eq!(set.resistance1, 132.5);
        assert_eq!(set.support1, 122.5);
        assert_eq!(set.resistance2, 136.0);
        assert_eq!(set.support2, 116.0);

        // Constant volume
        assert!((set.volume_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculator_is_idempotent() {
        let series = series_from_closes(&linear_closes(50.0, 0.3, 25));
        let calculator = IndicatorCalculator::new();
        let first = calculator.compute(&series).unwrap();
        let second = calculator.compute(&series).unwrap();
        assert_eq!(first, second);
    }
}
