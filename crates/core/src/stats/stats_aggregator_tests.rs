//! Tests for the performance aggregation engine.

#[cfg(test)]
mod tests {
    use crate::stats::{
        calculate_balance_from_trades, classify_result, compute_stats, ResultClass,
    };
    use crate::trades::{TradeDirection, TradeRecord};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ==================== classify_result Tests ====================

    #[test]
    fn test_classify_result_substring_matching() {
        assert_eq!(classify_result("win"), ResultClass::Win);
        assert_eq!(classify_result("WIN"), ResultClass::Win);
        assert_eq!(classify_result("win-partial"), ResultClass::Win);
        assert_eq!(classify_result("loss"), ResultClass::Loss);
        assert_eq!(classify_result("Daily LOSS"), ResultClass::Loss);
        assert_eq!(classify_result("lose"), ResultClass::Loss);
    }

    #[test]
    fn test_classify_result_excludes_everything_else() {
        assert_eq!(classify_result("breakeven"), ResultClass::Other);
        assert_eq!(classify_result(""), ResultClass::Other);
        assert_eq!(classify_result("flat"), ResultClass::Other);
    }

    #[test]
    fn test_classify_result_prefers_win_when_both_match() {
        assert_eq!(classify_result("winloss"), ResultClass::Win);
    }

    // ==================== compute_stats Tests ====================

    #[test]
    fn test_single_winning_trade_worked_example() {
        let initial_balance = dec!(500000);
        let trades = vec![trade("t1", "Win", dec!(52500), dec!(105))];
        let current_balance = calculate_balance_from_trades(initial_balance, &trades);

        let summary = compute_stats(initial_balance, current_balance, &trades);
        assert_eq!(summary.total_trades, 1);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 0);
        assert_eq!(summary.net_profit, dec!(52500));
        assert_eq!(summary.avg_profit, dec!(52500));
        assert_eq!(summary.win_rate, dec!(100));
        assert_eq!(summary.total_pips, dec!(105));
        assert_eq!(summary.avg_pips, dec!(105));
        assert_eq!(summary.largest_win, dec!(52500));
        assert_eq!(summary.largest_loss, dec!(0));
        assert_eq!(summary.profit_factor, dec!(999));
        assert_eq!(summary.current_balance, dec!(552500));
        assert_eq!(summary.roi, dec!(10.50));
    }

    #[test]
    fn test_empty_input_degrades_to_zero() {
        let summary = compute_stats(dec!(500000), dec!(500000), &[]);
        assert_eq!(summary.total_trades, 0);
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.losses, 0);
        assert_eq!(summary.net_profit, Decimal::ZERO);
        assert_eq!(summary.avg_profit, Decimal::ZERO);
        assert_eq!(summary.win_rate, Decimal::ZERO);
        assert_eq!(summary.total_pips, Decimal::ZERO);
        assert_eq!(summary.avg_pips, Decimal::ZERO);
        assert_eq!(summary.roi, Decimal::ZERO);
        assert_eq!(summary.largest_win, Decimal::ZERO);
        assert_eq!(summary.largest_loss, Decimal::ZERO);
        assert_eq!(summary.profit_factor, Decimal::ZERO);
        assert_eq!(summary.initial_balance, dec!(500000));
    }

    #[test]
    fn test_breakeven_excluded_from_both_counts() {
        let trades = vec![
            trade("t1", "win", dec!(100), dec!(10)),
            trade("t2", "breakeven", dec!(0), dec!(0)),
            trade("t3", "loss", dec!(-50), dec!(-5)),
        ];
        let summary = compute_stats(dec!(1000), dec!(1050), &trades);
        assert_eq!(summary.total_trades, 3);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 1);
    }

    #[test]
    fn test_roi_zero_when_initial_balance_not_positive() {
        let trades = vec![trade("t1", "win", dec!(500), dec!(50))];

        let zero_start = compute_stats(dec!(0), dec!(500), &trades);
        assert_eq!(zero_start.roi, Decimal::ZERO);

        let negative_start = compute_stats(dec!(-100), dec!(400), &trades);
        assert_eq!(negative_start.roi, Decimal::ZERO);
    }

    #[test]
    fn test_roi_two_decimal_places() {
        let trades = vec![trade("t1", "win", dec!(1), dec!(1))];
        let summary = compute_stats(dec!(3000), dec!(3001), &trades);
        // 1/3000 * 100 = 0.0333...
        assert_eq!(summary.roi, dec!(0.03));
    }

    #[test]
    fn test_extremes_track_signed_profits() {
        let trades = vec![
            trade("t1", "win", dec!(300), dec!(30)),
            trade("t2", "win", dec!(700), dec!(70)),
            trade("t3", "loss", dec!(-200), dec!(-20)),
            trade("t4", "loss", dec!(-900), dec!(-90)),
        ];
        let summary = compute_stats(dec!(10000), dec!(9900), &trades);
        assert_eq!(summary.largest_win, dec!(700));
        assert_eq!(summary.largest_loss, dec!(-900));
    }

    #[test]
    fn test_extremes_default_to_zero_without_matching_trades() {
        let trades = vec![trade("t1", "breakeven", dec!(0), dec!(0))];
        let summary = compute_stats(dec!(1000), dec!(1000), &trades);
        assert_eq!(summary.largest_win, Decimal::ZERO);
        assert_eq!(summary.largest_loss, Decimal::ZERO);
    }

    #[test]
    fn test_win_rate_rounding() {
        let trades = vec![
            trade("t1", "win", dec!(10), dec!(1)),
            trade("t2", "loss", dec!(-10), dec!(-1)),
            trade("t3", "loss", dec!(-10), dec!(-1)),
        ];
        // 1/3 * 100 = 33.33... rounds to 33
        let summary = compute_stats(dec!(1000), dec!(990), &trades);
        assert_eq!(summary.win_rate, dec!(33));
    }

    #[test]
    fn test_average_rounds_midpoints_away_from_zero() {
        let gains = vec![
            trade("t1", "win", dec!(1), dec!(1)),
            trade("t2", "win", dec!(2), dec!(2)),
        ];
        // avg 1.5 rounds to 2
        assert_eq!(
            compute_stats(dec!(100), dec!(103), &gains).avg_profit,
            dec!(2)
        );

        let losses = vec![
            trade("t1", "loss", dec!(-1), dec!(-1)),
            trade("t2", "loss", dec!(-2), dec!(-2)),
        ];
        // avg -1.5 rounds to -2
        assert_eq!(
            compute_stats(dec!(100), dec!(97), &losses).avg_profit,
            dec!(-2)
        );
    }

    // ==================== profit_factor Tests ====================

    #[test]
    fn test_profit_factor_reduces_to_win_loss_ratio() {
        let trades = vec![
            trade("t1", "win", dec!(400), dec!(40)),
            trade("t2", "win", dec!(500), dec!(50)),
            trade("t3", "loss", dec!(-300), dec!(-30)),
        ];
        // avg_profit = round(600/3) = 200; (2*200)/|1*200| = 2
        let summary = compute_stats(dec!(10000), dec!(10600), &trades);
        assert_eq!(summary.profit_factor, dec!(2));
    }

    #[test]
    fn test_profit_factor_sentinel_with_no_losses() {
        let trades = vec![trade("t1", "win", dec!(100), dec!(10))];
        let summary = compute_stats(dec!(1000), dec!(1100), &trades);
        assert_eq!(summary.profit_factor, dec!(999));
    }

    #[test]
    fn test_profit_factor_zero_with_no_wins() {
        let trades = vec![trade("t1", "loss", dec!(-100), dec!(-10))];
        let summary = compute_stats(dec!(1000), dec!(900), &trades);
        assert_eq!(summary.profit_factor, Decimal::ZERO);
    }

    #[test]
    fn test_profit_factor_guards_zero_average() {
        let trades = vec![
            trade("t1", "win", dec!(100), dec!(10)),
            trade("t2", "loss", dec!(-100), dec!(-10)),
        ];
        // net 0 -> avg_profit 0 -> denominator would be 0; degrades to 0
        let summary = compute_stats(dec!(1000), dec!(1000), &trades);
        assert_eq!(summary.profit_factor, Decimal::ZERO);
    }

    // ==================== Purity Tests ====================

    #[test]
    fn test_compute_stats_is_pure() {
        let trades = vec![
            trade("t1", "win", dec!(300), dec!(30)),
            trade("t2", "loss", dec!(-200), dec!(-20)),
        ];
        let first = compute_stats(dec!(5000), dec!(5100), &trades);
        let second = compute_stats(dec!(5000), dec!(5100), &trades);
        assert_eq!(first, second);
    }

    // ==================== calculate_balance_from_trades Tests ====================

    #[test]
    fn test_balance_reconstruction() {
        let trades = vec![
            trade("t1", "win", dec!(300), dec!(30)),
            trade("t2", "loss", dec!(-200), dec!(-20)),
        ];
        assert_eq!(
            calculate_balance_from_trades(dec!(1000), &trades),
            dec!(1100)
        );
        assert_eq!(calculate_balance_from_trades(dec!(1000), &[]), dec!(1000));
    }

    // ==================== Helper Functions ====================

    fn trade(id: &str, result: &str, profit: Decimal, pips: Decimal) -> TradeRecord {
        TradeRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            instrument: "XAUUSD".to_string(),
            direction: TradeDirection::Buy,
            lot_size: dec!(0.5),
            entry_price: dec!(2031.2),
            stop_price: dec!(2025.0),
            take_profit_price: dec!(2045.0),
            exit_price: dec!(2044.1),
            result: result.to_string(),
            pips,
            profit,
            balance_after: dec!(0),
            risk_reward_ratio: None,
            strategy: None,
            emotion_before: None,
            emotion_after: None,
            screenshot: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
