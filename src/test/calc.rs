#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use crate::app::calc::{calc_returns, round_dp};

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap() + Duration::days(offset)
    }

    fn series(closes: &[f64]) -> Vec<(NaiveDate, f64)> {
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| (day(i as i64), *close))
            .collect()
    }

    #[test]
    fn three_day_series_matches_hand_computed_returns() {
        let rows = calc_returns(&series(&[100.0, 110.0, 99.0]));

        assert_eq!(rows.len(), 3);
        assert_eq!(*rows[0].instant_return(), None);
        assert_eq!(*rows[1].instant_return(), Some(0.0953));
        assert_eq!(*rows[2].instant_return(), Some(-0.1054));

        assert_eq!(*rows[0].change(), None);
        assert!((rows[1].change().unwrap() - 10.0).abs() < 1e-12);
        assert!((rows[2].change().unwrap() + 11.0).abs() < 1e-12);

        assert_eq!(*rows[0].cum_return(), 0.0);
        assert!((rows[1].cum_return() - (0.0953f64.exp() - 1.0)).abs() < 1e-12);
        assert!((rows[1].cum_return() - 0.0999).abs() < 1e-4);
        assert!((rows[2].cum_return() - (-0.0101f64).exp() + 1.0).abs() < 1e-12);
        assert!((rows[2].cum_return() + 0.01).abs() < 1e-3);
    }

    #[test]
    fn first_row_is_undefined_and_the_rest_are_defined() {
        let closes: Vec<f64> = (0..20).map(|i| 50.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let rows = calc_returns(&series(&closes));

        let changes = rows.iter().filter(|row| row.change().is_some()).count();
        let returns = rows.iter().filter(|row| row.instant_return().is_some()).count();

        assert_eq!(changes, closes.len() - 1);
        assert_eq!(returns, closes.len() - 1);
        assert!(rows.iter().all(|row| row.cum_return().is_finite()));
        assert_eq!(*rows[0].cum_return(), 0.0);
    }

    #[test]
    fn cum_return_tracks_unrounded_growth_within_rounding_error() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 * (1.0 + 0.003 * i as f64) + (i as f64 * 1.3).cos() * 2.0)
            .collect();
        let rows = calc_returns(&series(&closes));

        let tolerance = closes.len() as f64 * 0.5e-4 * 2.0;
        for (row, close) in rows.iter().zip(closes.iter()) {
            let exact = close / closes[0] - 1.0;
            assert!(
                (row.cum_return() - exact).abs() < tolerance,
                "{} vs {}",
                row.cum_return(),
                exact
            );
        }
    }

    #[test]
    fn empty_and_single_row_series() {
        assert!(calc_returns(&[]).is_empty());

        let rows = calc_returns(&series(&[42.0]));
        assert_eq!(rows.len(), 1);
        assert_eq!(*rows[0].instant_return(), None);
        assert_eq!(*rows[0].cum_return(), 0.0);
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(round_dp(2.5, 0), 2.0);
        assert_eq!(round_dp(3.5, 0), 4.0);
        assert_eq!(round_dp(0.12344, 4), 0.1234);
        assert_eq!(round_dp(-0.10536, 4), -0.1054);
    }
}
