#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use crossterm::event::KeyCode;

    use crate::{
        app::App,
        error::StockError,
        models::Stock,
        plot::{
            Figure, FigureKind, PerformanceCurve, PlotTheme, capability, format_percent,
            histogram, percent_decimals,
        },
    };

    fn sample_stock(symbol: &str) -> Stock {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let closes = (0..40)
            .map(|i| {
                (
                    start + Duration::days(i),
                    100.0 + (i as f64 * 0.4).sin() * 6.0 + i as f64 * 0.2,
                )
            })
            .collect();
        Stock::from_closes(symbol, None, None, closes).unwrap()
    }

    #[test]
    fn histogram_counts_every_value_once() {
        let values = [-0.02, -0.005, 0.001, 0.004, 0.013, 0.02];
        let bins = histogram(&values, 4).unwrap();

        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|bin| *bin.count()).sum::<usize>(), values.len());
        assert_eq!(*bins[0].lower(), -0.02);
        assert_eq!(*bins[3].upper(), 0.02);
        // the maximum falls into the closed last bucket
        assert_eq!(*bins[3].count(), 2);
        assert_eq!(*bins[0].count(), 1);
    }

    #[test]
    fn values_on_computed_edges_match_numpy_buckets() {
        let values = [-0.0175, 0.0005, 0.005, 0.0048, -0.0024, 0.0006];
        let bins = histogram(&values, 10).unwrap();

        let counts: Vec<usize> = bins.iter().map(|bin| *bin.count()).collect();
        assert_eq!(counts, vec![1, 0, 0, 0, 0, 0, 1, 1, 1, 2]);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].upper(), pair[1].lower());
        }
    }

    #[test]
    fn histogram_of_identical_values_is_widened() {
        let bins = histogram(&[0.01, 0.01, 0.01], 5).unwrap();

        assert!((bins[0].lower() - (0.01 - 0.5)).abs() < 1e-12);
        assert!((bins[4].upper() - (0.01 + 0.5)).abs() < 1e-12);
        assert_eq!(*bins[2].count(), 3);
    }

    #[test]
    fn histogram_rejects_degenerate_input() {
        assert_eq!(histogram(&[0.1], 0), Err(StockError::InvalidBins));
        assert_eq!(histogram(&[], 10), Err(StockError::NoReturns));
        assert_eq!(histogram(&[f64::NAN], 10), Err(StockError::NoReturns));
    }

    #[test]
    fn percentages_follow_axis_span() {
        assert_eq!(percent_decimals(0.0), 0);
        assert_eq!(percent_decimals(2.0), 0);
        assert_eq!(percent_decimals(0.08), 1);
        assert_eq!(percent_decimals(0.006), 2);

        assert_eq!(format_percent(0.25, 0), "25%");
        assert_eq!(format_percent(-0.0125, 2), "-1.25%");
        assert_eq!(format_percent(-0.00001, 1), "0.0%");
    }

    #[test]
    fn figures_are_named_after_symbol_and_kind() {
        let stock = sample_stock(" msft ");
        let dist = stock.plot_return_dist(50).unwrap();
        let performance = stock.plot_performance().unwrap();

        assert_eq!(dist.file_name(), "MSFT_return_dist.png");
        assert_eq!(performance.file_name(), "MSFT_performance.png");
        assert_eq!(dist.title(), "MSFT: Daily Log Return Distribution");
        assert_eq!(performance.title(), "MSFT: Performance Over Period");
        assert_eq!(dist.x_label(), "Daily log return");
        assert_eq!(performance.y_label(), "Cumulative return");
    }

    #[test]
    fn performance_is_laid_out_by_calendar_days() {
        let friday = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let curve =
            PerformanceCurve::new("MSFT", vec![(friday, 0.0), (monday, 0.02), (tuesday, 0.01)])
                .unwrap();

        assert_eq!(curve.date_range(), (friday, tuesday));
        assert_eq!(curve.day_offsets(), vec![(0.0, 0.0), (3.0, 0.02), (4.0, 0.01)]);
    }

    #[test]
    fn single_day_performance_spans_one_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let curve = PerformanceCurve::new("MSFT", vec![(day, 0.0)]).unwrap();

        assert_eq!(curve.date_range(), (day, day + Duration::days(1)));
        assert_eq!(curve.day_offsets(), vec![(0.0, 0.0)]);
    }

    #[test]
    fn theme_sizes_scale_with_dpi() {
        let theme = PlotTheme::default();

        assert_eq!(*theme.dpi(), 200);
        assert_eq!(theme.pixels(FigureKind::ReturnDist.size()), (1800, 1000));
        assert_eq!(theme.pixels(FigureKind::Performance.size()), (2000, 1000));
        assert_eq!(theme.with_dpi(100).pixels((10.0, 5.0)), (1000, 500));
    }

    #[test]
    fn saves_both_figures_as_png() {
        let theme = PlotTheme::default().with_dpi(50);
        if capability::check(&theme).is_err() {
            eprintln!("skipping: no chart font available");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let stock = sample_stock("msft");

        for figure in [stock.plot_return_dist(20).unwrap(), stock.plot_performance().unwrap()] {
            let path = dir.path().join(figure.file_name());
            figure.save(&path, &theme).unwrap();

            let bytes = std::fs::read(&path).unwrap();
            assert_eq!(&bytes[1..4], b"PNG");
        }
    }

    #[test]
    fn missing_font_is_a_capability_error() {
        let theme = PlotTheme::default().with_font_family("no-such-font-family-for-charts");

        // font lookup may fall back to a default face on some hosts
        if let Err(err) = capability::check(&theme) {
            assert!(matches!(err, StockError::MissingCapability(_)));
            assert!(err.to_string().contains("no-such-font-family-for-charts"));
        }
    }

    #[test]
    fn viewer_orders_tabs_and_wraps_around() {
        let stock = sample_stock("msft");
        let mut app = App::new(vec![
            stock.plot_return_dist(10).unwrap(),
            stock.plot_performance().unwrap(),
        ]);

        assert!(matches!(app.figures()[0], Figure::Performance(_)));
        assert!(matches!(app.figures()[1], Figure::ReturnDist(_)));
        assert_eq!(app.selected(), 0);

        assert!(!app.handle_key(KeyCode::Tab));
        assert_eq!(app.selected(), 1);
        assert!(!app.handle_key(KeyCode::Right));
        assert_eq!(app.selected(), 0);
        assert!(!app.handle_key(KeyCode::Left));
        assert_eq!(app.selected(), 1);

        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }
}
