use plainchart::{PlainChart, Scatter};
use proptest::prelude::*;

fn series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1_000.0, 1..40)
}

proptest! {
    #[test]
    fn grid_is_height_by_len(values in series(), height in 1usize..60) {
        let chart = PlainChart::new(values.clone(), height).expect("valid chart");
        prop_assert_eq!(chart.rows().len(), height);
        for row in chart.rows() {
            prop_assert_eq!(row.len(), values.len());
        }
    }

    #[test]
    fn maximum_reaches_top_row(values in series(), height in 1usize..60) {
        prop_assume!(values.iter().any(|&v| v > 0.0));
        let chart = PlainChart::new(values.clone(), height).expect("valid chart");
        prop_assert_eq!(chart.scale(chart.max()), height);

        let top = &chart.rows()[0];
        for (cell, &v) in top.iter().zip(&values) {
            if v == chart.max() {
                prop_assert_eq!(&**cell, "▌");
            }
        }
    }

    #[test]
    fn scale_stays_in_range(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..40),
        probe in -5_000.0f64..5_000.0,
        height in 1usize..60,
    ) {
        let chart = PlainChart::new(values, height).expect("valid chart");
        prop_assert!(chart.scale(probe) <= height);
    }

    #[test]
    fn bar_columns_are_solid_from_baseline(values in series(), height in 1usize..30) {
        let chart = PlainChart::new(values.clone(), height).expect("valid chart");
        for (col, &v) in values.iter().enumerate() {
            let filled = chart.scale(v);
            for (i, row) in chart.rows().iter().enumerate() {
                let level = height - i;
                let want = if level <= filled { "▌" } else { " " };
                prop_assert_eq!(&*row[col], want);
            }
        }
    }

    #[test]
    fn scatter_has_at_most_one_marker(values in series(), height in 1usize..30) {
        let chart = PlainChart::with_style(values.clone(), height, &Scatter).expect("valid chart");
        for col in 0..values.len() {
            let markers = chart.rows().iter().filter(|row| row[col] == "×").count();
            let expected = usize::from(chart.scale(values[col]) > 0);
            prop_assert_eq!(markers, expected);
        }
    }

    #[test]
    fn render_is_idempotent(values in series(), height in 1usize..30, sep in "[|,;\n]{0,3}") {
        let chart = PlainChart::new(values, height).expect("valid chart");
        let first = chart.render(&sep);
        prop_assert_eq!(&first, &chart.render(&sep));
        prop_assert_eq!(first, chart.rows().iter().map(|r| r.concat()).collect::<Vec<_>>().join(sep.as_str()));
    }

    #[test]
    fn zero_series_is_blank(len in 1usize..40, height in 1usize..30) {
        let chart = PlainChart::new(vec![0.0; len], height).expect("valid chart");
        prop_assert!(chart.render("").chars().all(|c| c == ' '));
    }
}
