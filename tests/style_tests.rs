use std::borrow::Cow;

use plainchart::{Cell, ChartView, MeanHighlight, PlainChart, Scatter, StyleKind};

#[test]
fn scatter_places_one_marker_per_column() {
    let chart = PlainChart::with_style(vec![1.0, 2.0, 3.0], 10, &Scatter).expect("valid chart");
    let rows = chart.rows();

    for (col, level) in [(0, 3), (1, 7), (2, 10)] {
        let marked: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row[col] == "×")
            .map(|(i, _)| chart.height() - i)
            .collect();
        assert_eq!(marked, vec![level], "column {col}");
    }
}

fn digits(chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
    if level <= chart.scale(value) {
        Cow::Owned(level.to_string())
    } else {
        Cow::Borrowed(".")
    }
}

fn check_context(chart: &ChartView<'_>, _value: f64, _level: usize) -> Cell {
    assert_eq!(chart.values(), &[2.0, 8.0, 5.0]);
    assert_eq!(chart.height(), 4);
    assert!((chart.max() - 8.0).abs() < f64::EPSILON);
    assert!((chart.mean() - 5.0).abs() < f64::EPSILON);
    Cow::Borrowed(" ")
}

#[test]
fn plain_functions_are_styles() {
    let chart = PlainChart::builder()
        .height(3)
        .style(digits)
        .build([1.0, 3.0])
        .expect("valid chart");
    assert_eq!(chart.render("\n"), ".3\n.2\n11");
}

#[test]
fn view_exposes_chart_context() {
    let chart = PlainChart::with_style(vec![2.0, 8.0, 5.0], 4, &check_context).expect("valid chart");
    assert!(chart.render("").chars().all(|c| c == ' '));
}

#[test]
fn mean_html_splits_columns_at_mean() {
    // mean 5 -> level 2 of 4; scale(2) == 1, scale(8) == 4, scale(5) == 2
    let chart = PlainChart::with_style(vec![2.0, 8.0, 5.0], 4, &MeanHighlight::html())
        .expect("valid chart");
    let green = "<span style=\"color:green\">▌</span>";
    let red = "<span style=\"color:red\">▌</span>";
    let white = "<span style=\"color:white\">▌</span>";

    let expected = [
        [white, red, white].concat(),
        [white, red, white].concat(),
        [green, green, green].concat(),
        [green, green, green].concat(),
    ]
    .join("<br>");
    assert_eq!(chart.render("<br>"), expected);
}

#[test]
fn style_kind_dispatches_to_builtins() {
    let values = vec![1.0, 4.0, 2.0];
    for kind in StyleKind::ALL {
        let via_kind = PlainChart::with_style(values.clone(), 4, &kind).expect("valid chart");
        let direct = match kind {
            StyleKind::Bar => PlainChart::new(values.clone(), 4),
            StyleKind::Scatter => PlainChart::with_style(values.clone(), 4, &Scatter),
            StyleKind::MeanHtml => PlainChart::with_style(values.clone(), 4, &MeanHighlight::html()),
            StyleKind::MeanAnsi => PlainChart::with_style(values.clone(), 4, &MeanHighlight::ansi()),
        }
        .expect("valid chart");
        assert_eq!(via_kind, direct, "{kind}");
    }
}

#[test]
fn mean_ansi_leaves_background_blank() {
    let chart =
        PlainChart::with_style(vec![0.0, 4.0], 2, &MeanHighlight::ansi()).expect("valid chart");
    // mean 2 -> level 1; column 0 is floored to the mean, column 1 rises above it
    let rows = chart.rows();
    assert_eq!(rows[0][0], " ");
    assert_eq!(rows[0][1], "\x1b[31m▌\x1b[0m");
    assert_eq!(rows[1][0], "\x1b[32m▌\x1b[0m");
    assert_eq!(rows[1][1], "\x1b[32m▌\x1b[0m");
}
