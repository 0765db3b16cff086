use std::{
    io::{Write, stdout},
    time::Instant,
};

use tracing::{debug, warn};

use crate::{
    core::{
        bounds::{fit_height, fits_width, terminal_geometry},
        color::{AnsiCode, NAMED_COLORS},
        constants::DEFAULT_HEIGHT,
        data::read_values_from_path,
        error::GraphError,
    },
    render::{matrix::PlainChart, style::StyleKind},
};

use super::parse::{ChartArgs, InlineArgs, PlotArgs};

const SAMPLE: [f64; 12] = [3.0, 5.0, 4.0, 7.0, 9.0, 8.0, 6.0, 2.0, 4.0, 6.0, 5.0, 7.0];
const SAMPLE_HEIGHT: usize = 5;

pub fn plot(a: &PlotArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let values = read_values_from_path(&a.file)?;
    debug!(
        values = values.len(),
        elapsed_us = t_ingest.elapsed().as_micros(),
        "read input"
    );
    draw(values, &a.chart)
}

pub fn inline(a: &InlineArgs) -> Result<(), GraphError> {
    draw(a.values.clone(), &a.chart)
}

fn draw(values: Vec<f64>, a: &ChartArgs) -> Result<(), GraphError> {
    let term = terminal_geometry();
    let height = resolve_height(a, term);
    let tint = a.color.as_deref().map(AnsiCode::from_name).transpose()?;

    if !fits_width(term, values.len()) {
        warn!(
            columns = values.len(),
            width = term.0.0,
            "chart is wider than the terminal, rows will wrap"
        );
    }

    let t_build = Instant::now();
    let chart = PlainChart::builder()
        .height(height)
        .style(a.style)
        .build(values)?;
    let separator = unescape(&a.separator);
    let text = match tint {
        Some(c) if !a.style.is_colored() => tinted(&chart, &c, &separator),
        _ => chart.render(&separator),
    };
    debug!(
        style = %a.style,
        elapsed_us = t_build.elapsed().as_micros(),
        "rendered chart"
    );

    let mut out = stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}

fn resolve_height(a: &ChartArgs, term: (terminal_size::Width, terminal_size::Height)) -> usize {
    if !a.fit {
        return a.height.unwrap_or(DEFAULT_HEIGHT);
    }
    let available = fit_height(term);
    match a.height {
        None => available,
        Some(h) if h > available => {
            warn!(requested = h, available, "reducing height to fit the terminal");
            available
        }
        Some(h) => h,
    }
}

/// Paint whole rows so each line carries one colour sequence.
fn tinted(chart: &PlainChart, color: &AnsiCode, separator: &str) -> String {
    chart
        .rows()
        .iter()
        .map(|row| color.paint(&row.concat()))
        .collect::<Vec<_>>()
        .join(separator)
}

fn unescape(s: &str) -> String {
    s.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
}

/// Render every built-in style on a fixed sample series.
pub fn styles() -> Result<(), GraphError> {
    let mut out = stdout().lock();
    for kind in StyleKind::ALL {
        let chart = PlainChart::builder()
            .height(SAMPLE_HEIGHT)
            .style(kind)
            .build(SAMPLE)?;
        writeln!(out, "\n{kind}:\n{chart}")?;
    }

    write!(out, "\nColors for --color:")?;
    for (name, code) in NAMED_COLORS {
        write!(out, " {}", code.paint(name))?;
    }
    writeln!(
        out,
        " {}  (or any other #RRGGBB)\n",
        AnsiCode::rgb(0x50, 0x50, 0x50).paint("#505050")
    )?;
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "plainchart";
    println!(
        "
Example invocations
-------------------
• Inline bars        : {bin} inline 1 2 3
• Scatter, 5 rows    : {bin} inline 4 8 15 16 23 42 --style scatter -H 5
• From a file        : {bin} plot data.txt
• From stdin         : seq 1 20 | {bin} plot -
• Fill the terminal  : {bin} plot data.txt --fit
• Tinted bars        : {bin} plot data.txt --color #6048c1
• Mean split (ANSI)  : {bin} plot data.txt --style mean-ansi
• HTML page fragment : {bin} plot data.txt --style mean-html --separator '<br>\\n'
• Diagnostics        : {bin} plot data.txt --debug
"
    );
}
