//! Bar chart rendering of tick distributions.

use std::io::{self, Write};

use crate::types::TickDistribution;

pub const TICK_AXIS_LABEL: &str = "Tick Number";

/// Width in characters of the longest bar
const BAR_WIDTH: usize = 50;

/// A labelled bar chart with one bar per tick
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_label: String,
    pub categories: Vec<i32>,
    pub values: Vec<f64>,
}

impl BarChart {
    /// Build a chart from `distribution`, keeping its ascending tick order
    pub fn from_distribution(
        distribution: &TickDistribution,
        title: impl Into<String>,
        y_label: impl Into<String>,
        series_label: impl Into<String>,
    ) -> Self {
        let (categories, values) = distribution
            .iter()
            .map(|(tick, value)| (*tick, *value as f64))
            .unzip();

        Self {
            title: title.into(),
            x_label: TICK_AXIS_LABEL.to_string(),
            y_label: y_label.into(),
            series_label: series_label.into(),
            categories,
            values,
        }
    }

    /// Liquidity sampled at the start block
    pub fn liquidity(distribution: &TickDistribution, start_block: u64) -> Self {
        Self::from_distribution(
            distribution,
            format!("Liquidity Distribution at Block {start_block}"),
            "Liquidity",
            "Total Liquidity",
        )
    }

    /// Fee growth sampled at the end block
    pub fn fees(distribution: &TickDistribution, start_block: u64, end_block: u64) -> Self {
        Self::from_distribution(
            distribution,
            format!("Swap Fee Distribution from Block {start_block} to {end_block}"),
            "Fees Accumulated",
            "Fee Distribution",
        )
    }
}

/// Displays a bar chart. Returns once the chart has been shown.
pub trait ChartRenderer {
    fn render_bar_chart(&mut self, chart: &BarChart) -> io::Result<()>;
}

/// Draws charts as horizontal text bars on a writer (stdout by default)
#[derive(Debug)]
pub struct TerminalChartRenderer<W> {
    out: W,
}

impl TerminalChartRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalChartRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TerminalChartRenderer<W> {
    fn render_bar_chart(&mut self, chart: &BarChart) -> io::Result<()> {
        let max_abs = chart
            .values
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let label_width = chart
            .categories
            .iter()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(0)
            .max(chart.x_label.len());

        writeln!(self.out, "{}", "=".repeat(80))?;
        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "{}", "=".repeat(80))?;
        writeln!(
            self.out,
            "{:>label_width$} | {} [{}]",
            chart.x_label, chart.y_label, chart.series_label
        )?;

        for (category, value) in chart.categories.iter().zip(&chart.values) {
            let len = if max_abs > 0.0 {
                ((value.abs() / max_abs) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let glyph = if *value < 0.0 { "-" } else { "#" };
            writeln!(
                self.out,
                "{:>label_width$} | {} {}",
                category,
                glyph.repeat(len),
                value
            )?;
        }

        writeln!(self.out)?;
        self.out.flush()
    }
}
