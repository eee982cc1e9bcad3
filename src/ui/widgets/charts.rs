use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::digest::ChartSeries,
    ui::{layout::charts_side_by_side, theme::Theme},
};

use super::shared::{panel_block, state_theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state_theme(state);
    let Some(dashboard) = &state.dashboard else {
        frame.render_widget(panel_block("Next 24 Hours", theme), area);
        return;
    };
    let series = &dashboard.chart;
    if series.is_empty() {
        let block = panel_block("Next 24 Hours", theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("No hourly data").style(Style::default().fg(theme.muted_text)),
            inner,
        );
        return;
    }

    let [temp_area, humidity_area] = if charts_side_by_side(area.width) {
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area)
    } else {
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area)
    };

    render_temperature(frame, temp_area, series, dashboard.units.temp_suffix(), theme);
    render_humidity(frame, humidity_area, series, theme);
}

fn render_temperature(
    frame: &mut Frame,
    area: Rect,
    series: &ChartSeries,
    suffix: &str,
    theme: Theme,
) {
    let points = temperature_points(series);
    let (low, high) = series.temperature_bounds().unwrap_or((0, 0));
    let y_bounds = [f64::from(low) - 1.0, f64::from(high) + 1.0];
    let x_max = series.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name(format!("Temperature ({suffix})"))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.temperature))
            .data(&points),
    ];

    let chart = Chart::new(datasets)
        .block(panel_block("Temperature", theme))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.muted_text))
                .bounds([0.0, x_max])
                .labels(axis_labels(&series.labels)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.muted_text))
                .bounds(y_bounds)
                .labels([format!("{low}{suffix}"), format!("{high}{suffix}")]),
        );
    frame.render_widget(chart, area);
}

fn render_humidity(frame: &mut Frame, area: Rect, series: &ChartSeries, theme: Theme) {
    let bars = series
        .labels
        .iter()
        .zip(&series.humidity)
        .map(|(label, humidity)| {
            Bar::default()
                .value(u64::from(*humidity))
                .label(Line::from(label.clone()))
                .text_value(format!("{humidity}%"))
                .style(Style::default().fg(theme.humidity))
                .value_style(
                    Style::default()
                        .fg(theme.popup_surface)
                        .bg(theme.humidity)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect::<Vec<_>>();

    let inner_width = area.width.saturating_sub(2);
    let count = u16::try_from(bars.len()).unwrap_or(u16::MAX).max(1);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(3, 8);

    let chart = BarChart::default()
        .block(panel_block("Humidity (%)", theme))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);
    frame.render_widget(chart, area);
}

fn temperature_points(series: &ChartSeries) -> Vec<(f64, f64)> {
    series
        .temperatures
        .iter()
        .enumerate()
        .map(|(idx, temp)| (idx as f64, f64::from(*temp)))
        .collect()
}

/// First, middle and last label; the axis spreads them evenly.
fn axis_labels(labels: &[String]) -> Vec<String> {
    match labels {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        [first, .., last] => {
            let middle = &labels[labels.len() / 2];
            if labels.len() > 2 {
                vec![first.clone(), middle.clone(), last.clone()]
            } else {
                vec![first.clone(), last.clone()]
            }
        }
    }
}
