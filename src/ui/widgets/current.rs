use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::{
        dashboard::CurrentPanel,
        state::{AppMode, AppState},
    },
    domain::weather::condition_glyph,
    ui::theme::{Theme, icon_color},
};

use super::shared::{panel_block, state_theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state_theme(state);
    let block = panel_block("Current", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match &state.dashboard {
        Some(dashboard) => panel_lines(&dashboard.current, state, theme),
        None => placeholder_lines(state, theme),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn panel_lines(panel: &CurrentPanel, state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted_text);
    let value = Style::default().fg(theme.text);
    let detail = |name: &'static str, text: &str| {
        [
            Span::styled(format!("{name} "), label),
            Span::styled(format!("{text}   "), value),
        ]
    };

    let mut headline = vec![
        Span::styled(
            format!("{} ", condition_glyph(panel.condition, state.icon_mode)),
            Style::default().fg(icon_color(&theme, panel.condition)),
        ),
        Span::styled(
            panel.location.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    headline.push(Span::styled(format!("  {}", panel.description), label));

    vec![
        Line::from(headline),
        Line::from(Span::styled(
            panel.temp.clone(),
            Style::default()
                .fg(theme.temperature)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(
            [
                detail("Feels like", &panel.feels_like),
                detail("Humidity", &panel.humidity),
                detail("Wind", &panel.wind),
            ]
            .concat(),
        ),
        Line::from(
            [
                detail("Pressure", &panel.pressure),
                detail("Visibility", &panel.visibility),
            ]
            .concat(),
        ),
        Line::from(
            [
                detail("Sunrise", &panel.sunrise),
                detail("Sunset", &panel.sunset),
                detail("Updated", &panel.updated),
            ]
            .concat(),
        ),
    ]
}

fn placeholder_lines(state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.muted_text);
    if state.mode == AppMode::Loading {
        return vec![Line::from(Span::styled(
            state.loading_message.clone(),
            Style::default().fg(theme.accent),
        ))];
    }
    vec![
        Line::from(Span::styled("No weather loaded yet.", muted)),
        Line::from(Span::styled(
            "Press / to search for a city or l to use your location.",
            muted,
        )),
    ]
}
