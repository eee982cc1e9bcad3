use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::app::state::AppState;

use super::shared::{popup_block, popup_panel_style, state_theme};

/// Error popup drawn over whatever the dashboard last showed.
pub fn render_error(frame: &mut Frame, area: Rect, state: &AppState, message: &str) {
    frame.render_widget(Clear, area);

    let theme = state_theme(state);
    let panel_style = popup_panel_style(theme);
    let block = popup_block("Error", theme, panel_style).border_style(
        Style::default()
            .fg(theme.danger)
            .bg(theme.popup_surface),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "x / Esc dismiss  |  r retry  |  / search",
            Style::default().fg(theme.popup_muted_text),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(panel_style)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

pub fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let theme = state_theme(state);
    let panel_style = popup_panel_style(theme);
    let block = popup_block("Search city", theme, panel_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.accent)),
        Span::styled(state.search_input.clone(), panel_style),
        Span::styled("_", Style::default().fg(theme.accent)),
    ])];
    match &state.search_hint {
        Some(hint) => lines.push(Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(theme.warning),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Enter search  |  Esc cancel",
            Style::default().fg(theme.popup_muted_text),
        ))),
    }
    frame.render_widget(Paragraph::new(lines).style(panel_style), inner);
}
