use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::{
    app::state::AppState,
    ui::theme::{Theme, detect_color_capability, theme_for},
};

pub(super) fn state_theme(state: &AppState) -> Theme {
    let condition = state.dashboard.as_ref().map(|d| d.current.condition);
    theme_for(condition, detect_color_capability())
}

pub(super) fn panel_block(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
}

pub(super) fn popup_panel_style(theme: Theme) -> Style {
    Style::default()
        .fg(theme.popup_text)
        .bg(theme.popup_surface)
}

pub(super) fn popup_block(title: &'static str, theme: Theme, panel_style: Style) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(panel_style)
        .border_style(
            Style::default()
                .fg(theme.popup_border)
                .bg(theme.popup_surface),
        )
}
