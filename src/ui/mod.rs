pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState, InputMode},
    ui::theme::{detect_color_capability, theme_for},
};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 20;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("weatherwise"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_status_line(frame, chunks[0], state);
    widgets::current::render(frame, chunks[1], state);
    widgets::forecast::render(frame, chunks[2], state);
    widgets::charts::render(frame, chunks[3], state);

    if let (AppMode::Error, Some(message)) = (state.mode, &state.last_error) {
        widgets::overlays::render_error(frame, centered_rect(60, 30, area), state, message);
    }
    if state.input_mode == InputMode::Search {
        widgets::overlays::render_search(frame, centered_rect(50, 20, area), state);
    }
    if state.help_open {
        widgets::help::render(frame, centered_rect(70, 60, area), state);
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let condition = state.dashboard.as_ref().map(|d| d.current.condition);
    let theme = theme_for(condition, detect_color_capability());

    let mut spans = vec![
        Span::styled(
            " WeatherWise ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ {} ", state.query.label()),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("│ {} ", state.units.temp_suffix()),
            Style::default().fg(theme.muted_text),
        ),
    ];
    if state.mode == AppMode::Loading {
        spans.push(Span::styled(
            format!("│ {} ", state.loading_message),
            Style::default().fg(theme.warning),
        ));
    }
    if !state.page_visible {
        spans.push(Span::styled(
            "│ paused ",
            Style::default().fg(theme.muted_text),
        ));
    }
    spans.push(Span::styled(
        "│ ? help",
        Style::default().fg(theme.muted_text),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
