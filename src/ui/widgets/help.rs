use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::{app::state::AppState, ui::theme::Theme};

use super::shared::{popup_block, popup_panel_style, state_theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let theme = state_theme(state);
    let panel_style = popup_panel_style(theme);
    let block = popup_block("Help", theme, panel_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(help_lines(theme, state.refresh_interval_secs()))
        .style(panel_style)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}

fn help_lines(theme: Theme, refresh_secs: u64) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_section(
        &mut lines,
        theme,
        "Location",
        [
            "/ or s search for a city  |  Enter submit  |  Esc cancel",
            "l use your current location",
        ],
    );
    push_section(
        &mut lines,
        theme,
        "Data",
        [
            "r refresh now  |  u switch °C / °F",
            "x or Esc dismiss an error",
        ],
    );
    lines.push(section_title_line(theme, "Auto Refresh"));
    lines.push(Line::from(format!(
        "Every {} while the terminal has focus",
        interval_label(refresh_secs)
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "q quit  |  Esc / ? / F1 closes this help",
        Style::default()
            .fg(theme.popup_muted_text)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

fn push_section<const N: usize>(
    lines: &mut Vec<Line<'static>>,
    theme: Theme,
    title: &'static str,
    body: [&'static str; N],
) {
    lines.push(section_title_line(theme, title));
    lines.extend(body.into_iter().map(Line::from));
    lines.push(Line::from(""));
}

fn section_title_line(theme: Theme, title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn interval_label(secs: u64) -> String {
    if secs % 60 == 0 {
        format!("{} min", secs / 60)
    } else {
        format!("{secs} s")
    }
}
