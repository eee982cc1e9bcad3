use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{dashboard::ForecastCard, state::AppState},
    cli::IconMode,
    domain::weather::condition_glyph,
    ui::{
        layout::{CardLayout, card_layout},
        theme::{Theme, icon_color},
    },
};

use super::shared::{panel_block, state_theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state_theme(state);
    let block = panel_block("5-Day Forecast", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(dashboard) = &state.dashboard else {
        return;
    };
    if dashboard.cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No forecast available")
                .style(Style::default().fg(theme.muted_text)),
            inner,
        );
        return;
    }

    match card_layout(area.width) {
        CardLayout::Row => render_row(frame, inner, &dashboard.cards, state.icon_mode, theme),
        CardLayout::Stacked => {
            let lines = dashboard
                .cards
                .iter()
                .map(|card| stacked_line(card, state.icon_mode, theme))
                .collect::<Vec<_>>();
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    cards: &[ForecastCard],
    icons: IconMode,
    theme: Theme,
) {
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(card.date.clone())
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(*column);
        frame.render_widget(block, *column);
        frame.render_widget(Paragraph::new(card_lines(card, icons, theme)), inner);
    }
}

fn card_lines(card: &ForecastCard, icons: IconMode, theme: Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.muted_text);
    vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", condition_glyph(card.condition, icons)),
                Style::default().fg(icon_color(&theme, card.condition)),
            ),
            Span::styled(
                card.temp.clone(),
                Style::default()
                    .fg(theme.temperature)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(card.description.clone(), muted)),
        Line::from(Span::styled(format!("Hum {}", card.humidity), muted)),
        Line::from(Span::styled(format!("Wind {}", card.wind), muted)),
    ]
}

fn stacked_line(card: &ForecastCard, icons: IconMode, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", card.date), Style::default().fg(theme.text)),
        Span::styled(
            format!("{} ", condition_glyph(card.condition, icons)),
            Style::default().fg(icon_color(&theme, card.condition)),
        ),
        Span::styled(
            format!("{:>6} ", card.temp),
            Style::default().fg(theme.temperature),
        ),
        Span::styled(
            format!("{}  {}  {}", card.description, card.humidity, card.wind),
            Style::default().fg(theme.muted_text),
        ),
    ])
}
