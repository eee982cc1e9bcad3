#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// One bordered card per day, side by side.
    Row,
    /// One line per day.
    Stacked,
}

#[must_use]
pub fn card_layout(width: u16) -> CardLayout {
    match width {
        90..=u16::MAX => CardLayout::Row,
        _ => CardLayout::Stacked,
    }
}

/// Whether the humidity bars fit beside the temperature chart.
#[must_use]
pub fn charts_side_by_side(width: u16) -> bool {
    width >= 100
}
