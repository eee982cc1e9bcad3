use ratatui::style::Color;

use crate::domain::weather::ConditionCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    Color,
    Monochrome,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub popup_surface: Color,
    pub popup_text: Color,
    pub popup_muted_text: Color,
    pub popup_border: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub temperature: Color,
    pub humidity: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let dumb = std::env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"));
    if no_color || dumb {
        ColorCapability::Monochrome
    } else {
        ColorCapability::Color
    }
}

/// Palette keyed on the current condition; `None` before any data arrives.
#[must_use]
pub fn theme_for(condition: Option<ConditionCategory>, capability: ColorCapability) -> Theme {
    if capability == ColorCapability::Monochrome {
        return monochrome();
    }

    let accent = match condition {
        Some(ConditionCategory::Clear) => Color::Rgb(255, 215, 117),
        Some(ConditionCategory::Clouds) => Color::Rgb(210, 223, 235),
        Some(c) if c.is_wet() => Color::Rgb(153, 214, 255),
        Some(ConditionCategory::Snow) => Color::Rgb(237, 247, 255),
        Some(c) if c.is_obscured() => Color::Rgb(216, 220, 224),
        _ => Color::Rgb(129, 199, 255),
    };

    Theme {
        accent,
        text: Color::Rgb(235, 240, 245),
        muted_text: Color::Rgb(150, 160, 175),
        border: Color::Rgb(70, 90, 120),
        popup_surface: Color::Rgb(20, 26, 40),
        popup_text: Color::Rgb(235, 240, 245),
        popup_muted_text: Color::Rgb(150, 160, 175),
        popup_border: accent,
        info: Color::Rgb(120, 190, 255),
        warning: Color::Rgb(255, 196, 87),
        danger: Color::Rgb(255, 110, 110),
        temperature: Color::Rgb(255, 170, 90),
        humidity: Color::Rgb(100, 180, 255),
    }
}

fn monochrome() -> Theme {
    Theme {
        accent: Color::White,
        text: Color::Reset,
        muted_text: Color::Gray,
        border: Color::Gray,
        popup_surface: Color::Reset,
        popup_text: Color::Reset,
        popup_muted_text: Color::Gray,
        popup_border: Color::White,
        info: Color::Reset,
        warning: Color::White,
        danger: Color::White,
        temperature: Color::White,
        humidity: Color::Gray,
    }
}

#[must_use]
pub fn icon_color(theme: &Theme, condition: ConditionCategory) -> Color {
    match condition {
        ConditionCategory::Clear => theme.warning,
        ConditionCategory::Clouds => theme.muted_text,
        ConditionCategory::Thunderstorm => theme.danger,
        c if c.is_wet() => theme.info,
        ConditionCategory::Snow => theme.text,
        _ => theme.accent,
    }
}
