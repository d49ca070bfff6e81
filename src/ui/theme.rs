use fltk::enums::{Color, Font};

use crate::app::domain::FontFace;

/// Colours of the parameters panel and its toggle button
pub struct PanelPalette {
    pub panel_bg: Color,
    pub heading: Color,
    pub label: Color,
    pub control_bg: Color,
    pub accent: Color,
    pub button_bg: Color,
    pub button_text: Color,
    pub arrow_bg: Color,
    pub arrow_bg_open: Color,
    pub arrow_fg: Color,
}

pub fn panel_palette() -> PanelPalette {
    PanelPalette {
        panel_bg: Color::White,
        heading: Color::Black,
        label: Color::from_rgb(60, 60, 60),
        control_bg: Color::White,
        accent: Color::from_rgb(0x5F, 0x00, 0xD8),
        button_bg: Color::Black,
        button_text: Color::White,
        arrow_bg: Color::Black,
        arrow_bg_open: Color::from_rgb(0x5F, 0x00, 0xD8),
        arrow_fg: Color::White,
    }
}

pub fn rgb_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

pub fn fltk_font(face: FontFace) -> Font {
    match face {
        FontFace::Sans => Font::Helvetica,
        FontFace::SansBold => Font::HelveticaBold,
        FontFace::Serif => Font::Times,
        FontFace::SerifBold => Font::TimesBold,
    }
}
