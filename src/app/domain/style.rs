use super::article_state::{ArticleField, ArticleState};
use super::options::{parse_hex_color, parse_px};

/// Typeface class an article font family renders with.
/// The reader only ships FLTK's built-in faces, so each family maps onto the
/// closest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Sans,
    SansBold,
    Serif,
    SerifBold,
}

impl FontFace {
    pub fn for_family(family: &str) -> Self {
        match family {
            "Cormorant Garamond" => FontFace::Serif,
            "Merriweather" => FontFace::SerifBold,
            "Days One" => FontFace::SansBold,
            _ => FontFace::Sans,
        }
    }
}

/// Concrete display parameters resolved from an [`ArticleState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleStyle {
    pub font: FontFace,
    pub font_size: u32,
    pub text_rgb: (u8, u8, u8),
    pub background_rgb: (u8, u8, u8),
    pub content_width: u32,
}

impl ArticleStyle {
    pub fn resolve(state: &ArticleState) -> Self {
        let defaults = ArticleState::default();
        let px = |field: ArticleField| {
            parse_px(state.get(field).value)
                .or_else(|| parse_px(defaults.get(field).value))
                .unwrap_or(0)
        };
        let rgb = |field: ArticleField| {
            parse_hex_color(state.get(field).value)
                .or_else(|| parse_hex_color(defaults.get(field).value))
                .unwrap_or((0, 0, 0))
        };

        Self {
            font: FontFace::for_family(state.font_family.value),
            font_size: px(ArticleField::FontSize),
            text_rgb: rgb(ArticleField::FontColor),
            background_rgb: rgb(ArticleField::BackgroundColor),
            content_width: px(ArticleField::ContentWidth),
        }
    }
}

/// Horizontal placement `(x, width)` of a text column of `content_width`
/// centred inside an area of `area_width`, leaving `margin` on both sides.
pub fn centered_column(area_width: i32, content_width: u32, margin: i32) -> (i32, i32) {
    let available = (area_width - 2 * margin).max(0);
    let width = available.min(content_width.min(i32::MAX as u32) as i32);
    let x = (area_width - width) / 2;
    (x, width)
}
