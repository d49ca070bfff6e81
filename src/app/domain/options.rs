use serde::Serialize;

/// A single selectable value of an article parameter.
/// `title` is what the user sees, `value` is the display value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleOption {
    pub title: &'static str,
    pub value: &'static str,
}

impl ArticleOption {
    pub const fn new(title: &'static str, value: &'static str) -> Self {
        Self { title, value }
    }
}

pub const FONT_FAMILY_OPTIONS: [ArticleOption; 5] = [
    ArticleOption::new("Open Sans", "Open Sans"),
    ArticleOption::new("Ubuntu", "Ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond"),
    ArticleOption::new("Days One", "Days One"),
    ArticleOption::new("Merriweather", "Merriweather"),
];

pub const FONT_SIZE_OPTIONS: [ArticleOption; 3] = [
    ArticleOption::new("18px", "18px"),
    ArticleOption::new("25px", "25px"),
    ArticleOption::new("38px", "38px"),
];

pub const FONT_COLOR_OPTIONS: [ArticleOption; 9] = [
    ArticleOption::new("Black", "#000000"),
    ArticleOption::new("White", "#FFFFFF"),
    ArticleOption::new("Grey", "#C4C4C4"),
    ArticleOption::new("Pink", "#FEAFE8"),
    ArticleOption::new("Bright pink", "#FD24AF"),
    ArticleOption::new("Yellow", "#FFC802"),
    ArticleOption::new("Green", "#80D994"),
    ArticleOption::new("Blue", "#6FC1FD"),
    ArticleOption::new("Purple", "#5F00D8"),
];

pub const BACKGROUND_COLOR_OPTIONS: [ArticleOption; 9] = [
    ArticleOption::new("White", "#FFFFFF"),
    ArticleOption::new("Black", "#000000"),
    ArticleOption::new("Grey", "#C4C4C4"),
    ArticleOption::new("Pink", "#FEAFE8"),
    ArticleOption::new("Bright pink", "#FD24AF"),
    ArticleOption::new("Yellow", "#FFC802"),
    ArticleOption::new("Green", "#80D994"),
    ArticleOption::new("Blue", "#6FC1FD"),
    ArticleOption::new("Purple", "#5F00D8"),
];

pub const CONTENT_WIDTH_OPTIONS: [ArticleOption; 2] = [
    ArticleOption::new("Wide", "1394px"),
    ArticleOption::new("Narrow", "948px"),
];

/// Find the option carrying `value` in an option set
pub fn find_option(options: &[ArticleOption], value: &str) -> Option<ArticleOption> {
    options.iter().find(|op| op.value == value).copied()
}

/// Position of `option` inside `options`, used to drive index based widgets
pub fn option_index(options: &[ArticleOption], option: ArticleOption) -> Option<usize> {
    options.iter().position(|op| *op == option)
}

/// Parse a pixel length such as `"18px"`
pub fn parse_px(value: &str) -> Option<u32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Parse a `#RRGGBB` colour
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_option() {
        let found = find_option(&FONT_COLOR_OPTIONS, "#FD24AF").unwrap();
        assert_eq!(found.title, "Bright pink");
        assert!(find_option(&FONT_COLOR_OPTIONS, "#123456").is_none());
        assert!(find_option(&FONT_SIZE_OPTIONS, "").is_none());
    }

    #[test]
    fn test_option_index() {
        assert_eq!(option_index(&CONTENT_WIDTH_OPTIONS, CONTENT_WIDTH_OPTIONS[1]), Some(1));
        assert_eq!(option_index(&CONTENT_WIDTH_OPTIONS, FONT_SIZE_OPTIONS[0]), None);
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("18px"), Some(18));
        assert_eq!(parse_px(" 1394px "), Some(1394));
        assert_eq!(parse_px("18"), None);
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px("-4px"), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#FEAFE8"), Some((0xFE, 0xAF, 0xE8)));
        assert_eq!(parse_hex_color("#fd24af"), Some((0xFD, 0x24, 0xAF)));
        assert_eq!(parse_hex_color("FFFFFF"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn test_every_option_value_parses() {
        for op in FONT_SIZE_OPTIONS.iter().chain(CONTENT_WIDTH_OPTIONS.iter()) {
            assert!(parse_px(op.value).is_some(), "{} should parse", op.value);
        }
        for op in FONT_COLOR_OPTIONS.iter().chain(BACKGROUND_COLOR_OPTIONS.iter()) {
            assert!(parse_hex_color(op.value).is_some(), "{} should parse", op.value);
        }
    }
}
