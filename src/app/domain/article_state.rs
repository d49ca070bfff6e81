use serde::Serialize;

use super::options::{
    ArticleOption, BACKGROUND_COLOR_OPTIONS, CONTENT_WIDTH_OPTIONS, FONT_COLOR_OPTIONS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};

/// One of the five adjustable article parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleField {
    pub const ALL: [ArticleField; 5] = [
        ArticleField::FontFamily,
        ArticleField::FontSize,
        ArticleField::FontColor,
        ArticleField::BackgroundColor,
        ArticleField::ContentWidth,
    ];

    /// The fixed option set this field draws its values from
    pub fn options(self) -> &'static [ArticleOption] {
        match self {
            ArticleField::FontFamily => &FONT_FAMILY_OPTIONS,
            ArticleField::FontSize => &FONT_SIZE_OPTIONS,
            ArticleField::FontColor => &FONT_COLOR_OPTIONS,
            ArticleField::BackgroundColor => &BACKGROUND_COLOR_OPTIONS,
            ArticleField::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Label shown above the field's control in the parameters form
    pub fn title(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "Font",
            ArticleField::FontSize => "Font size",
            ArticleField::FontColor => "Font color",
            ArticleField::BackgroundColor => "Background color",
            ArticleField::ContentWidth => "Content width",
        }
    }
}

/// The display parameters of an article.
/// Every field holds a member of its field's option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleState {
    pub font_family: ArticleOption,
    pub font_size: ArticleOption,
    pub font_color: ArticleOption,
    pub background_color: ArticleOption,
    pub content_width: ArticleOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0],
            font_size: FONT_SIZE_OPTIONS[0],
            font_color: FONT_COLOR_OPTIONS[0],
            background_color: BACKGROUND_COLOR_OPTIONS[0],
            content_width: CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

impl ArticleState {
    pub fn get(&self, field: ArticleField) -> ArticleOption {
        match field {
            ArticleField::FontFamily => self.font_family,
            ArticleField::FontSize => self.font_size,
            ArticleField::FontColor => self.font_color,
            ArticleField::BackgroundColor => self.background_color,
            ArticleField::ContentWidth => self.content_width,
        }
    }

    /// Copy of this state with `field` replaced by `option`
    pub fn with_option(mut self, field: ArticleField, option: ArticleOption) -> Self {
        let slot = match field {
            ArticleField::FontFamily => &mut self.font_family,
            ArticleField::FontSize => &mut self.font_size,
            ArticleField::FontColor => &mut self.font_color,
            ArticleField::BackgroundColor => &mut self.background_color,
            ArticleField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
        self
    }

    /// True when each field's value belongs to its option set
    pub fn is_valid(&self) -> bool {
        ArticleField::ALL
            .iter()
            .all(|field| field.options().contains(&self.get(*field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ArticleState::default();
        assert_eq!(state.font_family.value, "Open Sans");
        assert_eq!(state.font_size.value, "18px");
        assert_eq!(state.font_color.value, "#000000");
        assert_eq!(state.background_color.value, "#FFFFFF");
        assert_eq!(state.content_width.value, "1394px");
        assert!(state.is_valid());
    }

    #[test]
    fn test_with_option_replaces_only_that_field() {
        let base = ArticleState::default();
        let changed = base.with_option(ArticleField::FontSize, FONT_SIZE_OPTIONS[2]);
        assert_eq!(changed.font_size.value, "38px");
        for field in ArticleField::ALL {
            if field != ArticleField::FontSize {
                assert_eq!(changed.get(field), base.get(field));
            }
        }
    }

    #[test]
    fn test_is_valid_rejects_foreign_option() {
        // A colour in the width slot is not a member of the width option set
        let state = ArticleState::default()
            .with_option(ArticleField::ContentWidth, FONT_COLOR_OPTIONS[3]);
        assert!(!state.is_valid());
    }

    #[test]
    fn test_font_and_background_share_values_but_not_defaults() {
        let state = ArticleState::default();
        assert_ne!(state.font_color.value, state.background_color.value);
        assert!(ArticleField::BackgroundColor.options().contains(&state.background_color));
    }

    #[test]
    fn test_serializes_as_structured_record() {
        let json = serde_json::to_value(ArticleState::default()).unwrap();
        assert_eq!(json["font_family"]["title"], "Open Sans");
        assert_eq!(json["content_width"]["value"], "1394px");
    }
}
