use fltk::{
    enums::FrameType,
    group::Group,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
};

use crate::app::domain::ArticleStyle;
use crate::app::domain::style::centered_column;
use crate::app::services::article::Article;
use crate::ui::theme::{fltk_font, rgb_color};

const TOP_MARGIN: i32 = 100;
const SIDE_MARGIN: i32 = 24;
const BOTTOM_MARGIN: i32 = 24;

/// Read-only display of the article, styled by the committed state
pub struct ArticleView {
    pub group: Group,
    display: TextDisplay,
    content_width: u32,
}

impl ArticleView {
    pub fn new(w: i32, h: i32, article: &Article, style: &ArticleStyle) -> Self {
        let mut group = Group::new(0, 0, w, h, None);
        group.set_frame(FrameType::FlatBox);

        let mut buffer = TextBuffer::default();
        buffer.set_text(&article.display_text());

        let mut display = TextDisplay::new(0, 0, 0, 0, None);
        display.set_buffer(buffer);
        display.set_frame(FrameType::FlatBox);
        display.wrap_mode(WrapMode::AtBounds, 0);
        display.set_scrollbar_size(8);
        group.end();
        group.make_resizable(false);

        let mut view = Self {
            group,
            display,
            content_width: style.content_width,
        };
        view.apply_style(style);
        view
    }

    pub fn apply_style(&mut self, style: &ArticleStyle) {
        let background = rgb_color(style.background_rgb);
        self.group.set_color(background);
        self.display.set_color(background);
        self.display.set_text_color(rgb_color(style.text_rgb));
        self.display.set_text_font(fltk_font(style.font));
        self.display.set_text_size(style.font_size as i32);
        self.content_width = style.content_width;
        self.layout();
        self.group.redraw();
    }

    /// Fill `w` x `h` and re-centre the text column
    pub fn resize(&mut self, w: i32, h: i32) {
        self.group.resize(0, 0, w, h);
        self.layout();
    }

    fn layout(&mut self) {
        let (x, width) = centered_column(self.group.w(), self.content_width, SIDE_MARGIN);
        let height = (self.group.h() - TOP_MARGIN - BOTTOM_MARGIN).max(0);
        self.display.resize(x, TOP_MARGIN, width, height);
    }
}
