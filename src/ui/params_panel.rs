use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::{ArticleField, ArticleState, Message};
use crate::ui::theme::panel_palette;
use crate::ui::widgets::{FIELD_HEIGHT, OptionRadioGroup, OptionSelect};

pub const PANEL_WIDTH: i32 = 420;
const PANEL_PADDING: i32 = 32;
const HEADING_HEIGHT: i32 = 48;
const BUTTON_WIDTH: i32 = 120;
const BUTTON_HEIGHT: i32 = 44;

/// Side panel holding the article parameters form.
/// Every control reports through the channel; the panel itself keeps no state.
pub struct ParamsPanel {
    pub group: Group,
    font_family: OptionSelect,
    font_size: OptionRadioGroup,
    font_color: OptionSelect,
    background_color: OptionSelect,
    content_width: OptionSelect,
}

impl ParamsPanel {
    pub fn new(height: i32, draft: &ArticleState, sender: Sender<Message>) -> Self {
        let palette = panel_palette();

        let mut group = Group::new(0, 0, PANEL_WIDTH, height, None);
        group.set_frame(FrameType::FlatBox);
        group.set_color(palette.panel_bg);

        let x = PANEL_PADDING;
        let w = PANEL_WIDTH - 2 * PANEL_PADDING;
        let mut y = PANEL_PADDING;

        let mut heading = Frame::default()
            .with_pos(x, y)
            .with_size(w, HEADING_HEIGHT)
            .with_label("SET PARAMETERS")
            .with_align(Align::Left | Align::Inside);
        heading.set_label_font(Font::HelveticaBold);
        heading.set_label_size(28);
        heading.set_label_color(palette.heading);
        y += HEADING_HEIGHT + 24;

        let font_family =
            OptionSelect::new(x, y, w, ArticleField::FontFamily, draft, sender, &palette);
        y += FIELD_HEIGHT;
        let font_size =
            OptionRadioGroup::new(x, y, w, ArticleField::FontSize, draft, sender, &palette);
        y += FIELD_HEIGHT;
        let font_color =
            OptionSelect::new(x, y, w, ArticleField::FontColor, draft, sender, &palette);
        y += FIELD_HEIGHT;
        let background_color =
            OptionSelect::new(x, y, w, ArticleField::BackgroundColor, draft, sender, &palette);
        y += FIELD_HEIGHT;
        let content_width =
            OptionSelect::new(x, y, w, ArticleField::ContentWidth, draft, sender, &palette);
        y += FIELD_HEIGHT + 16;

        // Buttons follow the fields; only the background stretches with the window
        let buttons_y = y;
        let mut reset_btn = Button::default()
            .with_pos(PANEL_WIDTH - PANEL_PADDING - 2 * BUTTON_WIDTH - 12, buttons_y)
            .with_size(BUTTON_WIDTH, BUTTON_HEIGHT)
            .with_label("Reset");
        reset_btn.set_frame(FrameType::BorderBox);
        reset_btn.set_color(palette.control_bg);
        reset_btn.set_label_color(palette.heading);
        reset_btn.set_callback(move |_| sender.send(Message::ResetForm));

        let mut apply_btn = Button::default()
            .with_pos(PANEL_WIDTH - PANEL_PADDING - BUTTON_WIDTH, buttons_y)
            .with_size(BUTTON_WIDTH, BUTTON_HEIGHT)
            .with_label("Apply");
        apply_btn.set_frame(FrameType::FlatBox);
        apply_btn.set_color(palette.button_bg);
        apply_btn.set_label_color(palette.button_text);
        apply_btn.set_callback(move |_| sender.send(Message::ApplyForm));

        group.end();
        group.make_resizable(false);
        group.hide();

        Self {
            group,
            font_family,
            font_size,
            font_color,
            background_color,
            content_width,
        }
    }

    pub fn set_open(&mut self, open: bool) {
        if open {
            self.group.show();
        } else {
            self.group.hide();
        }
        if let Some(mut parent) = self.group.parent() {
            parent.redraw();
        }
    }

    /// Bring every control in line with `draft`
    pub fn sync(&mut self, draft: &ArticleState) {
        self.font_family.sync(draft);
        self.font_size.sync(draft);
        self.font_color.sync(draft);
        self.background_color.sync(draft);
        self.content_width.sync(draft);
        self.group.redraw();
    }

    pub fn resize_height(&mut self, height: i32) {
        let (x, y) = (self.group.x(), self.group.y());
        self.group.resize(x, y, PANEL_WIDTH, height);
    }
}
