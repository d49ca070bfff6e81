use fltk::{
    app::Sender,
    button::RadioRoundButton,
    enums::{Align, FrameType},
    frame::Frame,
    group::Group,
    menu::Choice,
    prelude::*,
};

use crate::app::domain::options::option_index;
use crate::app::domain::{ArticleField, ArticleState, Message};
use crate::ui::theme::PanelPalette;

pub const FIELD_TITLE_HEIGHT: i32 = 22;
pub const FIELD_CONTROL_HEIGHT: i32 = 32;
/// Vertical space one titled field occupies, gap included
pub const FIELD_HEIGHT: i32 = FIELD_TITLE_HEIGHT + FIELD_CONTROL_HEIGHT + 18;

fn field_title(x: i32, y: i32, w: i32, field: ArticleField, palette: &PanelPalette) {
    let mut title = Frame::default()
        .with_pos(x, y)
        .with_size(w, FIELD_TITLE_HEIGHT)
        .with_label(&field.title().to_uppercase())
        .with_align(Align::Left | Align::Inside);
    title.set_label_size(12);
    title.set_label_color(palette.label);
}

/// Drop-down over one field's option set
pub struct OptionSelect {
    field: ArticleField,
    choice: Choice,
}

impl OptionSelect {
    pub fn new(
        x: i32,
        y: i32,
        w: i32,
        field: ArticleField,
        selected: &ArticleState,
        sender: Sender<Message>,
        palette: &PanelPalette,
    ) -> Self {
        field_title(x, y, w, field, palette);

        let mut choice = Choice::default()
            .with_pos(x, y + FIELD_TITLE_HEIGHT)
            .with_size(w, FIELD_CONTROL_HEIGHT);
        choice.set_color(palette.control_bg);
        choice.set_selection_color(palette.accent);
        choice.set_frame(FrameType::BorderBox);
        for option in field.options() {
            choice.add_choice(option.title);
        }

        choice.set_callback(move |c| {
            let Ok(index) = usize::try_from(c.value()) else {
                return;
            };
            if let Some(option) = field.options().get(index) {
                sender.send(Message::SelectOption(field, option.value.to_string()));
            }
        });

        let mut select = Self { field, choice };
        select.sync(selected);
        select
    }

    /// Show the option `state` holds for this field
    pub fn sync(&mut self, state: &ArticleState) {
        let index = option_index(self.field.options(), state.get(self.field)).unwrap_or(0);
        self.choice.set_value(index as i32);
    }
}

/// Row of radio buttons over one field's option set
pub struct OptionRadioGroup {
    field: ArticleField,
    buttons: Vec<RadioRoundButton>,
}

impl OptionRadioGroup {
    pub fn new(
        x: i32,
        y: i32,
        w: i32,
        field: ArticleField,
        selected: &ArticleState,
        sender: Sender<Message>,
        palette: &PanelPalette,
    ) -> Self {
        field_title(x, y, w, field, palette);

        let options = field.options();
        let group = Group::default()
            .with_pos(x, y + FIELD_TITLE_HEIGHT)
            .with_size(w, FIELD_CONTROL_HEIGHT);
        let button_w = w / options.len().max(1) as i32;
        let mut buttons = Vec::with_capacity(options.len());
        for (i, option) in options.iter().enumerate() {
            let mut button = RadioRoundButton::default()
                .with_pos(x + i as i32 * button_w, y + FIELD_TITLE_HEIGHT)
                .with_size(button_w, FIELD_CONTROL_HEIGHT)
                .with_label(option.title);
            button.set_selection_color(palette.accent);
            let value = option.value;
            button.set_callback(move |b| {
                if b.value() {
                    sender.send(Message::SelectOption(field, value.to_string()));
                }
            });
            buttons.push(button);
        }
        group.end();

        let mut radio = Self { field, buttons };
        radio.sync(selected);
        radio
    }

    pub fn sync(&mut self, state: &ArticleState) {
        let selected = option_index(self.field.options(), state.get(self.field));
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.set_value(selected == Some(i));
        }
    }
}
