use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    draw::{self, LineStyle},
    enums::{Cursor, Event, Key},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::Message;
use crate::ui::theme::{PanelPalette, panel_palette};

pub const ARROW_BUTTON_SIZE: i32 = 52;
const ARROW_MARGIN: i32 = 24;
const ARROW_STROKE: i32 = 3;

/// Round toggle button that opens and closes the parameters panel.
/// Clicks and Enter/Space while focused send [`Message::TogglePanel`].
pub struct ArrowButton {
    pub widget: Widget,
    open: Rc<Cell<bool>>,
}

impl ArrowButton {
    pub fn new(sender: Sender<Message>) -> Self {
        let open = Rc::new(Cell::new(false));

        let mut widget = Widget::new(
            ARROW_MARGIN,
            ARROW_MARGIN,
            ARROW_BUTTON_SIZE,
            ARROW_BUTTON_SIZE,
            None,
        );
        widget.set_tooltip("Open/close article parameters form");

        let draw_open = open.clone();
        widget.draw(move |wid| {
            draw_arrow_button(wid, draw_open.get(), &panel_palette());
        });

        widget.handle(move |wid, event| handle_arrow_button(wid, event, sender));

        Self { widget, open }
    }

    /// Switch between the closed and open appearance.
    /// While open the button sits on the panel's right edge.
    pub fn set_open(&mut self, open: bool, panel_width: i32) {
        self.open.set(open);
        let x = if open { panel_width + ARROW_MARGIN } else { ARROW_MARGIN };
        self.widget.set_pos(x, ARROW_MARGIN);
        if let Some(mut parent) = self.widget.parent() {
            parent.redraw();
        } else {
            self.widget.redraw();
        }
    }
}

fn draw_arrow_button(wid: &Widget, open: bool, palette: &PanelPalette) {
    let (x, y, w, h) = (wid.x(), wid.y(), wid.w(), wid.h());

    draw::set_draw_color(if open { palette.arrow_bg_open } else { palette.arrow_bg });
    draw::draw_pie(x, y, w, h, 0.0, 360.0);

    // Chevron points right while closed, left while open
    let cx = x + w / 2;
    let cy = y + h / 2;
    let arm = w / 6;
    let dir = if open { -1 } else { 1 };
    draw::set_draw_color(palette.arrow_fg);
    draw::set_line_style(LineStyle::Solid, ARROW_STROKE);
    draw::draw_line(cx - dir * arm / 2, cy - arm, cx + dir * arm / 2, cy);
    draw::draw_line(cx + dir * arm / 2, cy, cx - dir * arm / 2, cy + arm);
    draw::set_line_style(LineStyle::Solid, 0);

    if app::focus().is_some_and(|f| f.as_widget_ptr() == wid.as_widget_ptr()) {
        draw::set_draw_color(palette.arrow_bg_open);
        draw::set_line_style(LineStyle::Dot, 1);
        draw::draw_arc(x - 3, y - 3, w + 6, h + 6, 0.0, 360.0);
        draw::set_line_style(LineStyle::Solid, 0);
    }
}

fn handle_arrow_button(wid: &mut Widget, event: Event, sender: Sender<Message>) -> bool {
    match event {
        Event::Push => {
            if app::event_button() == 1 {
                sender.send(Message::TogglePanel);
                return true;
            }
            false
        }
        // Accept keyboard focus so the button is reachable with Tab
        Event::Focus | Event::Unfocus => {
            wid.redraw();
            true
        }
        Event::KeyDown => {
            let key = app::event_key();
            if key == Key::Enter || key == Key::KPEnter || key == Key::from_char(' ') {
                sender.send(Message::TogglePanel);
                return true;
            }
            false
        }
        Event::Enter => {
            draw::set_cursor(Cursor::Hand);
            true
        }
        Event::Leave => {
            draw::set_cursor(Cursor::Default);
            true
        }
        _ => false,
    }
}
