use fltk::{app, app::Sender, prelude::*, window::Window};

use super::controllers::params_form::ParamsForm;
use super::domain::{ArticleField, ArticleState, ArticleStyle, Message};
use crate::ui::arrow_button::ArrowButton;
use crate::ui::article_view::ArticleView;
use crate::ui::main_window::MainWidgets;
use crate::ui::outside_click::OutsideClickWatcher;
use crate::ui::params_panel::{PANEL_WIDTH, ParamsPanel};

pub struct AppState {
    pub form: ParamsForm,
    pub window: Window,
    pub article_view: ArticleView,
    pub panel: ParamsPanel,
    pub arrow: ArrowButton,
    pub outside_click: OutsideClickWatcher,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>) -> Self {
        let MainWidgets {
            wind,
            article_view,
            panel,
            arrow,
        } = widgets;

        // The committed state travels back through the channel so the
        // article is restyled by the same dispatch loop as everything else
        let form = ParamsForm::new(move |state: &ArticleState| {
            sender.send(Message::ArticleCommitted(*state));
        });

        Self {
            form,
            outside_click: OutsideClickWatcher::new(&wind),
            window: wind,
            article_view,
            panel,
            arrow,
            sender,
        }
    }

    /// Dispatch one message. Returns false when the application should quit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::TogglePanel => {
                self.form.toggle();
                self.sync_panel();
            }
            Message::OutsidePress => {
                // The watcher already filtered presses inside the panel
                if self.form.handle_outside_press(false) {
                    self.sync_panel();
                }
            }
            Message::SelectOption(field, value) => self.select_option(field, &value),
            Message::ApplyForm => {
                self.form.apply();
                self.sync_panel();
            }
            Message::ResetForm => {
                self.form.reset();
                self.panel.sync(self.form.draft());
            }
            Message::ArticleCommitted(state) => self.show_article_state(&state),
            Message::WindowResized => self.relayout(),
            Message::WindowClose => {
                self.outside_click.detach();
                self.window.hide();
                return false;
            }
        }
        true
    }

    fn select_option(&mut self, field: ArticleField, value: &str) {
        if let Err(e) = self.form.select(field, value) {
            tracing::warn!(error = %e, "ignoring option outside its set");
            // Put the control back on the draft's value
            self.panel.sync(self.form.draft());
        }
    }

    fn show_article_state(&mut self, state: &ArticleState) {
        tracing::info!(state = ?state, "article parameters committed");
        self.article_view.apply_style(&ArticleStyle::resolve(state));
    }

    /// Bring panel, arrow button and outside-press listener in line with the form
    fn sync_panel(&mut self) {
        let open = self.form.is_open();
        self.panel.set_open(open);
        self.arrow.set_open(open, PANEL_WIDTH);

        let panel = self.panel.group.clone();
        let arrow = self.arrow.widget.clone();
        self.outside_click.sync(self.form.is_listening(), self.sender, move || {
            app::event_inside_widget(&panel) || app::event_inside_widget(&arrow)
        });
    }

    fn relayout(&mut self) {
        let (w, h) = (self.window.w(), self.window.h());
        self.article_view.resize(w, h);
        self.panel.resize_height(h);
        self.window.redraw();
    }
}
