use fltk::{
    app::Sender,
    prelude::*,
    window::Window,
};

use crate::app::domain::{ArticleState, ArticleStyle, Message};
use crate::app::services::article::Article;
use crate::app::services::config::AppConfig;
use super::arrow_button::ArrowButton;
use super::article_view::ArticleView;
use super::params_panel::ParamsPanel;

pub struct MainWidgets {
    pub wind: Window,
    pub article_view: ArticleView,
    pub panel: ParamsPanel,
    pub arrow: ArrowButton,
}

/// Build the reader window. Children are stacked back to front:
/// article, parameters panel, arrow button.
pub fn build_main_window(
    config: &AppConfig,
    article: &Article,
    initial: &ArticleState,
    sender: Sender<Message>,
) -> MainWidgets {
    let (w, h) = (config.window_width, config.window_height);
    let mut wind = Window::new(100, 100, w, h, None);
    wind.set_label(&format!("{} - ArticleReader", article.title));
    wind.set_xclass("ArticleReader");

    let article_view = ArticleView::new(w, h, article, &ArticleStyle::resolve(initial));
    let panel = ParamsPanel::new(h, initial, sender);
    let arrow = ArrowButton::new(sender);

    wind.end();
    // Layout is done by hand on resize, FLTK must not scale children itself
    wind.make_resizable(false);
    wind.size_range(640, 560, 0, 0);

    wind.resize_callback(move |_, _, _, _, _| sender.send(Message::WindowResized));
    wind.set_callback(move |_| {
        if fltk::app::event() == fltk::enums::Event::Close {
            sender.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        article_view,
        panel,
        arrow,
    }
}
