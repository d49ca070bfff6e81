use fltk::{app, prelude::*};

use article_reader::app::infrastructure::logging;
use article_reader::app::state::AppState;
use article_reader::app::{AppConfig, Article, ArticleState, Message};
use article_reader::ui::main_window::build_main_window;

fn main() {
    let (config, config_error) = AppConfig::load();
    logging::init(config.log_filter.as_deref());
    if let Some(e) = config_error {
        tracing::warn!(
            path = %AppConfig::get_config_path().display(),
            error = %e,
            "failed to load config, using defaults"
        );
    }

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let article = Article::load_or_sample(config.article_path.as_deref());
    let widgets = build_main_window(&config, &article, &ArticleState::default(), sender);
    let mut state = AppState::new(widgets, sender);

    state.window.show();
    tracing::info!(
        width = config.window_width,
        height = config.window_height,
        "reader window shown"
    );

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            tracing::trace!(?msg, "dispatch");
            if !state.handle(msg) {
                break;
            }
        }
    }
}
