use super::article_state::{ArticleField, ArticleState};

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Arrow button
    TogglePanel,

    // Outside-press listener
    OutsidePress,

    // Parameters form
    SelectOption(ArticleField, String),
    ApplyForm,
    ResetForm,

    // Committed state reached the reader
    ArticleCommitted(ArticleState),

    // Window
    WindowResized,
    WindowClose,
}
