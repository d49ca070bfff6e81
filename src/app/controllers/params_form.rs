//! State container behind the article parameters side panel.
//!
//! The form keeps a *draft* selection that the user edits freely, and a
//! *committed* state that was last handed to the caller's apply callback.
//! Opening and closing the panel is tracked here as well, together with
//! whether the outside-press listener should currently be attached.

use crate::app::domain::{ArticleField, ArticleState, find_option};
use crate::app::infrastructure::error::{AppError, Result};

/// Callback receiving every committed article state
pub type ApplyCallback = Box<dyn FnMut(&ArticleState)>;

pub struct ParamsForm {
    open: bool,
    draft: ArticleState,
    committed: ArticleState,
    on_apply: ApplyCallback,
}

impl ParamsForm {
    pub fn new(on_apply: impl FnMut(&ArticleState) + 'static) -> Self {
        Self {
            open: false,
            draft: ArticleState::default(),
            committed: ArticleState::default(),
            on_apply: Box::new(on_apply),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &ArticleState {
        &self.draft
    }

    pub fn committed(&self) -> &ArticleState {
        &self.committed
    }

    /// The outside-press listener is attached exactly while the panel is open
    pub fn is_listening(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "parameters panel toggled");
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            tracing::debug!("parameters panel closed");
        }
    }

    /// Close the panel for a press that landed outside it.
    /// Returns true if the panel was closed by this press.
    pub fn handle_outside_press(&mut self, inside_panel: bool) -> bool {
        if !self.open || inside_panel {
            return false;
        }
        self.close();
        true
    }

    /// Replace one draft field with the option whose value is `value`.
    /// Values outside the field's option set leave the draft untouched.
    pub fn select(&mut self, field: ArticleField, value: &str) -> Result<()> {
        let option = find_option(field.options(), value).ok_or_else(|| AppError::UnknownOption {
            field,
            value: value.to_string(),
        })?;
        self.draft = self.draft.with_option(field, option);
        tracing::debug!(?field, value = option.value, "draft option selected");
        Ok(())
    }

    /// Restore the defaults in the draft and hand them to the caller.
    /// The panel stays as it is.
    pub fn reset(&mut self) {
        self.draft = ArticleState::default();
        self.commit();
    }

    /// Hand the draft to the caller unchanged and close the panel
    pub fn apply(&mut self) {
        self.commit();
        self.close();
    }

    fn commit(&mut self) {
        self.committed = self.draft;
        (self.on_apply)(&self.committed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn form_with_log() -> (ParamsForm, Rc<RefCell<Vec<ArticleState>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let form = ParamsForm::new(move |state| sink.borrow_mut().push(*state));
        (form, log)
    }

    #[test]
    fn test_initial_state() {
        let (form, log) = form_with_log();
        assert!(!form.is_open());
        assert!(!form.is_listening());
        assert_eq!(*form.draft(), ArticleState::default());
        assert_eq!(*form.committed(), ArticleState::default());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_toggle_flips_open_state() {
        let (mut form, _) = form_with_log();
        form.toggle();
        assert!(form.is_open());
        form.toggle();
        assert!(!form.is_open());
    }

    #[test]
    fn test_listener_follows_open_state() {
        let (mut form, _) = form_with_log();
        form.toggle();
        assert!(form.is_listening());
        form.close();
        assert!(!form.is_listening());
        form.toggle();
        form.apply();
        assert!(!form.is_listening());
    }

    #[test]
    fn test_outside_press_closes_open_panel() {
        let (mut form, _) = form_with_log();
        form.toggle();
        assert!(form.handle_outside_press(false));
        assert!(!form.is_open());
    }

    #[test]
    fn test_inside_press_keeps_panel_open() {
        let (mut form, _) = form_with_log();
        form.toggle();
        assert!(!form.handle_outside_press(true));
        assert!(form.is_open());
    }

    #[test]
    fn test_outside_press_on_closed_panel_is_noop() {
        let (mut form, log) = form_with_log();
        assert!(!form.handle_outside_press(false));
        assert!(!form.is_open());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_select_updates_only_draft() {
        let (mut form, log) = form_with_log();
        form.select(ArticleField::FontSize, "38px").unwrap();
        form.select(ArticleField::FontColor, "#FD24AF").unwrap();

        assert_eq!(form.draft().font_size.value, "38px");
        assert_eq!(form.draft().font_color.title, "Bright pink");
        assert_eq!(*form.committed(), ArticleState::default());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_select_unknown_value_keeps_draft() {
        let (mut form, _) = form_with_log();
        form.select(ArticleField::ContentWidth, "948px").unwrap();
        let before = *form.draft();

        let err = form.select(ArticleField::ContentWidth, "1200px").unwrap_err();
        assert!(matches!(
            err,
            AppError::UnknownOption { field: ArticleField::ContentWidth, .. }
        ));
        assert_eq!(*form.draft(), before);
        assert!(form.draft().is_valid());
    }

    #[test]
    fn test_select_rejects_value_from_another_field() {
        let (mut form, _) = form_with_log();
        // "#000000" is a colour, not a font family
        assert!(form.select(ArticleField::FontFamily, "#000000").is_err());
        assert_eq!(form.draft().font_family.value, "Open Sans");
    }

    #[test]
    fn test_apply_propagates_draft_unchanged_and_closes() {
        let (mut form, log) = form_with_log();
        form.toggle();
        form.select(ArticleField::FontFamily, "Merriweather").unwrap();
        form.select(ArticleField::FontSize, "25px").unwrap();
        form.select(ArticleField::FontColor, "#5F00D8").unwrap();
        form.select(ArticleField::BackgroundColor, "#FFC802").unwrap();
        form.select(ArticleField::ContentWidth, "948px").unwrap();
        let draft = *form.draft();

        form.apply();

        assert_eq!(log.borrow().as_slice(), &[draft]);
        assert_eq!(*form.committed(), draft);
        assert_eq!(*form.draft(), draft);
        assert!(!form.is_open());
    }

    #[test]
    fn test_reset_restores_defaults_and_propagates() {
        let (mut form, log) = form_with_log();
        form.toggle();
        form.select(ArticleField::FontFamily, "Days One").unwrap();
        form.select(ArticleField::BackgroundColor, "#000000").unwrap();
        form.apply();
        form.toggle();

        form.reset();

        let defaults = ArticleState::default();
        assert_eq!(*form.draft(), defaults);
        assert_eq!(*form.committed(), defaults);
        assert_eq!(log.borrow().last(), Some(&defaults));
        assert_eq!(log.borrow().len(), 2);
        // Reset leaves the panel where it was
        assert!(form.is_open());
    }

    #[test]
    fn test_reset_discards_unapplied_draft() {
        let (mut form, log) = form_with_log();
        form.select(ArticleField::FontSize, "38px").unwrap();
        form.reset();
        assert_eq!(form.draft().font_size.value, "18px");
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_each_apply_notifies_once() {
        let (mut form, log) = form_with_log();
        form.apply();
        form.apply();
        assert_eq!(log.borrow().len(), 2);
        assert!(log.borrow().iter().all(|s| *s == ArticleState::default()));
    }
}
