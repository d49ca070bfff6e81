use fltk::{
    app::Sender,
    enums::Event,
    prelude::*,
    window::Window,
};

use crate::app::domain::Message;

/// Window-level mouse-press listener used to close the parameters panel.
///
/// While attached, every press in the window that `is_inside` does not claim
/// sends [`Message::OutsidePress`]. The press is never consumed, so the widget
/// under the pointer still receives it. Dropping the watcher detaches it.
pub struct OutsideClickWatcher {
    window: Window,
    attached: bool,
}

impl OutsideClickWatcher {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self, sender: Sender<Message>, is_inside: impl Fn() -> bool + 'static) {
        if self.attached {
            return;
        }
        self.window.handle(move |_, event| {
            if event == Event::Push && !is_inside() {
                sender.send(Message::OutsidePress);
            }
            false
        });
        self.attached = true;
        tracing::trace!("outside-press listener attached");
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if !self.window.was_deleted() {
            self.window.handle(|_, _| false);
        }
        self.attached = false;
        tracing::trace!("outside-press listener detached");
    }

    /// Attach or detach so the listener matches `listening`
    pub fn sync(
        &mut self,
        listening: bool,
        sender: Sender<Message>,
        is_inside: impl Fn() -> bool + 'static,
    ) {
        if listening {
            self.attach(sender, is_inside);
        } else {
            self.detach();
        }
    }
}

impl Drop for OutsideClickWatcher {
    fn drop(&mut self) {
        self.detach();
    }
}
