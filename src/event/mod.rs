//! Events flowing into the demo app's main loop

pub mod input;

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(crossterm::event::KeyEvent),
    /// Mouse input (clicks outside a dialog dismiss it)
    Mouse(crossterm::event::MouseEvent),
    /// Terminal resized; forces a repaint
    Resize,
    /// Line for the activity log, sent by demo tasks
    Status {
        message: String,
        is_error: bool,
    },
}

impl Event {
    pub fn info(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
            is_error: true,
        }
    }
}
