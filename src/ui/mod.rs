//! Dialog rendering and input translation
//!
//! The renderer is a function of [`ControllerState`](crate::dialog::ControllerState)
//! plus a visual focus index. It never settles outcomes itself; user input
//! is translated into a [`DialogAction`] and handed to [`dispatch`].

mod dialog;
pub mod helpers;
mod input;

pub use dialog::{
    dialog_layout, footer_affordances, render_dialog, Affordance, AffordanceAction, DialogLayout,
    DialogView,
};
pub use input::{apply_focus, dispatch, translate_key, translate_mouse, DialogAction};
