//! Modalis - async modal dialogs for ratatui applications
//!
//! Any task can ask the user a question and await the answer:
//!
//! ```ignore
//! let dialog = modalis::use_dialog()?;
//! if dialog.confirm("Delete project?", Some("This cannot be undone.".into()), None)?.await {
//!     delete_project().await?;
//! }
//! ```
//!
//! - [`dialog`]: controller, request types, outcome futures
//! - [`context`]: provider and capability lookup
//! - [`presentation`]: icon and size tables
//! - [`ui`]: rendering and input translation
//!
//! Only one dialog is shown at a time. Showing a new one while another is
//! pending replaces it, and the replaced outcome never resolves.

pub mod config;
pub mod context;
pub mod dialog;
pub mod errors;
pub mod presentation;
pub mod ui;

pub use context::{use_dialog, DialogHandle, DialogProvider};
pub use dialog::{
    hook, AlertOutcome, ButtonVariant, Content, DialogButton, DialogIcon, DialogKind,
    DialogOutcome, DialogOverrides, DialogRequest,
};
pub use errors::{DialogError, HookError};
