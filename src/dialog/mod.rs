//! Dialog controller, request types, and outcome futures

pub mod controller;
pub mod request;
pub mod slot;

pub use controller::{ControllerState, DialogController};
pub use request::{
    hook, ButtonVariant, Content, DialogButton, DialogIcon, DialogKind, DialogOverrides,
    DialogRequest, Hook,
};
pub use slot::{AlertOutcome, DialogOutcome};
