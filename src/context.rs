//! Capability lookup for the dialog controller
//!
//! A [`DialogProvider`] owns the controller for one application tree.
//! Code running inside [`DialogProvider::scope`] obtains a [`DialogHandle`]
//! with [`use_dialog`]; outside any scope the lookup fails fast. Handles
//! hold a weak reference, so once the provider is dropped every handle
//! reports [`DialogError::ProviderUnmounted`].
//!
//! Task-local values do not cross `tokio::spawn`. Grab the handle first and
//! move it into the spawned task.

use crate::dialog::{
    AlertOutcome, Content, ControllerState, DialogController, DialogOutcome, DialogOverrides,
    DialogRequest,
};
use crate::errors::{DialogError, Result};
use std::future::Future;
use std::sync::{Arc, Weak};
use tokio::sync::watch;

tokio::task_local! {
    static CURRENT_DIALOG: DialogHandle;
}

/// Owner of the dialog controller for one application tree
#[derive(Debug, Default)]
pub struct DialogProvider {
    controller: Arc<DialogController>,
}

impl DialogProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that can be passed to code outside the scope
    pub fn handle(&self) -> DialogHandle {
        DialogHandle {
            controller: Arc::downgrade(&self.controller),
        }
    }

    /// Run `fut` with this provider available to [`use_dialog`]
    pub async fn scope<F: Future>(&self, fut: F) -> F::Output {
        CURRENT_DIALOG.scope(self.handle(), fut).await
    }

    /// Direct access for the renderer and input dispatch
    pub fn controller(&self) -> &Arc<DialogController> {
        &self.controller
    }

    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.controller.subscribe()
    }
}

/// Look up the dialog capability of the enclosing provider
pub fn use_dialog() -> Result<DialogHandle> {
    CURRENT_DIALOG
        .try_with(DialogHandle::clone)
        .map_err(|_| DialogError::MissingProvider)
}

/// Caller-side dialog API
#[derive(Debug, Clone)]
pub struct DialogHandle {
    controller: Weak<DialogController>,
}

impl DialogHandle {
    fn controller(&self) -> Result<Arc<DialogController>> {
        self.controller
            .upgrade()
            .ok_or(DialogError::ProviderUnmounted)
    }

    /// Run `fut` with this handle available to [`use_dialog`]
    ///
    /// Use this to carry the capability into a spawned task.
    pub async fn scope<F: Future>(self, fut: F) -> F::Output {
        CURRENT_DIALOG.scope(self, fut).await
    }

    /// Present a request; await the returned future for the outcome
    pub fn show(&self, request: DialogRequest) -> Result<DialogOutcome> {
        Ok(self.controller()?.show(request))
    }

    /// Present an alert; the future completes once it is acknowledged
    pub fn alert(
        &self,
        title: impl Into<String>,
        description: Option<Content>,
        overrides: Option<DialogOverrides>,
    ) -> Result<AlertOutcome> {
        Ok(self.controller()?.alert(title, description, overrides))
    }

    /// Present a confirm dialog; the future yields `true` on confirm
    pub fn confirm(
        &self,
        title: impl Into<String>,
        description: Option<Content>,
        overrides: Option<DialogOverrides>,
    ) -> Result<DialogOutcome> {
        Ok(self.controller()?.confirm(title, description, overrides))
    }

    /// Close the dialog, resolving any pending outcome with `false`
    pub fn hide(&self) -> Result<()> {
        self.controller()?.hide();
        Ok(())
    }
}
