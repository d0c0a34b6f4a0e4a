//! Dialog controller: current request, visibility, and the outcome slot
//!
//! All state transitions go through this type. The request and visibility
//! flag live in a `watch` channel so renderers can repaint on change; the
//! resolver lives in a [`ResolutionSlot`] behind a mutex that is never held
//! across an `.await`. Transitions take the slot lock first and keep it while
//! the state is published, so the resolver and `is_open` change together.

use super::request::{Content, DialogKind, DialogOverrides, DialogRequest, Hook};
use super::slot::{AlertOutcome, DialogOutcome, ResolutionSlot};
use crate::errors::{DialogError, HookStage, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Snapshot of what the renderer should show
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    pub is_open: bool,
    pub current: DialogRequest,
}

/// Owner of the single in-flight dialog
#[derive(Debug)]
pub struct DialogController {
    state: watch::Sender<ControllerState>,
    slot: Mutex<ResolutionSlot>,
}

impl Default for DialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogController {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ControllerState::default());
        Self {
            state,
            slot: Mutex::new(ResolutionSlot::default()),
        }
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.state.subscribe()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open
    }

    fn slot(&self) -> MutexGuard<'_, ResolutionSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Present `request` and return the future of its outcome
    ///
    /// A still-pending outcome from an earlier `show` is overwritten and
    /// will never resolve. There is no queue.
    pub fn show(&self, request: DialogRequest) -> DialogOutcome {
        let mut slot = self.slot();
        let (outcome, replaced) = slot.install();
        if replaced {
            tracing::warn!(
                title = ?request.title,
                "Dialog shown while another was pending; previous outcome will never settle"
            );
        }
        tracing::debug!(kind = ?request.kind, title = ?request.title, "Showing dialog");
        self.state.send_modify(|state| {
            state.current = request;
            state.is_open = true;
        });
        drop(slot);
        outcome
    }

    /// Informational dialog with a single "OK" affordance
    pub fn alert(
        &self,
        title: impl Into<String>,
        description: Option<Content>,
        overrides: Option<DialogOverrides>,
    ) -> AlertOutcome {
        let mut request = DialogRequest::new(DialogKind::Alert)
            .title(title)
            .confirm_text("OK");
        request.description = description;
        AlertOutcome::new(self.show(request.merge(overrides.unwrap_or_default())))
    }

    /// Yes/no dialog resolving to `true` on confirm
    pub fn confirm(
        &self,
        title: impl Into<String>,
        description: Option<Content>,
        overrides: Option<DialogOverrides>,
    ) -> DialogOutcome {
        let mut request = DialogRequest::new(DialogKind::Confirm)
            .title(title)
            .confirm_text("Confirm")
            .cancel_text("Cancel");
        request.description = description;
        self.show(request.merge(overrides.unwrap_or_default()))
    }

    /// Close the dialog, settling any pending outcome with `false`
    pub fn hide(&self) {
        tracing::debug!("Hiding dialog");
        self.close(false);
    }

    /// Run `on_confirm`, then close and settle with `true`
    ///
    /// A failing hook returns early: the dialog stays open and the outcome
    /// stays pending.
    pub async fn confirm_action(&self) -> Result<()> {
        let Some(on_confirm) = self.open_hook(|request| request.on_confirm.clone()) else {
            return Ok(());
        };
        run_hook(on_confirm, HookStage::Confirm).await?;
        self.close(true);
        Ok(())
    }

    /// Run `on_cancel`, then close and settle with `false`
    pub async fn cancel_action(&self) -> Result<()> {
        let Some(on_cancel) = self.open_hook(|request| request.on_cancel.clone()) else {
            return Ok(());
        };
        run_hook(on_cancel, HookStage::Cancel).await?;
        self.close(false);
        Ok(())
    }

    /// Outside click or Esc; same as pressing Cancel
    pub async fn dismiss(&self) -> Result<()> {
        tracing::debug!("Dialog dismissed");
        self.cancel_action().await
    }

    /// Activate custom button `index`
    ///
    /// The button's own action runs first, then the confirm path. Every
    /// custom button resolves `true` whatever its variant.
    pub async fn press_button(&self, index: usize) -> Result<()> {
        let on_click = {
            let state = self.state.borrow();
            if !state.is_open {
                tracing::debug!(index, "Button pressed with no open dialog");
                return Ok(());
            }
            let button = state.current.custom_buttons().and_then(|b| b.get(index));
            match button {
                Some(button) => button.on_click.clone(),
                None => {
                    tracing::debug!(index, "No custom button at index");
                    return Ok(());
                }
            }
        };
        run_hook(on_click, HookStage::Button(index)).await?;
        self.confirm_action().await
    }

    /// Hook of the open request, or `None` when nothing is open
    fn open_hook(&self, pick: impl FnOnce(&DialogRequest) -> Option<Hook>) -> Option<Option<Hook>> {
        let state = self.state.borrow();
        if !state.is_open {
            tracing::debug!("Dialog action ignored; no dialog is open");
            return None;
        }
        Some(pick(&state.current))
    }

    fn close(&self, outcome: bool) {
        let mut slot = self.slot();
        self.state.send_modify(|state| {
            state.is_open = false;
            state.current = DialogRequest::default();
        });
        if slot.settle(outcome) {
            tracing::debug!(outcome, "Dialog outcome settled");
        }
    }
}

async fn run_hook(action: Option<Hook>, stage: HookStage) -> Result<()> {
    if let Some(action) = action {
        action()
            .await
            .map_err(|source| DialogError::Hook { stage, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::request::{hook, ButtonVariant, DialogButton};
    use crate::errors::HookError;
    use futures_util::FutureExt;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_confirm_resolves_true_on_confirm() {
        let controller = DialogController::new();
        let outcome = controller.confirm("T", Some("D".into()), None);
        assert!(controller.is_open());

        controller.confirm_action().await.unwrap();
        assert!(outcome.await);
        assert!(!controller.is_open());
    }

    #[tokio::test]
    async fn test_confirm_resolves_false_on_cancel() {
        let controller = DialogController::new();
        let outcome = controller.confirm("T", Some("D".into()), None);
        controller.cancel_action().await.unwrap();
        assert!(!outcome.await);
    }

    #[tokio::test]
    async fn test_dismiss_is_cancel() {
        let controller = DialogController::new();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let outcome = controller.confirm(
            "T",
            None,
            Some(DialogOverrides {
                on_cancel: Some(hook(move || {
                    let flag = flag.clone();
                    async move {
                        flag.store(true, Ordering::SeqCst);
                        Ok(())
                    }
                })),
                ..Default::default()
            }),
        );
        controller.dismiss().await.unwrap();
        assert!(!outcome.await);
        assert!(cancelled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_confirm_defaults() {
        let controller = DialogController::new();
        let _outcome = controller.confirm("Proceed?", None, None);
        let state = controller.snapshot();
        assert_eq!(state.current.kind, DialogKind::Confirm);
        assert_eq!(state.current.confirm_text.as_deref(), Some("Confirm"));
        assert_eq!(state.current.cancel_text.as_deref(), Some("Cancel"));
    }

    #[tokio::test]
    async fn test_alert_resolves_after_confirm() {
        let controller = DialogController::new();
        let mut outcome = controller.alert("Saved", None, None);
        let state = controller.snapshot();
        assert_eq!(state.current.kind, DialogKind::Alert);
        assert_eq!(state.current.confirm_text.as_deref(), Some("OK"));
        assert!((&mut outcome).now_or_never().is_none());

        controller.confirm_action().await.unwrap();
        outcome.await;
    }

    #[tokio::test]
    async fn test_alert_confirm_text_overridable() {
        let controller = DialogController::new();
        let _outcome = controller.alert(
            "Done",
            None,
            Some(DialogOverrides {
                confirm_text: Some("Got it".into()),
                ..Default::default()
            }),
        );
        assert_eq!(
            controller.snapshot().current.confirm_text.as_deref(),
            Some("Got it")
        );
    }

    #[tokio::test]
    async fn test_hide_forces_cancel() {
        let controller = DialogController::new();
        let outcome = controller.confirm("T", None, None);
        controller.hide();
        assert!(!controller.is_open());
        assert!(!outcome.await);
    }

    #[tokio::test]
    async fn test_hide_without_dialog_is_harmless() {
        let controller = DialogController::new();
        controller.hide();
        assert!(!controller.is_open());
    }

    #[tokio::test]
    async fn test_hook_completes_before_outcome_and_close() {
        let controller = Arc::new(DialogController::new());
        let observed_open = Arc::new(AtomicBool::new(false));
        let finished = Arc::new(AtomicBool::new(false));

        let hook_controller = controller.clone();
        let hook_open = observed_open.clone();
        let hook_finished = finished.clone();
        let on_confirm = hook(move || {
            let controller = hook_controller.clone();
            let open = hook_open.clone();
            let finished = hook_finished.clone();
            async move {
                tokio::task::yield_now().await;
                open.store(controller.is_open(), Ordering::SeqCst);
                finished.store(true, Ordering::SeqCst);
                Ok(())
            }
        });

        let outcome = controller.confirm(
            "T",
            None,
            Some(DialogOverrides {
                on_confirm: Some(on_confirm),
                ..Default::default()
            }),
        );
        controller.confirm_action().await.unwrap();

        assert!(outcome.await);
        assert!(finished.load(Ordering::SeqCst));
        assert!(observed_open.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_custom_buttons_collapse_to_true() {
        for index in 0..2 {
            let controller = DialogController::new();
            let clicks = Arc::new(AtomicUsize::new(0));
            let counter = clicks.clone();
            let action = hook(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            });
            let request = DialogRequest::new(DialogKind::Custom)
                .title("Unsaved changes")
                .button(DialogButton::new("Save").on_click(action.clone()))
                .button(
                    DialogButton::new("Discard")
                        .variant(ButtonVariant::Destructive)
                        .on_click(action),
                );

            let outcome = controller.show(request);
            controller.press_button(index).await.unwrap();
            assert!(outcome.await, "button {index}");
            assert_eq!(clicks.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_missing_button_index_is_noop() {
        let controller = DialogController::new();
        let mut outcome = controller.show(
            DialogRequest::new(DialogKind::Custom).button(DialogButton::new("Only")),
        );
        controller.press_button(3).await.unwrap();
        assert!(controller.is_open());
        assert!((&mut outcome).now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_leaves_first_outcome_pending() {
        let controller = DialogController::new();
        let mut first = controller.show(DialogRequest::new(DialogKind::Confirm).title("A"));
        let second = controller.show(DialogRequest::new(DialogKind::Confirm).title("B"));

        let state = controller.snapshot();
        assert!(state.is_open);
        assert_eq!(state.current.title.as_deref(), Some("B"));

        controller.confirm_action().await.unwrap();
        assert!(second.await);
        assert!((&mut first).now_or_never().is_none());
        tokio::task::yield_now().await;
        assert!((&mut first).now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_failing_hook_leaves_dialog_stuck() {
        let controller = DialogController::new();
        let mut outcome = controller.confirm(
            "T",
            None,
            Some(DialogOverrides {
                on_confirm: Some(hook(|| async { Err(HookError::msg("boom")) })),
                ..Default::default()
            }),
        );

        let err = controller.confirm_action().await.unwrap_err();
        assert!(matches!(
            err,
            DialogError::Hook {
                stage: HookStage::Confirm,
                ..
            }
        ));
        assert!(controller.is_open());
        assert!((&mut outcome).now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_failing_cancel_hook_leaves_dialog_stuck() {
        let controller = DialogController::new();
        let mut outcome = controller.confirm(
            "T",
            None,
            Some(DialogOverrides {
                on_cancel: Some(hook(|| async { Err(HookError::msg("locked")) })),
                ..Default::default()
            }),
        );

        let err = controller.cancel_action().await.unwrap_err();
        assert!(matches!(
            err,
            DialogError::Hook {
                stage: HookStage::Cancel,
                ..
            }
        ));
        assert!(controller.is_open());
        assert!((&mut outcome).now_or_never().is_none());

        let err = controller.dismiss().await.unwrap_err();
        assert!(matches!(
            err,
            DialogError::Hook {
                stage: HookStage::Cancel,
                ..
            }
        ));
        assert!(controller.is_open());
        assert!((&mut outcome).now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_failing_button_skips_confirm() {
        let controller = DialogController::new();
        let mut outcome = controller.show(
            DialogRequest::new(DialogKind::Custom).button(
                DialogButton::new("Retry")
                    .on_click(hook(|| async { Err(HookError::msg("offline")) })),
            ),
        );
        let err = controller.press_button(0).await.unwrap_err();
        assert!(matches!(
            err,
            DialogError::Hook {
                stage: HookStage::Button(0),
                ..
            }
        ));
        assert!(controller.is_open());
        assert!((&mut outcome).now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_actions_ignored_when_closed() {
        let controller = DialogController::new();
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let outcome = controller.confirm(
            "T",
            None,
            Some(DialogOverrides {
                on_confirm: Some(hook(move || {
                    let flag = flag.clone();
                    async move {
                        flag.store(true, Ordering::SeqCst);
                        Ok(())
                    }
                })),
                ..Default::default()
            }),
        );
        controller.hide();
        assert!(!outcome.await);

        controller.confirm_action().await.unwrap();
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_closed_state_is_empty_default() {
        let controller = DialogController::new();
        let outcome = controller.confirm("T", None, None);
        controller.confirm_action().await.unwrap();
        assert!(outcome.await);
        let state = controller.snapshot();
        assert!(!state.is_open);
        assert!(state.current.title.is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let controller = DialogController::new();
        let mut rx = controller.subscribe();
        let _outcome = controller.confirm("T", None, None);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_open);
        controller.hide();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_open);
    }

    #[tokio::test]
    async fn test_single_visibility_across_sequence() {
        let controller = DialogController::new();
        let mut rx = controller.subscribe();
        let _a = controller.alert("one", None, None);
        let _b = controller.confirm("two", None, None);
        let _c = controller.show(DialogRequest::new(DialogKind::Custom).title("three"));
        let state = rx.borrow_and_update().clone();
        assert!(state.is_open);
        assert_eq!(state.current.title.as_deref(), Some("three"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_show_and_close_stay_consistent() {
        for round in 0..2_000 {
            let controller = Arc::new(DialogController::new());
            let _first = controller.show(DialogRequest::new(DialogKind::Confirm).title("A"));

            let closer = {
                let controller = controller.clone();
                tokio::spawn(async move { controller.confirm_action().await })
            };
            let opener = {
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller.show(DialogRequest::new(DialogKind::Confirm).title("B"))
                })
            };
            closer.await.unwrap().unwrap();
            let mut second = opener.await.unwrap();

            // Open exactly when the latest outcome is still pending
            let settled = (&mut second).now_or_never();
            assert_eq!(
                controller.is_open(),
                settled.is_none(),
                "round {round}: open={} settled={settled:?}",
                controller.is_open()
            );
        }
    }
}
