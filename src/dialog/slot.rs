//! Single-occupancy outcome slot
//!
//! The slot holds at most one resolver. Installing a new one drops the
//! previous resolver without settling it, so a superseded [`DialogOutcome`]
//! stays pending forever instead of resolving or erroring.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Holder of the pending resolver, if any
#[derive(Debug, Default)]
pub struct ResolutionSlot {
    resolver: Option<oneshot::Sender<bool>>,
}

impl ResolutionSlot {
    /// Install a fresh resolver, returning the caller-side future
    ///
    /// Returns `true` as the second element when an unsettled resolver was
    /// overwritten.
    pub fn install(&mut self) -> (DialogOutcome, bool) {
        let (tx, rx) = oneshot::channel();
        let replaced = self
            .resolver
            .replace(tx)
            .is_some_and(|previous| !previous.is_closed());
        (DialogOutcome::new(rx), replaced)
    }

    /// Settle the pending resolver and empty the slot
    ///
    /// Returns `false` when there was nothing to settle.
    pub fn settle(&mut self, outcome: bool) -> bool {
        match self.resolver.take() {
            // A dropped outcome future is not an error
            Some(tx) => {
                let _ = tx.send(outcome);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resolver.is_none()
    }
}

/// Future returned by `show` and `confirm`; resolves to the user's decision
#[derive(Debug)]
#[must_use = "the dialog outcome is only observed by awaiting it"]
pub struct DialogOutcome {
    rx: oneshot::Receiver<bool>,
    superseded: bool,
}

impl DialogOutcome {
    fn new(rx: oneshot::Receiver<bool>) -> Self {
        Self {
            rx,
            superseded: false,
        }
    }
}

impl Future for DialogOutcome {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        if self.superseded {
            return Poll::Pending;
        }
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => {
                // Resolver dropped unsettled: a newer show() took the slot
                // or the provider went away. Never resolves.
                tracing::warn!("Dialog outcome superseded before it settled");
                self.superseded = true;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Future returned by `alert`; resolves once the dialog is confirmed
#[derive(Debug)]
#[must_use = "the dialog outcome is only observed by awaiting it"]
pub struct AlertOutcome {
    inner: DialogOutcome,
}

impl AlertOutcome {
    pub(crate) fn new(inner: DialogOutcome) -> Self {
        Self { inner }
    }
}

impl Future for AlertOutcome {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        Pin::new(&mut self.inner).poll(cx).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[tokio::test]
    async fn test_settle_resolves_outcome() {
        let mut slot = ResolutionSlot::default();
        let (outcome, replaced) = slot.install();
        assert!(!replaced);
        assert!(slot.settle(true));
        assert!(slot.is_empty());
        assert!(outcome.await);
    }

    #[test]
    fn test_settle_empty_slot_is_noop() {
        let mut slot = ResolutionSlot::default();
        assert!(!slot.settle(false));
    }

    #[test]
    fn test_settles_at_most_once() {
        let mut slot = ResolutionSlot::default();
        let (outcome, _) = slot.install();
        assert!(slot.settle(false));
        assert!(!slot.settle(true));
        assert_eq!(outcome.now_or_never(), Some(false));
    }

    #[test]
    fn test_overwritten_outcome_never_resolves() {
        let mut slot = ResolutionSlot::default();
        let (mut first, _) = slot.install();
        let (second, replaced) = slot.install();
        assert!(replaced);

        assert!(slot.settle(true));
        assert_eq!(second.now_or_never(), Some(true));
        // Polling again must stay pending rather than panic
        assert_eq!((&mut first).now_or_never(), None);
        assert_eq!((&mut first).now_or_never(), None);
    }

    #[test]
    fn test_overwriting_dropped_outcome_is_not_reported() {
        let mut slot = ResolutionSlot::default();
        let (first, _) = slot.install();
        drop(first);
        let (_second, replaced) = slot.install();
        assert!(!replaced);
    }

    #[test]
    fn test_alert_outcome_discards_value() {
        let mut slot = ResolutionSlot::default();
        let (outcome, _) = slot.install();
        let alert = AlertOutcome::new(outcome);
        slot.settle(true);
        assert_eq!(alert.now_or_never(), Some(()));
    }
}
