use super::Event;
use crossterm::event::{self, Event as CrosstermEvent, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Forward terminal input to the app until cancelled
pub async fn listen(tx: mpsc::Sender<Event>, cancel: CancellationToken) {
    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!("Input listener cancelled");
                break;
            }
            () = tokio::time::sleep(Duration::from_millis(50)) => {
                // Drain everything that is ready without blocking
                while event::poll(Duration::ZERO).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                            Some(Event::Mouse(mouse))
                        }
                        Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                        Ok(_) => None,
                        Err(e) => {
                            tracing::warn!(error = %e, "Failed to read terminal event");
                            None
                        }
                    };
                    if let Some(event) = forwarded {
                        if tx.send(event).await.is_err() {
                            // Channel closed, exit
                            return;
                        }
                    }
                }
            }
        }
    }
}
