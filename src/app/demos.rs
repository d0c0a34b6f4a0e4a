//! Demo scenarios, each run in its own task
//!
//! Every scenario looks the dialog capability up with `use_dialog()`, the
//! way application code would, and reports what its awaited call returned.

use crate::event::Event;
use modalis::config::colors;
use modalis::presentation::{IconKind, SizeKind};
use modalis::{
    hook, use_dialog, ButtonVariant, DialogButton, DialogError, DialogHandle, DialogIcon,
    DialogKind, DialogOverrides, DialogRequest, HookError,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;

type Tx = mpsc::Sender<Event>;

/// Run `demo` on its own task with the dialog capability in scope
pub fn spawn<F, Fut>(handle: DialogHandle, tx: Tx, demo: F)
where
    F: FnOnce(Tx) -> Fut,
    Fut: Future<Output = Result<(), DialogError>> + Send + 'static,
{
    let report = tx.clone();
    let fut = demo(tx);
    tokio::spawn(async move {
        if let Err(e) = handle.scope(fut).await {
            let _ = report.send(Event::error(format!("Demo failed: {e}"))).await;
        }
    });
}

async fn info(tx: &Tx, message: impl Into<String>) {
    let _ = tx.send(Event::info(message)).await;
}

pub async fn alert(tx: Tx) -> Result<(), DialogError> {
    use_dialog()?
        .alert(
            "Build finished",
            Some("All 42 tests passed in 3.1s.".into()),
            Some(DialogOverrides {
                icon: Some(IconKind::Success.into()),
                ..Default::default()
            }),
        )?
        .await;
    info(&tx, "Alert acknowledged").await;
    Ok(())
}

pub async fn confirm(tx: Tx) -> Result<(), DialogError> {
    let publish = use_dialog()?
        .confirm(
            "Publish release?",
            Some("v1.2.0 will be tagged and pushed to origin.".into()),
            Some(DialogOverrides {
                icon: Some(IconKind::Question.into()),
                ..Default::default()
            }),
        )?
        .await;
    info(&tx, format!("Publish confirmed: {publish}")).await;
    Ok(())
}

pub async fn destructive(tx: Tx) -> Result<(), DialogError> {
    let hook_tx = tx.clone();
    let on_confirm = hook(move || {
        let tx = hook_tx.clone();
        async move {
            info(&tx, "Deleting 3 files…").await;
            tokio::time::sleep(Duration::from_millis(800)).await;
            info(&tx, "Files deleted").await;
            Ok(())
        }
    });

    let description = Text::from(vec![
        Line::from("The following will be removed:"),
        Line::from(Span::styled(
            "  build/  cache/  notes.md",
            Style::default().fg(colors::WARNING),
        )),
    ]);
    let deleted = use_dialog()?
        .confirm(
            "Delete workspace files?",
            Some(description.into()),
            Some(DialogOverrides {
                icon: Some(IconKind::Error.into()),
                confirm_text: Some("Delete".into()),
                cancel_text: Some("Keep".into()),
                confirm_variant: Some(ButtonVariant::Destructive),
                on_confirm: Some(on_confirm),
                ..Default::default()
            }),
        )?
        .await;
    info(&tx, format!("Delete outcome: {deleted}")).await;
    Ok(())
}

pub async fn custom_buttons(tx: Tx) -> Result<(), DialogError> {
    let save_tx = tx.clone();
    let save = hook(move || {
        let tx = save_tx.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            info(&tx, "Saved notes.md").await;
            Ok(())
        }
    });
    let discard_tx = tx.clone();
    let discard = hook(move || {
        let tx = discard_tx.clone();
        async move {
            info(&tx, "Discarded edits to notes.md").await;
            Ok(())
        }
    });

    let request = DialogRequest::new(DialogKind::Custom)
        .title("Unsaved changes")
        .description("notes.md has edits that are not on disk.")
        .content(Line::from(Span::styled(
            "Every button below resolves the prompt as confirmed.",
            Style::default().add_modifier(Modifier::ITALIC),
        )))
        .icon(IconKind::Warning)
        .size(SizeKind::Lg)
        .button(DialogButton::new("Save").on_click(save))
        .button(
            DialogButton::new("Discard")
                .variant(ButtonVariant::Destructive)
                .on_click(discard),
        )
        .button(DialogButton::new("Later").variant(ButtonVariant::Ghost));

    let outcome = use_dialog()?.show(request)?.await;
    info(&tx, format!("Custom dialog resolved: {outcome}")).await;
    Ok(())
}

pub async fn gallery(tx: Tx) -> Result<(), DialogError> {
    let dialog = use_dialog()?;
    let entries: [(&str, DialogIcon, &str); 7] = [
        ("info", IconKind::Info.into(), "sm"),
        ("success", IconKind::Success.into(), "md"),
        ("warning", IconKind::Warning.into(), "lg"),
        ("error", IconKind::Error.into(), "xl"),
        ("question", IconKind::Question.into(), "2xl"),
        ("sparkles (unknown name)", DialogIcon::from("sparkles"), "4xl"),
        (
            "custom content",
            Line::from(Span::styled("★", Style::default().fg(colors::HIGHLIGHT))).into(),
            "enormous",
        ),
    ];

    for (name, icon, size) in entries {
        dialog
            .alert(
                format!("Icon: {name}"),
                Some(format!("size = \"{size}\"").into()),
                Some(DialogOverrides {
                    icon: Some(icon),
                    size: size.parse().ok(),
                    confirm_text: Some("Next".into()),
                    ..Default::default()
                }),
            )?
            .await;
    }
    info(&tx, "Gallery finished").await;
    Ok(())
}

pub async fn overwrite(tx: Tx) -> Result<(), DialogError> {
    let dialog = use_dialog()?;
    let first = dialog.confirm("First request", Some("About to be replaced.".into()), None)?;
    let second = dialog.confirm(
        "Second request",
        Some("The first request's outcome will never settle.".into()),
        None,
    )?;

    let watcher_tx = tx.clone();
    tokio::spawn(async move {
        match tokio::time::timeout(Duration::from_secs(10), first).await {
            Ok(outcome) => info(&watcher_tx, format!("First request settled: {outcome}")).await,
            Err(_) => info(&watcher_tx, "First request still pending after 10s").await,
        }
    });

    let outcome = second.await;
    info(&tx, format!("Second request settled: {outcome}")).await;
    Ok(())
}

pub async fn auto_hide(tx: Tx) -> Result<(), DialogError> {
    let dialog = use_dialog()?;
    let mut outcome = dialog.confirm(
        "Session expiring",
        Some("This dialog closes itself in 3 seconds.".into()),
        Some(DialogOverrides {
            icon: Some(IconKind::Warning.into()),
            confirm_text: Some("Stay signed in".into()),
            ..Default::default()
        }),
    )?;

    let settled = match tokio::time::timeout(Duration::from_secs(3), &mut outcome).await {
        Ok(settled) => settled,
        Err(_) => {
            dialog.hide()?;
            outcome.await
        }
    };
    info(&tx, format!("Auto-hide outcome: {settled}")).await;
    Ok(())
}

pub async fn failing_hook(tx: Tx) -> Result<(), DialogError> {
    let outcome = use_dialog()?
        .confirm(
            "Sync now?",
            Some("The sync hook fails, so confirming leaves this open. Esc cancels.".into()),
            Some(DialogOverrides {
                icon: Some(IconKind::Error.into()),
                on_confirm: Some(hook(|| async {
                    Err(HookError::msg("remote unreachable"))
                })),
                ..Default::default()
            }),
        )?
        .await;
    info(&tx, format!("Sync outcome: {outcome}")).await;
    Ok(())
}
