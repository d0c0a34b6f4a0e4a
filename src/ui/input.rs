//! Translate terminal input into dialog actions and route them

use super::dialog::{Affordance, AffordanceAction, DialogLayout, DialogView};
use crate::dialog::DialogController;
use crate::errors::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// User intent while a dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    FocusNext,
    FocusPrev,
    Activate(AffordanceAction),
    /// Esc or click outside the frame
    Dismiss,
}

fn find(affordances: &[Affordance], action: AffordanceAction) -> Option<DialogAction> {
    affordances
        .iter()
        .any(|a| a.action == action)
        .then_some(DialogAction::Activate(action))
}

/// Map a key press to a dialog action
pub fn translate_key(
    key: KeyEvent,
    affordances: &[Affordance],
    view: &DialogView,
) -> Option<DialogAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(DialogAction::Dismiss),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(DialogAction::FocusNext),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(DialogAction::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => view
            .focused(affordances)
            .map(|a| DialogAction::Activate(a.action)),
        KeyCode::Char('y') => find(affordances, AffordanceAction::Confirm),
        KeyCode::Char('n') => find(affordances, AffordanceAction::Cancel),
        _ => None,
    }
}

/// Map a mouse click to a dialog action
pub fn translate_mouse(
    mouse: MouseEvent,
    layout: &DialogLayout,
    affordances: &[Affordance],
) -> Option<DialogAction> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let position = Position::new(mouse.column, mouse.row);
    if !layout.frame.contains(position) {
        return Some(DialogAction::Dismiss);
    }
    layout
        .buttons
        .iter()
        .position(|rect| rect.contains(position))
        .and_then(|index| affordances.get(index))
        .map(|a| DialogAction::Activate(a.action))
}

/// Apply a focus move locally; returns `true` when the action was consumed
pub fn apply_focus(view: &mut DialogView, action: DialogAction, count: usize) -> bool {
    match action {
        DialogAction::FocusNext => {
            view.focus_next(count);
            true
        }
        DialogAction::FocusPrev => {
            view.focus_prev(count);
            true
        }
        DialogAction::Activate(_) | DialogAction::Dismiss => false,
    }
}

/// Route an action to the controller
///
/// Hooks run inside; callers usually spawn this so painting continues
/// while a hook is pending.
pub async fn dispatch(controller: &DialogController, action: DialogAction) -> Result<()> {
    match action {
        DialogAction::Activate(AffordanceAction::Confirm) => controller.confirm_action().await,
        DialogAction::Activate(AffordanceAction::Cancel) => controller.cancel_action().await,
        DialogAction::Activate(AffordanceAction::Button(index)) => {
            controller.press_button(index).await
        }
        DialogAction::Dismiss => controller.dismiss().await,
        DialogAction::FocusNext | DialogAction::FocusPrev => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;
    use crate::dialog::{DialogButton, DialogKind, DialogRequest};
    use crate::ui::dialog::{dialog_layout, footer_affordances};
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_on_confirm_dialog() {
        let request = DialogRequest::new(DialogKind::Confirm);
        let affordances = footer_affordances(&request);
        let view = DialogView::for_affordances(affordances.len());

        assert_eq!(
            translate_key(key(KeyCode::Enter), &affordances, &view),
            Some(DialogAction::Activate(AffordanceAction::Confirm))
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('n')), &affordances, &view),
            Some(DialogAction::Activate(AffordanceAction::Cancel))
        );
        assert_eq!(
            translate_key(key(KeyCode::Esc), &affordances, &view),
            Some(DialogAction::Dismiss)
        );
        assert_eq!(
            translate_key(key(KeyCode::Tab), &affordances, &view),
            Some(DialogAction::FocusNext)
        );
        assert_eq!(translate_key(key(KeyCode::Char('z')), &affordances, &view), None);
    }

    #[test]
    fn test_alert_has_no_cancel_key() {
        let request = DialogRequest::new(DialogKind::Alert);
        let affordances = footer_affordances(&request);
        let view = DialogView::for_affordances(affordances.len());
        assert_eq!(translate_key(key(KeyCode::Char('n')), &affordances, &view), None);
        assert_eq!(
            translate_key(key(KeyCode::Char('y')), &affordances, &view),
            Some(DialogAction::Activate(AffordanceAction::Confirm))
        );
    }

    #[test]
    fn test_y_does_nothing_with_custom_buttons() {
        let request = DialogRequest::new(DialogKind::Custom).button(DialogButton::new("Save"));
        let affordances = footer_affordances(&request);
        let view = DialogView::for_affordances(affordances.len());
        assert_eq!(translate_key(key(KeyCode::Char('y')), &affordances, &view), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let request = DialogRequest::new(DialogKind::Alert);
        let affordances = footer_affordances(&request);
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(
            translate_key(release, &affordances, &DialogView::default()),
            None
        );
    }

    #[test]
    fn test_mouse_outside_dismisses_and_button_activates() {
        let request = DialogRequest::new(DialogKind::Custom)
            .button(DialogButton::new("Save"))
            .button(DialogButton::new("Discard"));
        let affordances = footer_affordances(&request);
        let layout = dialog_layout(Rect::new(0, 0, 80, 24), &request, &DialogConfig::default());

        assert_eq!(
            translate_mouse(click(0, 0), &layout, &affordances),
            Some(DialogAction::Dismiss)
        );

        let discard = layout.buttons[1];
        assert_eq!(
            translate_mouse(click(discard.x, discard.y), &layout, &affordances),
            Some(DialogAction::Activate(AffordanceAction::Button(1)))
        );

        // Inside the frame but not on a button
        assert_eq!(
            translate_mouse(click(layout.header.x, layout.header.y), &layout, &affordances),
            None
        );
    }

    #[test]
    fn test_apply_focus() {
        let mut view = DialogView::for_affordances(2);
        assert!(apply_focus(&mut view, DialogAction::FocusNext, 2));
        assert_eq!(view.focus(), 0);
        assert!(!apply_focus(&mut view, DialogAction::Dismiss, 2));
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_controller() {
        let controller = DialogController::new();
        let outcome = controller.confirm("T", None, None);
        dispatch(&controller, DialogAction::FocusNext).await.unwrap();
        assert!(controller.is_open());
        dispatch(&controller, DialogAction::Dismiss).await.unwrap();
        assert!(!outcome.await);

        let outcome = controller.show(
            DialogRequest::new(DialogKind::Custom).button(DialogButton::new("Archive")),
        );
        dispatch(
            &controller,
            DialogAction::Activate(AffordanceAction::Button(0)),
        )
        .await
        .unwrap();
        assert!(outcome.await);
    }
}
