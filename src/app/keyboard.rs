//! Keyboard input handling

use super::{demos, App};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use modalis::ui;

impl App {
    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Handle Ctrl+C always
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // An open dialog takes all other input
        let state = self.dialog_state();
        if state.is_open {
            let affordances = ui::footer_affordances(&state.current);
            if let Some(action) = ui::translate_key(key, &affordances, &self.view) {
                self.run_dialog_action(action, affordances.len());
            }
            return;
        }

        self.handle_key_normal(key);
    }

    fn handle_key_normal(&mut self, key: KeyEvent) {
        let handle = self.provider.handle();
        let tx = self.event_tx.clone();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char('a') => demos::spawn(handle, tx, demos::alert),
            KeyCode::Char('c') => demos::spawn(handle, tx, demos::confirm),
            KeyCode::Char('d') => demos::spawn(handle, tx, demos::destructive),
            KeyCode::Char('b') => demos::spawn(handle, tx, demos::custom_buttons),
            KeyCode::Char('g') => demos::spawn(handle, tx, demos::gallery),
            KeyCode::Char('o') => demos::spawn(handle, tx, demos::overwrite),
            KeyCode::Char('x') => demos::spawn(handle, tx, demos::auto_hide),
            KeyCode::Char('f') => demos::spawn(handle, tx, demos::failing_hook),
            KeyCode::Char('C') => {
                self.log.clear();
            }
            _ => {}
        }
    }
}
