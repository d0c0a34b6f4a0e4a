//! Demo application state
//!
//! The app mounts a [`DialogProvider`], keeps an activity log, and routes
//! input either to the open dialog or to the demo shortcuts. Keyboard
//! handling lives in `keyboard`, the demo scenarios in `demos`.

mod demos;
mod keyboard;

use crate::event::Event;
use modalis::config::ModalisConfig;
use modalis::dialog::ControllerState;
use modalis::ui::{self, DialogAction, DialogView};
use modalis::DialogProvider;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Maximum activity lines kept for display
pub const MAX_LOG_LINES: usize = 200;

/// One line of the activity log
#[derive(Debug, Clone)]
pub struct LogLine {
    pub at: Instant,
    pub message: String,
    pub is_error: bool,
}

/// Application state and logic
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    /// Dirty flag: true if UI needs re-render
    pub needs_render: bool,
    pub provider: DialogProvider,
    /// Focus among the open dialog's footer buttons
    pub view: DialogView,
    pub log: VecDeque<LogLine>,
    pub config: ModalisConfig,
    /// Area of the last drawn frame, for mouse hit-testing
    pub screen: Rect,
    pub started: Instant,
    /// Set while a dispatched dialog action is still running its hooks
    action_in_flight: Arc<AtomicBool>,
    event_tx: mpsc::Sender<Event>,
}

impl App {
    pub fn new(config: ModalisConfig, event_tx: mpsc::Sender<Event>) -> Self {
        Self {
            should_quit: false,
            show_help: true,
            needs_render: true,
            provider: DialogProvider::new(),
            view: DialogView::default(),
            log: VecDeque::new(),
            config,
            screen: Rect::default(),
            started: Instant::now(),
            action_in_flight: Arc::new(AtomicBool::new(false)),
            event_tx,
        }
    }

    pub fn dialog_state(&self) -> ControllerState {
        self.provider.controller().snapshot()
    }

    /// Handle an incoming event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize => {}
            Event::Status { message, is_error } => self.push_log(message, is_error),
        }
        self.needs_render = true;
    }

    /// Controller state changed: a dialog opened, closed, or was replaced
    pub fn dialog_changed(&mut self) {
        let state = self.dialog_state();
        let count = ui::footer_affordances(&state.current).len();
        self.view = DialogView::for_affordances(count);
        self.needs_render = true;
        tracing::debug!(is_open = state.is_open, "Dialog state changed");
    }

    /// Timer tick; refreshes the uptime and log ages
    pub fn tick(&mut self) {
        self.needs_render = true;
    }

    /// Mark frame as rendered
    pub fn rendered(&mut self, area: Rect) {
        self.needs_render = false;
        self.screen = area;
    }

    pub fn push_log(&mut self, message: String, is_error: bool) {
        if is_error {
            tracing::warn!("{}", message);
        } else {
            tracing::info!("{}", message);
        }
        self.log.push_back(LogLine {
            at: Instant::now(),
            message,
            is_error,
        });
        while self.log.len() > MAX_LOG_LINES {
            self.log.pop_front();
        }
    }

    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        let state = self.dialog_state();
        if !state.is_open {
            return;
        }
        let layout = ui::dialog_layout(self.screen, &state.current, &self.config.dialog);
        let affordances = ui::footer_affordances(&state.current);
        if let Some(action) = ui::translate_mouse(mouse, &layout, &affordances) {
            self.run_dialog_action(action, affordances.len());
        }
    }

    fn run_dialog_action(&mut self, action: DialogAction, count: usize) {
        if ui::apply_focus(&mut self.view, action, count) {
            return;
        }
        // One action at a time; a second Enter or Esc mid-hook is dropped
        if self.action_in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!(?action, "Dialog action ignored; previous action still running");
            return;
        }
        // Hooks may take a while; keep painting while they run
        let controller = self.provider.controller().clone();
        let tx = self.event_tx.clone();
        let in_flight = self.action_in_flight.clone();
        tokio::spawn(async move {
            let result = ui::dispatch(&controller, action).await;
            in_flight.store(false, Ordering::SeqCst);
            if let Err(e) = result {
                tracing::error!(error = %e, "Unhandled dialog error");
                let _ = tx.send(Event::error(format!("Unhandled: {e}"))).await;
            }
        });
    }
}
