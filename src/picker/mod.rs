//! Context picker state machine
//!
//! The picker starts in [`Phase::Browsing`] and ends in one of the terminal
//! phases once the user confirms or cancels. Keys arriving after that are
//! ignored.

pub mod list;
pub mod style;
pub mod view;

use crate::config::PickerConfig;
use crate::context::Context;
use crate::kubectl::ContextSwitcher;
use list::{EntryList, FilterState};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

/// Where the picker is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Browsing,
    /// The context was activated
    Confirmed { name: String },
    Cancelled,
    /// Activation was attempted and failed
    Errored { name: String, message: String },
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Browsing)
    }
}

pub struct Picker {
    list: EntryList,
    width: u16,
    phase: Phase,
}

impl Picker {
    pub fn new(contexts: Vec<Context>, config: &PickerConfig) -> Self {
        Self {
            list: EntryList::new(contexts, config.per_page()),
            width: config.default_width,
            phase: Phase::Browsing,
        }
    }

    pub fn list(&self) -> &EntryList {
        &self.list
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Terminal resized; only the rendering width changes
    pub fn resize(&mut self, width: u16) {
        self.width = width;
    }

    /// Apply one key press. Enter runs `switcher` synchronously.
    pub fn handle_key(&mut self, key: KeyEvent, switcher: &dyn ContextSwitcher) {
        if self.is_finished() {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.cancel();
            return;
        }
        if key.code == KeyCode::Enter {
            self.confirm(switcher);
            return;
        }

        if self.list.filter_state() == FilterState::Filtering {
            self.handle_filter_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.list.clear_filter(),
            KeyCode::Backspace => self.list.pop_filter_char(),
            KeyCode::Tab => self.list.accept_filter(),
            KeyCode::Up => {
                self.list.accept_filter();
                self.list.cursor_up();
            }
            KeyCode::Down => {
                self.list.accept_filter();
                self.list.cursor_down();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.list.push_filter_char(c);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc if self.list.is_filtered() => self.list.clear_filter(),
            KeyCode::Esc | KeyCode::Char('q') => self.cancel(),
            KeyCode::Char('/') => self.list.start_filtering(),
            KeyCode::Up | KeyCode::Char('k') => self.list.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.list.cursor_down(),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => self.list.prev_page(),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => self.list.next_page(),
            KeyCode::Home | KeyCode::Char('g') => self.list.go_to_start(),
            KeyCode::End | KeyCode::Char('G') => self.list.go_to_end(),
            _ => {}
        }
    }

    fn cancel(&mut self) {
        debug!("selection cancelled");
        self.phase = Phase::Cancelled;
    }

    fn confirm(&mut self, switcher: &dyn ContextSwitcher) {
        let Some(entry) = self.list.highlighted() else {
            return;
        };
        let name = entry.title().to_string();

        info!("activating context {}", name);
        self.phase = match switcher.use_context(&name) {
            Ok(()) => Phase::Confirmed { name },
            Err(e) => Phase::Errored {
                name,
                message: e.to_string(),
            },
        };
    }
}
