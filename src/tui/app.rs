//! Main application state
//!
//! Holds the quote form, which field has focus, and the status line, and
//! maps key presses onto form edits and the calculate trigger.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::form::QuoteForm;
use crate::quote::QuoteConfig;

/// Which form control has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// Floor area entry
    #[default]
    Area,
    /// Tile size selector
    TileSize,
    /// Grout width entry
    Grout,
    /// Calculate button
    Calculate,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Area => Focus::TileSize,
            Focus::TileSize => Focus::Grout,
            Focus::Grout => Focus::Calculate,
            Focus::Calculate => Focus::Area,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Area => Focus::Calculate,
            Focus::TileSize => Focus::Area,
            Focus::Grout => Focus::TileSize,
            Focus::Calculate => Focus::Grout,
        }
    }

    /// Whether the control takes free text
    pub fn is_text_entry(self) -> bool {
        matches!(self, Focus::Area | Focus::Grout)
    }
}

/// Status message displayed at the bottom
#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub expires: Instant,
}

/// Status message severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Error,
    Success,
}

/// Main application state
pub struct App {
    /// Pricing constants and catalog, fixed for the session
    pub config: QuoteConfig,

    /// The form fields and output slots
    pub form: QuoteForm,

    /// Active control
    pub focus: Focus,

    /// Whether to show help overlay
    pub show_help: bool,

    /// Status message (bottom bar)
    pub status_message: Option<StatusMessage>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: QuoteConfig) -> Self {
        let form = QuoteForm::new(&config);
        Self {
            config,
            form,
            focus: Focus::Area,
            show_help: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Start with the area field already filled in
    pub fn with_area(config: QuoteConfig, area: impl Into<String>) -> Self {
        let mut app = Self::new(config);
        app.form.area = area.into();
        app
    }

    /// Handle tick events (message expiry)
    pub fn on_tick(&mut self) {
        if let Some(ref msg) = self.status_message {
            if Instant::now() > msg.expires {
                self.status_message = None;
            }
        }
    }

    /// Handle key events
    pub fn on_key(&mut self, key: KeyEvent) {
        // Global shortcuts
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return;
            }
            KeyCode::Char('?') if !self.focus.is_text_entry() => {
                self.show_help = !self.show_help;
                return;
            }
            // While help is open, Esc and Enter only close it
            KeyCode::Esc | KeyCode::Enter if self.show_help => {
                self.show_help = false;
                return;
            }
            KeyCode::Char('q') if !self.focus.is_text_entry() => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            KeyCode::Enter => {
                self.calculate();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Area | Focus::Grout => self.handle_text_key(key),
            Focus::TileSize => self.handle_selector_key(key),
            Focus::Calculate => {
                if key.code == KeyCode::Char(' ') {
                    self.calculate();
                }
            }
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let field = match self.focus {
            Focus::Area => &mut self.form.area,
            Focus::Grout => &mut self.form.grout,
            _ => return,
        };
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.push(c);
            }
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Delete => {
                field.clear();
            }
            KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Up => self.focus = self.focus.previous(),
            _ => {}
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                self.form.tile_size.select_next()
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                self.form.tile_size.select_previous()
            }
            _ => {}
        }
    }

    /// Trigger the calculator and report the outcome in the status bar
    pub fn calculate(&mut self) {
        match self.form.calculate(&self.config) {
            Ok(result) => {
                let text = format!(
                    "{:.0} dozen, {:.0} kg tegellijm, {}% korting",
                    result.total_boxes,
                    result.total_glue_kg,
                    result.discount.percent()
                );
                self.set_status(text, StatusLevel::Success);
            }
            Err(_) => {
                self.set_status("Ongeldige invoer", StatusLevel::Error);
            }
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
            expires: Instant::now() + Duration::from_secs(5),
        });
    }
}
