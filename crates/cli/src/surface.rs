//! Terminal surface: prints the log and the state panel to stdout

use game_panel_core::{render_text, GameState, Surface};
use std::cell::RefCell;

/// Keeps the latest log text and state rendering; `print` writes both out
#[derive(Default)]
pub struct TerminalSurface {
    log: RefCell<String>,
    state: RefCell<String>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn print(&self) {
        let log = self.log.borrow();
        if !log.is_empty() {
            println!("{}", log.trim_end());
            println!();
        }
        print!("{}", self.state.borrow());
    }
    
    #[cfg(test)]
    pub fn log_text(&self) -> String {
        self.log.borrow().clone()
    }
    
    #[cfg(test)]
    pub fn state_text(&self) -> String {
        self.state.borrow().clone()
    }
}

impl Surface for TerminalSurface {
    fn show_log(&self, text: &str) {
        *self.log.borrow_mut() = text.to_string();
    }
    
    fn show_state(&self, state: &GameState) {
        *self.state.borrow_mut() = render_text(state);
    }
}
