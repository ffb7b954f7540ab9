//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event
//! processing for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Option list, input field, and result display
    Home,
    /// Animated spin in progress or settled
    Spinning,
    /// Entering a file name for saving the list
    SaveFile,
    /// Choosing a saved list to load
    LoadFile,
}

impl Default for AppState {
    fn default() -> Self {
        Self::Home
    }
}

/// Navigation actions triggered by keyboard input on non-editing
/// screens. Screens with a text field handle raw key events instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc)
    Back,
    /// Quit application (Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the home screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Home,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Get the previous state if available
    pub fn previous_state(&self) -> Option<&AppState> {
        self.previous_state.as_ref()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state.clone());
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise go Home
    pub fn go_back(&mut self) {
        match self.previous_state.take() {
            Some(prev_state) => {
                self.current_state = prev_state;
            }
            None => {
                self.current_state = AppState::Home;
            }
        }
    }

    /// Convert a keyboard event to a navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,

            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            KeyCode::Esc => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
