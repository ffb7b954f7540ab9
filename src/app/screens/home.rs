//! Home screen implementation
//!
//! Input field for new options, the option list with selection, the
//! latest result, and a status line. Focus moves between the input
//! and the list with Tab; list keys drive removal, clearing, and the
//! spin itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::util::text::truncate_ellipsis;

/// Which part of the home screen receives typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// Actions the home screen hands back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// Add the current input text as an option
    Add,
    /// Remove the selected list row
    RemoveSelected,
    /// Clear the whole list
    ClearAll,
    /// Start a spin
    Spin,
    /// Open the save-file screen
    OpenSave,
    /// Open the load-file screen
    OpenLoad,
    /// Quit the application
    Quit,
}

/// Home screen component
#[derive(Debug)]
pub struct HomeScreen {
    input: String,
    focus: Focus,
    selected_index: usize,
    list_state: ListState,
    result: Option<String>,
    status: String,
}

impl HomeScreen {
    /// Create a new home screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            input: String::new(),
            focus: Focus::Input,
            selected_index: 0,
            list_state,
            result: None,
            status: "Ready | options: 0".to_string(),
        }
    }

    /// Currently selected list row
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Take and clear the input text
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Set the status line
    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    /// Set or clear the displayed result
    pub fn set_result(&mut self, result: Option<String>) {
        self.result = result;
    }

    /// Keep the selection inside the list after removals
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection up, wrapping
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = len - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down, wrapping
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected_index < len - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Handle a key event. `len` is the current option count.
    pub fn handle_key_event(&mut self, key: KeyEvent, len: usize) -> Option<HomeAction> {
        // Shortcuts that work regardless of focus
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Some(HomeAction::Quit),
                KeyCode::Char('s') => return Some(HomeAction::OpenSave),
                KeyCode::Char('o') => return Some(HomeAction::OpenLoad),
                _ => return None,
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
                None
            }
            KeyCode::Esc => Some(HomeAction::Quit),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::List => self.handle_list_key(key, len),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<HomeAction> {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Enter => Some(HomeAction::Add),
            _ => None,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, len: usize) -> Option<HomeAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous(len);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(len);
                None
            }
            KeyCode::Delete | KeyCode::Char('d') => Some(HomeAction::RemoveSelected),
            KeyCode::Char('c') => Some(HomeAction::ClearAll),
            KeyCode::Enter | KeyCode::Char(' ') => Some(HomeAction::Spin),
            KeyCode::Char('s') => Some(HomeAction::OpenSave),
            KeyCode::Char('o') => Some(HomeAction::OpenLoad),
            KeyCode::Char('q') => Some(HomeAction::Quit),
            _ => None,
        }
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame, options: &[String]) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title and subtitle
                Constraint::Length(3), // Input field
                Constraint::Min(6),    // Option list
                Constraint::Length(4), // Result
                Constraint::Length(1), // Status line
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_input(f, chunks[1]);
        self.render_list(f, chunks[2], options);
        self.render_result(f, chunks[3]);
        self.render_status(f, chunks[4]);
        self.render_help(f, chunks[5]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let title = Paragraph::new("SPINPICK")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Let the wheel decide")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let border_color = if self.focus == Focus::Input {
            Color::Green
        } else {
            Color::DarkGray
        };

        let input = Paragraph::new(self.input.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("New option")
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(input, area);
    }

    fn render_list(&mut self, f: &mut Frame, area: ratatui::layout::Rect, options: &[String]) {
        let width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = if options.is_empty() {
            vec![ListItem::new("No options yet - type one above")]
        } else {
            options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    ListItem::new(format!("{:>2}. {}", i + 1, truncate_ellipsis(option, width)))
                })
                .collect()
        };

        let border_color = if self.focus == Focus::List {
            Color::Green
        } else {
            Color::DarkGray
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Options ({})", options.len()))
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_result(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (text, color) = match &self.result {
            Some(value) => (value.as_str(), Color::Green),
            None => ("Waiting for a spin...", Color::DarkGray),
        };

        let result = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Result"));
        f.render_widget(result, area);
    }

    fn render_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        f.render_widget(status, area);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let help_text = match self.focus {
            Focus::Input => vec![Line::from(vec![
                Span::styled("Enter", key_style),
                Span::raw(" Add  "),
                Span::styled("Tab", key_style),
                Span::raw(" To list  "),
                Span::styled("^S", key_style),
                Span::raw(" Save  "),
                Span::styled("^O", key_style),
                Span::raw(" Load  "),
                Span::styled("Esc", key_style),
                Span::raw(" Quit"),
            ])],
            Focus::List => vec![Line::from(vec![
                Span::styled("↑↓", key_style),
                Span::raw(" Navigate  "),
                Span::styled("Enter", key_style),
                Span::raw(" Spin  "),
                Span::styled("d", key_style),
                Span::raw(" Delete  "),
                Span::styled("c", key_style),
                Span::raw(" Clear  "),
                Span::styled("s", key_style),
                Span::raw(" Save  "),
                Span::styled("o", key_style),
                Span::raw(" Load  "),
                Span::styled("q", key_style),
                Span::raw(" Quit"),
            ])],
        };

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
