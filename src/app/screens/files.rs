//! Save/load screen implementation
//!
//! One screen, two modes: entering a file name for saving the current
//! list, or picking a saved file to load. The controller performs the
//! actual file I/O and reports failures back through `set_status`.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Whether the screen is saving or loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilesMode {
    Save,
    Load,
}

/// Actions the files screen hands back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilesAction {
    /// Save the list under this name
    SaveAs(String),
    /// Load this saved file
    LoadPath(PathBuf),
    /// Return to the home screen
    Cancel,
}

/// Save/load screen component
#[derive(Debug)]
pub struct FilesScreen {
    mode: FilesMode,
    name_input: String,
    files: Vec<PathBuf>,
    selected_index: usize,
    list_state: ListState,
    status: Option<String>,
}

impl FilesScreen {
    /// Create the screen in save mode with an empty name
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            mode: FilesMode::Save,
            name_input: String::new(),
            files: Vec::new(),
            selected_index: 0,
            list_state,
            status: None,
        }
    }

    /// Switch to save mode with a prefilled file name
    pub fn open_save(&mut self, default_name: String) {
        self.mode = FilesMode::Save;
        self.name_input = default_name;
        self.status = None;
    }

    /// Switch to load mode over the given saved files
    pub fn open_load(&mut self, files: Vec<PathBuf>) {
        self.mode = FilesMode::Load;
        self.files = files;
        self.selected_index = 0;
        self.list_state.select(Some(0));
        self.status = None;
    }

    /// Current mode
    pub fn mode(&self) -> FilesMode {
        self.mode
    }

    /// Current name input (save mode)
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Show an error or status message on the screen
    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }

    /// Handle a key event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<FilesAction> {
        if key.code == KeyCode::Esc {
            return Some(FilesAction::Cancel);
        }

        match self.mode {
            FilesMode::Save => match key.code {
                KeyCode::Char(c) => {
                    self.name_input.push(c);
                    None
                }
                KeyCode::Backspace => {
                    self.name_input.pop();
                    None
                }
                KeyCode::Enter => Some(FilesAction::SaveAs(self.name_input.clone())),
                _ => None,
            },
            FilesMode::Load => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.select_previous();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.select_next();
                    None
                }
                KeyCode::Enter => self
                    .files
                    .get(self.selected_index)
                    .cloned()
                    .map(FilesAction::LoadPath),
                _ => None,
            },
        }
    }

    fn select_previous(&mut self) {
        if self.files.is_empty() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.files.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    fn select_next(&mut self) {
        if self.files.is_empty() {
            return;
        }
        if self.selected_index < self.files.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Name input or file list
                Constraint::Length(2), // Status
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        match self.mode {
            FilesMode::Save => self.render_name_input(f, chunks[1]),
            FilesMode::Load => self.render_file_list(f, chunks[1]),
        }
        self.render_status(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = match self.mode {
            FilesMode::Save => "Save options",
            FilesMode::Load => "Load options",
        };

        let widget = Paragraph::new(title)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    fn render_name_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let input = Paragraph::new(self.name_input.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("File name")
                .border_style(Style::default().fg(Color::Green)),
        );
        f.render_widget(input, area);
    }

    fn render_file_list(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = if self.files.is_empty() {
            vec![ListItem::new("No saved lists")]
        } else {
            self.files
                .iter()
                .map(|path| {
                    ListItem::new(
                        path.file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string()),
                    )
                })
                .collect()
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Saved lists"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        if let Some(status) = &self.status {
            let widget = Paragraph::new(status.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            f.render_widget(widget, area);
        }
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let help_text = match self.mode {
            FilesMode::Save => vec![Line::from(vec![
                Span::styled("Enter", key_style),
                Span::raw(" Save  "),
                Span::styled("Esc", key_style),
                Span::raw(" Cancel"),
            ])],
            FilesMode::Load => vec![Line::from(vec![
                Span::styled("↑↓", key_style),
                Span::raw(" Navigate  "),
                Span::styled("Enter", key_style),
                Span::raw(" Load  "),
                Span::styled("Esc", key_style),
                Span::raw(" Cancel"),
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

impl Default for FilesScreen {
    fn default() -> Self {
        Self::new()
    }
}
