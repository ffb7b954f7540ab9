//! Spinning screen implementation
//!
//! Shows the animated reveal: a step gauge and the decoy value
//! currently "under the needle", then the settled outcome.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Spinning screen component
#[derive(Debug, Default)]
pub struct SpinningScreen {
    /// Latest decoy reveal: value, step index, total steps
    current: Option<(String, usize, usize)>,
    /// Final outcome once the spin settles
    settled: Option<String>,
}

impl SpinningScreen {
    /// Create a new spinning screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a fresh spin
    pub fn reset(&mut self) {
        self.current = None;
        self.settled = None;
    }

    /// Record a decoy reveal
    pub fn update_reveal(&mut self, value: String, step: usize, total: usize) {
        self.current = Some((value, step, total));
    }

    /// Record the settled outcome
    pub fn settle(&mut self, value: String) {
        self.settled = Some(value);
    }

    /// Whether the spin has settled
    pub fn is_settled(&self) -> bool {
        self.settled.is_some()
    }

    /// The settled outcome, if any
    pub fn settled_value(&self) -> Option<&str> {
        self.settled.as_deref()
    }

    /// Completed fraction of the animation (0.0 to 1.0)
    fn progress_ratio(&self) -> f64 {
        if self.settled.is_some() {
            return 1.0;
        }
        match &self.current {
            Some((_, step, total)) if *total > 0 => (*step as f64 + 1.0) / (*total as f64 + 1.0),
            _ => 0.0,
        }
    }

    /// Render the spinning screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Step gauge
                Constraint::Min(5),    // Reveal value
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_gauge(f, chunks[1]);
        self.render_value(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (title, color) = if self.is_settled() {
            ("Chosen!", Color::Green)
        } else {
            ("Choosing...", Color::Cyan)
        };

        let widget = Paragraph::new(title)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(widget, area);
    }

    fn render_gauge(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let ratio = self.progress_ratio();
        let label = if self.is_settled() {
            "done".to_string()
        } else {
            match &self.current {
                Some((_, step, total)) => format!("{}/{}", step + 1, total + 1),
                None => "starting".to_string(),
            }
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Spin"))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(label);
        f.render_widget(gauge, area);
    }

    fn render_value(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (value, color) = if let Some(settled) = &self.settled {
            (settled.as_str(), Color::Green)
        } else if let Some((value, _, _)) = &self.current {
            (value.as_str(), Color::White)
        } else {
            ("...", Color::DarkGray)
        };

        // Vertically center the value within the area
        let pad = area.height.saturating_sub(3) / 2;
        let vchunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(pad),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let widget = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, vchunks[1]);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let help_text = if self.is_settled() {
            vec![Line::from(vec![
                Span::styled("Enter", key_style),
                Span::raw(" Spin again  "),
                Span::styled("Esc", key_style),
                Span::raw(" Back"),
            ])]
        } else {
            vec![Line::from(vec![
                Span::styled("Enter", key_style),
                Span::raw(" Restart spin  "),
                Span::styled("Esc", key_style),
                Span::raw(" Abandon"),
            ])]
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
