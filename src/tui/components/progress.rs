use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use std::collections::VecDeque;

const MAX_LOGS: usize = 12;

/// Progress pane for the background pipeline: gauge, current stage and a
/// rolling, timestamped log window.
pub struct ProgressPane {
    progress: f64,
    message: String,
    logs: VecDeque<String>,
}

impl ProgressPane {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            message: String::new(),
            logs: VecDeque::new(),
        }
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    pub fn add_log(&mut self, log: String) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        self.logs.push_back(format!("[{timestamp}] {log}"));
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.message.clear();
        self.logs.clear();
    }

    pub fn render(&self, f: &mut Frame, area: Rect, product: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Product
                Constraint::Length(3), // Gauge
                Constraint::Length(1), // Status
                Constraint::Min(1),    // Logs
            ])
            .split(area);

        let product_line = Paragraph::new(format!("Producto: {product}"))
            .style(Style::default().fg(Color::White));
        f.render_widget(product_line, chunks[0]);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progreso"))
            .gauge_style(Style::default().fg(Color::Green))
            .percent((self.progress * 100.0) as u16);
        f.render_widget(gauge, chunks[1]);

        let status = Paragraph::new(format!("Estado: {}", self.message))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(status, chunks[2]);

        let log_lines: Vec<Line> = self
            .logs
            .iter()
            .map(|log| Line::from(Span::raw(log.as_str())))
            .collect();
        let logs = Paragraph::new(log_lines)
            .block(Block::default().borders(Borders::ALL).title("Log"));
        f.render_widget(logs, chunks[3]);
    }
}

impl Default for ProgressPane {
    fn default() -> Self {
        Self::new()
    }
}
