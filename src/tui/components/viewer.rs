use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Read-only preview of a generated script with light Markdown styling:
/// headers, bullet points and the numbered narrative beats stand out.
pub struct ContentViewer {
    pub content: String,
    pub scroll: usize,
    pub file_path: String,
}

impl ContentViewer {
    pub fn new(content: String, file_path: String) -> Self {
        Self {
            content,
            scroll: 0,
            file_path,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, area_height: usize) -> bool {
        let lines = self.content.lines().count();
        let page = area_height.saturating_sub(2);
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if self.scroll < lines.saturating_sub(page) {
                    self.scroll += 1;
                }
                true
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(page);
                true
            }
            KeyCode::PageDown => {
                self.scroll = (self.scroll + page).min(lines.saturating_sub(page));
                true
            }
            KeyCode::Home => {
                self.scroll = 0;
                true
            }
            KeyCode::End => {
                self.scroll = lines.saturating_sub(page);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let title = format!(
            "Visor: {}",
            std::path::Path::new(&self.file_path)
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
        );

        let lines: Vec<Line> = self
            .content
            .lines()
            .skip(self.scroll)
            .take(area.height.saturating_sub(2) as usize)
            .map(style_line)
            .collect();

        let total_lines = self.content.lines().count();
        let visible_lines = area.height.saturating_sub(2) as usize;
        let scroll_info = if total_lines > visible_lines {
            format!(
                " (Línea {}-{} de {})",
                self.scroll + 1,
                (self.scroll + visible_lines).min(total_lines),
                total_lines
            )
        } else {
            String::new()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{title}{scroll_info}"));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }
}

fn style_line(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        Line::from(Span::styled(line, Style::default().fg(Color::Yellow)))
    } else if is_numbered_beat(trimmed) {
        Line::from(Span::styled(line, Style::default().fg(Color::Cyan)))
    } else if trimmed.starts_with('-') || trimmed.starts_with('*') {
        Line::from(Span::styled(line, Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::raw(line))
    }
}

fn is_numbered_beat(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => matches!(chars.next(), Some('.') | Some(')')),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_numbered_beat;

    #[test]
    fn detects_numbered_lines() {
        assert!(is_numbered_beat("1. Hook inicial"));
        assert!(is_numbered_beat("9) Llamada a la acción"));
        assert!(!is_numbered_beat("10x mejores resultados"));
        assert!(!is_numbered_beat("Hola"));
    }
}
