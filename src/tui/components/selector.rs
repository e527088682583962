use crate::core::Niche;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const NONE_LABEL: &str = "Sin nicho";

/// Single-choice selector over the fixed niche table, with a leading
/// "no niche" entry. Left/Right (or Space) cycles.
#[derive(Debug, Clone)]
pub struct NicheSelector {
    index: usize,
    pub focused: bool,
}

impl NicheSelector {
    pub fn new() -> Self {
        Self {
            index: 0,
            focused: false,
        }
    }

    pub fn value(&self) -> Option<Niche> {
        if self.index == 0 {
            None
        } else {
            Some(Niche::ALL[self.index - 1])
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let count = Niche::ALL.len() + 1;
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                self.index = (self.index + 1) % count;
                true
            }
            KeyCode::Left => {
                self.index = (self.index + count - 1) % count;
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Nicho")
            .border_style(if self.focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            });

        let label = self.value().map(|n| n.label()).unwrap_or(NONE_LABEL);
        let style = if self.value().is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Gray)),
            Span::styled(label, style),
            Span::styled(" ▶", Style::default().fg(Color::Gray)),
        ]);

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::NicheSelector;
    use crate::core::Niche;
    use crossterm::event::{KeyCode, KeyEvent};

    #[test]
    fn cycles_through_all_niches_and_back() {
        let mut selector = NicheSelector::new();
        assert_eq!(selector.value(), None);

        for expected in Niche::ALL {
            selector.handle_key(KeyEvent::from(KeyCode::Right));
            assert_eq!(selector.value(), Some(expected));
        }

        selector.handle_key(KeyEvent::from(KeyCode::Right));
        assert_eq!(selector.value(), None);

        selector.handle_key(KeyEvent::from(KeyCode::Left));
        assert_eq!(selector.value(), Some(Niche::Otro));
    }
}
