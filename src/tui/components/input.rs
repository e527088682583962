use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line text input. The cursor is tracked in characters, not bytes,
/// so accented Spanish input edits cleanly.
#[derive(Debug, Clone)]
pub struct InputField {
    pub value: String,
    cursor: usize,
    pub placeholder: String,
    pub label: String,
    pub focused: bool,
}

impl InputField {
    pub fn new(label: &str, placeholder: &str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
            label: label.to_string(),
            focused: false,
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                let offset = self.byte_offset(self.cursor);
                self.value.insert(offset, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let offset = self.byte_offset(self.cursor);
                    self.value.remove(offset);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let offset = self.byte_offset(self.cursor);
                    self.value.remove(offset);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.label.as_str())
            .border_style(if self.focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            });

        let text = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(
                &self.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else if self.focused {
            let offset = self.byte_offset(self.cursor);
            let (before, after) = self.value.split_at(offset);
            Line::from(vec![
                Span::raw(before),
                Span::styled("│", Style::default().fg(Color::Yellow)),
                Span::raw(after),
            ])
        } else {
            Line::from(Span::raw(&self.value))
        };

        let paragraph = Paragraph::new(text).block(block);
        f.render_widget(paragraph, area);
    }

    pub fn is_valid(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::InputField;
    use crossterm::event::{KeyCode, KeyEvent};

    fn press(field: &mut InputField, code: KeyCode) {
        field.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn accented_input_edits_by_character() {
        let mut field = InputField::new("Producto", "");
        for c in "más".chars() {
            press(&mut field, KeyCode::Char(c));
        }
        assert_eq!(field.value, "más");

        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.value, "ás");

        press(&mut field, KeyCode::Char('M'));
        assert_eq!(field.value, "Más");
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut field = InputField::new("Producto", "");
        press(&mut field, KeyCode::Char('a'));
        press(&mut field, KeyCode::Delete);
        assert_eq!(field.value, "a");
    }
}
