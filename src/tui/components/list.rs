use crate::core::storage::{FileEntry, FileType};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Scrollable list of saved scripts and export artifacts.
pub struct FileList {
    pub items: Vec<FileEntry>,
    pub state: ListState,
}

impl FileList {
    pub fn new(items: Vec<FileEntry>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }

        Self { items, state }
    }

    pub fn update_items(&mut self, items: Vec<FileEntry>) {
        self.items = items;
        if self.items.is_empty() {
            self.state.select(None);
        } else {
            let selected = self.state.selected().unwrap_or(0);
            self.state.select(Some(selected.min(self.items.len() - 1)));
        }
    }

    pub fn get_selected(&self) -> Option<&FileEntry> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.previous();
                true
            }
            KeyCode::Down => {
                self.next();
                true
            }
            KeyCode::Home => {
                if !self.items.is_empty() {
                    self.state.select(Some(0));
                }
                true
            }
            KeyCode::End => {
                if !self.items.is_empty() {
                    self.state.select(Some(self.items.len() - 1));
                }
                true
            }
            _ => false,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.previous();
                true
            }
            MouseEventKind::ScrollDown => {
                self.next();
                true
            }
            _ => false,
        }
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.items.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = self.state.selected().unwrap_or(0).saturating_sub(1);
        self.state.select(Some(i));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, title: &str) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|entry| {
                let kind = match entry.file_type {
                    FileType::Script => "Guion ",
                    FileType::Export => "Export",
                };
                let size_kb = entry.size / 1024;
                let line = Line::from(vec![
                    Span::styled(kind, Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                    Span::raw(entry.name.clone()),
                    Span::styled(
                        format!("  {size_kb}KB"),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("» ");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::FileList;
    use crate::core::storage::{FileEntry, FileType};
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn entry(name: &str) -> FileEntry {
        FileEntry {
            path: PathBuf::from(name),
            name: name.to_string(),
            file_type: FileType::Script,
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn selection_clamps_when_items_shrink() {
        let mut list = FileList::new(vec![entry("a"), entry("b"), entry("c")]);
        list.state.select(Some(2));

        list.update_items(vec![entry("a")]);
        assert_eq!(list.state.selected(), Some(0));

        list.update_items(Vec::new());
        assert_eq!(list.state.selected(), None);
    }
}
