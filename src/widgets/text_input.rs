use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

#[derive(Debug, Clone, Default)]
pub struct TextInput<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub is_focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    pub input: String,
    /// Cursor position counted in chars, not bytes.
    pub cursor_position: usize,
    /// Where the terminal cursor belongs after the last render.
    pub screen_cursor: Option<Position>,
}

impl TextInputState {
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let cursor_position = input.chars().count();
        Self {
            input,
            cursor_position,
            screen_cursor: None,
        }
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let idx = self.byte_index(self.cursor_position);
                self.input.insert(idx, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let idx = self.byte_index(self.cursor_position);
                    self.input.remove(idx);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    let idx = self.byte_index(self.cursor_position);
                    self.input.remove(idx);
                }
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                true
            }
            _ => false,
        }
    }
}

impl StatefulWidget for TextInput<'_> {
    type State = TextInputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        // Scroll so the cursor always lands inside the box.
        let scroll = state
            .cursor_position
            .saturating_sub(usize::from(inner.width).saturating_sub(1));

        if state.input.is_empty() {
            Paragraph::new(self.placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
        } else {
            Paragraph::new(state.input.as_str())
                .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
                .render(inner, buf);
        }

        state.screen_cursor = (self.is_focused && inner.width > 0).then(|| {
            let offset = u16::try_from(state.cursor_position - scroll)
                .unwrap_or(u16::MAX)
                .min(inner.width - 1);
            Position::new(inner.x + offset, inner.y)
        });
    }
}
