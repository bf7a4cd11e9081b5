use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// A single-line text editor with cursor movement.
#[derive(Clone, Debug, Default)]
pub struct LineEdit {
    value: String,
    /// Cursor position in characters, 0..=len.
    cursor: usize,
}

impl LineEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing an existing value with the cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    fn byte_index(&self) -> usize {
        self.value.char_indices().nth(self.cursor).map(|(i, _)| i).unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index();
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.value.remove(idx);
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let idx = self.byte_index();
        self.value.remove(idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 {
            return;
        }
        let width = area.width as usize;
        let (visible, cursor_col) = visible_window(&self.value, self.cursor, width);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(visible, Style::default().fg(Color::Yellow)))), area);
        frame.set_cursor_position(Position {
            x: area.x + (cursor_col as u16).min(area.width.saturating_sub(1)),
            y: area.y,
        });
    }
}

/// Return the visible slice of `value` so the cursor stays on screen, along
/// with the column the cursor should land on.
fn visible_window(value: &str, cursor: usize, max_width: usize) -> (String, usize) {
    if max_width == 0 {
        return (String::new(), 0);
    }

    let skip = cursor.saturating_sub(max_width.saturating_sub(1));
    let visible: String = value.chars().skip(skip).take(max_width).collect();
    (visible, cursor - skip)
}
