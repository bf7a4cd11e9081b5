use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use sw_types::{SelectOption, search::fuzzy_match};

/// What a toggle on the highlighted option produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Single-select: the new value, or `None` when the current value was
    /// toggled off. The popup closes after this.
    Single(Option<String>),
    /// Multi-select: the full updated value list, committed immediately
    /// while the popup stays open.
    Multi(Vec<String>),
}

/// State for the fuzzy-searchable option picker.
///
/// Typing narrows the catalog with substring-then-subsequence matching on
/// both labels and values; Enter toggles the highlighted option.
pub struct SelectState {
    title: String,
    options: Vec<SelectOption>,
    query: String,
    cursor: usize,
    multi: bool,
    selected: Vec<String>,
}

impl SelectState {
    pub fn single(title: impl Into<String>, options: Vec<SelectOption>, current: Option<String>) -> Self {
        Self {
            title: title.into(),
            options,
            query: String::new(),
            cursor: 0,
            multi: false,
            selected: current.into_iter().collect(),
        }
    }

    pub fn multi(title: impl Into<String>, options: Vec<SelectOption>, values: Vec<String>) -> Self {
        Self { title: title.into(), options, query: String::new(), cursor: 0, multi: true, selected: values }
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    /// Options surviving the current query, in catalog order.
    pub fn filtered(&self) -> Vec<&SelectOption> {
        self.options.iter().filter(|opt| fuzzy_match(&self.query, opt.label) || fuzzy_match(&self.query, opt.value)).collect()
    }

    pub fn push_query(&mut self, ch: char) {
        self.query.push(ch);
        self.cursor = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    pub fn move_up(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    pub fn move_down(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    /// Toggle the highlighted option. Returns `None` when the filter left
    /// nothing to select.
    pub fn toggle_current(&mut self) -> Option<SelectOutcome> {
        let value = self.filtered().get(self.cursor).map(|opt| opt.value.to_string())?;

        if self.multi {
            if let Some(idx) = self.selected.iter().position(|v| *v == value) {
                self.selected.remove(idx);
            } else {
                self.selected.push(value);
            }
            Some(SelectOutcome::Multi(self.selected.clone()))
        } else if self.selected.first().is_some_and(|v| *v == value) {
            // Re-selecting the current value clears it
            self.selected.clear();
            Some(SelectOutcome::Single(None))
        } else {
            self.selected = vec![value.clone()];
            Some(SelectOutcome::Single(Some(value)))
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default().borders(Borders::ALL).title(self.title.clone());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let search = Line::from(vec![Span::styled("Search: ", Style::default().fg(Color::DarkGray)), Span::raw(self.query.clone())]);
        frame.render_widget(Paragraph::new(search), rows[0]);

        let filtered = self.filtered();
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|opt| {
                let marker = if self.selected.iter().any(|v| v == opt.value) { "✓ " } else { "  " };
                ListItem::new(Line::from(vec![Span::styled(marker, Style::default().fg(Color::Green)), Span::raw(opt.label)]))
            })
            .collect();

        let mut list_state = ListState::default();
        if !filtered.is_empty() {
            list_state.select(Some(self.cursor.min(filtered.len() - 1)));
        }

        let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, rows[1], &mut list_state);
    }
}
