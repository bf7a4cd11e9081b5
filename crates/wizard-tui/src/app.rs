//! The interactive wizard application.
//!
//! `WizardApp` owns the [`FormStore`] and translates key events into store
//! dispatches. Rendering is a pure function of the store snapshot plus the
//! transient UI mode (editing a text field, picking from a catalog), so the
//! screen can be redrawn from scratch on every frame.

use std::{
    io::Write as _,
    path::PathBuf,
    time::{Duration, Instant},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use form_store::{DEFAULT_EXPORT_FILENAME, ExportSink, FileSink, FormStore, serialize_config};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use sw_types::WizardStep;
use tracing::warn;

use crate::{
    TuiResult,
    forms::{self, Binding, Field, FieldKind, build_fields},
    utils::{centered_rect, osc52_copy_sequence},
    widgets::{LineEdit, SelectOutcome, SelectState},
};

const FLASH_DURATION: Duration = Duration::from_secs(2);

/// Transient input mode layered over the form.
enum Mode {
    /// Navigating fields on the current step.
    Form,
    /// Editing a text field in a popup line editor.
    Edit { binding: Binding, label: String, editor: LineEdit },
    /// Picking catalog values in the fuzzy select popup.
    Select { binding: Binding, state: SelectState },
}

/// The wizard TUI: form navigation, field editing, and the summary view.
pub struct WizardApp {
    store: FormStore,
    focus: usize,
    mode: Mode,
    flash: Option<(String, Instant)>,
    export_path: PathBuf,
    summary_scroll: u16,
    should_exit: bool,
}

impl WizardApp {
    pub fn new(export_path: Option<PathBuf>) -> Self {
        Self {
            store: FormStore::new(),
            focus: 0,
            mode: Mode::Form,
            flash: None,
            export_path: export_path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILENAME)),
            summary_scroll: 0,
            should_exit: false,
        }
    }

    /// Start directly on the summary view instead of step one.
    pub fn with_summary(mut self) -> Self {
        self.store.enter_summary();
        self
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    fn fields(&self) -> Vec<Field> {
        build_fields(self.store.step(), self.store.data())
    }

    fn flash(&mut self, message: impl Into<String>) {
        self.flash = Some((message.into(), Instant::now()));
    }

    /// Expire the flash message. Returns whether a re-render is needed.
    pub fn tick(&mut self) -> bool {
        match &self.flash {
            Some((_, since)) if since.elapsed() >= FLASH_DURATION => {
                self.flash = None;
                true
            }
            _ => false,
        }
    }

    /// Clamp focus into range and off notice rows after the field list changed.
    fn settle_focus(&mut self) {
        let fields = self.fields();
        if fields.is_empty() {
            self.focus = 0;
            return;
        }
        self.focus = self.focus.min(fields.len() - 1);
        if !fields[self.focus].focusable() {
            // Prefer the nearest focusable row above, then below.
            if let Some(idx) = (0..self.focus).rev().chain(self.focus + 1..fields.len()).find(|&i| fields[i].focusable()) {
                self.focus = idx;
            }
        }
    }

    fn focus_next(&mut self) {
        let fields = self.fields();
        if fields.is_empty() {
            return;
        }
        let mut idx = self.focus;
        for _ in 0..fields.len() {
            idx = (idx + 1) % fields.len();
            if fields[idx].focusable() {
                self.focus = idx;
                return;
            }
        }
    }

    fn focus_prev(&mut self) {
        let fields = self.fields();
        if fields.is_empty() {
            return;
        }
        let mut idx = self.focus;
        for _ in 0..fields.len() {
            idx = if idx == 0 { fields.len() - 1 } else { idx - 1 };
            if fields[idx].focusable() {
                self.focus = idx;
                return;
            }
        }
    }

    fn goto_prev_step(&mut self) {
        self.store.retreat();
        self.focus = 0;
        self.settle_focus();
    }

    fn goto_next_step(&mut self) {
        if self.store.current_step() + 1 >= WizardStep::COUNT {
            // "Complete Setup" on the last step
            self.store.enter_summary();
            self.summary_scroll = 0;
        } else {
            self.store.advance();
            self.focus = 0;
            self.settle_focus();
        }
    }

    /// Open the editor/picker for the focused field, or fire it in place.
    fn activate_focused(&mut self) {
        let fields = self.fields();
        let Some(field) = fields.get(self.focus) else { return };
        let Some(binding) = field.binding.clone() else { return };

        match &field.kind {
            FieldKind::Text(value) => {
                self.mode = Mode::Edit { binding, label: field.label.clone(), editor: LineEdit::with_value(value.clone()) };
            }
            FieldKind::Toggle(_) => {
                forms::toggle(&mut self.store, &binding);
                self.settle_focus();
            }
            FieldKind::Single { options, value } => {
                self.mode = Mode::Select { state: SelectState::single(field.label.clone(), options.clone(), value.clone()), binding };
            }
            FieldKind::Multi { options, values } => {
                self.mode = Mode::Select { state: SelectState::multi(field.label.clone(), options.clone(), values.clone()), binding };
            }
            FieldKind::Button => {
                forms::press(&mut self.store, &binding);
                self.settle_focus();
            }
            FieldKind::Notice(_) => {}
        }
    }

    /// Handle one key press. Returns whether a re-render is needed.
    pub fn handle_key(&mut self, key: KeyEvent) -> TuiResult<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return Ok(true);
        }

        if self.store.show_summary() {
            return self.handle_summary_key(key);
        }

        match &mut self.mode {
            Mode::Form => Ok(self.handle_form_key(key)),
            Mode::Edit { .. } => Ok(self.handle_edit_key(key)),
            Mode::Select { .. } => Ok(self.handle_select_key(key)),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.store.reset();
                self.focus = 0;
                self.flash("Configuration reset to defaults");
            }
            KeyCode::Left | KeyCode::Char('p') => self.goto_prev_step(),
            KeyCode::Right | KeyCode::Char('n') => self.goto_next_step(),
            KeyCode::Up | KeyCode::BackTab => self.focus_prev(),
            KeyCode::Down | KeyCode::Tab => self.focus_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Char('v') => {
                self.store.enter_summary();
                self.summary_scroll = 0;
            }
            _ => return false,
        }
        true
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        let Mode::Edit { binding, editor, .. } = &mut self.mode else { return false };
        match key.code {
            KeyCode::Enter => {
                let binding = binding.clone();
                let Mode::Edit { editor, .. } = std::mem::replace(&mut self.mode, Mode::Form) else { unreachable!() };
                forms::commit_text(&mut self.store, &binding, editor.into_value());
                self.settle_focus();
            }
            KeyCode::Esc => self.mode = Mode::Form,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => editor.insert_char(ch),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete_char(),
            KeyCode::Left => editor.move_left(),
            KeyCode::Right => editor.move_right(),
            KeyCode::Home => editor.move_home(),
            KeyCode::End => editor.move_end(),
            _ => return false,
        }
        true
    }

    fn handle_select_key(&mut self, key: KeyEvent) -> bool {
        let Mode::Select { binding, state } = &mut self.mode else { return false };
        match key.code {
            KeyCode::Esc | KeyCode::Tab => {
                self.mode = Mode::Form;
                self.settle_focus();
            }
            KeyCode::Up => state.move_up(),
            KeyCode::Down => state.move_down(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => state.push_query(ch),
            KeyCode::Backspace => state.pop_query(),
            KeyCode::Enter => {
                let binding = binding.clone();
                match state.toggle_current() {
                    // Single selection commits and closes; multi commits
                    // immediately and keeps the popup open for more toggles.
                    Some(SelectOutcome::Single(value)) => {
                        self.mode = Mode::Form;
                        forms::commit_single(&mut self.store, &binding, value);
                        self.settle_focus();
                    }
                    Some(SelectOutcome::Multi(values)) => {
                        forms::commit_multi(&mut self.store, &binding, values);
                    }
                    None => {}
                }
            }
            _ => return false,
        }
        true
    }

    fn handle_summary_key(&mut self, key: KeyEvent) -> TuiResult<bool> {
        match key.code {
            KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('v') => {
                self.store.leave_summary();
                self.settle_focus();
            }
            KeyCode::Up => self.summary_scroll = self.summary_scroll.saturating_sub(1),
            KeyCode::Down => self.summary_scroll = self.summary_scroll.saturating_add(1),
            KeyCode::Char('c') => {
                let json = serialize_config(self.store.data())?;
                let mut stdout = std::io::stdout();
                stdout.write_all(&osc52_copy_sequence(&json))?;
                stdout.flush()?;
                self.flash("Configuration copied to clipboard");
            }
            KeyCode::Char('s') => {
                let json = serialize_config(self.store.data())?;
                let mut sink = FileSink::new(self.export_path.clone());
                match sink.write(&json) {
                    Ok(()) => self.flash(format!("Saved to {}", self.export_path.display())),
                    Err(err) => {
                        warn!(error = %err, "export failed");
                        self.flash(format!("Export failed: {err}"));
                    }
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    // ---- rendering ----

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)].as_ref())
            .split(area);

        if self.store.show_summary() {
            self.render_summary_header(frame, chunks[0]);
            self.render_summary(frame, chunks[1]);
        } else {
            self.render_header(frame, chunks[0]);
            self.render_form(frame, chunks[1]);
        }

        self.render_footer(frame, chunks[2]);
        self.render_flash(frame, chunks[3]);

        match &self.mode {
            Mode::Edit { label, editor, .. } => {
                let popup = centered_rect(60, 20, area);
                let popup = Rect { height: popup.height.min(3), ..popup };
                frame.render_widget(ratatui::widgets::Clear, popup);
                let block = Block::default().borders(Borders::ALL).title(label.clone());
                let inner = block.inner(popup);
                frame.render_widget(block, popup);
                editor.render(frame, inner);
            }
            Mode::Select { state, .. } => {
                let popup = centered_rect(60, 60, area);
                state.render(frame, popup);
            }
            Mode::Form => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let step = self.store.step();
        let configured = self.store.configured_steps();
        let title = format!("Step {} of {}: {}", step.index() + 1, WizardStep::COUNT, step.title());

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(configured as f64 / WizardStep::COUNT as f64)
            .label(format!("{configured}/{} sections configured", WizardStep::COUNT));
        frame.render_widget(gauge, area);
    }

    fn render_summary_header(&self, frame: &mut Frame, area: Rect) {
        let configured = self.store.configured_steps();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled("Configuration Summary", Style::default().add_modifier(Modifier::BOLD))),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(configured as f64 / WizardStep::COUNT as f64)
            .label(format!("{configured}/{} sections configured", WizardStep::COUNT));
        frame.render_widget(gauge, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let fields = self.fields();
        let items: Vec<ListItem> = fields
            .iter()
            .map(|field| match &field.kind {
                FieldKind::Notice(text) => ListItem::new(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ))),
                kind => {
                    let value = field_value(kind);
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{}: ", field.label), Style::default().fg(Color::Cyan)),
                        Span::raw(value),
                    ]))
                }
            })
            .collect();

        let mut state = ListState::default();
        if !fields.is_empty() {
            state.select(Some(self.focus.min(fields.len() - 1)));
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let json = serialize_config(self.store.data()).unwrap_or_else(|err| format!("serialization failed: {err}"));
        let paragraph = Paragraph::new(json)
            .block(Block::default().borders(Borders::ALL).title(self.export_path.display().to_string()))
            .wrap(Wrap { trim: false })
            .scroll((self.summary_scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.store.show_summary() {
            "c: Copy | s: Save | Up/Down: Scroll | Esc/b: Back | q: Quit"
        } else {
            match self.mode {
                Mode::Form => "Left/Right: Step | Up/Down: Field | Enter: Edit | v: Summary | Ctrl+R: Reset | q: Quit",
                Mode::Edit { .. } => "Enter: Apply | Esc: Cancel",
                Mode::Select { .. } => "Type: Search | Up/Down: Move | Enter: Toggle | Esc: Close",
            }
        };
        frame.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)), area);
    }

    fn render_flash(&self, frame: &mut Frame, area: Rect) {
        if let Some((message, _)) = &self.flash {
            frame.render_widget(Paragraph::new(message.clone()).style(Style::default().fg(Color::Green)), area);
        }
    }
}

/// Compact single-line rendering of a field's current value.
fn field_value(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Text(value) => value.clone(),
        FieldKind::Toggle(on) => if *on { "[x]" } else { "[ ]" }.to_string(),
        FieldKind::Single { options, value } => match value {
            Some(v) => options.iter().find(|opt| opt.value == v).map(|opt| opt.label.to_string()).unwrap_or_else(|| v.clone()),
            None => String::new(),
        },
        FieldKind::Multi { options, values } => values
            .iter()
            .map(|v| options.iter().find(|opt| opt.value == v).map(|opt| opt.label).unwrap_or(v.as_str()))
            .collect::<Vec<_>>()
            .join(", "),
        FieldKind::Button => String::from("[Enter]"),
        FieldKind::Notice(_) => String::new(),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
