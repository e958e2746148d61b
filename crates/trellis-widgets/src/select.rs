//! Single-choice select with an optional filter query.
//!
//! Composes a one-line trigger display, a [`Popover`] anchored to it, and a
//! [`Menu`] of options. Typing while the popover is open narrows the menu
//! through a pluggable predicate; confirming a row records the selection and
//! (by default) closes the popover.

use crate::menu::{Menu, MenuItem, MenuStyle};
use crate::popover::{Placement, Popover};
use trellis_core::command::Command;
use trellis_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Messages for the select component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the select.
    KeyPress(KeyEvent),
    /// Request to open the option popover.
    Open,
    /// Request to close the option popover.
    Close,
    /// Replace the filter query programmatically.
    QueryChanged(String),
    /// Emitted when an option is confirmed, carrying its original index.
    Selected(usize),
    /// Emitted when the popover is dismissed without selecting.
    Dismissed,
}

/// Visual style configuration for the [`Select`] component.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Style for the trigger text once an option is selected.
    pub trigger: Style,
    /// Style for the placeholder trigger text.
    pub placeholder: Style,
    /// Style for the filter query line.
    pub query: Style,
    /// Styles for the option menu rows.
    pub menu: MenuStyle,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            trigger: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            query: Style::default().fg(Color::Yellow),
            menu: MenuStyle::default(),
        }
    }
}

type Predicate<I> = Box<dyn Fn(&str, &I) -> bool + Send>;

/// A single-choice selection component with query filtering.
///
/// # Example
///
/// ```ignore
/// use trellis_widgets::select::Select;
///
/// let mut select = Select::new(vec![
///     "Mercury".to_string(),
///     "Venus".to_string(),
///     "Earth".to_string(),
/// ])
/// .with_placeholder("Pick a planet...");
/// select.focus();
/// ```
pub struct Select<I: MenuItem> {
    menu: Menu<I>,
    popover: Popover,
    query: String,
    filterable: bool,
    disabled: bool,
    close_on_select: bool,
    predicate: Predicate<I>,
    selected: Option<usize>,
    placeholder: String,
    focus: bool,
    max_visible: usize,
    style: SelectStyle,
    trigger_block: Option<Block<'static>>,
}

impl<I: MenuItem> Select<I> {
    /// Create a select over the given options.
    ///
    /// The default filter predicate matches the query case-insensitively
    /// anywhere in an option's label.
    pub fn new(items: Vec<I>) -> Self {
        Self {
            menu: Menu::new(items).with_max_visible(8),
            popover: Popover::new(),
            query: String::new(),
            filterable: true,
            disabled: false,
            close_on_select: true,
            predicate: Box::new(|query, item| {
                item.label().to_lowercase().contains(&query.to_lowercase())
            }),
            selected: None,
            placeholder: "Select...".to_string(),
            focus: false,
            max_visible: 8,
            style: SelectStyle::default(),
            trigger_block: None,
        }
    }

    /// Set the placeholder text shown when no option is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Enable or disable the filter query line. When disabled, typed
    /// characters are ignored and the query line is not rendered.
    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Disable the whole select: the popover can never open and options are
    /// never rendered.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether confirming an option closes the popover (default: true).
    pub fn with_close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    /// Replace the filter predicate. Receives the current query and each
    /// option; return true to keep the option visible.
    pub fn with_predicate(mut self, predicate: impl Fn(&str, &I) -> bool + Send + 'static) -> Self {
        self.predicate = Box::new(predicate);
        self
    }

    /// Set where the popover opens relative to the trigger.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.popover = self.popover.with_placement(placement);
        self
    }

    /// Set the block (border/title chrome) for the popover.
    pub fn with_popover_block(mut self, block: Block<'static>) -> Self {
        self.popover = self.popover.with_block(block);
        self
    }

    /// Set the block (border/title chrome) for the trigger line.
    pub fn with_trigger_block(mut self, block: Block<'static>) -> Self {
        self.trigger_block = Some(block);
        self
    }

    /// Set the maximum number of menu rows shown before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.menu = self.menu.with_max_visible(self.max_visible);
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.menu = self.menu.with_style(style.menu.clone());
        self.style = style;
        self
    }

    /// Give this select keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus and close the popover if open.
    pub fn blur(&mut self) {
        self.focus = false;
        self.popover.close();
    }

    /// Whether the option popover is currently open.
    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    /// The current filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// All options, in insertion order.
    pub fn items(&self) -> &[I] {
        self.menu.items()
    }

    /// Original index of the selected option, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected option itself.
    pub fn selected_item(&self) -> Option<&I> {
        self.selected.and_then(|i| self.menu.items().get(i))
    }

    /// Label of the selected option, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_item().map(MenuItem::label)
    }

    fn open_popover(&mut self) {
        if self.disabled {
            return;
        }
        self.popover.open();
        if let Some(selected) = self.selected {
            self.menu.set_active(selected);
        }
    }

    fn refilter(&mut self) {
        if self.query.is_empty() {
            self.menu.clear_filter();
        } else {
            let query = self.query.clone();
            let predicate = &self.predicate;
            self.menu.apply_filter(|item| predicate(&query, item));
        }
    }

    fn confirm_active(&mut self) -> Command<Message> {
        let Some(index) = self.menu.active_index() else {
            return Command::none();
        };
        if self.menu.active_item().is_some_and(MenuItem::disabled) {
            return Command::none();
        }
        self.selected = Some(index);
        if self.close_on_select {
            self.popover.close();
        }
        Command::message(Message::Selected(index))
    }

    fn handle_open_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Esc => {
                self.popover.close();
                Command::message(Message::Dismissed)
            }
            KeyCode::Enter => self.confirm_active(),
            KeyCode::Up => {
                self.menu.move_prev();
                Command::none()
            }
            KeyCode::Down | KeyCode::Tab => {
                self.menu.move_next();
                Command::none()
            }
            KeyCode::Backspace if self.filterable => {
                self.query.pop();
                self.refilter();
                Command::none()
            }
            KeyCode::Char(c) if self.filterable => {
                self.query.push(c);
                self.refilter();
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn handle_closed_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            // Down on the closed trigger opens the popover, like clicking it.
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                self.open_popover();
                Command::none()
            }
            _ => Command::none(),
        }
    }
}

impl<I: MenuItem> Component for Select<I> {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus && !self.disabled => {
                if self.popover.is_open() {
                    self.handle_open_key(key)
                } else {
                    self.handle_closed_key(key)
                }
            }
            Message::Open => {
                self.open_popover();
                Command::none()
            }
            Message::Close => {
                self.popover.close();
                Command::none()
            }
            Message::QueryChanged(query) => {
                if self.filterable {
                    self.query = query;
                    self.refilter();
                }
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        // Trigger line
        let inner = if let Some(ref block) = self.trigger_block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        let display_text = match self.selected_label() {
            Some(label) if !self.disabled => Span::styled(label.to_string(), self.style.trigger),
            Some(label) => Span::styled(label.to_string(), self.style.placeholder),
            None => Span::styled(self.placeholder.clone(), self.style.placeholder),
        };
        let arrow = if self.is_open() { " ▾" } else { " ▸" };
        let line = Line::from(vec![
            display_text,
            Span::styled(arrow, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Option popover
        if !self.is_open() || self.disabled {
            return;
        }

        let query_rows = if self.filterable { 1 } else { 0 };
        let menu_rows = self.menu.visible_len().min(self.max_visible).max(1) as u16;
        let overlay = self
            .popover
            .anchored_rect(area, query_rows + menu_rows, frame.area());
        if overlay.height == 0 || overlay.width < 4 {
            return; // not enough space
        }
        let content = self.popover.render(frame, overlay);

        let mut menu_area = content;
        if self.filterable && content.height > 0 {
            let query_area = Rect { height: 1, ..content };
            let query_line = if self.query.is_empty() {
                Line::from(Span::styled(
                    "Type to filter…",
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::from(vec![
                    Span::styled("» ", Style::default().fg(Color::DarkGray)),
                    Span::styled(self.query.clone(), self.style.query),
                ])
            };
            frame.render_widget(Paragraph::new(query_line), query_area);
            menu_area = Rect {
                y: content.y + 1,
                height: content.height.saturating_sub(1),
                ..content
            };
        }

        if self.menu.visible_len() == 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No results",
                    Style::default().fg(Color::DarkGray),
                )),
                menu_area,
            );
        } else {
            self.menu.view(frame, menu_area);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::testing::key_press;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn fruits() -> Select<String> {
        let mut select = Select::new(vec![
            "Apple".to_string(),
            "Banana".to_string(),
            "Cherry".to_string(),
        ]);
        select.focus();
        select
    }

    fn press(select: &mut Select<String>, code: KeyCode) -> Command<Message> {
        select.update(Message::KeyPress(key_press(code)))
    }

    /// Render the select anchored on the top row of a small test terminal.
    fn render_string(select: &Select<String>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| select.view(frame, Rect::new(0, 0, width, 1)))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn starts_closed_with_placeholder() {
        let select = fruits();
        assert!(!select.is_open());
        assert_eq!(select.selected_index(), None);
        let out = render_string(&select, 30, 1);
        assert!(out.contains("Select..."));
    }

    #[test]
    fn enter_opens_popover() {
        let mut select = fruits();
        press(&mut select, KeyCode::Enter);
        assert!(select.is_open());
    }

    #[test]
    fn down_arrow_opens_popover_while_closed() {
        let mut select = fruits();
        press(&mut select, KeyCode::Down);
        assert!(select.is_open());
        // The active item is unchanged by the opening key.
        assert_eq!(select.menu.active_index(), Some(0));
    }

    #[test]
    fn unfocused_select_ignores_keys() {
        let mut select = fruits();
        select.blur();
        press(&mut select, KeyCode::Enter);
        assert!(!select.is_open());
    }

    #[test]
    fn disabled_select_never_opens() {
        let mut select = fruits().with_disabled(true);
        press(&mut select, KeyCode::Enter);
        assert!(!select.is_open());
        select.update(Message::Open);
        assert!(!select.is_open());
    }

    #[test]
    fn disabled_select_renders_no_options() {
        let select = fruits().with_disabled(true);
        let out = render_string(&select, 30, 6);
        assert!(!out.contains("Apple"));
        assert!(!out.contains("Banana"));
    }

    #[test]
    fn enter_selects_active_and_closes() {
        let mut select = fruits();
        press(&mut select, KeyCode::Enter);
        press(&mut select, KeyCode::Down); // Banana
        let cmd = press(&mut select, KeyCode::Enter);

        assert!(matches!(cmd.into_message(), Some(Message::Selected(1))));
        assert!(!select.is_open());
        assert_eq!(select.selected_label(), Some("Banana"));
    }

    #[test]
    fn close_on_select_false_keeps_popover_open() {
        let mut select = fruits().with_close_on_select(false);
        press(&mut select, KeyCode::Enter);
        let cmd = press(&mut select, KeyCode::Enter);

        assert!(matches!(cmd.into_message(), Some(Message::Selected(0))));
        assert!(select.is_open());
    }

    #[test]
    fn esc_dismisses_without_selecting() {
        let mut select = fruits();
        press(&mut select, KeyCode::Enter);
        let cmd = press(&mut select, KeyCode::Esc);

        assert!(matches!(cmd.into_message(), Some(Message::Dismissed)));
        assert!(!select.is_open());
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn typing_filters_options() {
        let mut select = fruits();
        press(&mut select, KeyCode::Enter);
        press(&mut select, KeyCode::Char('b'));
        press(&mut select, KeyCode::Char('a'));

        assert_eq!(select.query(), "ba");
        assert_eq!(select.menu.visible_len(), 1);
        // Active item reset to the first match, reported by original index.
        assert_eq!(select.menu.active_index(), Some(1));
    }

    #[test]
    fn backspace_widens_filter() {
        let mut select = fruits();
        press(&mut select, KeyCode::Enter);
        press(&mut select, KeyCode::Char('b'));
        press(&mut select, KeyCode::Backspace);

        assert_eq!(select.query(), "");
        assert_eq!(select.menu.visible_len(), 3);
    }

    #[test]
    fn selecting_filtered_option_reports_original_index() {
        let mut select = fruits();
        press(&mut select, KeyCode::Enter);
        press(&mut select, KeyCode::Char('c')); // Cherry
        let cmd = press(&mut select, KeyCode::Enter);

        assert!(matches!(cmd.into_message(), Some(Message::Selected(2))));
        assert_eq!(select.selected_label(), Some("Cherry"));
    }

    #[test]
    fn query_changed_message_filters() {
        let mut select = fruits();
        select.update(Message::QueryChanged("apple".into()));
        assert_eq!(select.menu.visible_len(), 1);
        assert_eq!(select.menu.active_index(), Some(0));
    }

    #[test]
    fn filterable_false_ignores_typing() {
        let mut select = fruits().with_filterable(false);
        press(&mut select, KeyCode::Enter);
        press(&mut select, KeyCode::Char('b'));

        assert_eq!(select.query(), "");
        assert_eq!(select.menu.visible_len(), 3);
        select.update(Message::QueryChanged("b".into()));
        assert_eq!(select.menu.visible_len(), 3);
    }

    #[test]
    fn filterable_false_hides_query_line() {
        let mut filterable = fruits();
        filterable.update(Message::Open);
        let with_query = render_string(&filterable, 30, 6);
        assert!(with_query.contains("Type to filter"));

        let mut plain = fruits().with_filterable(false);
        plain.update(Message::Open);
        let without_query = render_string(&plain, 30, 6);
        assert!(!without_query.contains("Type to filter"));
        assert!(without_query.contains("Apple"));
    }

    #[test]
    fn no_matches_renders_placeholder_row() {
        let mut select = fruits();
        select.update(Message::Open);
        select.update(Message::QueryChanged("zzz".into()));
        let out = render_string(&select, 30, 6);
        assert!(out.contains("No results"));

        // Confirming with nothing visible is a no-op.
        let cmd = select.update(Message::KeyPress(key_press(KeyCode::Enter)));
        assert!(cmd.is_none());
    }

    #[test]
    fn reopening_activates_selected_option() {
        let mut select = fruits();
        press(&mut select, KeyCode::Enter);
        press(&mut select, KeyCode::Down);
        press(&mut select, KeyCode::Enter); // select Banana, closes

        press(&mut select, KeyCode::Enter); // reopen
        assert_eq!(select.menu.active_index(), Some(1));
    }

    #[test]
    fn custom_predicate_is_used() {
        let mut select = Select::new(vec!["1994".to_string(), "2001".to_string()])
            .with_predicate(|query, item: &String| item.starts_with(query));
        select.focus();
        select.update(Message::QueryChanged("19".into()));
        assert_eq!(select.menu.visible_len(), 1);
        assert_eq!(select.menu.active_index(), Some(0));
    }

    #[test]
    fn popover_rows_render_below_trigger() {
        let mut select = fruits();
        select.update(Message::Open);
        let out = render_string(&select, 30, 6);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("Select..."));
        assert!(out.contains("Apple"));
        assert!(out.contains("▸ Apple")); // active row marker
    }
}
