//! Scrolling item menu with an active-row cursor.
//!
//! The menu is the list half of a select or overflow popover: it renders a
//! window of rows, keeps one row active, and skips disabled rows during
//! keyboard navigation. Filtering works through a view of original item
//! indices, so confirming a row always reports the item's position in the
//! full sequence regardless of the current filter.

use crate::measure::{display_width, truncate};
use crate::selection::ActiveItemState;
use trellis_core::command::Command;
use trellis_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Trait for types that can be displayed as menu rows.
///
/// Any domain type can implement this trait to be used directly with
/// [`Menu`] without converting into an intermediate struct.
///
/// # Example
///
/// ```ignore
/// struct Film {
///     title: String,
///     year: u16,
/// }
///
/// impl MenuItem for Film {
///     fn label(&self) -> &str {
///         &self.title
///     }
/// }
/// ```
pub trait MenuItem: Send + 'static {
    /// Text shown for the row and used by select-style filtering.
    fn label(&self) -> &str;

    /// Disabled rows render dimmed and are skipped by keyboard navigation.
    /// Returns `false` by default.
    fn disabled(&self) -> bool {
        false
    }
}

impl MenuItem for String {
    fn label(&self) -> &str {
        self
    }
}

impl MenuItem for &'static str {
    fn label(&self) -> &str {
        self
    }
}

/// Messages for the menu component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the menu.
    KeyPress(KeyEvent),
    /// The item at the given original index was confirmed (Enter pressed).
    Selected(usize),
    /// The menu was dismissed (Esc pressed).
    Dismissed,
}

/// Style configuration for the menu.
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Style for inactive rows.
    pub item: Style,
    /// Style for the active row.
    pub active_item: Style,
    /// Style for disabled rows.
    pub disabled_item: Style,
    /// Symbol rendered to the left of the active row.
    pub highlight_symbol: String,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            active_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_item: Style::default().fg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

/// A scrolling menu of selectable rows.
///
/// The type parameter `I` is the item type stored in the menu; anything
/// implementing [`MenuItem`] works, from plain `String`s to rich domain
/// structs. The menu always reports *original* indices, so filtering never
/// changes what a [`Message::Selected`] refers to.
pub struct Menu<I: MenuItem> {
    items: Vec<I>,
    rows: Vec<usize>,
    active: ActiveItemState,
    max_visible: usize,
    style: MenuStyle,
}

impl<I: MenuItem> Menu<I> {
    /// Create a menu showing all of `items`, with the active cursor on the
    /// first enabled row.
    pub fn new(items: Vec<I>) -> Self {
        let rows: Vec<usize> = (0..items.len()).collect();
        let mut menu = Self {
            active: ActiveItemState::new(rows.len(), 8),
            items,
            rows,
            max_visible: 8,
            style: MenuStyle::default(),
        };
        menu.reset_active();
        menu
    }

    /// Set the maximum number of rows shown before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.active.set_visible(self.max_visible);
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the items, clearing any filter and resetting the cursor.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.rows = (0..items.len()).collect();
        self.items = items;
        self.active.set_count(self.rows.len());
        self.reset_active();
    }

    /// All items, in sequence order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of rows currently shown (after filtering).
    pub fn visible_len(&self) -> usize {
        self.rows.len()
    }

    /// Restrict the visible rows to items for which `keep` returns true.
    ///
    /// The cursor resets to the first enabled row of the new view.
    pub fn apply_filter(&mut self, keep: impl Fn(&I) -> bool) {
        self.rows = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| keep(item))
            .map(|(i, _)| i)
            .collect();
        self.active.set_count(self.rows.len());
        self.reset_active();
    }

    /// Show all rows again.
    pub fn clear_filter(&mut self) {
        self.rows = (0..self.items.len()).collect();
        self.active.set_count(self.rows.len());
        self.reset_active();
    }

    /// Original index of the active item, if any row is visible.
    pub fn active_index(&self) -> Option<usize> {
        self.rows.get(self.active.cursor()).copied()
    }

    /// The active item itself.
    pub fn active_item(&self) -> Option<&I> {
        self.active_index().and_then(|i| self.items.get(i))
    }

    /// Move the cursor to the row showing the item at `original_index`.
    /// No-op when that item is filtered out.
    pub fn set_active(&mut self, original_index: usize) {
        if let Some(row) = self.rows.iter().position(|&i| i == original_index) {
            self.active.select(row);
        }
    }

    /// Move the cursor down to the next enabled row, wrapping.
    pub fn move_next(&mut self) {
        let rows = self.rows.clone();
        let items = &self.items;
        self.active
            .move_down_where(|row| !items[rows[row]].disabled());
    }

    /// Move the cursor up to the previous enabled row, wrapping.
    pub fn move_prev(&mut self) {
        let rows = self.rows.clone();
        let items = &self.items;
        self.active.move_up_where(|row| !items[rows[row]].disabled());
    }

    fn reset_active(&mut self) {
        let rows = self.rows.clone();
        let items = &self.items;
        self.active
            .select_first_where(|row| !items[rows[row]].disabled());
    }
}

impl<I: MenuItem> Component for Menu<I> {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => match key.code {
                KeyCode::Esc => Command::message(Message::Dismissed),
                KeyCode::Up => {
                    self.move_prev();
                    Command::none()
                }
                KeyCode::Down | KeyCode::Tab => {
                    self.move_next();
                    Command::none()
                }
                KeyCode::Home => {
                    self.active.home();
                    Command::none()
                }
                KeyCode::End => {
                    self.active.end();
                    Command::none()
                }
                KeyCode::Enter => match self.active_item() {
                    Some(item) if !item.disabled() => {
                        Command::message(Message::Selected(self.active_index().unwrap()))
                    }
                    _ => Command::none(),
                },
                _ => Command::none(),
            },
            Message::Selected(..) | Message::Dismissed => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let window = self
            .rows
            .len()
            .min(self.max_visible)
            .min(area.height as usize);
        let offset = self.active.offset();

        for (line, row) in (offset..self.rows.len()).take(window).enumerate() {
            let item = &self.items[self.rows[row]];
            let row_area = Rect {
                y: area.y + line as u16,
                height: 1,
                ..area
            };

            let is_active = row == self.active.cursor();
            let style = if item.disabled() {
                self.style.disabled_item
            } else if is_active {
                self.style.active_item
            } else {
                self.style.item
            };
            let prefix = if is_active {
                self.style.highlight_symbol.as_str()
            } else {
                "  "
            };

            let max_label = (row_area.width as usize).saturating_sub(display_width(prefix));
            let display = format!("{}{}", prefix, truncate(item.label(), max_label, "…"));
            frame.render_widget(Paragraph::new(Span::styled(display, style)), row_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::testing::key_press;

    struct Entry {
        name: &'static str,
        disabled: bool,
    }

    impl Entry {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                disabled: false,
            }
        }

        fn inert(name: &'static str) -> Self {
            Self {
                name,
                disabled: true,
            }
        }
    }

    impl MenuItem for Entry {
        fn label(&self) -> &str {
            self.name
        }
        fn disabled(&self) -> bool {
            self.disabled
        }
    }

    fn abc() -> Menu<String> {
        Menu::new(vec!["alpha".into(), "beta".into(), "gamma".into()])
    }

    #[test]
    fn new_activates_first_row() {
        let menu = abc();
        assert_eq!(menu.active_index(), Some(0));
        assert_eq!(menu.visible_len(), 3);
    }

    #[test]
    fn empty_menu_has_no_active_item() {
        let menu: Menu<String> = Menu::new(vec![]);
        assert_eq!(menu.active_index(), None);
        assert!(menu.active_item().is_none());
    }

    #[test]
    fn down_navigates_and_wraps() {
        let mut menu = abc();
        menu.update(Message::KeyPress(key_press(KeyCode::Down)));
        assert_eq!(menu.active_index(), Some(1));
        menu.update(Message::KeyPress(key_press(KeyCode::Down)));
        assert_eq!(menu.active_index(), Some(2));
        menu.update(Message::KeyPress(key_press(KeyCode::Down)));
        assert_eq!(menu.active_index(), Some(0));
    }

    #[test]
    fn up_wraps_to_last() {
        let mut menu = abc();
        menu.update(Message::KeyPress(key_press(KeyCode::Up)));
        assert_eq!(menu.active_index(), Some(2));
    }

    #[test]
    fn navigation_skips_disabled_rows() {
        let mut menu = Menu::new(vec![
            Entry::new("a"),
            Entry::inert("b"),
            Entry::new("c"),
        ]);
        menu.move_next();
        assert_eq!(menu.active_index(), Some(2));
        menu.move_prev();
        assert_eq!(menu.active_index(), Some(0));
    }

    #[test]
    fn initial_active_skips_leading_disabled() {
        let menu = Menu::new(vec![Entry::inert("a"), Entry::new("b")]);
        assert_eq!(menu.active_index(), Some(1));
    }

    #[test]
    fn enter_selects_active() {
        let mut menu = abc();
        menu.move_next();
        let cmd = menu.update(Message::KeyPress(key_press(KeyCode::Enter)));
        match cmd.into_message() {
            Some(Message::Selected(1)) => {}
            other => panic!("Expected Selected(1), got {other:?}"),
        }
    }

    #[test]
    fn enter_on_disabled_item_is_ignored() {
        let mut menu = Menu::new(vec![Entry::inert("a")]);
        // Every row is disabled, so the fallback cursor sits on a disabled row.
        let cmd = menu.update(Message::KeyPress(key_press(KeyCode::Enter)));
        assert!(cmd.is_none());
    }

    #[test]
    fn esc_dismisses() {
        let mut menu = abc();
        let cmd = menu.update(Message::KeyPress(key_press(KeyCode::Esc)));
        assert!(matches!(cmd.into_message(), Some(Message::Dismissed)));
    }

    #[test]
    fn filter_narrows_rows_but_reports_original_indices() {
        let mut menu = abc();
        menu.apply_filter(|item| item.contains('m'));
        assert_eq!(menu.visible_len(), 1);
        assert_eq!(menu.active_index(), Some(2)); // gamma

        let cmd = menu.update(Message::KeyPress(key_press(KeyCode::Enter)));
        assert!(matches!(cmd.into_message(), Some(Message::Selected(2))));
    }

    #[test]
    fn filter_with_no_matches_leaves_nothing_active() {
        let mut menu = abc();
        menu.apply_filter(|item| item.contains('z'));
        assert_eq!(menu.visible_len(), 0);
        assert_eq!(menu.active_index(), None);
        let cmd = menu.update(Message::KeyPress(key_press(KeyCode::Enter)));
        assert!(cmd.is_none());
    }

    #[test]
    fn clear_filter_restores_rows() {
        let mut menu = abc();
        menu.apply_filter(|item| item.contains('m'));
        menu.clear_filter();
        assert_eq!(menu.visible_len(), 3);
        assert_eq!(menu.active_index(), Some(0));
    }

    #[test]
    fn set_active_by_original_index() {
        let mut menu = abc();
        menu.set_active(2);
        assert_eq!(menu.active_index(), Some(2));

        // Filtered-out items cannot become active.
        menu.apply_filter(|item| item.contains('a')); // alpha, beta, gamma all match 'a'
        menu.apply_filter(|item| item.starts_with('b'));
        menu.set_active(0);
        assert_eq!(menu.active_index(), Some(1)); // beta stays active
    }

    #[test]
    fn set_items_resets_view() {
        let mut menu = abc();
        menu.apply_filter(|item| item.contains('m'));
        menu.set_items(vec!["x".into(), "y".into()]);
        assert_eq!(menu.visible_len(), 2);
        assert_eq!(menu.active_index(), Some(0));
    }
}
