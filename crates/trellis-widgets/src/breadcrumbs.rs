//! Breadcrumb trail with overflow-aware collapsing.
//!
//! Renders an ordered path of crumbs joined by a separator. When the trail
//! does not fit its area, crumbs collapse behind a "…" indicator according
//! to the [`overflow`](crate::overflow) layout engine; the indicator can be
//! opened into a popover menu listing the hidden crumbs, and choosing one
//! emits [`Message::Navigate`] with its position in the full path.
//!
//! The collapse decision is recomputed from the area width on every render
//! pass, so resizing the terminal re-partitions the trail automatically.

use crate::measure::display_width;
use crate::menu::Menu;
use crate::overflow::{layout, CollapseFrom, OverflowOptions, OverflowState};
use crate::popover::Popover;
use trellis_core::command::Command;
use trellis_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::cell::Cell;

/// One entry in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    text: String,
    glyph: Option<String>,
    current: bool,
}

impl Crumb {
    /// Create a crumb with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            glyph: None,
            current: false,
        }
    }

    /// Prefix the crumb with a glyph (e.g. a folder or document symbol).
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    /// Mark this crumb as the current location. Current crumbs render with
    /// the emphasis style.
    pub fn current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    /// The crumb's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this crumb is the current location.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Display columns this crumb occupies, excluding separators.
    fn units(&self) -> usize {
        let glyph = self
            .glyph
            .as_deref()
            .map(|g| display_width(g) + 1)
            .unwrap_or(0);
        glyph + display_width(&self.text)
    }

    fn span(&self, style: Style) -> Span<'_> {
        match self.glyph.as_deref() {
            Some(glyph) => Span::styled(format!("{} {}", glyph, self.text), style),
            None => Span::styled(self.text.as_str(), style),
        }
    }
}

/// Messages for the breadcrumbs component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the breadcrumbs.
    KeyPress(KeyEvent),
    /// Request to open the hidden-crumbs menu.
    OpenOverflow,
    /// Request to close the hidden-crumbs menu.
    CloseOverflow,
    /// Emitted when a crumb is chosen from the overflow menu, carrying its
    /// index in the full path.
    Navigate(usize),
}

/// Visual style configuration for the [`Breadcrumbs`] component.
#[derive(Debug, Clone)]
pub struct BreadcrumbsStyle {
    /// Style for ordinary crumbs.
    pub crumb: Style,
    /// Style for the current-location crumb.
    pub current: Style,
    /// Style for the separator between crumbs.
    pub separator: Style,
    /// Style for the overflow indicator.
    pub indicator: Style,
}

impl Default for BreadcrumbsStyle {
    fn default() -> Self {
        Self {
            crumb: Style::default().fg(Color::Gray),
            current: Style::default().add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),
            indicator: Style::default().fg(Color::Cyan),
        }
    }
}

/// Open overflow menu: the menu rows map back to path indices starting at
/// `base` (the overflow run is always contiguous).
struct OverflowMenu {
    base: usize,
    menu: Menu<String>,
}

/// A collapsing breadcrumb trail.
///
/// # Example
///
/// ```ignore
/// use trellis_widgets::breadcrumbs::{Breadcrumbs, Crumb};
///
/// let mut trail = Breadcrumbs::new(vec![
///     Crumb::new("Home"),
///     Crumb::new("Projects"),
///     Crumb::new("trellis").current(true),
/// ]);
/// trail.focus();
/// ```
pub struct Breadcrumbs {
    items: Vec<Crumb>,
    collapse_from: CollapseFrom,
    always_show_overflow: bool,
    separator: String,
    indicator: String,
    style: BreadcrumbsStyle,
    focus: bool,
    // Width of the most recent render, so update() agrees with view()
    // about which crumbs are currently hidden.
    last_width: Cell<u16>,
    overflow_menu: Option<OverflowMenu>,
    popover: Popover,
}

impl Breadcrumbs {
    /// Create a breadcrumb trail over the given crumbs.
    pub fn new(items: Vec<Crumb>) -> Self {
        Self {
            items,
            collapse_from: CollapseFrom::Start,
            always_show_overflow: false,
            separator: " › ".to_string(),
            indicator: "…".to_string(),
            style: BreadcrumbsStyle::default(),
            focus: false,
            last_width: Cell::new(0),
            overflow_menu: None,
            popover: Popover::new().with_block(Block::default().borders(Borders::ALL)),
        }
    }

    /// Set which end of the path collapses first (default: the start, so
    /// the current location stays visible).
    pub fn with_collapse_from(mut self, collapse_from: CollapseFrom) -> Self {
        self.collapse_from = collapse_from;
        self
    }

    /// Always render the overflow indicator, even when every crumb fits.
    /// Keeps the trail width stable while the path changes.
    pub fn with_always_show_overflow(mut self, always: bool) -> Self {
        self.always_show_overflow = always;
        self
    }

    /// Set the separator rendered between crumbs (default: `" › "`).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the overflow indicator text (default: `"…"`).
    pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = indicator.into();
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: BreadcrumbsStyle) -> Self {
        self.style = style;
        self
    }

    /// Change the collapse direction (mutable variant). Closes the overflow
    /// menu, whose contents would be stale.
    pub fn set_collapse_from(&mut self, collapse_from: CollapseFrom) {
        self.collapse_from = collapse_from;
        self.overflow_menu = None;
    }

    /// Change the standing-indicator behavior (mutable variant).
    pub fn set_always_show_overflow(&mut self, always: bool) {
        self.always_show_overflow = always;
    }

    /// Give this trail keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus and close the overflow menu if open.
    pub fn blur(&mut self) {
        self.focus = false;
        self.overflow_menu = None;
    }

    /// The full path, in display order.
    pub fn items(&self) -> &[Crumb] {
        &self.items
    }

    /// Replace the path. Closes the overflow menu, whose contents would be
    /// stale.
    pub fn set_items(&mut self, items: Vec<Crumb>) {
        self.items = items;
        self.overflow_menu = None;
    }

    /// Whether the hidden-crumbs menu is open.
    pub fn is_overflow_open(&self) -> bool {
        self.overflow_menu.is_some()
    }

    /// Compute the collapse partition for a trail rendered `width` columns
    /// wide.
    ///
    /// This is the same computation `view` performs; exposing it lets
    /// callers (and tests) inspect which crumbs would hide at a given width.
    pub fn layout_for_width(&self, width: u16) -> OverflowState {
        let sep = display_width(&self.separator);
        let units: Vec<usize> = self.items.iter().map(|c| c.units() + sep).collect();
        let options = OverflowOptions {
            collapse_from: self.collapse_from,
            always_show_overflow: self.always_show_overflow,
            indicator_units: display_width(&self.indicator) + sep,
        };
        // Every element is charged one separator, but a row of n elements
        // renders only n-1 separators; widen the budget to compensate.
        let budget = width as i32 + sep as i32;
        layout(&units, budget, &options).expect("width budget is non-negative")
    }

    fn open_overflow(&mut self) {
        let state = self.layout_for_width(self.last_width.get());
        let range = state.overflow();
        if range.is_empty() {
            return;
        }
        let labels: Vec<String> = self.items[range.clone()]
            .iter()
            .map(|c| c.text.clone())
            .collect();
        self.overflow_menu = Some(OverflowMenu {
            base: range.start,
            menu: Menu::new(labels).with_max_visible(8),
        });
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Command<Message> {
        let Some(open) = self.overflow_menu.as_mut() else {
            return Command::none();
        };
        match key.code {
            KeyCode::Esc => {
                self.overflow_menu = None;
                Command::none()
            }
            KeyCode::Enter => {
                let chosen = open.menu.active_index().map(|row| open.base + row);
                self.overflow_menu = None;
                match chosen {
                    Some(index) => Command::message(Message::Navigate(index)),
                    None => Command::none(),
                }
            }
            KeyCode::Up => {
                open.menu.move_prev();
                Command::none()
            }
            KeyCode::Down | KeyCode::Tab => {
                open.menu.move_next();
                Command::none()
            }
            _ => Command::none(),
        }
    }
}

impl Component for Breadcrumbs {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => {
                if self.overflow_menu.is_some() {
                    self.handle_menu_key(key)
                } else {
                    match key.code {
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            self.open_overflow();
                            Command::none()
                        }
                        _ => Command::none(),
                    }
                }
            }
            Message::OpenOverflow => {
                self.open_overflow();
                Command::none()
            }
            Message::CloseOverflow => {
                self.overflow_menu = None;
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        self.last_width.set(area.width);
        let state = self.layout_for_width(area.width);

        let crumb_span = |i: usize| {
            let crumb = &self.items[i];
            let style = if crumb.is_current() {
                self.style.current
            } else {
                self.style.crumb
            };
            crumb.span(style)
        };

        let mut elements: Vec<Span> = state.visible_leading().map(crumb_span).collect();
        if state.indicator_visible() {
            elements.push(Span::styled(self.indicator.as_str(), self.style.indicator));
        }
        elements.extend(state.visible_trailing().map(crumb_span));

        let mut spans: Vec<Span> = Vec::with_capacity(elements.len() * 2);
        for (i, element) in elements.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator.as_str(), self.style.separator));
            }
            spans.push(element);
        }

        let row = Rect { height: 1, ..area };
        frame.render_widget(Paragraph::new(Line::from(spans)), row);

        // Hidden-crumbs menu, anchored under the trail. The popover itself
        // is stateless here: `overflow_menu` is the open/closed source of
        // truth (controlled usage).
        if let Some(ref open) = self.overflow_menu {
            let rows = open.menu.visible_len().min(8).max(1) as u16;
            let widest = open
                .menu
                .items()
                .iter()
                .map(|label| display_width(label))
                .max()
                .unwrap_or(0);
            let anchor = Rect {
                width: (widest as u16 + 6).clamp(12, area.width.max(12)),
                height: 1,
                ..row
            };
            let overlay = self.popover.anchored_rect(anchor, rows, frame.area());
            if overlay.height == 0 || overlay.width < 4 {
                return;
            }
            let content = self.popover.render(frame, overlay);
            open.menu.view(frame, content);
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

    /// All files › Users › Janet › Photos › Wednesday › image.jpg
    fn janet() -> Breadcrumbs {
        Breadcrumbs::new(vec![
            Crumb::new("All files"),
            Crumb::new("Users"),
            Crumb::new("Janet"),
            Crumb::new("Photos"),
            Crumb::new("Wednesday"),
            Crumb::new("image.jpg").current(true),
        ])
    }

    fn render_string(trail: &Breadcrumbs, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| trail.view(frame, Rect::new(0, 0, width, 1)))
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
    fn wide_area_shows_every_crumb() {
        let trail = janet();
        let state = trail.layout_for_width(120);
        assert!(state.all_visible());
        assert!(!state.indicator_visible());

        let out = render_string(&trail, 120, 1);
        assert!(out.contains("All files"));
        assert!(out.contains("image.jpg"));
        assert!(out.contains("›"));
        assert!(!out.contains("…"));
    }

    #[test]
    fn narrow_area_collapses_from_start() {
        let trail = janet();
        let out = render_string(&trail, 30, 1);
        assert!(out.contains("…"));
        assert!(out.contains("image.jpg"));
        assert!(!out.contains("All files"));
    }

    #[test]
    fn collapse_from_end_keeps_leading_crumbs() {
        let trail = janet().with_collapse_from(CollapseFrom::End);
        let out = render_string(&trail, 30, 1);
        assert!(out.contains("All files"));
        assert!(out.contains("…"));
        assert!(!out.contains("image.jpg"));
    }

    #[test]
    fn indicator_precedes_trailing_run() {
        let trail = janet();
        let out = render_string(&trail, 30, 1);
        let line = out.lines().next().unwrap();
        let dots = line.find('…').unwrap();
        let file = line.find("image.jpg").unwrap();
        assert!(dots < file);
    }

    #[test]
    fn always_show_overflow_renders_standing_indicator() {
        let trail = Breadcrumbs::new(vec![
            Crumb::new("Root"),
            Crumb::new("image.jpg").current(true),
        ])
        .with_always_show_overflow(true);

        let state = trail.layout_for_width(80);
        assert!(state.all_visible());
        assert!(state.indicator_visible());

        let out = render_string(&trail, 80, 1);
        assert!(out.contains("…"));
        assert!(out.contains("Root"));
        assert!(out.contains("image.jpg"));
    }

    #[test]
    fn empty_path_renders_nothing() {
        let trail = Breadcrumbs::new(vec![]);
        let out = render_string(&trail, 40, 1);
        assert_eq!(out.trim(), "");
    }

    #[test]
    fn glyphs_count_toward_collapse_width() {
        let plain = Breadcrumbs::new(vec![Crumb::new("aa"), Crumb::new("bb")]);
        let glyphed = Breadcrumbs::new(vec![
            Crumb::new("aa").with_glyph("▣"),
            Crumb::new("bb").with_glyph("▣"),
        ]);
        // "aa › bb" is 7 columns; glyphs add 2 columns per crumb.
        assert!(plain.layout_for_width(7).all_visible());
        assert!(!glyphed.layout_for_width(7).all_visible());
        assert!(glyphed.layout_for_width(11).all_visible());
    }

    #[test]
    fn enter_opens_overflow_menu_with_hidden_crumbs() {
        let mut trail = janet();
        trail.focus();
        render_string(&trail, 30, 1); // record the width

        trail.update(Message::KeyPress(key_press(KeyCode::Enter)));
        assert!(trail.is_overflow_open());

        let out = render_string(&trail, 30, 10);
        assert!(out.contains("All files"));
        assert!(out.contains("Users"));
    }

    #[test]
    fn open_overflow_is_noop_when_everything_fits() {
        let mut trail = janet();
        trail.focus();
        render_string(&trail, 120, 1);

        trail.update(Message::OpenOverflow);
        assert!(!trail.is_overflow_open());
    }

    #[test]
    fn choosing_hidden_crumb_navigates_to_original_index() {
        let mut trail = janet();
        trail.focus();
        render_string(&trail, 30, 1);

        trail.update(Message::OpenOverflow);
        trail.update(Message::KeyPress(key_press(KeyCode::Down)));
        let cmd = trail.update(Message::KeyPress(key_press(KeyCode::Enter)));

        // Second entry of the hidden run is "Users", index 1 in the path.
        assert!(matches!(cmd.into_message(), Some(Message::Navigate(1))));
        assert!(!trail.is_overflow_open());
    }

    #[test]
    fn esc_closes_overflow_menu() {
        let mut trail = janet();
        trail.focus();
        render_string(&trail, 30, 1);

        trail.update(Message::OpenOverflow);
        trail.update(Message::KeyPress(key_press(KeyCode::Esc)));
        assert!(!trail.is_overflow_open());
    }

    #[test]
    fn set_items_closes_overflow_menu() {
        let mut trail = janet();
        trail.focus();
        render_string(&trail, 30, 1);
        trail.update(Message::OpenOverflow);
        assert!(trail.is_overflow_open());

        trail.set_items(vec![Crumb::new("Home")]);
        assert!(!trail.is_overflow_open());
    }

    #[test]
    fn unfocused_trail_ignores_keys() {
        let mut trail = janet();
        render_string(&trail, 30, 1);
        trail.update(Message::KeyPress(key_press(KeyCode::Enter)));
        assert!(!trail.is_overflow_open());
    }

    #[test]
    fn partition_matches_path_length_at_any_width() {
        let trail = janet();
        for width in 0..100 {
            let state = trail.layout_for_width(width);
            assert_eq!(
                state.visible_leading().len()
                    + state.visible_trailing().len()
                    + state.overflow_count(),
                trail.items().len(),
                "width {width}"
            );
        }
    }
}
