//! Anchored overlay placement and state.
//!
//! A [`Popover`] tracks open/closed state and computes where an overlay
//! should render relative to an anchor rect — above or below, clamped to the
//! frame. It owns no content: widgets that use popovers (the select menu,
//! the breadcrumbs overflow menu) compute the overlay rect, call
//! [`render`](Popover::render) to clear the backdrop and draw the chrome,
//! and fill the returned inner area themselves.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

/// Position of the popover relative to its anchor area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Render above the anchor area.
    Above,
    /// Render below the anchor area (default).
    #[default]
    Below,
}

/// Open/closed state plus placement arithmetic for an anchored overlay.
///
/// # Example
///
/// ```ignore
/// use trellis_widgets::popover::{Placement, Popover};
///
/// let mut popover = Popover::new().with_placement(Placement::Above);
/// popover.open();
/// assert!(popover.is_open());
/// ```
pub struct Popover {
    placement: Placement,
    open: bool,
    block: Option<Block<'static>>,
}

impl Popover {
    /// Create a closed popover with default (below) placement.
    pub fn new() -> Self {
        Self {
            placement: Placement::default(),
            open: false,
            block: None,
        }
    }

    /// Set the placement relative to the anchor.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the block (border/title chrome) drawn around the overlay.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Current placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Change the placement (mutable variant).
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Open the popover.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the popover.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Whether the popover is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Compute the overlay rect for `content_height` rows of content,
    /// anchored to `anchor` and clamped to `bounds`.
    ///
    /// The rect includes room for the block's borders when one is set.
    /// Returns a zero-height rect when no rows fit on the chosen side.
    pub fn anchored_rect(&self, anchor: Rect, content_height: u16, bounds: Rect) -> Rect {
        let chrome = if self.block.is_some() { 2 } else { 0 };
        let height = content_height.saturating_add(chrome);

        match self.placement {
            Placement::Above => {
                let room = anchor.y.saturating_sub(bounds.y);
                let height = height.min(room);
                Rect::new(anchor.x, anchor.y - height, anchor.width, height)
            }
            Placement::Below => {
                let y = anchor.y.saturating_add(anchor.height);
                let room = bounds.bottom().saturating_sub(y);
                Rect::new(anchor.x, y, anchor.width, height.min(room))
            }
        }
    }

    /// Clear the overlay area, draw the block chrome if any, and return the
    /// inner content area.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        frame.render_widget(Clear, area);
        if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        }
    }
}

impl Default for Popover {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let p = Popover::new();
        assert!(!p.is_open());
    }

    #[test]
    fn open_close_toggle() {
        let mut p = Popover::new();
        p.open();
        assert!(p.is_open());
        p.close();
        assert!(!p.is_open());
        p.toggle();
        assert!(p.is_open());
    }

    #[test]
    fn below_placement_sits_under_anchor() {
        let p = Popover::new();
        let anchor = Rect::new(4, 2, 20, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = p.anchored_rect(anchor, 5, bounds);
        assert_eq!(rect.x, 4);
        assert_eq!(rect.y, 3);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }

    #[test]
    fn above_placement_sits_over_anchor() {
        let p = Popover::new().with_placement(Placement::Above);
        let anchor = Rect::new(4, 10, 20, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = p.anchored_rect(anchor, 5, bounds);
        assert_eq!(rect.y, 5);
        assert_eq!(rect.height, 5);
        assert_eq!(rect.bottom(), anchor.y);
    }

    #[test]
    fn above_placement_clamps_to_top() {
        let p = Popover::new().with_placement(Placement::Above);
        let anchor = Rect::new(0, 2, 10, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = p.anchored_rect(anchor, 5, bounds);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.height, 2);
    }

    #[test]
    fn below_placement_clamps_to_bottom() {
        let p = Popover::new();
        let anchor = Rect::new(0, 20, 10, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = p.anchored_rect(anchor, 10, bounds);
        assert_eq!(rect.y, 21);
        assert_eq!(rect.height, 3);
    }

    #[test]
    fn block_adds_border_rows() {
        use ratatui::widgets::Borders;
        let p = Popover::new().with_block(Block::default().borders(Borders::ALL));
        let anchor = Rect::new(0, 0, 10, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = p.anchored_rect(anchor, 5, bounds);
        assert_eq!(rect.height, 7);
    }

    #[test]
    fn no_room_yields_zero_height() {
        let p = Popover::new();
        let anchor = Rect::new(0, 23, 10, 1);
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = p.anchored_rect(anchor, 5, bounds);
        assert_eq!(rect.height, 0);
    }
}
