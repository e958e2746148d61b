use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// Each event is handed to [`Model::on_event`](crate::Model::on_event), which
/// maps it into the application's `Message` type (or drops it by returning
/// `None`). The variants wrap the corresponding [`crossterm::event::Event`]
/// payloads, so key codes, modifiers, and mouse buttons can be matched with
/// the full crossterm API.
///
/// # Example
///
/// ```rust,ignore
/// use trellis_core::TerminalEvent;
///
/// fn on_event(&self, ev: TerminalEvent) -> Option<Msg> {
///     match ev {
///         TerminalEvent::Key(k) => Some(Msg::Key(k)),
///         TerminalEvent::Resize(w, _) => Some(Msg::WidthChanged(w)),
///         _ => None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Convert a crossterm event into a `TerminalEvent`.
    ///
    /// Returns `None` for event kinds the widget layer has no use for
    /// (focus changes, pasted text).
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) => Some(TerminalEvent::Key(k)),
            crossterm::event::Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode};

    #[test]
    fn converts_key_events() {
        let ev = Event::Key(KeyCode::Enter.into());
        assert!(matches!(
            TerminalEvent::from_crossterm(ev),
            Some(TerminalEvent::Key(_))
        ));
    }

    #[test]
    fn converts_resize_events() {
        let ev = Event::Resize(80, 24);
        assert_eq!(
            TerminalEvent::from_crossterm(ev),
            Some(TerminalEvent::Resize(80, 24))
        );
    }

    #[test]
    fn drops_paste_events() {
        let ev = Event::Paste("text".into());
        assert_eq!(TerminalEvent::from_crossterm(ev), None);
    }
}
