use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` is nearly identical to [`Model`](crate::Model) but with one key
/// difference: its [`view`](Component::view) method receives an `area: Rect`
/// parameter, making components composable within layouts. A parent model (or
/// another component) decides *where* each child renders by passing it a
/// sub-region of the frame.
///
/// # Composition pattern
///
/// To embed a `Component` inside a [`Model`](crate::Model), wrap the
/// component's message type in a variant of the parent message and use
/// [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// use trellis_core::{Command, Component, Model};
/// use ratatui::layout::{Constraint, Layout, Rect};
/// use ratatui::Frame;
///
/// struct App { picker: Select<String> }
///
/// #[derive(Debug)]
/// enum AppMsg { Picker(select::Message) }
///
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<AppMsg>) {
///         (App { picker: Select::new(options()) }, Command::none())
///     }
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Picker(m) => self.picker.update(m).map(AppMsg::Picker),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let [top, _] = Layout::vertical([Constraint::Length(1); 2])
///             .areas(frame.area());
///         self.picker.view(frame, top);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// Works exactly like [`Model::update`](crate::Model::update). The
    /// returned command uses the component's own `Message` type; the parent
    /// should call [`.map()`](Command::map) to lift it into the parent message
    /// type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Unlike [`Model::view`](crate::Model::view), this method receives an
    /// `area: Rect` so the parent can control where the component is drawn.
    /// Components that open overlays (popovers, menus) may draw outside the
    /// given rect, treating it as their anchor.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// This is a hint for input routing. A parent can query `focused()` to
    /// decide which child should receive keyboard events. The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
