use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait.
///
/// Every trellis application implements `Model`. The runtime drives a
/// continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects.
/// 2. [`view`](Model::view) renders the current state to a
///    [`ratatui::Frame`].
/// 3. Terminal events (keys, mouse, resize) are routed through
///    [`on_event`](Model::on_event), which maps each into a message or
///    drops it.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further work.
/// 5. Steps 2--4 repeat until the program exits.
///
/// # Example
///
/// ```rust,ignore
/// use trellis_core::{Command, Model, TerminalEvent};
/// use crossterm::event::KeyCode;
/// use ratatui::widgets::Paragraph;
/// use ratatui::Frame;
///
/// struct Counter {
///     count: i32,
/// }
///
/// #[derive(Debug)]
/// enum Msg {
///     Increment,
///     Quit,
/// }
///
/// impl Model for Counter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_flags: ()) -> (Self, Command<Msg>) {
///         (Counter { count: 0 }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Increment => {
///                 self.count += 1;
///                 Command::none()
///             }
///             Msg::Quit => Command::quit(),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(
///             Paragraph::new(format!("Count: {}", self.count)),
///             frame.area(),
///         );
///     }
///
///     fn on_event(&self, ev: TerminalEvent) -> Option<Msg> {
///         match ev {
///             TerminalEvent::Key(k) if k.code == KeyCode::Esc => Some(Msg::Quit),
///             TerminalEvent::Key(_) => Some(Msg::Increment),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    ///
    /// Every event that can affect the application state is represented as a
    /// variant of this type. Messages arrive from [`on_event`](Model::on_event),
    /// from [`Command::message`], or from async work completed via
    /// [`Command::perform`].
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// Pattern-match on the incoming message, update `self` accordingly, and
    /// return a [`Command`] describing any side effects the runtime should
    /// perform. After `update` returns, the runtime calls
    /// [`view`](Model::view) to re-render.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This should be a pure function of `&self` -- it reads the model state
    /// and draws widgets into the frame. The runtime calls `view` after every
    /// update and on the initial render.
    fn view(&self, frame: &mut Frame);

    /// Route a terminal event to a message.
    ///
    /// Called by the runtime for every key, mouse, and resize event. Return
    /// `Some(msg)` to feed the event into [`update`](Model::update), or
    /// `None` to ignore it. The default implementation ignores everything,
    /// which suits programs driven purely by injected messages.
    fn on_event(&self, event: TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }
}
