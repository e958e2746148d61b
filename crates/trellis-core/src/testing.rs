//! Headless test harness and input-event simulation helpers.
//!
//! [`TestProgram`] drives a [`Model`] through its full init/update/view cycle
//! in a plain `#[test]` function, with no tokio runtime or TTY required. The
//! free functions ([`key_press`], [`key_with`], [`mouse_event`], [`click`])
//! construct the synthetic input events that real terminals would deliver, so
//! tests can exercise keyboard and mouse behavior without a terminal.

use crate::command::{Action, Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Construct a plain key-press event for the given key code.
///
/// The simulated event carries no modifiers, matching what a terminal sends
/// for an unmodified key.
pub fn key_press(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::NONE)
}

/// Construct a key-press event with explicit modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Construct a shift-modified key-press event.
pub fn shift_key_press(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::SHIFT)
}

/// Construct a mouse event of the given kind at a cell position.
pub fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Construct a left-button click (press) at a cell position.
pub fn click(column: u16, row: u16) -> MouseEvent {
    mouse_event(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Synchronous commands (e.g. [`Command::message`]) are collected and can be
/// flushed with [`drain_messages`](TestProgram::drain_messages); async and
/// terminal commands are silently ignored.
///
/// # Example
///
/// ```rust,ignore
/// use trellis_core::testing::{key_press, TestProgram};
/// use crossterm::event::KeyCode;
///
/// let mut prog = TestProgram::<Picker>::new(());
/// prog.event(TerminalEvent::Key(key_press(KeyCode::Down)));
/// prog.drain_messages();
/// assert_eq!(prog.model().active(), 1);
///
/// let output = prog.render_string(40, 5);
/// assert!(output.contains("Banana"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Any synchronous commands produced by `init` are collected into the
    /// pending-message queue; call
    /// [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// The message is passed to [`Model::update`] immediately. Any
    /// synchronous commands returned by `update` are enqueued; call
    /// [`drain_messages`](TestProgram::drain_messages) to flush them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Dispatch a terminal event through [`Model::on_event`].
    ///
    /// This mirrors what the runtime does for real input: the event is routed
    /// through the model's `on_event` hook, and the resulting message (if
    /// any) is sent. Use the event constructors ([`key_press`], [`click`],
    /// ...) to build synthetic input.
    pub fn event(&mut self, event: TerminalEvent) {
        if let Some(msg) = self.model.on_event(event) {
            self.send(msg);
        }
    }

    /// Process all pending synchronous messages produced by [`Command::message`].
    ///
    /// Repeatedly drains the pending queue, calling [`Model::update`] for
    /// each message, until no new synchronous messages are generated. Useful
    /// for command-chaining scenarios where one update produces a message
    /// that triggers another update.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    ///
    /// This bypasses the normal message-driven update cycle, which can be
    /// useful for arranging test state before sending messages.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// Returns the raw buffer, which you can inspect cell-by-cell. For a
    /// simpler string-based assertion, see
    /// [`render_string`](TestProgram::render_string).
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Each row of the buffer is concatenated into a line; rows are separated
    /// by newlines. Trailing whitespace within each row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Action(Action::Quit) => {}
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async and terminal commands can't be executed in headless tests
            CommandInner::Future(_) => {}
            CommandInner::Terminal(_) => {}
        }
    }
}
