//! Core runtime for the **trellis** widget kit.
//!
//! `trellis-core` provides the traits, types, and runtime that power every
//! trellis application. The design follows the [Elm Architecture]: your
//! program is expressed as a pure **init -> update -> view** cycle, with side
//! effects pushed to the edges through [`Command`]s and terminal input routed
//! through [`Model::on_event`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view / on_event) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! # Architecture
//!
//! 1. **init** -- The [`Model::init`] function creates the initial state and
//!    may return a [`Command`] to kick off early work.
//! 2. **view** -- The runtime calls [`Model::view`] to render the current
//!    state to a [`ratatui::Frame`].
//! 3. **event** -- Terminal input (key presses, mouse, resize) arrives as
//!    [`TerminalEvent`]s and is mapped into the model's `Message` type by
//!    [`Model::on_event`].
//! 4. **update** -- [`Model::update`] receives a message, mutates state, and
//!    optionally returns a [`Command`] for further side effects.
//! 5. **repeat** -- Steps 2-4 repeat until the program exits.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::{Command, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{OutputTarget, Program, ProgramError, ProgramHandle, ProgramOptions};

/// Run a trellis application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
