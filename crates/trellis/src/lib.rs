//! **trellis** -- breadcrumbs, select menus, and popovers for [`ratatui`],
//! with overflow-aware collapsing.
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! trellis = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`trellis_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`trellis_widgets`]
//!   (breadcrumbs, select, popover, menu, and the overflow layout engine).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use trellis::widgets::breadcrumbs::{self, Breadcrumbs, Crumb};
//! use trellis::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct App {
//!     trail: Breadcrumbs,
//! }
//!
//! enum Msg {
//!     Trail(breadcrumbs::Message),
//!     Quit,
//! }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut trail = Breadcrumbs::new(vec![
//!             Crumb::new("Home"),
//!             Crumb::new("Projects"),
//!             Crumb::new("trellis").current(true),
//!         ]);
//!         trail.focus();
//!         (App { trail }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Trail(m) => self.trail.update(m).map(Msg::Trail),
//!             Msg::Quit => Command::quit(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         self.trail.view(frame, frame.area());
//!     }
//! }
//! ```

pub use trellis_core::*;
pub mod widgets {
    pub use trellis_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
