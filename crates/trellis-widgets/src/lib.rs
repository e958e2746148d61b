//! Navigation widgets for the **trellis** kit.
//!
//! Every interactive widget in this crate implements
//! [`trellis_core::Component`], so it can be embedded inside any
//! [`trellis_core::Model`] and composed freely within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`breadcrumbs`] | Collapsing breadcrumb trail with an openable overflow menu |
//! | [`menu`] | Scrolling item menu with an active-row cursor |
//! | [`popover`] | Anchored overlay placement and open/close state |
//! | [`select`] | Single-choice select with query filtering |
//!
//! # Layout policy
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`overflow`] | Overflow-aware collapsing layout for ordered sequences |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`measure`] | Unicode-aware display width and truncation |
//! | [`selection`] | [`ActiveItemState`](selection::ActiveItemState) cursor/scroll reducer |

pub mod breadcrumbs;
pub mod measure;
pub mod menu;
pub mod overflow;
pub mod popover;
pub mod select;
pub mod selection;
