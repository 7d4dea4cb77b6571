//! # LovAi - a terminal dashboard for couples
//!
//! The home screen shows how long a couple has been together, today's
//! weather, a calendar with a selectable date and weekend suggestions.
//! Discover and Moments are placeholders for now.
//!
//! ## Architecture Overview
//!
//! The application shell follows the Elm architecture:
//!
//! - **Model** (`core::state`): unified application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): folds a message into the state
//! - **Command** (`core::cmd`): side effects for the host to run
//! - **View** (`presentation::components`): surfaces rendered from state
//!
//! The home dashboard data lives in [`model::dashboard::DashboardState`].
//! Its fields are [`model::observable::Observable`] cells: a surface
//! subscribes while it is active and is pushed every change.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lovai::{
//!     core::msg::{ui::UiMsg, Msg},
//!     domain::calendar::FixedClock,
//!     infrastructure::config::Config,
//!     update, AppState,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
//! let state = AppState::new_with_clock(Config::default(), &FixedClock(today));
//! assert_eq!(
//!     state.session.dashboard().days_together_text().get(),
//!     "290 days together"
//! );
//!
//! let (state, commands) = update(Msg::Ui(UiMsg::ShiftSelectedDate(1)), state);
//! assert_eq!(state.ui.selected_date, NaiveDate::from_ymd_opt(2023, 4, 2).unwrap());
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`model`] - Observable cells, the dashboard state holder, session
//! - [`domain`] - Calendar arithmetic and placeholder content
//! - [`presentation`] - Surfaces, widgets, keybindings and styles
//! - [`infrastructure`] - Terminal, CLI and configuration
//! - [`integration`] - Runtime and the main loop
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
