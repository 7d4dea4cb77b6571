//! Wiring between the core and the outside world
//!
//! - `Runtime` queues messages and folds them through `update`
//! - `AppRunner` drives a terminal, executes commands and renders surfaces

pub mod app_runner;
pub mod runtime;
