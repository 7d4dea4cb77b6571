//! Infrastructure layer
//!
//! This module handles everything outside the process:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration files

pub mod cli;
pub mod config;
pub mod tui;
