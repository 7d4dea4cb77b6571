//! Presentation layer
//!
//! This module contains the screens and what they are drawn with:
//! - Surfaces (Home, Discover, Moments) and their lifecycle
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
