//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod card;
pub mod header;
pub mod status_bar;
pub mod tab_bar;
