//! Domain layer
//!
//! Plain data and pure functions with no UI or I/O dependencies:
//! - Calendar arithmetic and the clock seam
//! - Placeholder content shown until real sources exist
//! - Text helpers

pub mod calendar;
pub mod mock;
pub mod text;
