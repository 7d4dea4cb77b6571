//! Stateful models
//!
//! Each model owns its data and changes it only through `update`-style
//! entry points.

pub mod dashboard;
pub mod observable;
pub mod session;
pub mod status_bar;
