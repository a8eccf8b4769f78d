//! Utility functions shared by the command line front end.
//!
//! ## Modules
//!
//! - [`input`] - Loading texts and JSON configuration
//! - [`progress`] - Progress bars (no-op without the `progress` feature)

pub mod input;
pub mod progress;

pub use input::*;
