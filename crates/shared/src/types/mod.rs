//! Common types used across the application.

pub mod id;
pub mod numeric;
pub mod state;

pub use id::*;
pub use state::{State, StateParseError};
