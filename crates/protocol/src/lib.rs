//! Shared protocol types for cosmic-toggle
//!
//! Defines the JSON bodies and routes used between the browser UI and the
//! command toggle API.

pub mod messages;
pub mod routes;

pub use messages::*;
pub use routes::*;
