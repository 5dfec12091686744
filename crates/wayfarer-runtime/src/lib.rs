//! Wayfarer Runtime - Search session orchestration
//!
//! One search runs through these stages:
//! 1. Validate and normalize the query
//! 2. Load the catalogue from its source
//! 3. Filter with the keyword matcher
//! 4. Pair each survivor with a clock snapshot and render it
//! 5. Subscribe the rendered clocks and restart the refresh cycle

pub mod config;
pub mod telemetry;
pub mod source;
pub mod render;
pub mod notify;
pub mod session;

pub use config::*;
pub use telemetry::*;
pub use source::*;
pub use render::*;
pub use notify::*;
pub use session::*;
