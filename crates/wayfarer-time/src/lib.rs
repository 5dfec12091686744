//! Wayfarer Time - Live per-country clocks
//!
//! This crate implements the clock side of Wayfarer:
//! - Country → zone resolution with a UTC fallback
//! - Time/date snapshots formatted in a zone, with an `N/A` sentinel
//! - The refresher: an explicit subscription registry and one cancellable
//!   once-per-second update cycle

pub mod zone;
pub mod clock;
pub mod refresher;

pub use zone::*;
pub use clock::*;
pub use refresher::*;
