//! Wayfarer Core - Fundamental types
//!
//! This crate defines the types shared by every Wayfarer crate:
//! - Destination records and the catalogue document that carries them
//! - Error and result types

pub mod record;
pub mod error;

pub use record::*;
pub use error::*;
