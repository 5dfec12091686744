//! Wayfarer Search - Keyword matching over destination records
//!
//! This crate implements the search side of Wayfarer:
//! - Canonical synonym groups with a generated reverse index
//! - The keyword matcher (direct expansion, then canonical-key fallback)
//! - Query normalization and the stable filter pipeline

pub mod synonym;
pub mod matcher;
pub mod query;
pub mod filter;

pub use synonym::*;
pub use matcher::*;
pub use query::*;
pub use filter::*;
