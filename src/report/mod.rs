//! Reporting utilities: curve summaries, stress tables and the catalog listing.

pub mod format;

pub use format::*;
