//! Mathematical utilities: log-log slopes and power-law evaluation.

pub mod loglog;

pub use loglog::*;
