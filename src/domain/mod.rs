//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - curve inputs (`CurveAnchors`, `SnCurveParams`) and regime constants
//! - derived values (`CurveSlopes`, `PermissibleStress`, `TableSample`)
//! - the flat export record (`CurveRecord`) and run settings (`RunConfig`)

pub mod types;

pub use types::*;
