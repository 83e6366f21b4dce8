//! Input/output helpers.
//!
//! - curve records to CSV (`export`)
//! - curve JSON read/write and curve-file loading (`curve`)
//! - `.dat` interpolation files (`dat`)

pub mod curve;
pub mod dat;
pub mod export;

pub use curve::*;
pub use dat::*;
pub use export::*;
