//! S-N curve model and the data derived from it.
//!
//! - `sn_curve`: the validated curve (slopes, permissible stress, records)
//! - `table`: the fixed cycle grid used for interpolation files

pub mod sn_curve;
pub mod table;

pub use sn_curve::*;
pub use table::*;
