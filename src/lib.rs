//! `sn-curves` library crate.
//!
//! ISO 6336 S-N (Woehler) curves for gear tooth root and flank: permissible
//! stress at any load-cycle count, interpolation tables, record export and
//! plots. The `sn` binary is a thin wrapper around [`app::run`].
//!
//! ```no_run
//! use sn_curves::catalog::{cob_materials, select};
//!
//! let curves = cob_materials()?;
//! let curve = select(&curves, "AT-02").expect("catalog entry");
//! let stress = curve.permissible_stress(1e8)?;
//! println!("root {:.1} MPa, flank {:.1} MPa", stress.root, stress.flank);
//! # Ok::<(), sn_curves::error::CurveError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
