//! Built-in material catalog.
//!
//! Catalogs are plain functions returning freshly validated curves; nothing is
//! built or written at load time.

pub mod cob;

pub use cob::cob_materials;

use crate::models::SnCurve;

/// Material id: the part of the name before the first `_` (e.g. `AT-04`).
pub fn material_id(name: &str) -> &str {
    name.split('_').next().unwrap_or(name).trim()
}

/// Find a curve by exact name, else by material id (case-insensitive).
pub fn select<'a>(curves: &'a [SnCurve], query: &str) -> Option<&'a SnCurve> {
    let query = query.trim();
    curves
        .iter()
        .find(|c| c.name() == query)
        .or_else(|| curves.iter().find(|c| material_id(c.name()).eq_ignore_ascii_case(query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_id_is_name_prefix() {
        assert_eq!(material_id("AT-02_18CrNiMo7-6(COB)_LN_190-3_lim_pit_perm"), "AT-02");
        assert_eq!(material_id("plain"), "plain");
    }

    #[test]
    fn select_by_name_or_id() {
        let curves = cob_materials().unwrap();
        let by_id = select(&curves, "at-09").unwrap();
        assert_eq!(by_id.name(), "AT-09_42CrMo4(COB)_LN_194-1");

        let by_name = select(&curves, "AT-14_42CrMo4(COB)_LN 191-1_root_49_HRC_root_flank_56HRC").unwrap();
        assert_eq!(material_id(by_name.name()), "AT-14");

        assert!(select(&curves, "AT-99").is_none());
    }
}
