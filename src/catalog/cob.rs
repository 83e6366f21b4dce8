//! Case-hardened and through-hardened gear steels (`AT-01` .. `AT-15`).
//!
//! Root endurance stresses include the stress correction factor of the
//! reference test gear (`sig_FE = sig_F_lim * Y_ST`). The limited-pitting
//! variants use the ISO 6336-2 flank knees at 6e5 and 1e9 cycles.

use crate::domain::{CurveAnchors, SnCurveParams};
use crate::error::CurveError;
use crate::models::SnCurve;

/// `(name, [N_F_stat, N_F_d, sig_FP_stat, sig_FE], [N_H_stat, N_H_d, sig_HP_stat, sig_H_lim], lim_pit_perm)`
type Entry = (&'static str, [f64; 4], [f64; 4], bool);

const COB_MATERIALS: [Entry; 15] = [
    ("AT-01_18CrNiMo7-6(COB)_LN_190-3", [1e3, 3e6, 2520.0, 1050.0], [1e5, 5e7, 2400.0, 1550.0], false),
    ("AT-02_18CrNiMo7-6(COB)_LN_190-3_lim_pit_perm", [1e3, 3e6, 2520.0, 1050.0], [6e5, 1e9, 2400.0, 1550.0], true),
    ("AT-03_18CrNiMo7-6(COB)_LN_190-3_shot_peened_LN_523-1", [1e3, 3e6, 2520.0, 1400.0], [1e5, 5e7, 2400.0, 1800.0], false),
    ("AT-04_18CrNiMo7-6(COB)_LN_190-3_lim_pit_perm_shot_peened_LN_523-1", [1e3, 3e6, 2520.0, 1400.0], [6e5, 1e9, 2400.0, 1800.0], true),
    ("AT-05_20MnCr5(COB)_LN_190-2", [1e3, 3e6, 2520.0, 1050.0], [1e5, 5e7, 2400.0, 1550.0], false),
    ("AT-06_20MnCr5(COB)_LN_190-2_lim_pit_perm", [1e3, 3e6, 2520.0, 1050.0], [6e5, 1e9, 2400.0, 1550.0], true),
    ("AT-07_20MnCr5(COB)_LN_190-2_shot_peened_LN_523-1", [1e3, 3e6, 2520.0, 1400.0], [1e5, 5e7, 2400.0, 1800.0], false),
    ("AT-08_20MnCr5(COB)_LN_190-2_lim_pit_perm_shot_peened_LN_523-1", [1e3, 3e6, 2520.0, 1400.0], [6e5, 1e9, 2400.0, 1800.0], true),
    ("AT-09_42CrMo4(COB)_LN_194-1", [1e3, 3e6, 1440.0, 900.0], [1e5, 2e6, 1430.0, 1100.0], false),
    ("AT-10_18CrNiMo7-6(COB)_LN_190-3_shot_peened_LN_523-2", [1e3, 3e6, 2520.0, 1250.0], [1e5, 5e7, 2400.0, 1700.0], false),
    ("AT-11_18CrNiMo7-6(COB)_LN_190-3_lim_pit_perm_shot_peened_LN_523-2", [1e3, 3e6, 2520.0, 1250.0], [6e5, 1e9, 2400.0, 1700.0], true),
    ("AT-12_20MnCr5(COB)_LN_190-2_shot_peened_LN_523-2", [1e3, 3e6, 2520.0, 1250.0], [1e5, 5e7, 2400.0, 1700.0], false),
    ("AT-13_20MnCr5(COB)_LN_190-2 _lim_pit_perm_shot_peened_LN_523-2", [1e3, 3e6, 2520.0, 1250.0], [6e5, 1e9, 2400.0, 1700.0], true),
    ("AT-14_42CrMo4(COB)_LN 191-1_root_49_HRC_root_flank_56HRC", [1e3, 3e6, 1800.0, 720.0], [1e5, 5e7, 1952.0, 1220.0], false),
    ("AT-15_42CrMo4(COB)_LN 191-1_root_49_HRC_root_flank_56HRC_lim_pit_perm", [1e3, 3e6, 1800.0, 720.0], [6e5, 1e9, 1952.0, 1220.0], true),
];

/// Build the COB material list.
pub fn cob_materials() -> Result<Vec<SnCurve>, CurveError> {
    COB_MATERIALS
        .iter()
        .map(|&(name, root, flank, limited_pitting)| {
            SnCurve::new(SnCurveParams {
                name: name.to_string(),
                root: CurveAnchors::new(root[0], root[1], root[2], root[3]),
                flank: CurveAnchors::new(flank[0], flank[1], flank[2], flank[3]),
                limited_pitting,
                reduced_life_factor: false,
            })
        })
        .collect()
}
