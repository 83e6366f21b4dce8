//! Fixed-width text blocks printed by the `sn` commands.
//!
//! Cycle counts use the same `1e+03` notation as the interpolation files.

use crate::catalog::material_id;
use crate::domain::{CurveAnchors, CurveSlopes, StressTable};
use crate::error::CurveError;
use crate::io::dat::format_cycles;
use crate::models::SnCurve;

/// Parameters, regime flags and slopes of one curve.
pub fn format_curve_summary(curve: &SnCurve) -> Result<String, CurveError> {
    let slopes = curve.slopes()?;
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", curve.name()));
    out.push_str(&format!("Limited pitting permitted: {}\n", yes_no(curve.limited_pitting())));
    out.push_str(&format!("Reduced life factor:       {}\n", yes_no(curve.reduced_life_factor())));
    out.push('\n');

    out.push_str(&format!(
        "{:<6} {:>10} {:>10} {:>12} {:>12}\n",
        "side", "N_stat", "N_d", "sig_stat", "sig_d"
    ));
    out.push_str(&format!("{:-<6} {:-<10} {:-<10} {:-<12} {:-<12}\n", "", "", "", "", ""));
    out.push_str(&anchor_row("root", curve.root()));
    out.push_str(&anchor_row("flank", curve.flank()));
    out.push('\n');

    out.push_str("Slopes:\n");
    out.push_str(&format_slopes(&slopes));
    Ok(out)
}

/// Permissible stresses per cycle count, one block per curve.
pub fn format_stress_table(tables: &[StressTable]) -> String {
    let mut out = String::new();
    for (idx, table) in tables.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", table.name));
        out.push_str(&format!("{:>10} {:>12} {:>12}\n", "cycles", "root", "flank"));
        out.push_str(&format!("{:-<10} {:-<12} {:-<12}\n", "", "", ""));
        for row in &table.rows {
            out.push_str(&format!(
                "{:>10} {:>12.1} {:>12.1}\n",
                format_cycles(row.cycles),
                row.root,
                row.flank
            ));
        }
    }
    out
}

/// One line per curve: id, flags, anchors.
pub fn format_catalog(curves: &[SnCurve]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<7} {:>3} {:>3} {:>8} {:>8} {:>8} {:>8}  {}\n",
        "id", "LP", "RL", "sig_FP", "sig_FE", "sig_HP", "sig_H", "name"
    ));
    out.push_str(&format!(
        "{:-<7} {:-<3} {:-<3} {:-<8} {:-<8} {:-<8} {:-<8}  {:-<4}\n",
        "", "", "", "", "", "", "", ""
    ));

    for curve in curves {
        out.push_str(&format!(
            "{:<7} {:>3} {:>3} {:>8.0} {:>8.0} {:>8.0} {:>8.0}  {}\n",
            truncate(material_id(curve.name()), 7),
            flag(curve.limited_pitting()),
            flag(curve.reduced_life_factor()),
            curve.root().static_stress,
            curve.root().endurance_stress,
            curve.flank().static_stress,
            curve.flank().endurance_stress,
            curve.name(),
        ));
    }
    out
}

fn anchor_row(side: &str, a: &CurveAnchors) -> String {
    format!(
        "{:<6} {:>10} {:>10} {:>12.1} {:>12.1}\n",
        side,
        format_cycles(a.static_cycles),
        format_cycles(a.endurance_cycles),
        a.static_stress,
        a.endurance_stress
    )
}

fn format_slopes(s: &CurveSlopes) -> String {
    let mut out = String::new();
    out.push_str(&format!("- p_F              : {:.4}\n", s.root));
    out.push_str(&format!("- p_H              : {:.4}\n", s.flank));
    out.push_str(&format!("- p_H_lim_pit      : {}\n", fmt_opt(s.flank_limited_pitting)));
    out.push_str(&format!("- p_F_red_life_fac : {}\n", fmt_opt(s.root_reduced_life)));
    out.push_str(&format!("- p_H_red_life_fac : {}\n", fmt_opt(s.flank_reduced_life)));
    out
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "-".to_string(),
    }
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

fn flag(v: bool) -> &'static str {
    if v { "x" } else { "" }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{cob_materials, select};
    use crate::domain::TableSample;

    #[test]
    fn summary_lists_anchors_and_slopes() {
        let curves = cob_materials().unwrap();
        let txt = format_curve_summary(select(&curves, "AT-02").unwrap()).unwrap();
        assert!(txt.starts_with("=== AT-02_"));
        assert!(txt.contains("Limited pitting permitted: yes\n"));
        assert!(txt.contains("root        1e+03      3e+06       2520.0       1050.0\n"));
        assert!(txt.contains("flank       6e+05      1e+09       2400.0       1550.0\n"));
        assert!(txt.contains("- p_F_red_life_fac : -\n"));
        assert!(!txt.contains("- p_H_lim_pit      : -\n"));
    }

    #[test]
    fn slopes_of_enabled_regimes_are_printed() {
        let curve = SnCurve::new(crate::domain::SnCurveParams {
            reduced_life_factor: true,
            ..cob_materials().unwrap()[1].params().clone()
        })
        .unwrap();
        let slopes = curve.slopes().unwrap();
        let txt = format_curve_summary(&curve).unwrap();
        assert!(txt.contains("Reduced life factor:       yes\n"));
        assert!(txt.contains(&format!("- p_F_red_life_fac : {:.4}\n", slopes.root_reduced_life.unwrap())));
        assert!(txt.contains(&format!("- p_H_lim_pit      : {:.4}\n", slopes.flank_limited_pitting.unwrap())));
        assert!(!txt.contains(" : -\n"));
    }

    #[test]
    fn stress_table_rows() {
        let tables = vec![StressTable {
            name: "AT-01".to_string(),
            rows: vec![TableSample { cycles: 500.0, root: 2520.0, flank: 2400.0 }],
        }];
        let txt = format_stress_table(&tables);
        let expected = concat!(
            "AT-01\n",
            "    cycles         root        flank\n",
            "---------- ------------ ------------\n",
            "     5e+02       2520.0       2400.0\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn catalog_marks_limited_pitting() {
        let curves = cob_materials().unwrap();
        let txt = format_catalog(&curves[..2]);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("AT-01          "));
        assert!(lines[3].starts_with("AT-02     x    "));
    }
}
