//! S-N curve plots.
//!
//! Curves are drawn on log-log axes from their knee points, so every segment is
//! a straight line and the polyline matches the evaluated curve exactly.
//!
//! - `ascii`: fixed-size character grid for the terminal
//! - `svg`: chart file rendered with Plotters

pub mod ascii;
pub mod svg;

pub use ascii::render_ascii_plot;
pub use svg::write_svg_plot;

use crate::catalog::material_id;
use crate::domain::{CurveSide, REDUCED_LIFE_CYCLES};
use crate::models::SnCurve;

/// One polyline of a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    /// `(cycles, stress)` vertices, ascending in cycles.
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub y_label: String,
    pub series: Vec<PlotSeries>,
    /// Cycle range (x axis).
    pub cycles: (f64, f64),
    /// Stress range (y axis).
    pub stress: (f64, f64),
}

/// Build a plot of `sides` for every curve in `curves`.
///
/// A single curve is titled by its name and its series by side; several curves
/// are labelled by material id.
pub fn curve_plot(curves: &[SnCurve], sides: &[CurveSide]) -> PlotSpec {
    let start = plot_start_cycles(curves, sides);
    let mut series = Vec::with_capacity(curves.len() * sides.len());

    for curve in curves {
        for &side in sides {
            let label = match (curves.len(), sides.len()) {
                (1, _) => side.display_name().to_string(),
                (_, 1) => material_id(curve.name()).to_string(),
                _ => format!("{} {}", material_id(curve.name()), side.display_name()),
            };
            series.push(PlotSeries {
                label,
                points: curve.knee_points(side, start),
            });
        }
    }

    let title = match (curves, sides) {
        ([curve], _) => format!("S-N curves of {}", curve.name()),
        (_, [side]) => format!("S-N curves {}", side.display_name()),
        _ => "S-N curves".to_string(),
    };
    let y_label = match sides {
        [side] => side.stress_label().to_string(),
        _ => "Permissible stress [MPa]".to_string(),
    };

    let stress = stress_bounds(&series);
    PlotSpec {
        title,
        y_label,
        series,
        cycles: (start, REDUCED_LIFE_CYCLES),
        stress,
    }
}

/// Plots start one decade before the earliest static limit.
fn plot_start_cycles(curves: &[SnCurve], sides: &[CurveSide]) -> f64 {
    let earliest = curves
        .iter()
        .flat_map(|c| sides.iter().map(move |&s| c.anchors(s).static_cycles))
        .fold(f64::INFINITY, f64::min);
    if earliest.is_finite() { earliest / 10.0 } else { 1.0 }
}

/// Stress axis: all values rounded out to the next 100 MPa, plus 100 MPa margin.
pub fn stress_bounds(series: &[PlotSeries]) -> (f64, f64) {
    let (min, max) = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(_, y)| y))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if !(min.is_finite() && max.is_finite()) {
        return (1.0, 1000.0);
    }

    let lower = (min / 100.0).floor() * 100.0 - 100.0;
    let upper = (max / 100.0).ceil() * 100.0 + 100.0;
    // Log axes need a positive lower bound.
    let lower = if lower > 0.0 { lower } else { min / 2.0 };
    (lower, upper)
}
