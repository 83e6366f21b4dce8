//! SVG chart files rendered with Plotters.
//!
//! Both axes are logarithmic; each series is one colored line with a legend entry.

use std::path::Path;

use plotters::prelude::*;

use crate::error::AppError;
use crate::io::dat::format_cycles;
use crate::plot::PlotSpec;

/// Write `plot` as an SVG file of `size` pixels.
pub fn write_svg_plot(path: &Path, plot: &PlotSpec, size: (u32, u32)) -> Result<(), AppError> {
    render(path, plot, size)
        .map_err(|e| AppError::new(2, format!("Failed to render SVG plot '{}': {e}", path.display())))?;
    tracing::info!(series = plot.series.len(), path = %path.display(), "wrote SVG plot");
    Ok(())
}

fn render(path: &Path, plot: &PlotSpec, size: (u32, u32)) -> Result<(), Box<dyn std::error::Error>> {
    let (x0, x1) = plot.cycles;
    let (y0, y1) = plot.stress;
    if !(x0 > 0.0 && x1 > x0 && y0 > 0.0 && y1 > y0) {
        return Err(format!("invalid plot ranges: cycles=[{x0}, {x1}], stress=[{y0}, {y1}]").into());
    }

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&plot.title, ("sans-serif", 18))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x0..x1).log_scale(), (y0..y1).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Number of load cycles")
        .y_desc(&plot.y_label)
        .x_label_formatter(&|v| format_cycles(*v))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    for (idx, series) in plot.series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(series.points.iter().copied(), color.stroke_width(2)))?
            .label(series.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::cob_materials;
    use crate::domain::CurveSide;
    use crate::plot::curve_plot;

    #[test]
    fn writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flank.svg");
        let curves = cob_materials().unwrap();
        let plot = curve_plot(&curves[..3], &[CurveSide::Flank]);

        write_svg_plot(&path, &plot, (800, 600)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("AT-03"));
    }

    #[test]
    fn rejects_empty_ranges() {
        let dir = tempfile::tempdir().unwrap();
        let mut plot = curve_plot(&cob_materials().unwrap()[..1], &CurveSide::ALL);
        plot.stress = (0.0, 0.0);
        let err = write_svg_plot(&dir.path().join("bad.svg"), &plot, (400, 300)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
