//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid, log10 on both axes), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each series gets its own glyph; where series overlap, the earlier one wins.

use crate::io::dat::format_cycles;
use crate::plot::PlotSpec;

const GLYPHS: [char; 10] = ['*', 'o', '+', 'x', '#', '@', '%', '&', '=', '~'];

/// Render `plot` into a `width` × `height` character grid with header and legend.
pub fn render_ascii_plot(plot: &PlotSpec, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let x_range = (plot.cycles.0.log10(), plot.cycles.1.log10());
    let y_range = (plot.stress.0.log10(), plot.stress.1.log10());

    let mut grid = vec![vec![' '; width]; height];
    for (idx, series) in plot.series.iter().enumerate() {
        let ch = glyph(idx);
        let cells: Vec<(usize, usize)> = series
            .points
            .iter()
            .filter(|&&(x, y)| x > 0.0 && y > 0.0)
            .map(|&(x, y)| (map_x(x.log10(), x_range, width), map_y(y.log10(), y_range, height)))
            .collect();
        draw_polyline(&mut grid, &cells, ch);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: cycles=[{}, {}] | stress=[{:.0}, {:.0}] MPa\n",
        format_cycles(plot.cycles.0),
        format_cycles(plot.cycles.1),
        plot.stress.0,
        plot.stress.1
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    for (idx, series) in plot.series.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", glyph(idx), series.label));
    }

    out
}

fn glyph(idx: usize) -> char {
    GLYPHS[idx % GLYPHS.len()]
}

fn map_x(v: f64, (lo, hi): (f64, f64), width: usize) -> usize {
    let u = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, (lo, hi): (f64, f64), height: usize) -> usize {
    let u = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(grid: &mut [Vec<char>], cells: &[(usize, usize)], ch: char) {
    let mut prev: Option<(usize, usize)> = None;
    for &(x, y) in cells {
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, x, y, ch),
            None => {
                if grid[y][x] == ' ' {
                    grid[y][x] = ch;
                }
            }
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::PlotSeries;

    #[test]
    fn plot_golden_snapshot_small() {
        let plot = PlotSpec {
            title: "test".to_string(),
            y_label: "stress".to_string(),
            series: vec![PlotSeries {
                label: "root".to_string(),
                points: vec![(10.0, 1000.0), (1000.0, 100.0)],
            }],
            cycles: (10.0, 1000.0),
            stress: (100.0, 1000.0),
        };

        let txt = render_ascii_plot(&plot, 10, 5);
        let expected = concat!(
            "Plot: cycles=[1e+01, 1e+03] | stress=[100, 1000] MPa\n",
            "**        \n",
            "  **      \n",
            "    **    \n",
            "      **  \n",
            "        **\n",
            "  * root\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_segments_stay_on_one_row() {
        let plot = PlotSpec {
            title: "flat".to_string(),
            y_label: "stress".to_string(),
            series: vec![
                PlotSeries { label: "a".to_string(), points: vec![(1.0, 500.0), (1e4, 500.0)] },
                PlotSeries { label: "b".to_string(), points: vec![(1.0, 200.0), (1e4, 200.0)] },
            ],
            cycles: (1.0, 1e4),
            stress: (100.0, 1000.0),
        };

        let txt = render_ascii_plot(&plot, 20, 8);
        let rows: Vec<&str> = txt.lines().skip(1).take(8).collect();
        assert_eq!(rows.iter().filter(|r| r.chars().all(|c| c == '*')).count(), 1);
        assert_eq!(rows.iter().filter(|r| r.chars().all(|c| c == 'o')).count(), 1);
        assert!(txt.ends_with("  * a\n  o b\n"));
    }
}
