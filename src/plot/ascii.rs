//! ASCII plotting of sweeps for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual checks of where the fallback tiers kick in
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - `fun` along the swept axis: `-` line
//! - each evaluated point: tier marker `P` (primary), `S` (secondary), `C` (closed-form)
//!
//! Non-finite values are left out.

use crate::domain::{Evaluation, SweepAxis};

/// Render a sweep as a `width` x `height` character plot with a one-line header.
pub fn render_sweep_plot(evals: &[Evaluation], axis: SweepAxis, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let points: Vec<(f64, f64, char)> = evals
        .iter()
        .map(|e| (axis.pick(e), e.value, e.tier.marker()))
        .filter(|(a, v, _)| a.is_finite() && v.is_finite())
        .collect();

    let (a_min, a_max) = span(points.iter().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = span(points.iter().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Line first so markers overlay it.
    let cells: Vec<(usize, usize)> = points
        .iter()
        .map(|&(a, v, _)| (map_x(a, a_min, a_max, width), map_y(v, y_min, y_max, height)))
        .collect();
    for pair in cells.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line(&mut grid, x0, y0, x1, y1, '-');
    }
    for (&(x, y), &(_, _, marker)) in cells.iter().zip(points.iter()) {
        grid[y][x] = marker;
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {}=[{a_min:.3}, {a_max:.3}] | fun=[{y_min:.3}, {y_max:.3}] | P=primary S=secondary C=closed-form\n",
        axis.display_name()
    ));
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    out
}

fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !(min.is_finite() && max.is_finite()) {
        return None;
    }
    if max > min {
        Some((min, max))
    } else {
        Some((min - 0.5, max + 0.5))
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
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
    use crate::domain::Tier;

    fn at(x: f64, value: f64, tier: Tier) -> Evaluation {
        Evaluation { x, y: 0.0, z: 0.0, value, tier }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let evals = vec![
            at(0.0, 0.0, Tier::Primary),
            at(1.0, 0.0, Tier::Primary),
            at(2.0, 10.0, Tier::Secondary),
            at(3.0, 10.0, Tier::ClosedForm),
        ];

        let txt = render_sweep_plot(&evals, SweepAxis::X, 10, 5);
        let expected = concat!(
            "Plot: x=[0.000, 3.000] | fun=[-0.500, 10.500] | P=primary S=secondary C=closed-form\n",
            "      S--C\n",
            "     -\n",
            "     -\n",
            "    -\n",
            "P--P\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let evals = vec![
            at(0.0, 1.0, Tier::Primary),
            at(1.0, f64::NAN, Tier::Secondary),
            at(2.0, 2.0, Tier::ClosedForm),
        ];
        let txt = render_sweep_plot(&evals, SweepAxis::X, 10, 5);
        let body: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(body, vec!["        -C", "      --", "    --", "  --", "P-"]);
    }

    #[test]
    fn plots_against_the_swept_axis() {
        let evals = vec![
            Evaluation { x: 9.0, y: -1.0, z: 0.0, value: 0.0, tier: Tier::Primary },
            Evaluation { x: 9.0, y: 1.0, z: 0.0, value: 1.0, tier: Tier::Primary },
        ];
        let txt = render_sweep_plot(&evals, SweepAxis::Y, 10, 5);
        assert!(txt.starts_with("Plot: y=[-1.000, 1.000]"));
    }
}
