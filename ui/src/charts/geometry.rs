use std::f64::consts::{FRAC_PI_2, TAU};

/// Drawing area in SVG user units. `padding` is kept clear on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.padding + self.inner_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Vertical bars scaled so the largest value fills the inner height.
/// Negative values are drawn as empty bars.
pub fn bar_rects(values: &[f64], view: Viewport) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = positive_max(values);
    let slot = view.inner_width() / values.len() as f64;
    let bar_width = slot * 0.7;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let height = value.max(0.0) / max * view.inner_height();
            Rect {
                x: view.padding + i as f64 * slot + (slot - bar_width) / 2.0,
                y: view.baseline() - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}

/// Evenly spaced points; the y range spans the data (or starts at zero when
/// `begin_at_zero` is set).
pub fn line_points(values: &[f64], view: Viewport, begin_at_zero: bool) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = if begin_at_zero {
        0.0_f64.min(values.iter().copied().fold(f64::INFINITY, f64::min))
    } else {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    };
    let span = if max - min > f64::EPSILON { max - min } else { 1.0 };
    let step = if values.len() > 1 {
        view.inner_width() / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() > 1 {
                view.padding + i as f64 * step
            } else {
                view.padding + view.inner_width() / 2.0
            };
            let y = view.baseline() - (value - min) / span * view.inner_height();
            Point { x, y }
        })
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
pub fn polyline(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path filling the region between the line and `baseline`.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = format!("M {:.2},{:.2}", first.x, baseline);
    for p in points {
        path.push_str(&format!(" L {:.2},{:.2}", p.x, p.y));
    }
    path.push_str(&format!(" L {:.2},{:.2} Z", last.x, baseline));
    path
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingSegment {
    pub fraction: f64,
    pub path: String,
}

/// Ring slices starting at twelve o'clock, clockwise. Non-positive values
/// get a zero-width slice so indices still line up with the input.
pub fn doughnut_segments(
    values: &[f64],
    center: Point,
    outer: f64,
    inner: f64,
) -> Vec<RingSegment> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return values
            .iter()
            .map(|_| RingSegment {
                fraction: 0.0,
                path: String::new(),
            })
            .collect();
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let fraction = value.max(0.0) / total;
            let sweep = fraction * TAU;
            let path = if fraction > 0.0 {
                ring_path(center, outer, inner, start, start + sweep)
            } else {
                String::new()
            };
            start += sweep;
            RingSegment { fraction, path }
        })
        .collect()
}

fn ring_path(center: Point, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full circle cannot be expressed as a single arc.
    let end = end.min(start + TAU - 1e-4);
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let polar = |radius: f64, angle: f64| Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    };

    let outer_start = polar(outer, start);
    let outer_end = polar(outer, end);
    let inner_end = polar(inner, end);
    let inner_start = polar(inner, start);

    format!(
        "M {:.2},{:.2} A {outer:.2},{outer:.2} 0 {large} 1 {:.2},{:.2} L {:.2},{:.2} A {inner:.2},{inner:.2} 0 {large} 0 {:.2},{:.2} Z",
        outer_start.x,
        outer_start.y,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        inner_start.x,
        inner_start.y,
    )
}

fn positive_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}
