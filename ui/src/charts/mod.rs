//! Inline SVG charts for the dashboard. Geometry is computed here in plain
//! functions; the components only turn it into markup.

mod geometry;
pub use geometry::{
    area_path, bar_rects, doughnut_segments, line_points, polyline, Point, Rect, RingSegment,
    Viewport,
};

mod svg;
pub use svg::{BarChart, DoughnutChart, LineChart};
