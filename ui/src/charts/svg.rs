use dioxus::prelude::*;

use crate::core::data::Series;

use super::geometry::{
    area_path, bar_rects, doughnut_segments, line_points, polyline as polyline_attr, Point,
    Viewport,
};

const CARTESIAN: Viewport = Viewport::new(320.0, 180.0, 16.0);
const RING_SIZE: f64 = 180.0;

fn color_at(series: &Series, index: usize) -> &'static str {
    series
        .colors
        .get(index)
        .or_else(|| series.colors.first())
        .copied()
        .unwrap_or("currentColor")
}

/// Hover title for one data point. Missing labels fall back to the bare value.
fn point_title(series: &Series, index: usize) -> String {
    match (series.labels.get(index), series.values.get(index)) {
        (Some(label), Some(value)) => format!("{label}: {value}"),
        (None, Some(value)) => value.to_string(),
        (Some(label), None) => label.to_string(),
        (None, None) => String::new(),
    }
}

#[component]
pub fn BarChart(series: Series) -> Element {
    let rects = bar_rects(series.values, CARTESIAN);
    let fill = color_at(&series, 0);

    rsx! {
        figure { class: "chart chart--bar",
            svg {
                class: "chart__canvas",
                view_box: "{CARTESIAN.view_box()}",
                role: "img",
                "aria-label": "{series.label}",
                line {
                    class: "chart__axis",
                    x1: "{CARTESIAN.padding}",
                    y1: "{CARTESIAN.baseline()}",
                    x2: "{CARTESIAN.width - CARTESIAN.padding}",
                    y2: "{CARTESIAN.baseline()}",
                }
                for (i, bar) in rects.iter().enumerate() {
                    rect {
                        key: "{i}",
                        x: "{bar.x:.2}",
                        y: "{bar.y:.2}",
                        width: "{bar.width:.2}",
                        height: "{bar.height:.2}",
                        rx: "3",
                        fill: "{fill}",
                        title { "{point_title(&series, i)}" }
                    }
                }
            }
            AxisLabels { labels: series.labels }
        }
    }
}

#[component]
pub fn LineChart(
    series: Series,
    #[props(default)] fill: bool,
    #[props(default)] begin_at_zero: bool,
) -> Element {
    let points = line_points(series.values, CARTESIAN, begin_at_zero);
    let stroke = color_at(&series, 0);
    let area_fill = color_at(&series, 1);
    let stroke_points = polyline_attr(&points);
    let area = fill.then(|| area_path(&points, CARTESIAN.baseline()));
    let figure_class = if fill {
        "chart chart--area"
    } else {
        "chart chart--line"
    };

    rsx! {
        figure { class: figure_class,
            svg {
                class: "chart__canvas",
                view_box: "{CARTESIAN.view_box()}",
                role: "img",
                "aria-label": "{series.label}",
                line {
                    class: "chart__axis",
                    x1: "{CARTESIAN.padding}",
                    y1: "{CARTESIAN.baseline()}",
                    x2: "{CARTESIAN.width - CARTESIAN.padding}",
                    y2: "{CARTESIAN.baseline()}",
                }
                if let Some(d) = area {
                    path { class: "chart__area", d: "{d}", fill: "{area_fill}" }
                }
                polyline {
                    class: "chart__line",
                    points: "{stroke_points}",
                    fill: "none",
                    stroke: "{stroke}",
                    stroke_width: "2",
                    stroke_linejoin: "round",
                }
                for (i, point) in points.iter().enumerate() {
                    circle {
                        key: "{i}",
                        class: "chart__point",
                        cx: "{point.x:.2}",
                        cy: "{point.y:.2}",
                        r: "3",
                        fill: "{stroke}",
                        title { "{point_title(&series, i)}" }
                    }
                }
            }
            AxisLabels { labels: series.labels }
        }
    }
}

#[component]
pub fn DoughnutChart(series: Series) -> Element {
    let center = Point {
        x: RING_SIZE / 2.0,
        y: RING_SIZE / 2.0,
    };
    let segments = doughnut_segments(series.values, center, RING_SIZE * 0.45, RING_SIZE * 0.27);

    rsx! {
        figure { class: "chart chart--doughnut",
            svg {
                class: "chart__canvas chart__canvas--square",
                view_box: "0 0 {RING_SIZE} {RING_SIZE}",
                role: "img",
                "aria-label": "{series.label}",
                for (i, segment) in segments.iter().enumerate() {
                    path {
                        key: "{i}",
                        class: "chart__slice",
                        d: "{segment.path}",
                        fill: "{color_at(&series, i)}",
                        title { "{point_title(&series, i)}" }
                    }
                }
            }
            figcaption { class: "chart__legend",
                for (i, label) in series.labels.iter().enumerate() {
                    span { key: "{label}", class: "chart__legend-item",
                        span {
                            class: "chart__legend-swatch",
                            style: "background: {color_at(&series, i)}",
                        }
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
fn AxisLabels(labels: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "chart__labels",
            for label in labels.iter() {
                span { key: "{label}", class: "chart__label", "{label}" }
            }
        }
    }
}
