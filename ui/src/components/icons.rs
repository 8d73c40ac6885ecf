//! Outline icon set (24×24, stroked with `currentColor`).

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    ArrowRight,
    Bell,
    Briefcase,
    Building,
    ChevronDown,
    ChevronUp,
    CircleHelp,
    Contact,
    Globe,
    GraduationCap,
    Home,
    Lock,
    Mail,
    MapPin,
    Menu,
    Moon,
    Settings,
    Sun,
    User,
    Zap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
}

use Shape::{Circle, Path, Rect};

impl IconKind {
    fn shapes(self) -> &'static [Shape] {
        match self {
            IconKind::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            IconKind::Bell => &[
                Path("M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"),
                Path("M10.3 21a1.94 1.94 0 0 0 3.4 0"),
            ],
            IconKind::Briefcase => &[
                Path("M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
                Rect { x: 2.0, y: 6.0, w: 20.0, h: 14.0, rx: 2.0 },
            ],
            IconKind::Building => &[
                Rect { x: 4.0, y: 2.0, w: 16.0, h: 20.0, rx: 2.0 },
                Path("M9 22v-4h6v4"),
                Path("M8 6h.01M12 6h.01M16 6h.01M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M16 14h.01"),
            ],
            IconKind::ChevronDown => &[Path("m6 9 6 6 6-6")],
            IconKind::ChevronUp => &[Path("m18 15-6-6-6 6")],
            IconKind::CircleHelp => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Path("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"),
                Path("M12 17h.01"),
            ],
            IconKind::Contact => &[
                Path("M16 2v2M8 2v2"),
                Path("M7 22v-2a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v2"),
                Circle { cx: 12.0, cy: 11.0, r: 3.0 },
                Rect { x: 3.0, y: 4.0, w: 18.0, h: 18.0, rx: 2.0 },
            ],
            IconKind::Globe => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            IconKind::GraduationCap => &[
                Path("M22 10v6M2 10l10-5 10 5-10 5z"),
                Path("M6 12v5c3 3 9 3 12 0v-5"),
            ],
            IconKind::Home => &[
                Path("m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
                Path("M9 22V12h6v10"),
            ],
            IconKind::Lock => &[
                Rect { x: 3.0, y: 11.0, w: 18.0, h: 11.0, rx: 2.0 },
                Path("M7 11V7a5 5 0 0 1 10 0v4"),
            ],
            IconKind::Mail => &[
                Rect { x: 2.0, y: 4.0, w: 20.0, h: 16.0, rx: 2.0 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            IconKind::MapPin => &[
                Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
                Circle { cx: 12.0, cy: 10.0, r: 3.0 },
            ],
            IconKind::Menu => &[Path("M4 6h16M4 12h16M4 18h16")],
            IconKind::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
            IconKind::Settings => &[
                Path("M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"),
                Circle { cx: 12.0, cy: 12.0, r: 3.0 },
            ],
            IconKind::Sun => &[
                Circle { cx: 12.0, cy: 12.0, r: 4.0 },
                Path("M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"),
            ],
            IconKind::User => &[
                Path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
                Circle { cx: 12.0, cy: 7.0, r: 4.0 },
            ],
            IconKind::Zap => &[Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for (i, shape) in kind.shapes().iter().enumerate() {
                {render_shape(i, *shape)}
            }
        }
    }
}

fn render_shape(index: usize, shape: Shape) -> Element {
    match shape {
        Path(d) => rsx! { path { key: "{index}", d: "{d}" } },
        Circle { cx, cy, r } => rsx! { circle { key: "{index}", cx: "{cx}", cy: "{cy}", r: "{r}" } },
        Rect { x, y, w, h, rx } => rsx! {
            rect { key: "{index}", x: "{x}", y: "{y}", width: "{w}", height: "{h}", rx: "{rx}" }
        },
    }
}
