//! Inline SVG icons (Lucide style, 24x24 viewBox, stroked).
//!
//! Navigation catalogs only carry an [`IconKind`]; this module turns each kind
//! into path data so the page ships without an icon font.

use leptos::prelude::*;
use nomofobia_core::IconKind;

/// Renders the icon for `kind`.
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Home size="20" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Width and height in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let paths = icon_paths(kind)
        .iter()
        .map(|&d| view! { <path d=d></path> })
        .collect_view();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

/// Path data of each icon. Circles and rects are written as paths.
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Home => &[
            "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M9 22V12h6v10",
        ],
        IconKind::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        IconKind::AlertTriangle => &[
            "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
            "M12 9v4",
            "M12 17h.01",
        ],
        IconKind::Heart => &[
            "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
        ],
        IconKind::Brain => &[
            "M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44 2.5 2.5 0 0 1-2.96-3.08 3 3 0 0 1-.34-5.58 2.5 2.5 0 0 1 1.32-4.24 2.5 2.5 0 0 1 1.98-3A2.5 2.5 0 0 1 9.5 2z",
            "M14.5 2A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.96-3.08 3 3 0 0 0 .34-5.58 2.5 2.5 0 0 0-1.32-4.24 2.5 2.5 0 0 0-1.98-3A2.5 2.5 0 0 0 14.5 2z",
        ],
        IconKind::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        IconKind::User => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
        ],
        IconKind::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        IconKind::HardDrive => &[
            "M22 12H2",
            "M5.45 5.11L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z",
            "M6 16h.01",
            "M10 16h.01",
        ],
        IconKind::Database => &[
            "M3 5c0-1.66 4.03-3 9-3s9 1.34 9 3-4.03 3-9 3-9-1.34-9-3z",
            "M21 12c0 1.66-4 3-9 3s-9-1.34-9-3",
            "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
        ],
        IconKind::Disc => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        IconKind::Usb => &[
            "M10 7a1 1 0 1 0 0 2a1 1 0 1 0 0-2z",
            "M4 20a1 1 0 1 0 0 2a1 1 0 1 0 0-2z",
            "M4.7 19.3L19 5",
            "M21 3l-3 1 2 2z",
            "M9.26 7.68L5 12l2 5",
            "M10 14l5 2 3.5-3.5",
            "M18 12l1-1 1 1-1 1z",
        ],
        IconKind::Save => &[
            "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z",
            "M17 21v-8H7v8",
            "M7 3v5h8",
        ],
        IconKind::SdCard => &[
            "M6 22a2 2 0 0 1-2-2V6l4-4h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2z",
            "M10 6v2",
            "M14 6v2",
            "M18 6v2",
        ],
        IconKind::Layout => &[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M3 9h18",
            "M9 21V9",
        ],
        IconKind::Menu => &["M3 12h18", "M3 6h18", "M3 18h18"],
        IconKind::Close => &["M18 6L6 18", "M6 6l12 12"],
        IconKind::ArrowUp => &["M12 19V5", "M5 12l7-7 7 7"],
    }
}
