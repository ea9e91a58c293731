//! Inline SVG icons (Lucide line set, 24px grid, stroked).

use ghost_site::content::IconKind;
use leptos::prelude::*;

/// Renders an [`IconKind`] as inline SVG.
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Shield size="24" class="card-icon" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
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
            aria-hidden="true"
            class=class
        >
            <path d=icon_path(kind)></path>
        </svg>
    }
}

/// Path data for each icon.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::ArrowLeft => "M19 12H5M12 19l-7-7 7-7",
        IconKind::ArrowRight => "M5 12h14M12 5l7 7-7 7",
        IconKind::Award => {
            "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.21 13.89 7 23l5-3 5 3-1.21-9.12"
        }
        IconKind::BookOpen => {
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"
        }
        IconKind::Calendar => "M3 4h18v18H3zM16 2v4M8 2v4M3 10h18",
        IconKind::CaretDown => "M6 9l6 6 6-6",
        IconKind::CheckCircle => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4 12 14.01l-3-3",
        IconKind::CheckSquare => "M9 11l3 3L22 4M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11",
        IconKind::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",
        IconKind::Close => "M18 6 6 18M6 6l12 12",
        IconKind::Code => "M16 18l6-6-6-6M8 6l-6 6 6 6",
        IconKind::Globe => {
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"
        }
        IconKind::Layers => "M12 2 2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5",
        IconKind::Mail => {
            "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6"
        }
        IconKind::MapPin => {
            "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
        }
        IconKind::Menu => "M3 12h18M3 6h18M3 18h18",
        IconKind::Monitor => "M2 3h20v14H2zM8 21h8M12 17v4",
        IconKind::Paintbrush => {
            "M18.37 2.63 14 7l-1.59-1.59a2 2 0 0 0-2.82 0L8 7l9 9 1.59-1.59a2 2 0 0 0 0-2.82L17 10l4.37-4.37a2.12 2.12 0 1 0-3-3zM9 8c-2 3-4 3.5-7 4l8 10c2-1 6-5 6-7"
        }
        IconKind::Phone => {
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"
        }
        IconKind::Settings => {
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"
        }
        IconKind::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
        IconKind::Target => {
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"
        }
        IconKind::TrendingUp => "M23 6l-9.5 9.5-5-5L1 18M17 6h6v6",
        IconKind::Users => {
            "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
        }
        IconKind::Wrench => {
            "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"
        }
        IconKind::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_starts_with_move_to() {
        let all = [
            IconKind::ArrowLeft,
            IconKind::ArrowRight,
            IconKind::Award,
            IconKind::BookOpen,
            IconKind::Calendar,
            IconKind::CaretDown,
            IconKind::CheckCircle,
            IconKind::CheckSquare,
            IconKind::Clock,
            IconKind::Close,
            IconKind::Code,
            IconKind::Globe,
            IconKind::Layers,
            IconKind::Mail,
            IconKind::MapPin,
            IconKind::Menu,
            IconKind::Monitor,
            IconKind::Paintbrush,
            IconKind::Phone,
            IconKind::Settings,
            IconKind::Shield,
            IconKind::Target,
            IconKind::TrendingUp,
            IconKind::Users,
            IconKind::Wrench,
            IconKind::Zap,
        ];
        for kind in all {
            assert!(icon_path(kind).starts_with('M'), "{kind:?}");
        }
    }
}
