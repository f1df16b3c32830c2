use yew::prelude::*;

/// Vector symbols referenced by the content tables. Rendering is the only
/// thing the rest of the page does with these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Monument,
    ClipboardList,
    UserFriends,
    ChartLine,
    Heart,
    MobileAlt,
    Check,
    UserPlus,
    CalendarAlt,
    PencilAlt,
    Users,
    HandHoldingHeart,
}

impl Icon {
    fn path_d(&self) -> &'static str {
        match self {
            Self::Monument => "M12 3l4 4v2h-8V7l4-4zM9 9h6v9H9V9zM5 21h14v-3H5v3z",
            Self::ClipboardList => {
                "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-6 9l2 2 4-4"
            }
            Self::UserFriends => {
                "M17 20h5v-2a4 4 0 00-3-3.87M9 20H4v-2a4 4 0 013-3.87m8-6.13a4 4 0 11-8 0 4 4 0 018 0zm6 2a3 3 0 11-6 0 3 3 0 016 0z"
            }
            Self::ChartLine => "M3 3v18h18M7 14l4-4 3 3 5-6",
            Self::Heart => {
                "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z"
            }
            Self::MobileAlt => {
                "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z"
            }
            Self::Check => "M5 13l4 4L19 7",
            Self::UserPlus => {
                "M18 9v3m0 0v3m0-3h3m-3 0h-3m-2-5a4 4 0 11-8 0 4 4 0 018 0zM3 20a6 6 0 0112 0v1H3v-1z"
            }
            Self::CalendarAlt => {
                "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"
            }
            Self::PencilAlt => {
                "M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"
            }
            Self::Users => {
                "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z"
            }
            Self::HandHoldingHeart => {
                "M4.318 5.318a3.5 3.5 0 000 4.95L9 15l4.682-4.732a3.5 3.5 0 00-4.95-4.95l.268.268-.268-.268a3.5 3.5 0 00-4.414.268zM3 19h4l3 2h6a2 2 0 000-4h-3"
            }
        }
    }

    pub fn svg(&self, class: &'static str) -> Html {
        html! {
            <svg class={class} fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={self.path_d()} />
            </svg>
        }
    }
}
