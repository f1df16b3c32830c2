/// Tally form backing every waitlist button on the page.
pub fn get_waitlist_form_id() -> &'static str {
    "3l7r2B"
}

pub const WAITLIST_EMOJI: &str = "👋";
pub const WAITLIST_EMOJI_ANIMATION: &str = "wave";
