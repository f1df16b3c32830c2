//! Motion state for scroll reveals and the rotating headline word.
//!
//! Each animated section owns its own `VisibilityState`; there is no shared
//! animation registry. The CSS endpoints live here so the components only
//! forward strings into inline styles.

use std::fmt;

/// Fraction of a section that must overlap the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Vertical offset of a hidden section, in px.
pub const REVEAL_OFFSET_PX: u32 = 50;

/// Reveal transition duration, in seconds.
pub const REVEAL_DURATION_S: f32 = 0.5;

/// Period of the rotating headline word, in milliseconds.
pub const WORD_ROTATION_MS: u32 = 3000;

/// Whether a section is currently shown or tucked below its resting spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Hidden,
    Visible,
}

impl VisibilityState {
    /// Transition function: a section is visible exactly when its
    /// intersection ratio reaches the threshold. Re-entrant; feeding the
    /// same ratio twice yields the same state.
    pub fn from_ratio(ratio: f64, threshold: f64) -> Self {
        if ratio >= threshold {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Inline style for the section wrapper. Both endpoints carry the same
    /// transition so the swap animates in either direction.
    pub fn to_css(&self) -> String {
        let transition = format!(
            "transition: opacity {dur}s ease-out, transform {dur}s ease-out;",
            dur = REVEAL_DURATION_S
        );
        match self {
            Self::Hidden => format!(
                "opacity: 0; transform: translateY({REVEAL_OFFSET_PX}px); {transition}"
            ),
            Self::Visible => format!("opacity: 1; transform: translateY(0); {transition}"),
        }
    }
}

/// Error returned when a `WordCycle` is built from nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCycleError {
    Empty,
}

impl fmt::Display for WordCycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word cycle needs at least one word"),
        }
    }
}

impl std::error::Error for WordCycleError {}

/// A fixed word list with a wrapping cursor. The list is non-empty by
/// construction, so advancing never touches a modulo-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCycle {
    words: Vec<String>,
    index: usize,
}

impl WordCycle {
    pub fn new(words: Vec<String>) -> Result<Self, WordCycleError> {
        if words.is_empty() {
            return Err(WordCycleError::Empty);
        }
        Ok(Self { words, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.words[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The cycle one tick later, wrapped around the end of the list.
    pub fn advanced(&self) -> Self {
        Self {
            words: self.words.clone(),
            index: (self.index + 1) % self.words.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(VisibilityState::default(), VisibilityState::Hidden);
    }

    #[test]
    fn ratio_at_threshold_is_visible() {
        assert_eq!(
            VisibilityState::from_ratio(REVEAL_THRESHOLD, REVEAL_THRESHOLD),
            VisibilityState::Visible
        );
    }

    #[test]
    fn ratio_below_threshold_is_hidden() {
        assert_eq!(
            VisibilityState::from_ratio(0.05, REVEAL_THRESHOLD),
            VisibilityState::Hidden
        );
    }

    #[test]
    fn scroll_sequence_tracks_most_recent_ratio() {
        let ratios = [0.0, 0.05, 0.15, 0.3, 0.02];
        let states: Vec<_> = ratios
            .iter()
            .map(|r| VisibilityState::from_ratio(*r, REVEAL_THRESHOLD))
            .collect();
        assert_eq!(
            states,
            vec![
                VisibilityState::Hidden,
                VisibilityState::Hidden,
                VisibilityState::Visible,
                VisibilityState::Visible,
                VisibilityState::Hidden,
            ]
        );
    }

    #[test]
    fn hidden_css_offsets_and_fades() {
        let css = VisibilityState::Hidden.to_css();
        assert!(css.contains("opacity: 0"));
        assert!(css.contains("translateY(50px)"));
        assert!(css.contains("0.5s"));
    }

    #[test]
    fn visible_css_rests_at_origin() {
        let css = VisibilityState::Visible.to_css();
        assert!(css.contains("opacity: 1"));
        assert!(css.contains("translateY(0)"));
        assert!(css.contains("0.5s"));
    }

    #[test]
    fn word_cycle_wraps() {
        let cycle =
            WordCycle::new(vec!["Eliminate".to_string(), "Simplify".to_string()]).unwrap();
        assert_eq!(cycle.current(), "Eliminate");
        let cycle = cycle.advanced();
        assert_eq!(cycle.current(), "Simplify");
        let cycle = cycle.advanced();
        assert_eq!(cycle.current(), "Eliminate");
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn single_word_cycles_to_itself() {
        let cycle = WordCycle::new(vec!["Grace".to_string()]).unwrap();
        assert_eq!(cycle.advanced().current(), "Grace");
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert_eq!(WordCycle::new(Vec::new()), Err(WordCycleError::Empty));
    }
}
