//! Static page copy. Nothing here mutates at runtime; the components take
//! these tables as read-only slices.

use crate::components::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JourneyStep {
    pub title: &'static str,
    pub description: &'static str,
    pub actions: Option<&'static str>,
    pub icon: Icon,
}

/// The two words the benefits heading alternates between.
pub const ROTATING_WORDS: &[&str] = &["Eliminate", "Simplify"];

pub const FEATURES: &[Entry] = &[
    Entry {
        title: "Personalized Memorials",
        description: "Create meaningful digital tributes that reflect each family's wishes.",
        icon: Icon::Monument,
    },
    Entry {
        title: "Streamlined Planning",
        description: "Plan funerals with ease using step-by-step guides and automated checklists.",
        icon: Icon::ChartLine,
    },
    Entry {
        title: "Client Management",
        description: "Track client history, interactions, and preferences for tailored service.",
        icon: Icon::UserFriends,
    },
    Entry {
        title: "Document Management",
        description: "Store and manage important documents related to services.",
        icon: Icon::ClipboardList,
    },
    Entry {
        title: "Aftercare Support",
        description: "Stay connected with families post-service, providing continued care and resources.",
        icon: Icon::Heart,
    },
    Entry {
        title: "Mobile Access",
        description: "Stay connected with your operations anytime, anywhere with mobile-friendly access.",
        icon: Icon::MobileAlt,
    },
];

pub const BENEFITS: &[Entry] = &[
    Entry {
        title: "Paperwork, Digitized",
        description: "Transform stacks of forms into seamless digital workflows.",
        icon: Icon::ClipboardList,
    },
    Entry {
        title: "Flawless Planning",
        description: "Honor every wish with our intuitive service planning tools.",
        icon: Icon::ChartLine,
    },
    Entry {
        title: "Lasting Connections",
        description: "Turn one-time clients into lifelong relationships.",
        icon: Icon::UserFriends,
    },
    Entry {
        title: "Digital Memorials",
        description: "Create beautiful, interactive tributes in minutes.",
        icon: Icon::Monument,
    },
    Entry {
        title: "Beyond-Service Care",
        description: "Provide ongoing support, strengthening your reputation.",
        icon: Icon::Heart,
    },
    Entry {
        title: "Mobile Management",
        description: "Run your funeral home from anywhere, anytime.",
        icon: Icon::MobileAlt,
    },
];

pub const JOURNEY: &[JourneyStep] = &[
    JourneyStep {
        title: "Client Profile Creation",
        description: "Build comprehensive client profiles to manage information efficiently.",
        actions: Some("Input personal details, preferences, and service history."),
        icon: Icon::UserPlus,
    },
    JourneyStep {
        title: "Intuitive Planning",
        description: "Map out every detail with our smart Service Planning Wizard.",
        actions: None,
        icon: Icon::CalendarAlt,
    },
    JourneyStep {
        title: "Personalized Memorials",
        description: "Craft unique, shareable digital tributes in minutes.",
        actions: None,
        icon: Icon::PencilAlt,
    },
    JourneyStep {
        title: "Effortless Management",
        description: "Streamline RSVPs, reminders, and client information.",
        actions: None,
        icon: Icon::Users,
    },
    JourneyStep {
        title: "Continuous Care",
        description: "Provide ongoing support with automated, thoughtful follow-ups.",
        actions: None,
        icon: Icon::HandHoldingHeart,
    },
];

pub const REASONS: &[Entry] = &[
    Entry {
        title: "Industry-Specific Design",
        description: "Purpose-built software addressing the unique needs of funeral service professionals.",
        icon: Icon::Monument,
    },
    Entry {
        title: "Enhanced Efficiency",
        description: "Streamline your operations and reduce administrative burden with intelligent automation.",
        icon: Icon::ChartLine,
    },
    Entry {
        title: "User-Friendly Interface",
        description: "Intuitive design ensures smooth adoption and operation, regardless of tech expertise.",
        icon: Icon::UserFriends,
    },
    Entry {
        title: "Flexible Customization",
        description: "Adapt GRACE to your specific workflows and service offerings with ease.",
        icon: Icon::ClipboardList,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_starts_on_eliminate() {
        assert_eq!(ROTATING_WORDS[0], "Eliminate");
        assert_eq!(ROTATING_WORDS.len(), 2);
    }

    #[test]
    fn grid_shapes() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(BENEFITS.len(), 6);
        assert_eq!(JOURNEY.len(), 5);
        assert_eq!(REASONS.len(), 4);
    }

    #[test]
    fn journey_leads_with_onboarding_actions() {
        assert!(JOURNEY[0].actions.is_some());
        assert!(JOURNEY[1..].iter().all(|step| step.actions.is_none()));
    }

    #[test]
    fn no_entry_is_blank() {
        let all = FEATURES.iter().chain(BENEFITS.iter()).chain(REASONS.iter());
        for entry in all {
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
        }
    }
}
