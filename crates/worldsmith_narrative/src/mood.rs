//! Category mood descriptors.

/// A known category and the mood its prompts are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMood {
    /// Category label as shown to users
    pub category: &'static str,
    /// Mood descriptor woven into every prompt
    pub descriptor: &'static str,
}

/// Descriptor used for categories not in [`CATEGORY_MOODS`].
pub const GENERIC_MOOD: &str =
    "evocative and immersive, balancing wonder with a sense of lived-in history";

/// Known categories, matched case-insensitively.
pub const CATEGORY_MOODS: [CategoryMood; 8] = [
    CategoryMood {
        category: "Fantasy",
        descriptor: "mythic and enchanted, rich with ancient magic and heroic possibility",
    },
    CategoryMood {
        category: "Sci-Fi",
        descriptor: "sleek and speculative, driven by discovery and the cost of progress",
    },
    CategoryMood {
        category: "Post-Apocalyptic",
        descriptor: "desolate yet resilient, scarred by collapse with stubborn hope in the ruins",
    },
    CategoryMood {
        category: "Cyberpunk",
        descriptor: "neon-drenched and gritty, where high technology meets low life",
    },
    CategoryMood {
        category: "Steampunk",
        descriptor: "brass-bound and inventive, thick with coal smoke and Victorian ambition",
    },
    CategoryMood {
        category: "Horror",
        descriptor: "dread-soaked and unsettling, with something wrong just out of sight",
    },
    CategoryMood {
        category: "Mythological",
        descriptor: "grand and timeless, where gods walk among mortals and omens matter",
    },
    CategoryMood {
        category: "Dystopian",
        descriptor: "oppressive and watchful, polished surfaces hiding quiet rebellion",
    },
];

/// Mood descriptor for `category`.
///
/// # Examples
///
/// ```
/// use worldsmith_narrative::{mood_for, GENERIC_MOOD};
///
/// assert!(mood_for("cyberpunk").contains("neon"));
/// assert_eq!(mood_for("Cozy Bakery"), GENERIC_MOOD);
/// ```
pub fn mood_for(category: &str) -> &'static str {
    let wanted = category.trim();
    CATEGORY_MOODS
        .iter()
        .find(|mood| mood.category.eq_ignore_ascii_case(wanted))
        .map(|mood| mood.descriptor)
        .unwrap_or(GENERIC_MOOD)
}
