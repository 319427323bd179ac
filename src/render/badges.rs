//! Badge Styles
//!
//! Rank glyphs for the leaderboard and the difficulty color lookup for
//! workouts.

/// Visual category of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Primary,
    Info,
    Warning,
    Success,
    Danger,
    Secondary,
}

impl BadgeStyle {
    /// Bootstrap classes for this style
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeStyle::Primary => "bg-primary",
            BadgeStyle::Info => "bg-info",
            BadgeStyle::Warning => "bg-warning text-dark",
            BadgeStyle::Success => "bg-success",
            BadgeStyle::Danger => "bg-danger",
            BadgeStyle::Secondary => "bg-secondary",
        }
    }
}

/// Color category of a workout difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyCategory {
    Success,
    Warning,
    Danger,
    Neutral,
}

const DIFFICULTY_TABLE: [(&str, DifficultyCategory); 6] = [
    ("easy", DifficultyCategory::Success),
    ("beginner", DifficultyCategory::Success),
    ("medium", DifficultyCategory::Warning),
    ("intermediate", DifficultyCategory::Warning),
    ("hard", DifficultyCategory::Danger),
    ("advanced", DifficultyCategory::Danger),
];

impl DifficultyCategory {
    /// Case-insensitive lookup; anything unrecognised is neutral
    pub fn of(difficulty: &str) -> Self {
        let key = difficulty.to_lowercase();
        DIFFICULTY_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map_or(DifficultyCategory::Neutral, |(_, category)| *category)
    }

    pub fn badge_style(self) -> BadgeStyle {
        match self {
            DifficultyCategory::Success => BadgeStyle::Success,
            DifficultyCategory::Warning => BadgeStyle::Warning,
            DifficultyCategory::Danger => BadgeStyle::Danger,
            DifficultyCategory::Neutral => BadgeStyle::Secondary,
        }
    }
}

/// Rank shown for the zero-based position `index`.
///
/// Purely positional: the list is displayed in the order received.
pub fn rank_badge(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => (n + 1).to_string(),
    }
}
