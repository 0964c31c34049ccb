//! Built-in scenario archetypes.
//!
//! Scenario cards and scenario images are driven by this table, not by
//! generated content.

use serde::Serialize;

/// A fixed scenario archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioArchetype {
    /// Card title
    pub title: &'static str,
    /// Card description
    pub description: &'static str,
    /// Short tag shown on the card
    pub tag: &'static str,
}

/// The three scenarios every world gets.
pub const SCENARIO_ARCHETYPES: [ScenarioArchetype; 3] = [
    ScenarioArchetype {
        title: "The Arrival",
        description: "Newcomers reach the edge of this world and take in its \
                      strangest sight for the first time, unsure who to trust.",
        tag: "Opening",
    },
    ScenarioArchetype {
        title: "The Fracture",
        description: "A long-buried tension breaks into open conflict and every \
                      faction is forced to choose a side.",
        tag: "Conflict",
    },
    ScenarioArchetype {
        title: "The Reckoning",
        description: "The truth behind the world's central mystery surfaces, and \
                      with it a choice that will reshape everything.",
        tag: "Climax",
    },
];
