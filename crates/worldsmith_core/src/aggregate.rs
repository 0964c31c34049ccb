//! The accumulated output of one generation run.

use crate::{CharacterRecord, CustomizationRecord, IdeaRecord, ImageResult, RegionBlock};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Character display slots and character image slots.
pub const CHARACTER_SLOTS: usize = 6;

/// Scenario image slots, one per built-in archetype.
pub const SCENARIO_SLOTS: usize = 3;

/// Default cap on idea and customization records.
pub const DEFAULT_IDEA_COUNT: usize = 5;

/// Everything one run produced.
///
/// Built once by the orchestrator and read-only afterwards. Image slot
/// vectors always have [`CHARACTER_SLOTS`] and [`SCENARIO_SLOTS`] entries;
/// `None` marks a slot that was never attempted. Deserialization goes
/// through the builder, so saved worlds get the same checks and padding.
///
/// # Examples
///
/// ```
/// use worldsmith_core::{WorldAggregateBuilder, CHARACTER_SLOTS};
///
/// let world = WorldAggregateBuilder::default()
///     .idea("floating cities")
///     .category("Fantasy")
///     .narrative("Cities drift on warm currents.")
///     .build()
///     .unwrap();
///
/// assert_eq!(world.character_images().len(), CHARACTER_SLOTS);
/// assert_eq!(world.display_characters().len(), CHARACTER_SLOTS);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(try_from = "SavedWorld")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct WorldAggregate {
    /// The user's idea, verbatim
    idea: String,
    /// The category label, verbatim
    category: String,
    /// Sanitized narrative overview
    narrative: String,
    /// Story hooks
    #[builder(default)]
    ideas: Vec<IdeaRecord>,
    /// Customization suggestions
    #[builder(default)]
    customizations: Vec<CustomizationRecord>,
    /// Generated characters, at most [`CHARACTER_SLOTS`]
    #[builder(default)]
    characters: Vec<CharacterRecord>,
    /// Region description blocks
    #[builder(default)]
    regions: Vec<RegionBlock>,
    /// Concept art slot
    #[builder(default)]
    concept_image: Option<ImageResult>,
    /// Character image slots, index-aligned with `characters`
    #[builder(default = "vec![None; CHARACTER_SLOTS]")]
    character_images: Vec<Option<ImageResult>>,
    /// Scenario image slots, index-aligned with the archetype table
    #[builder(default = "vec![None; SCENARIO_SLOTS]")]
    scenario_images: Vec<Option<ImageResult>>,
    /// When the run finished
    #[builder(default = "Utc::now()")]
    generated_at: DateTime<Utc>,
}

impl WorldAggregateBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(images) = &self.character_images {
            if images.len() != CHARACTER_SLOTS {
                return Err(format!(
                    "character_images must have {CHARACTER_SLOTS} slots, got {}",
                    images.len()
                ));
            }
        }
        if let Some(images) = &self.scenario_images {
            if images.len() != SCENARIO_SLOTS {
                return Err(format!(
                    "scenario_images must have {SCENARIO_SLOTS} slots, got {}",
                    images.len()
                ));
            }
        }
        if let Some(characters) = &self.characters {
            if characters.len() > CHARACTER_SLOTS {
                return Err(format!(
                    "at most {CHARACTER_SLOTS} characters, got {}",
                    characters.len()
                ));
            }
        }
        Ok(())
    }
}

/// Wire form of a [`WorldAggregate`]; converted through the builder.
#[derive(Deserialize)]
struct SavedWorld {
    idea: String,
    category: String,
    narrative: String,
    #[serde(default)]
    ideas: Vec<IdeaRecord>,
    #[serde(default)]
    customizations: Vec<CustomizationRecord>,
    #[serde(default)]
    characters: Vec<CharacterRecord>,
    #[serde(default)]
    regions: Vec<RegionBlock>,
    #[serde(default)]
    concept_image: Option<ImageResult>,
    #[serde(default = "empty_character_slots")]
    character_images: Vec<Option<ImageResult>>,
    #[serde(default = "empty_scenario_slots")]
    scenario_images: Vec<Option<ImageResult>>,
    generated_at: DateTime<Utc>,
}

fn empty_character_slots() -> Vec<Option<ImageResult>> {
    vec![None; CHARACTER_SLOTS]
}

fn empty_scenario_slots() -> Vec<Option<ImageResult>> {
    vec![None; SCENARIO_SLOTS]
}

impl TryFrom<SavedWorld> for WorldAggregate {
    type Error = WorldAggregateBuilderError;

    fn try_from(saved: SavedWorld) -> Result<Self, Self::Error> {
        WorldAggregateBuilder::default()
            .idea(saved.idea)
            .category(saved.category)
            .narrative(saved.narrative)
            .ideas(saved.ideas)
            .customizations(saved.customizations)
            .characters(saved.characters)
            .regions(saved.regions)
            .concept_image(saved.concept_image)
            .character_images(saved.character_images)
            .scenario_images(saved.scenario_images)
            .generated_at(saved.generated_at)
            .build()
    }
}

impl WorldAggregate {
    /// Exactly [`CHARACTER_SLOTS`] characters: generated ones first, then
    /// placeholders.
    pub fn display_characters(&self) -> Vec<CharacterRecord> {
        (0..CHARACTER_SLOTS)
            .map(|i| {
                self.characters
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| CharacterRecord::placeholder(i))
            })
            .collect()
    }

    /// The image for character slot `index`, if one was produced.
    pub fn character_image(&self, index: usize) -> Option<&ImageResult> {
        self.character_images.get(index).and_then(Option::as_ref)
    }

    /// The image for scenario slot `index`, if one was produced.
    pub fn scenario_image(&self, index: usize) -> Option<&ImageResult> {
        self.scenario_images.get(index).and_then(Option::as_ref)
    }

    /// True when any visual slot holds a result.
    pub fn has_visuals(&self) -> bool {
        self.concept_image.is_some()
            || self.character_images.iter().any(Option::is_some)
            || self.scenario_images.iter().any(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> WorldAggregateBuilder {
        let mut builder = WorldAggregateBuilder::default();
        builder.idea("idea").category("Horror").narrative("text");
        builder
    }

    #[test]
    fn rejects_misaligned_image_slots() {
        let result = base().character_images(vec![None::<ImageResult>; 2]).build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_too_many_characters() {
        let result = base()
            .characters(vec![CharacterRecord::default(); CHARACTER_SLOTS + 1])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn pads_characters_for_display() {
        let world = base()
            .characters(vec![CharacterRecord {
                name: "Ysolde".to_string(),
                role: "Warden".to_string(),
                description: "Keeps the gate".to_string(),
            }])
            .build()
            .unwrap();
        let shown = world.display_characters();
        assert_eq!(shown.len(), CHARACTER_SLOTS);
        assert_eq!(shown[0].name, "Ysolde");
        assert_eq!(shown[5], CharacterRecord::placeholder(5));
        assert!(!world.has_visuals());
    }

    #[test]
    fn json_round_trip_keeps_the_slots() {
        let world = base().build().unwrap();
        let json = serde_json::to_string(&world).unwrap();
        let back: WorldAggregate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, world);
    }

    #[test]
    fn saved_world_without_slots_is_padded() {
        let json = r#"{"idea":"a","category":"Horror","narrative":"n",
            "characters":[{"name":"Ysolde"}],
            "generated_at":"2026-10-16T08:00:00Z"}"#;
        let world: WorldAggregate = serde_json::from_str(json).unwrap();
        assert_eq!(world.character_images().len(), CHARACTER_SLOTS);
        assert_eq!(world.scenario_images().len(), SCENARIO_SLOTS);
        assert_eq!(world.characters()[0].name, "Ysolde");
    }

    #[test]
    fn saved_world_breaking_slot_counts_is_rejected() {
        let characters = vec![serde_json::json!({}); CHARACTER_SLOTS + 2];
        let too_many = serde_json::json!({
            "idea": "a", "category": "Horror", "narrative": "n",
            "characters": characters,
            "generated_at": "2026-10-16T08:00:00Z",
        });
        let err = serde_json::from_value::<WorldAggregate>(too_many).unwrap_err();
        assert!(err.to_string().contains("at most 6 characters"));

        let short = serde_json::json!({
            "idea": "a", "category": "Horror", "narrative": "n",
            "scenario_images": [null],
            "generated_at": "2026-10-16T08:00:00Z",
        });
        let err = serde_json::from_value::<WorldAggregate>(short).unwrap_err();
        assert!(err.to_string().contains("scenario_images"));
    }
}
