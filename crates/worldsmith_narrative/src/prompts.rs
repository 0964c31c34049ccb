//! Prompt templates.
//!
//! Every template interpolates the idea and category verbatim, plus the
//! category's mood descriptor. List templates come paired with the schema
//! their response must follow.

use crate::mood_for;
use worldsmith_core::{CharacterRecord, GenerationRequest, ScenarioArchetype, Schema};

/// Title of the first region block.
pub const CONTINENTAL_OVERVIEW: &str = "Continental Overview";

/// Title of the second region block.
pub const SETTLEMENT_DISTRICTS: &str = "Settlement Districts";

const PLAIN_PROSE: &str =
    "Write in plain prose without markdown, asterisks, underscores or heading markers.";

/// Schema for idea records.
pub fn idea_schema() -> Schema {
    Schema::array_of(Schema::string_object(["title", "synopsis"]))
}

/// Schema for customization records.
pub fn customization_schema() -> Schema {
    Schema::array_of(Schema::string_object(["feature", "description"]))
}

/// Schema for character records.
pub fn character_schema() -> Schema {
    Schema::array_of(Schema::string_object(["name", "role", "description"]))
}

/// Renders prompts for one idea and category.
///
/// # Examples
///
/// ```
/// use worldsmith_narrative::PromptBuilder;
///
/// let prompts = PromptBuilder::new("floating cities", "Fantasy");
/// let request = prompts.ideas(5);
/// assert!(request.prompt_text().contains("floating cities"));
/// assert!(request.structured_schema().is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    idea: &'a str,
    category: &'a str,
    mood: &'static str,
}

impl<'a> PromptBuilder<'a> {
    /// Prompts for `idea` in `category`.
    pub fn new(idea: &'a str, category: &'a str) -> Self {
        Self {
            idea,
            category,
            mood: mood_for(category),
        }
    }

    /// The mood descriptor in use.
    pub fn mood(&self) -> &'static str {
        self.mood
    }

    fn setting(&self) -> String {
        format!(
            "a {} world built around this idea: \"{}\". The tone is {}.",
            self.category, self.idea, self.mood
        )
    }

    /// Narrative overview, plain text.
    pub fn narrative(&self) -> GenerationRequest {
        GenerationRequest::text(format!(
            "You are a worldbuilding author. Describe {}\n\n\
             Write a narrative overview of four to six paragraphs covering the world's \
             origins, its defining conflict, the forces that shape daily life and what \
             makes it unlike any other {} setting. {PLAIN_PROSE}",
            self.setting(),
            self.category
        ))
    }

    /// Story hooks, `count` records of `{title, synopsis}`.
    pub fn ideas(&self, count: usize) -> GenerationRequest {
        GenerationRequest::structured(
            format!(
                "Invent {count} distinct story ideas for {} Each idea needs a short \
                 evocative title and a synopsis of two or three sentences.",
                self.setting()
            ),
            idea_schema(),
        )
    }

    /// Customization suggestions, `count` records of `{feature, description}`.
    pub fn customizations(&self, count: usize) -> GenerationRequest {
        GenerationRequest::structured(
            format!(
                "Suggest {count} ways a game master could customize {} Each suggestion \
                 names the feature to change and describes how to change it in one or \
                 two sentences.",
                self.setting()
            ),
            customization_schema(),
        )
    }

    /// Characters, `{name, role, description}` records.
    pub fn characters(&self, count: usize) -> GenerationRequest {
        GenerationRequest::structured(
            format!(
                "Create {count} memorable characters who live in {} Give each a name, \
                 a role in the world and a description of one or two sentences.",
                self.setting()
            ),
            character_schema(),
        )
    }

    /// Large-scale geography, plain text.
    pub fn continental_overview(&self) -> GenerationRequest {
        GenerationRequest::text(format!(
            "Write the {CONTINENTAL_OVERVIEW} for {}\n\n\
             Describe four major regions. Start each region with its name alone on one \
             line, follow with a short paragraph on its terrain, climate and people, and \
             separate regions with a blank line. {PLAIN_PROSE}",
            self.setting()
        ))
    }

    /// The districts of the world's main settlement, plain text.
    pub fn settlement_districts(&self) -> GenerationRequest {
        GenerationRequest::text(format!(
            "Map the districts of the largest settlement in {}\n\n\
             Describe four districts. Start each district with its name alone on one \
             line, follow with a short paragraph on who lives there and what happens \
             there, and separate districts with a blank line. {PLAIN_PROSE}",
            self.setting()
        ))
    }

    /// Image prompt for the concept art.
    pub fn concept_image(&self) -> String {
        format!(
            "Wide establishing concept art of a {} world: {}. Mood: {}. \
             Cinematic composition, detailed environment, no text or lettering.",
            self.category, self.idea, self.mood
        )
    }

    /// Image prompt for a character portrait.
    pub fn character_image(&self, character: &CharacterRecord) -> String {
        format!(
            "Character portrait of {}, {}, from a {} world built around \"{}\". {} \
             Mood: {}. Painterly detail, expressive face, no text or lettering.",
            character.name, character.role, self.category, self.idea, character.description,
            self.mood
        )
    }

    /// Image prompt for a scenario illustration.
    pub fn scenario_image(&self, scenario: &ScenarioArchetype) -> String {
        format!(
            "Illustration of \"{}\" in a {} world built around \"{}\": {} \
             Mood: {}. Dramatic staging, no text or lettering.",
            scenario.title, self.category, self.idea, scenario.description, self.mood
        )
    }
}
