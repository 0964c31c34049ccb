//! World generation for Worldsmith.
//!
//! This crate turns a short idea and a category into a [`WorldAggregate`]:
//!
//! - **Prompt templates**: [`PromptBuilder`] renders every prompt, with a mood
//!   taken from the category
//! - **Orchestration**: [`WorldOrchestrator`] runs the text calls and the
//!   visual phase in order
//! - **Progress**: [`ProgressTracker`] publishes visual slot updates on a
//!   channel
//!
//! [`WorldAggregate`]: worldsmith_core::WorldAggregate

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod mood;
mod orchestrator;
mod progress;
mod prompts;

pub use mood::{CATEGORY_MOODS, CategoryMood, GENERIC_MOOD, mood_for};
pub use orchestrator::{DEFAULT_IMAGE_DELAY, WorldOrchestrator};
pub use progress::ProgressTracker;
pub use prompts::{
    CONTINENTAL_OVERVIEW, PromptBuilder, SETTLEMENT_DISTRICTS, character_schema,
    customization_schema, idea_schema,
};
