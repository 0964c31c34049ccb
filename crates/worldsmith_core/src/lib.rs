//! Core data types for the Worldsmith world generator.
//!
//! This crate holds the values that flow between the generation clients, the
//! orchestrator and the document exporter, plus the pure text helpers they
//! share.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod image;
mod progress;
mod records;
mod request;
mod result;
mod sanitize;
mod scenario;
mod schema;

pub use aggregate::{
    CHARACTER_SLOTS, DEFAULT_IDEA_COUNT, SCENARIO_SLOTS, WorldAggregate, WorldAggregateBuilder,
    WorldAggregateBuilderError,
};
pub use image::{DESCRIPTION_ECHO_CHARS, ImageResult, SYNTHESIZED_PROMPT_CHARS};
pub use progress::{ProgressState, ProgressUpdate, SlotKind, SlotStatus, VISUAL_SLOT_COUNT, VisualSlot};
pub use records::{CharacterRecord, CustomizationRecord, IdeaRecord, RegionBlock, RegionSection};
pub use request::GenerationRequest;
pub use result::{GenerationResult, Record};
pub use sanitize::clean;
pub use scenario::{SCENARIO_ARCHETYPES, ScenarioArchetype};
pub use schema::{Schema, SchemaField};
