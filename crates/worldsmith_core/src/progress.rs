//! Visual slot progress.
//!
//! The orchestrator owns a [`ProgressState`] and publishes every change as a
//! [`ProgressUpdate`]; presentation layers fold the updates into their own
//! copy with [`ProgressState::apply`].

use crate::{CHARACTER_SLOTS, SCENARIO_SLOTS};
use serde::{Deserialize, Serialize};

/// Total visual slots: one concept, the character slots and the scenario slots.
pub const VISUAL_SLOT_COUNT: usize = 1 + CHARACTER_SLOTS + SCENARIO_SLOTS;

/// Which family a visual slot belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SlotKind {
    /// The single concept art slot
    Concept,
    /// One slot per character
    Character,
    /// One slot per scenario archetype
    Scenario,
}

impl SlotKind {
    /// Number of slots of this kind.
    pub fn capacity(self) -> usize {
        match self {
            SlotKind::Concept => 1,
            SlotKind::Character => CHARACTER_SLOTS,
            SlotKind::Scenario => SCENARIO_SLOTS,
        }
    }
}

/// A single visual slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualSlot {
    /// Slot family
    pub kind: SlotKind,
    /// Zero-based index within the family
    pub index: usize,
}

impl std::fmt::Display for VisualSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.kind, self.index)
    }
}

/// Progress flags for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotStatus {
    /// A call for this slot is in flight
    pub loading: bool,
    /// The slot's call finished
    pub completed: bool,
    /// The slot finished without a real image
    pub failed: bool,
}

impl SlotStatus {
    /// In flight.
    pub fn loading() -> Self {
        Self {
            loading: true,
            completed: false,
            failed: false,
        }
    }

    /// Finished; `failed` when only a description could be produced.
    pub fn finished(failed: bool) -> Self {
        Self {
            loading: false,
            completed: true,
            failed,
        }
    }
}

/// One "slot updated" event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// The slot that changed
    pub slot: VisualSlot,
    /// Its new status
    pub status: SlotStatus,
}

/// Status of all ten visual slots.
///
/// # Examples
///
/// ```
/// use worldsmith_core::{ProgressState, ProgressUpdate, SlotKind, SlotStatus, VisualSlot};
///
/// let mut state = ProgressState::default();
/// let slot = VisualSlot { kind: SlotKind::Character, index: 2 };
/// assert!(state.apply(&ProgressUpdate { slot, status: SlotStatus::loading() }));
/// assert!(state.status(slot).unwrap().loading);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    concept: SlotStatus,
    characters: [SlotStatus; CHARACTER_SLOTS],
    scenarios: [SlotStatus; SCENARIO_SLOTS],
}

impl ProgressState {
    /// Status of `slot`, or `None` when the index is out of range.
    pub fn status(&self, slot: VisualSlot) -> Option<SlotStatus> {
        match slot.kind {
            SlotKind::Concept if slot.index == 0 => Some(self.concept),
            SlotKind::Concept => None,
            SlotKind::Character => self.characters.get(slot.index).copied(),
            SlotKind::Scenario => self.scenarios.get(slot.index).copied(),
        }
    }

    /// Fold an update in. Returns false when the slot does not exist.
    pub fn apply(&mut self, update: &ProgressUpdate) -> bool {
        let target = match update.slot.kind {
            SlotKind::Concept if update.slot.index == 0 => Some(&mut self.concept),
            SlotKind::Concept => None,
            SlotKind::Character => self.characters.get_mut(update.slot.index),
            SlotKind::Scenario => self.scenarios.get_mut(update.slot.index),
        };
        match target {
            Some(status) => {
                *status = update.status;
                true
            }
            None => false,
        }
    }

    /// Back to all-idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All slots with their status, concept first.
    pub fn slots(&self) -> Vec<(VisualSlot, SlotStatus)> {
        let concept = std::iter::once((
            VisualSlot {
                kind: SlotKind::Concept,
                index: 0,
            },
            self.concept,
        ));
        let characters = self.characters.iter().enumerate().map(|(index, s)| {
            (
                VisualSlot {
                    kind: SlotKind::Character,
                    index,
                },
                *s,
            )
        });
        let scenarios = self.scenarios.iter().enumerate().map(|(index, s)| {
            (
                VisualSlot {
                    kind: SlotKind::Scenario,
                    index,
                },
                *s,
            )
        });
        concept.chain(characters).chain(scenarios).collect()
    }

    /// Slots whose call finished.
    pub fn completed_count(&self) -> usize {
        self.slots().iter().filter(|(_, s)| s.completed).count()
    }

    /// Slots that finished without an image.
    pub fn failed_count(&self) -> usize {
        self.slots().iter().filter(|(_, s)| s.failed).count()
    }
}
