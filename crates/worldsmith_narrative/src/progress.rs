//! Progress tracking for the visual phase.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{trace, warn};
use worldsmith_core::{ProgressState, ProgressUpdate, SlotStatus, VisualSlot};
use worldsmith_error::ProgressError;

/// Owns the run's [`ProgressState`] and publishes every change.
///
/// At most one subscriber; subscribing again replaces the previous one.
/// Without a subscriber, updates only change the local state. A subscriber
/// that hangs up is forgotten after one warning.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    state: ProgressState,
    sender: Option<UnboundedSender<ProgressUpdate>>,
}

impl ProgressTracker {
    /// A tracker with no subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every subsequent update.
    pub fn subscribe(&mut self) -> UnboundedReceiver<ProgressUpdate> {
        let (tx, rx) = unbounded_channel();
        self.sender = Some(tx);
        rx
    }

    /// Current state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Back to all-idle. Not published.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Set `slot` to `status` and publish the change.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError`] when the slot does not exist.
    pub fn update(&mut self, slot: VisualSlot, status: SlotStatus) -> Result<(), ProgressError> {
        let update = ProgressUpdate { slot, status };
        if !self.state.apply(&update) {
            return Err(ProgressError::new(format!("no such visual slot {slot}")));
        }
        trace!(%slot, ?status, "Progress updated");
        let hung_up = match &self.sender {
            Some(sender) => sender.send(update).is_err(),
            None => false,
        };
        if hung_up {
            warn!(%slot, "Progress subscriber went away; updates are no longer published");
            self.sender = None;
        }
        Ok(())
    }

    /// Whether updates are still being published.
    pub fn has_subscriber(&self) -> bool {
        self.sender.is_some()
    }
}
