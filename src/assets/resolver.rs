//! Per-slot resolved-asset state with latest-request-wins ordering.
//!
//! Each part slot's asset load is an independent asynchronous operation. If
//! the requested URL for a slot changes while a fetch is in flight, the stale
//! result must be discarded when it eventually resolves; the preview must
//! never flicker back to an older asset. Ordering is enforced with a
//! monotonically increasing generation counter per slot: a fetch captures the
//! generation at request time and its result applies only while that
//! generation is still current. No network cancellation is involved.

use std::collections::BTreeMap;

use crate::{assets::loader::LoadOutcome, config::PartSlot};

/// Capture of a slot's request generation, handed back to [`SlotAssets`] on
/// completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    slot: PartSlot,
    generation: u64,
}

impl RequestToken {
    /// The slot this token was issued for.
    pub fn slot(self) -> PartSlot {
        self.slot
    }
}

#[derive(Clone, Debug, Default)]
struct SlotState {
    generation: u64,
    url: Option<String>,
    outcome: Option<LoadOutcome>,
}

/// Resolved-asset state for one door-preview instance.
///
/// Instances are independent: there is no cross-instance shared mutable
/// cache.
#[derive(Clone, Debug, Default)]
pub struct SlotAssets {
    slots: BTreeMap<PartSlot, SlotState>,
}

impl SlotAssets {
    /// Empty state; every slot resolves procedurally until loads complete.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a fetch for `slot` is starting against `url`.
    ///
    /// Bumps the slot's generation, which invalidates any in-flight request
    /// for the same slot, and clears the previously resolved outcome so a
    /// render pass in between shows the procedural fallback rather than the
    /// outgoing asset.
    pub fn begin_request(&mut self, slot: PartSlot, url: impl Into<String>) -> RequestToken {
        let state = self.slots.entry(slot).or_default();
        state.generation += 1;
        state.url = Some(url.into());
        state.outcome = None;
        RequestToken {
            slot,
            generation: state.generation,
        }
    }

    /// Apply a completed fetch, unless a newer request superseded it.
    ///
    /// Returns whether the outcome was applied.
    pub fn complete(&mut self, token: RequestToken, outcome: LoadOutcome) -> bool {
        let Some(state) = self.slots.get_mut(&token.slot) else {
            return false;
        };
        if state.generation != token.generation {
            tracing::debug!(slot = ?token.slot, "discarding stale asset load result");
            return false;
        }
        state.outcome = Some(outcome);
        true
    }

    /// Drop all state for `slot`, e.g. when its product selection is removed.
    pub fn clear(&mut self, slot: PartSlot) {
        self.slots.remove(&slot);
    }

    /// Currently applied outcome for `slot`, if any fetch has resolved and
    /// not been superseded.
    pub fn outcome(&self, slot: PartSlot) -> Option<&LoadOutcome> {
        self.slots.get(&slot).and_then(|s| s.outcome.as_ref())
    }

    /// URL of the most recent request for `slot`.
    pub fn requested_url(&self, slot: PartSlot) -> Option<&str> {
        self.slots.get(&slot).and_then(|s| s.url.as_deref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolver.rs"]
mod tests;
