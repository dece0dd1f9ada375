//! Session-scoped holder for the most recent generation result.
//!
//! The store holds either nothing or exactly one complete, successfully
//! decoded [`GenerationResult`]. Writes replace the whole value — there is
//! no field-by-field merge, so a reader can never observe a result mixing
//! fields from two responses. Only the session writes, and only after a
//! fully successful generation; every render pass reads.

use crate::model::GenerationResult;

/// Holder of at most one [`GenerationResult`].
///
/// Created empty; overwritten wholesale on each successful generation;
/// cleared only by dropping it with its session.
#[derive(Debug, Default)]
pub struct ResultStore {
    current: Option<GenerationResult>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `result`, for drivers and tests that
    /// start from a known state.
    pub fn with_result(result: GenerationResult) -> Self {
        Self {
            current: Some(result),
        }
    }

    /// Replace the held result wholesale.
    pub fn set(&mut self, result: GenerationResult) {
        self.current = Some(result);
    }

    /// The last value passed to [`set`](Self::set), if any. Idempotent and
    /// side-effect-free.
    pub fn get(&self) -> Option<&GenerationResult> {
        self.current.as_ref()
    }

    /// Whether a result is currently held.
    pub fn is_populated(&self) -> bool {
        self.current.is_some()
    }
}
