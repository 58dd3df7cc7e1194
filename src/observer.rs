//! State-change notification to the presentation layer.
//!
//! The engine pushes the updated state to registered observers after
//! every accepted mutation. Rendering marks, turn-indicator text, and
//! win/tie messaging are entirely the observer's concern.

use crate::types::GameState;

/// Callback interface for presentation layers.
///
/// Observers are invoked synchronously after each accepted move and
/// after each reset, with the already-updated state. Animations and
/// other cosmetic work must be deferred outside the callback so they
/// cannot stall the engine.
pub trait GameObserver {
    /// Called with the updated state after an accepted mutation.
    fn state_changed(&mut self, state: &GameState);
}
