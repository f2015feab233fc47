//! Interaction state machine
//!
//! Widget interaction states use a pure transition table: events map to the
//! next state or to `None` when no transition applies. Side effects (pointer
//! capture, visual feedback, scroll writes) belong to the controller that
//! owns the state, never to the table itself.

use std::hash::Hash;

/// Trait for state types that transition on events
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or `None` if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Pointer interaction state of one overlay widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No session in progress
    #[default]
    Idle,
    /// Thumb is being dragged with a captured pointer
    Dragging,
    /// An arrow is held down; stepping after the long-press delay
    AutoRepeating,
}

impl StateTransitions for InteractionState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use crate::events::event_types::*;
        match (self, event) {
            (InteractionState::Idle, THUMB_PRESS) => Some(InteractionState::Dragging),
            (InteractionState::Idle, ARROW_PRESS) => Some(InteractionState::AutoRepeating),
            (InteractionState::Dragging, POINTER_UP) => Some(InteractionState::Idle),
            (InteractionState::Dragging, CAPTURE_LOST) => Some(InteractionState::Idle),
            (InteractionState::AutoRepeating, POINTER_UP) => Some(InteractionState::Idle),
            _ => None,
        }
    }
}

impl InteractionState {
    /// Whether a session currently owns the pointer
    pub fn is_interacting(&self) -> bool {
        !matches!(self, InteractionState::Idle)
    }
}
