//! Finite-state machines for status fields.
//!
//! Every status enum that moves through a lifecycle implements `StatusLifecycle` by
//! listing, for each state, the states it may move to. Terminal states list none.
//! Services call `ensure_transition` before writing a new status so that a rejected move
//! never reaches the database.

use crate::server::error::transition::TransitionError;

pub trait StatusLifecycle: Copy + PartialEq + Sized + 'static {
    /// Entity name used in transition error messages.
    const ENTITY: &'static str;

    /// States reachable from `self` in a single step.
    fn allowed_transitions(self) -> &'static [Self];

    /// Stored string form, used in error messages.
    fn label(self) -> &'static str;

    fn can_transition_to(self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }

    fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Checks a single-step move from `self` to `next`.
    ///
    /// # Returns
    /// - `Ok(())` - `next` is in the allowed set of `self`
    /// - `Err(TransitionError::InvalidTransition)` - Move is not permitted
    fn ensure_transition(self, next: Self) -> Result<(), TransitionError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(TransitionError::InvalidTransition {
                entity: Self::ENTITY,
                from: self.label(),
                to: next.label(),
            })
        }
    }
}
