//! Step machine - the linear wizard controller
//!
//! Drives an ordered, finite sequence of steps with gated forward movement,
//! one-step backward movement and a terminal "submit/summarize" state. Both
//! the assessment category traversal and the authoring wizard are instances
//! of this machine.

use crate::domain::error::DomainError;

/// Result of an advance attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step
    Moved,
    /// Already on the last step; the machine is now terminal
    Finished,
    /// The current step's gate refused; nothing changed
    Blocked,
}

/// Result of a retreat attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved to the previous step
    Moved,
    /// Retreated from the first step; the caller should leave the flow
    Exited,
}

/// Linear step machine over a fixed, non-empty step sequence.
///
/// The index moves by exactly one per operation; steps can never be skipped
/// or jumped to out of order.
#[derive(Debug, Clone)]
pub struct StepMachine<S> {
    steps: Vec<S>,
    index: usize,
    terminal: bool,
}

impl<S> StepMachine<S> {
    /// Build a machine; an empty step sequence is refused outright rather
    /// than silently behaving as terminal
    pub fn new(steps: Vec<S>) -> Result<Self, DomainError> {
        if steps.is_empty() {
            return Err(DomainError::EmptyStepSequence);
        }
        Ok(Self {
            steps,
            index: 0,
            terminal: false,
        })
    }

    pub fn current(&self) -> &S {
        &self.steps[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Whether the machine has passed its last step
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_last_step(&self) -> bool {
        self.index + 1 == self.steps.len()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Attempt to move forward. The gate is evaluated against the current
    /// step; a refused gate leaves the machine exactly as it was.
    pub fn advance<F>(&mut self, gate: F) -> Advance
    where
        F: FnOnce(&S) -> bool,
    {
        if !gate(&self.steps[self.index]) {
            return Advance::Blocked;
        }
        if self.is_last_step() {
            self.terminal = true;
            Advance::Finished
        } else {
            self.index += 1;
            Advance::Moved
        }
    }

    /// Move back one step, or signal exit when already at the first step.
    /// The terminal flag is left alone either way.
    pub fn retreat(&mut self) -> Retreat {
        if self.index == 0 {
            Retreat::Exited
        } else {
            self.index -= 1;
            Retreat::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> StepMachine<&'static str> {
        StepMachine::new(vec!["one", "two", "three"]).unwrap()
    }

    #[test]
    fn empty_sequences_are_refused() {
        assert_eq!(
            StepMachine::<String>::new(Vec::new()).unwrap_err(),
            DomainError::EmptyStepSequence
        );
    }

    #[test]
    fn advance_walks_forward_and_finishes_at_the_end() {
        let mut m = machine();
        assert_eq!(m.advance(|_| true), Advance::Moved);
        assert_eq!(m.advance(|_| true), Advance::Moved);
        assert_eq!(*m.current(), "three");
        assert!(!m.is_terminal());

        assert_eq!(m.advance(|_| true), Advance::Finished);
        assert!(m.is_terminal());
        // Index stays on the last step once terminal
        assert_eq!(m.index(), 2);
    }

    #[test]
    fn blocked_advance_changes_nothing() {
        let mut m = machine();
        assert_eq!(m.advance(|_| false), Advance::Blocked);
        assert_eq!(m.index(), 0);
        assert!(!m.is_terminal());
    }

    #[test]
    fn advance_never_decreases_the_index() {
        let mut m = machine();
        let mut last = m.index();
        for allowed in [false, true, false, true, true, true] {
            m.advance(|_| allowed);
            assert!(m.index() >= last);
            last = m.index();
        }
    }

    #[test]
    fn retreat_from_the_first_step_signals_exit() {
        let mut m = machine();
        assert_eq!(m.retreat(), Retreat::Exited);
        assert_eq!(m.index(), 0);

        m.advance(|_| true);
        assert_eq!(m.retreat(), Retreat::Moved);
        assert_eq!(m.index(), 0);
        assert_eq!(m.retreat(), Retreat::Exited);
    }

    #[test]
    fn retreat_leaves_terminal_alone() {
        let mut m = StepMachine::new(vec!["only"]).unwrap();
        assert_eq!(m.advance(|_| true), Advance::Finished);
        assert_eq!(m.retreat(), Retreat::Exited);
        assert!(m.is_terminal());
    }
}
