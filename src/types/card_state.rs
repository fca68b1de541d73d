// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The interaction state of a single card.
///
/// Invariants: a completed card is revealed, and is never expanded.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CardState {
    /// Whether the question face has been shown.
    pub revealed: bool,
    /// Whether the card is drawn enlarged, in the modal.
    pub expanded: bool,
    /// Whether the user has read the question and dismissed the modal.
    pub completed: bool,
    /// The value of `revealed` before the last transition. Used to detect
    /// the edge where the card was just revealed.
    pub previously_revealed: bool,
}

/// The four states a card can be in, as seen by the state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Showing the number face.
    Hidden,
    /// Showing the question face, at normal size.
    Revealed,
    /// Showing the question face, enlarged.
    Expanded,
    /// Done.
    Completed,
}

impl CardState {
    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else if self.expanded {
            Phase::Expanded
        } else if self.revealed {
            Phase::Revealed
        } else {
            Phase::Hidden
        }
    }

    /// True exactly when the last transition turned the card over.
    pub fn just_revealed(&self) -> bool {
        self.revealed && !self.previously_revealed
    }

    /// Applies one activation. Returns the state to store; the caller
    /// decides whether it differs from `self`.
    pub fn activated(self) -> CardState {
        match self.phase() {
            Phase::Hidden => CardState {
                revealed: true,
                expanded: true,
                completed: false,
                previously_revealed: self.revealed,
            },
            Phase::Expanded => CardState {
                revealed: true,
                expanded: false,
                completed: true,
                previously_revealed: self.revealed,
            },
            // Revealed can't be reached by clicking; a click leaves it alone.
            Phase::Revealed | Phase::Completed => self,
        }
    }
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Hidden => "hidden",
            Phase::Revealed => "revealed",
            Phase::Expanded => "expanded",
            Phase::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_hidden() {
        let state = CardState::default();
        assert_eq!(state.phase(), Phase::Hidden);
        assert!(!state.revealed);
        assert!(!state.expanded);
        assert!(!state.completed);
        assert!(!state.just_revealed());
    }

    #[test]
    fn test_hidden_to_expanded() {
        let state = CardState::default().activated();
        assert_eq!(state.phase(), Phase::Expanded);
        assert!(state.revealed);
        assert!(state.expanded);
        assert!(!state.completed);
        assert!(state.just_revealed());
    }

    #[test]
    fn test_expanded_to_completed() {
        let state = CardState::default().activated().activated();
        assert_eq!(state.phase(), Phase::Completed);
        assert!(state.revealed);
        assert!(!state.expanded);
        assert!(state.completed);
        assert!(!state.just_revealed());
    }

    #[test]
    fn test_completed_is_terminal() {
        let completed = CardState::default().activated().activated();
        assert_eq!(completed.activated(), completed);
    }

    #[test]
    fn test_revealed_is_left_alone() {
        let state = CardState {
            revealed: true,
            expanded: false,
            completed: false,
            previously_revealed: true,
        };
        assert_eq!(state.phase(), Phase::Revealed);
        let next = state.activated();
        assert_eq!(next, state);
        assert!(!next.just_revealed());
    }
}
