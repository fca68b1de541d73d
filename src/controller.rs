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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

use crate::cue::Cue;
use crate::deck::Deck;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::card_state::CardState;
use crate::types::card_state::Phase;

/// Owns the deck and the state of every card in it. All mutation goes
/// through [`DeckController::activate`] and [`DeckController::reset`].
pub struct DeckController {
    deck: Deck,
    /// Parallel to `deck.cards()`.
    states: Vec<CardState>,
}

/// What an activation did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Applied {
        id: CardId,
        from: Phase,
        to: Phase,
        cue: Option<Cue>,
    },
    Ignored(IgnoreReason),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IgnoreReason {
    /// No card in the deck has this id.
    UnknownCard,
    /// The card is already completed.
    AlreadyCompleted,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
    pub all_completed: bool,
}

impl Transition {
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Transition::Applied { cue, .. } => *cue,
            Transition::Ignored(_) => None,
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Applied { id, from, to, cue } => {
                write!(f, "card {id}: {} -> {}", from.as_str(), to.as_str())?;
                if let Some(cue) = cue {
                    write!(f, " ({} cue)", cue.as_str())?;
                }
                Ok(())
            }
            Transition::Ignored(IgnoreReason::UnknownCard) => write!(f, "ignored: unknown card"),
            Transition::Ignored(IgnoreReason::AlreadyCompleted) => {
                write!(f, "ignored: card already completed")
            }
        }
    }
}

impl DeckController {
    pub fn new(deck: Deck) -> Self {
        let states = vec![CardState::default(); deck.len()];
        Self { deck, states }
    }

    /// Applies one click to the card with the given id. Unknown ids and
    /// completed cards are ignored. No other card is touched.
    pub fn activate(&mut self, id: CardId) -> Transition {
        let Some(position) = self.deck.position(id) else {
            return Transition::Ignored(IgnoreReason::UnknownCard);
        };
        let before = self.states[position];
        if before.completed {
            return Transition::Ignored(IgnoreReason::AlreadyCompleted);
        }
        let after = before.activated();
        self.states[position] = after;
        Transition::Applied {
            id,
            from: before.phase(),
            to: after.phase(),
            cue: Cue::detect(&before, &after),
        }
    }

    /// Puts every card back into its initial state.
    pub fn reset(&mut self) {
        self.states.fill(CardState::default());
    }

    pub fn completion_summary(&self) -> CompletionSummary {
        let completed = self.states.iter().filter(|state| state.completed).count();
        let total = self.states.len();
        CompletionSummary {
            completed,
            total,
            all_completed: total > 0 && completed == total,
        }
    }

    pub fn state(&self, id: CardId) -> Option<&CardState> {
        self.deck.position(id).map(|position| &self.states[position])
    }

    /// Every card with its state, in deck order.
    pub fn cards(&self) -> impl Iterator<Item = (&Card, &CardState)> {
        self.deck.cards().iter().zip(self.states.iter())
    }

    /// The card currently shown in the modal. Nothing stops two cards from
    /// being expanded at once; the first one in deck order wins.
    pub fn expanded_card(&self) -> Option<(&Card, &CardState)> {
        self.cards().find(|(_, state)| state.expanded)
    }
}
