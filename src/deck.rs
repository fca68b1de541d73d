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

use std::collections::HashMap;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::card::StyleToken;

/// The deck shipped with the binary, used when no deck file is given.
const REFERENCE_DECK: [(u32, &str, &str); 8] = [
    (1, "Tu as quel âge?", "pink"),
    (2, "Comment tu t'appelles?", "purple"),
    (3, "Quelle est ta matière préférée?", "blue"),
    (4, "Tu aimes la musique?", "cyan"),
    (5, "Où tu habites?", "green"),
    (6, "Comment ça va?", "yellow"),
    (7, "Tu es de quelle nationalité?", "orange"),
    (8, "Quelle est ta profession?", "red"),
];

/// A fixed, ordered set of cards. Cards are never added or removed after
/// construction, so the id index is built once.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    index: HashMap<CardId, usize>,
}

impl Deck {
    /// Builds a deck. Fails if two cards share an id.
    pub fn new(cards: Vec<Card>) -> Fallible<Self> {
        let mut index = HashMap::with_capacity(cards.len());
        for (position, card) in cards.iter().enumerate() {
            if index.insert(card.id(), position).is_some() {
                return fail(format!("duplicate card id: {}.", card.id()));
            }
        }
        Ok(Self { cards, index })
    }

    /// The built-in deck.
    pub fn reference() -> Fallible<Self> {
        let cards = REFERENCE_DECK
            .iter()
            .map(|(n, question, style)| {
                Card::new(CardId::new(*n), *n, *question, StyleToken::new(*style))
            })
            .collect();
        Self::new(cards)
    }

    /// The position of the card with the given id, in deck order.
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
