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

use serde::Deserialize;
use serde::Serialize;

/// Identifies a card within a deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn into_inner(self) -> u32 {
        self.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A presentation hint. The server turns it into a CSS class; nothing else
/// looks at it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StyleToken(String);

impl StyleToken {
    pub const DEFAULT: &'static str = "slate";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The CSS class for this token. Anything other than ASCII alphanumerics
    /// and dashes is dropped, so a deck file can't inject markup through it.
    pub fn css_class(&self) -> String {
        let token: String = self
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        if token.is_empty() {
            format!("style-{}", Self::DEFAULT)
        } else {
            format!("style-{token}")
        }
    }
}

impl Default for StyleToken {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

#[derive(Clone, Debug)]
pub struct Card {
    /// The card's identity within the deck.
    id: CardId,
    /// The number printed on the unrevealed face.
    display_number: u32,
    /// The question printed on the revealed face, as inline Markdown.
    question: String,
    style: StyleToken,
}

impl Card {
    pub fn new(
        id: CardId,
        display_number: u32,
        question: impl Into<String>,
        style: StyleToken,
    ) -> Self {
        Self {
            id,
            display_number,
            question: question.into().trim().to_string(),
            style,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn display_number(&self) -> u32 {
        self.display_number
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn style(&self) -> &StyleToken {
        &self.style
    }
}
