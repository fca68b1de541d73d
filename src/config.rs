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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use serde::Deserialize;

use crate::deck::Deck;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::card::StyleToken;

/// The static strings shown around the cards.
#[derive(Clone, Debug, PartialEq)]
pub struct PageText {
    pub title: String,
    pub subtitle: String,
    pub counter_label: String,
    pub reset_label: String,
    pub dismiss_hint: String,
    pub celebration: String,
    pub question_label: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            title: "Flashcards Français".to_string(),
            subtitle: "Clicca sulle carte per scoprire le domande!".to_string(),
            counter_label: "completate".to_string(),
            reset_label: "Ricomincia".to_string(),
            dismiss_hint: "Clicca per chiudere".to_string(),
            celebration: "Excellent travail!".to_string(),
            question_label: "Question".to_string(),
        }
    }
}

/// A deck and the text of the page it is shown on.
#[derive(Clone, Debug)]
pub struct DeckConfig {
    pub text: PageText,
    pub deck: Deck,
}

/// The on-disk format of a deck file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    title: Option<String>,
    subtitle: Option<String>,
    counter_label: Option<String>,
    reset_label: Option<String>,
    dismiss_hint: Option<String>,
    celebration: Option<String>,
    question_label: Option<String>,
    #[serde(default, rename = "card")]
    cards: Vec<CardEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CardEntry {
    id: CardId,
    /// Defaults to the id.
    number: Option<u32>,
    question: String,
    style: Option<String>,
}

impl DeckConfig {
    /// The built-in deck.
    pub fn reference() -> Fallible<Self> {
        Ok(Self {
            text: PageText::default(),
            deck: Deck::reference()?,
        })
    }

    /// Loads the deck file at `path`, or the built-in deck if there is none.
    pub fn new(path: Option<String>) -> Fallible<Self> {
        match path {
            Some(path) => Self::load(&PathBuf::from(path)),
            None => {
                log::debug!("Using the reference deck.");
                Self::reference()
            }
        }
    }

    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail("deck file does not exist.");
        }
        log::debug!("Loading deck from {}...", path.display());
        let start = Instant::now();
        let content = read_to_string(path)?;
        let config = Self::parse(&content)?;
        let duration = start.elapsed().as_millis();
        log::debug!("Deck of {} cards loaded in {duration}ms.", config.deck.len());
        Ok(config)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let file: DeckFile = toml::from_str(content)?;
        let defaults = PageText::default();
        let text = PageText {
            title: file.title.unwrap_or(defaults.title),
            subtitle: file.subtitle.unwrap_or(defaults.subtitle),
            counter_label: file.counter_label.unwrap_or(defaults.counter_label),
            reset_label: file.reset_label.unwrap_or(defaults.reset_label),
            dismiss_hint: file.dismiss_hint.unwrap_or(defaults.dismiss_hint),
            celebration: file.celebration.unwrap_or(defaults.celebration),
            question_label: file.question_label.unwrap_or(defaults.question_label),
        };
        let mut cards = Vec::with_capacity(file.cards.len());
        for entry in file.cards {
            if entry.question.trim().is_empty() {
                return fail(format!("card {} has an empty question.", entry.id));
            }
            let number = entry.number.unwrap_or(entry.id.into_inner());
            let style = entry.style.map(StyleToken::new).unwrap_or_default();
            cards.push(Card::new(entry.id, number, entry.question, style));
        }
        let deck = Deck::new(cards)?;
        if deck.is_empty() {
            log::warn!("Deck file contains no cards.");
        }
        Ok(Self { text, deck })
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_full_file() -> Fallible<()> {
        let content = r#"
            title = "Spanish"
            celebration = "¡Muy bien!"

            [[card]]
            id = 10
            number = 1
            question = "¿Cómo estás?"
            style = "green"

            [[card]]
            id = 20
            question = "¿Dónde vives?"
        "#;
        let config = DeckConfig::parse(content)?;
        assert_eq!(config.text.title, "Spanish");
        assert_eq!(config.text.celebration, "¡Muy bien!");
        assert_eq!(config.text.reset_label, "Ricomincia");
        assert_eq!(config.deck.len(), 2);
        let first = &config.deck.cards()[0];
        assert_eq!(first.id(), CardId::new(10));
        assert_eq!(first.display_number(), 1);
        assert_eq!(first.style().as_str(), "green");
        let second = &config.deck.cards()[1];
        assert_eq!(second.display_number(), 20);
        assert_eq!(second.style().as_str(), StyleToken::DEFAULT);
        Ok(())
    }

    #[test]
    fn test_parse_empty_file() -> Fallible<()> {
        let config = DeckConfig::parse("")?;
        assert!(config.deck.is_empty());
        assert_eq!(config.text, PageText::default());
        Ok(())
    }

    #[test]
    fn test_duplicate_ids() {
        let content = r#"
            [[card]]
            id = 1
            question = "a"

            [[card]]
            id = 1
            question = "b"
        "#;
        assert!(DeckConfig::parse(content).is_err());
    }

    #[test]
    fn test_empty_question() {
        let content = r#"
            [[card]]
            id = 1
            question = "   "
        "#;
        let err = DeckConfig::parse(content).err().unwrap();
        assert_eq!(err.to_string(), "error: card 1 has an empty question.");
    }

    #[test]
    fn test_unknown_field() {
        let content = r#"
            [[card]]
            id = 1
            question = "a"
            colour = "red"
        "#;
        assert!(DeckConfig::parse(content).is_err());
    }

    #[test]
    fn test_load_non_existent_file() {
        let result = DeckConfig::new(Some("./derpherp.toml".to_string()));
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: deck file does not exist.");
    }

    #[test]
    fn test_load_from_disk() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.toml");
        write(&path, "[[card]]\nid = 3\nquestion = \"Tu aimes la musique?\"\n")?;
        let config = DeckConfig::load(&path)?;
        assert_eq!(config.deck.len(), 1);
        Ok(())
    }

    #[test]
    fn test_no_path_is_reference_deck() -> Fallible<()> {
        let config = DeckConfig::new(None)?;
        assert_eq!(config.deck.len(), 8);
        Ok(())
    }
}
