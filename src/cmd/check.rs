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

use crate::config::DeckConfig;
use crate::error::Fallible;

pub fn check_deck(path: Option<String>) -> Fallible<()> {
    let config = DeckConfig::new(path)?;
    println!("ok ({} cards)", config.deck.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_deck;

    #[test]
    fn test_non_existent_file() {
        assert!(check_deck(Some("./derpherp.toml".to_string())).is_err());
    }

    #[test]
    fn test_test_deck() {
        assert!(check_deck(Some("./test/deck.toml".to_string())).is_ok());
    }

    #[test]
    fn test_reference_deck() {
        assert!(check_deck(None).is_ok());
    }
}
