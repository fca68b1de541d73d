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

use crate::types::card_state::CardState;

/// A one-shot effect played by the browser.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cue {
    /// A card was turned over for the first time.
    Reveal,
}

impl Cue {
    /// Compares two consecutive snapshots of a card and returns the cue the
    /// transition between them should play, if any.
    pub fn detect(before: &CardState, after: &CardState) -> Option<Cue> {
        if !before.revealed && after.just_revealed() {
            Some(Cue::Reveal)
        } else {
            None
        }
    }

    /// The file name of the cue's audio, relative to the asset directory.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Cue::Reveal => "flip.mp3",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Reveal => "reveal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reveal_edge() {
        let hidden = CardState::default();
        let expanded = hidden.activated();
        let completed = expanded.activated();
        assert_eq!(Cue::detect(&hidden, &expanded), Some(Cue::Reveal));
        assert_eq!(Cue::detect(&expanded, &completed), None);
        assert_eq!(Cue::detect(&completed, &completed.activated()), None);
    }

    #[test]
    fn test_no_cue_on_rerender() {
        let expanded = CardState::default().activated();
        assert_eq!(Cue::detect(&expanded, &expanded), None);
    }

    #[test]
    fn test_no_cue_on_reset() {
        let completed = CardState::default().activated().activated();
        assert_eq!(Cue::detect(&completed, &CardState::default()), None);
    }
}
