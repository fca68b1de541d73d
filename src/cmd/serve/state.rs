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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::config::PageText;
use crate::controller::DeckController;
use crate::cue::Cue;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::card::CardId;

#[derive(Clone)]
pub struct ServerState {
    pub text: Arc<PageText>,
    /// Where cue audio and the background image are read from.
    pub asset_dir: Option<PathBuf>,
    pub mutable: Arc<Mutex<MutableState>>,
}

pub struct MutableState {
    pub controller: DeckController,
    /// A cue produced by the last transition, not yet rendered.
    pub pending_cue: Option<PendingCue>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingCue {
    pub card: CardId,
    pub cue: Cue,
}

impl ServerState {
    pub fn new(text: PageText, asset_dir: Option<PathBuf>, controller: DeckController) -> Self {
        Self {
            text: Arc::new(text),
            asset_dir,
            mutable: Arc::new(Mutex::new(MutableState {
                controller,
                pending_cue: None,
            })),
        }
    }

    pub fn lock(&self) -> Fallible<MutexGuard<'_, MutableState>> {
        self.mutable
            .lock()
            .map_err(|_| ErrorReport::new("server state lock is poisoned."))
    }
}
