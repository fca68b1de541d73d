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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::serve::state::PendingCue;
use crate::cmd::serve::state::ServerState;
use crate::controller::Transition;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::CardId;

#[derive(Debug, Deserialize, PartialEq)]
enum Action {
    Activate,
    Reset,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    card: Option<CardId>,
}

pub async fn post_handler(State(state): State<ServerState>, Form(form): Form<FormData>) -> Redirect {
    match action_handler(&state, form.action, form.card) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: &ServerState, action: Action, card: Option<CardId>) -> Fallible<()> {
    let mut mutable = state.lock()?;
    match action {
        Action::Activate => {
            let Some(id) = card else {
                return fail("activation without a card id.");
            };
            let transition = mutable.controller.activate(id);
            log::debug!("Activate {id}: {transition}");
            // A cue left over from an earlier click on this card is stale
            // once the card has moved past the reveal.
            if let Transition::Applied { cue, .. } = transition {
                match cue {
                    Some(cue) => mutable.pending_cue = Some(PendingCue { card: id, cue }),
                    None => {
                        if mutable.pending_cue.is_some_and(|pending| pending.card == id) {
                            mutable.pending_cue = None;
                        }
                    }
                }
            }
        }
        Action::Reset => {
            log::debug!("Resetting deck.");
            mutable.controller.reset();
            mutable.pending_cue = None;
        }
    }
    Ok(())
}
