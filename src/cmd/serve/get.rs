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

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::template::page_template;
use crate::cmd::serve::view::render_deck;
use crate::error::Fallible;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    match render_page(&state) {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(e) => {
            log::error!("{e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Internal Server Error".to_string()),
            )
        }
    }
}

fn render_page(state: &ServerState) -> Fallible<String> {
    let mut mutable = state.lock()?;
    // The cue plays on the first render after the transition that produced
    // it, and never again.
    let cue = mutable.pending_cue.take();
    let body = render_deck(&state.text, &mutable.controller, cue);
    let html = page_template(&state.text.title, body);
    Ok(html.into_string())
}

pub async fn summary_handler(State(state): State<ServerState>) -> Response {
    match state.lock() {
        Ok(mutable) => Json(mutable.controller.completion_summary()).into_response(),
        Err(e) => {
            log::error!("{e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
