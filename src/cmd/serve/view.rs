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

use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::cmd::serve::state::PendingCue;
use crate::config::PageText;
use crate::controller::DeckController;
use crate::markdown::markdown_to_html_inline;
use crate::types::card::Card;
use crate::types::card_state::CardState;

/// Renders the body of the page: header, counter, the grid of cards, the
/// modal for the expanded card, and the celebration overlay.
pub fn render_deck(text: &PageText, controller: &DeckController, cue: Option<PendingCue>) -> Markup {
    let summary = controller.completion_summary();
    let counter = format!(
        "{} / {} {}",
        summary.completed, summary.total, text.counter_label
    );
    html! {
        @if summary.all_completed {
            div.celebration {
                h1 { (text.celebration) }
            }
        }
        div.root {
            div.header {
                h1 { (text.title) }
                p.subtitle { (text.subtitle) }
                div.toolbar {
                    div.counter { (counter) }
                    form action="/" method="post" {
                        input type="hidden" name="action" value="Reset";
                        input id="reset" type="submit" value=(text.reset_label);
                    }
                }
            }
            div.grid {
                @for (card, state) in controller.cards() {
                    (render_tile(text, card, state))
                }
            }
        }
        @if let Some((card, state)) = controller.expanded_card() {
            (render_modal(text, card, state))
        }
        @if let Some(pending) = cue {
            audio id="cue"
                data-cue=(pending.cue.as_str())
                data-card=(pending.card.into_inner())
                src=(format!("/asset/{}", pending.cue.asset_name()))
                preload="auto" {}
        }
    }
}

/// A card in the grid. Completed cards are not wrapped in a form, so
/// clicking them does nothing.
fn render_tile(text: &PageText, card: &Card, state: &CardState) -> Markup {
    let faces = render_faces(text, card, state);
    let class = tile_class(card, state);
    html! {
        @if state.completed {
            div class=(class) id=(format!("card-{}", card.id())) {
                (faces)
            }
        } @else {
            form action="/" method="post" {
                input type="hidden" name="action" value="Activate";
                button class=(class) id=(format!("card-{}", card.id())) type="submit" name="card" value=(card.id().into_inner()) {
                    (faces)
                }
            }
        }
    }
}

/// The enlarged card. The backdrop posts the same activation as the card,
/// so clicking outside the card dismisses it.
fn render_modal(text: &PageText, card: &Card, state: &CardState) -> Markup {
    html! {
        form.modal action="/" method="post" {
            input type="hidden" name="action" value="Activate";
            button.backdrop type="submit" name="card" value=(card.id().into_inner()) title=(text.dismiss_hint) {}
            button class=(format!("{} enlarged", tile_class(card, state))) id="expanded" type="submit" name="card" value=(card.id().into_inner()) {
                (render_faces(text, card, state))
                div.dismiss { (text.dismiss_hint) }
            }
        }
    }
}

fn render_faces(text: &PageText, card: &Card, state: &CardState) -> Markup {
    let question = markdown_to_html_inline(card.question());
    html! {
        div.inner {
            div.face.number-face {
                div.number { (card.display_number()) }
                @if state.completed {
                    (badge())
                }
            }
            div.face.question-face {
                div.question-label {
                    (format!("{} {}", text.question_label, card.display_number()))
                }
                h2.question { (PreEscaped(question)) }
                @if state.completed {
                    (badge())
                }
            }
        }
    }
}

fn badge() -> Markup {
    html! {
        div.badge title="completed" {
            span.blue {}
            span.white { "✓" }
            span.red {}
        }
    }
}

fn tile_class(card: &Card, state: &CardState) -> String {
    let mut class = format!("card {} {}", card.style().css_class(), state.phase().as_str());
    if state.revealed {
        class.push_str(" revealed");
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::Cue;
    use crate::deck::Deck;
    use crate::types::card::CardId;

    fn render(controller: &DeckController, cue: Option<PendingCue>) -> String {
        render_deck(&PageText::default(), controller, cue).into_string()
    }

    #[test]
    fn test_initial_render() {
        let controller = DeckController::new(Deck::reference().unwrap());
        let html = render(&controller, None);
        assert!(html.contains("Flashcards Français"));
        assert!(html.contains("0 / 8 completate"));
        assert!(html.contains(r#"<div class="number">1</div>"#));
        assert!(!html.contains("class=\"modal\""));
        assert!(!html.contains("Excellent travail!"));
        assert!(!html.contains("<audio"));
        assert!(!html.contains("class=\"badge\""));
    }

    #[test]
    fn test_expanded_card_is_drawn_in_modal() {
        let mut controller = DeckController::new(Deck::reference().unwrap());
        controller.activate(CardId::new(4));
        let html = render(&controller, None);
        assert!(html.contains("class=\"modal\""));
        assert!(html.contains("id=\"expanded\""));
        assert!(html.contains("Clicca per chiudere"));
        assert!(html.contains("Question 4"));
        assert!(html.contains("card style-cyan expanded revealed enlarged"));
    }

    #[test]
    fn test_completed_card_has_no_form() {
        let mut controller = DeckController::new(Deck::reference().unwrap());
        controller.activate(CardId::new(1));
        controller.activate(CardId::new(1));
        let html = render(&controller, None);
        assert!(html.contains(r#"<div class="card style-pink completed revealed" id="card-1">"#));
        assert!(!html.contains(r#"name="card" value="1""#));
        assert!(html.contains(r#"name="card" value="2""#));
        assert!(html.contains("class=\"badge\""));
        assert!(html.contains("1 / 8 completate"));
    }

    #[test]
    fn test_celebration() {
        let mut controller = DeckController::new(Deck::reference().unwrap());
        for n in 1..=8 {
            controller.activate(CardId::new(n));
            controller.activate(CardId::new(n));
        }
        let html = render(&controller, None);
        assert!(html.contains("Excellent travail!"));
        assert!(html.contains("8 / 8 completate"));
    }

    #[test]
    fn test_cue_is_rendered() {
        let controller = DeckController::new(Deck::reference().unwrap());
        let cue = PendingCue {
            card: CardId::new(2),
            cue: Cue::Reveal,
        };
        let html = render(&controller, Some(cue));
        assert!(html.contains(r#"data-cue="reveal""#));
        assert!(html.contains(r#"src="/asset/flip.mp3""#));
    }
}
