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

use clap::Parser;

use crate::cmd::check::check_deck;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::config::DeckConfig;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the deck and open it in the browser.
    Serve {
        /// Path to a deck file. Defaults to the built-in deck.
        #[arg(long)]
        deck: Option<String>,
        /// Directory holding the cue audio and the background image.
        #[arg(long)]
        assets: Option<String>,
        /// The port to use for the web server.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Check that a deck file is valid.
    Check {
        /// Path to a deck file. Defaults to the built-in deck.
        #[arg(long)]
        deck: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            deck,
            assets,
            port,
            no_open,
        } => {
            let deck = DeckConfig::new(deck)?;
            let config = ServerConfig {
                deck,
                asset_dir: assets.map(PathBuf::from),
                port,
                open_browser: !no_open,
            };
            start_server(config).await
        }
        Command::Check { deck } => check_deck(deck),
    }
}
