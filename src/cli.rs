// Copyright 2026 Juan Osorio
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

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "juanbot")]
#[command(version, author = "Juan Osorio")]
#[command(about = "Keyword-matching chatbot core for a personal portfolio site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the bot a single question and print its reply
    Ask {
        /// The question to ask
        message: String,

        /// Minimum relevance score for page suggestions (0.0-1.0)
        #[arg(long)]
        min_relevance: Option<f32>,

        /// Maximum number of page suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Skip the artificial thinking delay
        #[arg(long)]
        no_delay: bool,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Start an interactive chat session
    Chat {
        /// Skip the artificial thinking delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Match a message against the knowledge base and print ranked suggestions
    Suggest {
        /// The message to match
        message: String,

        /// Minimum relevance score for page suggestions (0.0-1.0)
        #[arg(long)]
        min_relevance: Option<f32>,

        /// Maximum number of page suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the flattened knowledge base entries
    Pages {
        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "compact")]
        format: String,
    },

    /// Show knowledge base statistics
    Stats,
}
