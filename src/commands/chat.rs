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

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::Config;
use crate::knowledge::KnowledgeBase;
use crate::responder::{ConversationMessage, Responder};

/// Interactive chat loop on stdin/stdout. The session transcript is
/// held here for its length only; the first message gets the greeting
/// treatment, later ones do not.
pub async fn run(config: &Config, no_delay: bool) -> Result<()> {
    let knowledge = KnowledgeBase::load()?;
    let mut responder = Responder::new(knowledge, config);
    if no_delay {
        responder = responder.without_delay();
    }

    println!(
        "{}",
        "Juan Bot: ask about my projects, experience, or how to get in touch.".bold()
    );
    println!("{}", "Type 'exit' or press Ctrl-D to quit.".bright_black());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut history: Vec<ConversationMessage> = Vec::new();

    loop {
        let prompt = format!("{} ", "you>".cyan().bold());
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message == "exit" || message == "quit" {
            break;
        }

        // Generate first: the greeting rule looks at the history length
        // before this message was sent.
        let reply = responder.generate_response(message, &history).await;
        history.push(ConversationMessage::user(message));

        println!("{} {}", "bot>".green().bold(), reply.response);
        if let Some(suggestions) = &reply.suggested_pages {
            for suggestion in suggestions {
                let score_pct = (suggestion.relevance * 100.0) as u32;
                println!(
                    "     {} {} {}",
                    format!("[{}]", suggestion.page).cyan(),
                    suggestion.title.blue().bold(),
                    format!("{}% relevant", score_pct).green()
                );
            }
        }

        history.push(ConversationMessage::assistant(reply.response));
    }

    println!("{}", "Thanks for stopping by!".bright_black());
    Ok(())
}
