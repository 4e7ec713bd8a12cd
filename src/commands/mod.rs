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

mod chat;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::Commands;
use crate::config::Config;
use crate::knowledge::{KnowledgeBase, PageKind};
use crate::matcher::{match_question_to_pages, MatcherOptions, PageSuggestion};
use crate::responder::Responder;

pub async fn execute(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Ask {
            message,
            min_relevance,
            limit,
            no_delay,
            format,
        } => ask(config, &message, min_relevance, limit, no_delay, &format).await,
        Commands::Chat { no_delay } => chat::run(config, no_delay).await,
        Commands::Suggest {
            message,
            min_relevance,
            limit,
            format,
        } => suggest(config, &message, min_relevance, limit, &format),
        Commands::Pages { format } => pages(&format),
        Commands::Stats => stats(),
    }
}

/// Matcher options from config with CLI overrides applied
fn matcher_options(
    config: &Config,
    min_relevance: Option<f32>,
    limit: Option<usize>,
) -> MatcherOptions {
    MatcherOptions {
        min_relevance: min_relevance.unwrap_or(config.matcher.min_relevance),
        max_suggestions: limit.unwrap_or(config.matcher.max_suggestions),
    }
}

async fn ask(
    config: &Config,
    message: &str,
    min_relevance: Option<f32>,
    limit: Option<usize>,
    no_delay: bool,
    format: &str,
) -> Result<()> {
    let knowledge = KnowledgeBase::load()?;
    let mut responder = Responder::new(knowledge, config)
        .with_matcher_options(matcher_options(config, min_relevance, limit));
    if no_delay {
        responder = responder.without_delay();
    }

    let reply = responder.generate_response(message, &[]).await;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&reply)?),
        "compact" => {
            let mut line = reply.response.clone();
            if let Some(suggestions) = &reply.suggested_pages {
                let pages: Vec<String> = suggestions
                    .iter()
                    .map(|s| format!("{} ({}%)", s.title, (s.relevance * 100.0) as u32))
                    .collect();
                line.push_str(&format!(" | {}", pages.join(", ")));
            }
            println!("{}", line);
        }
        "text" => {
            println!("{}", reply.response);
            if let Some(suggestions) = &reply.suggested_pages {
                println!();
                print!("{}", format_suggestions(suggestions));
            }
        }
        other => bail!("Unknown format: {}", other),
    }

    Ok(())
}

fn suggest(
    config: &Config,
    message: &str,
    min_relevance: Option<f32>,
    limit: Option<usize>,
    format: &str,
) -> Result<()> {
    let knowledge = KnowledgeBase::load()?;
    let options = matcher_options(config, min_relevance, limit);
    let suggestions = match_question_to_pages(message, &knowledge, &options);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&suggestions)?),
        "compact" => {
            if suggestions.is_empty() {
                println!("No matching pages");
            }
            for suggestion in &suggestions {
                println!(
                    "{:.2}  {:<12} {}",
                    suggestion.relevance,
                    suggestion.page.to_string(),
                    suggestion.title
                );
            }
        }
        "text" => print!("{}", format_suggestions(&suggestions)),
        other => bail!("Unknown format: {}", other),
    }

    Ok(())
}

fn pages(format: &str) -> Result<()> {
    let knowledge = KnowledgeBase::load()?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(knowledge.entries())?),
        "compact" => {
            for entry in knowledge.entries() {
                println!(
                    "{:<42} {:<12} {:>3} keywords  {}",
                    entry.key,
                    entry.kind.to_string(),
                    entry.keywords.len(),
                    entry.title
                );
            }
        }
        "text" => {
            for entry in knowledge.entries() {
                println!("{}", "━".repeat(60));
                println!("{}", entry.title.blue().bold());
                println!("{}", entry.description.bright_black());
                println!("{} {}", "kind:".cyan(), entry.kind);
                println!("{} {}", "keywords:".cyan(), entry.keywords.join(", "));
            }
        }
        other => bail!("Unknown format: {}", other),
    }

    Ok(())
}

fn stats() -> Result<()> {
    let knowledge = KnowledgeBase::load()?;

    let mut by_kind = [
        (PageKind::Home, 0usize),
        (PageKind::About, 0usize),
        (PageKind::CaseStudy, 0usize),
        (PageKind::Contact, 0usize),
    ];
    for entry in knowledge.entries() {
        for (kind, count) in &mut by_kind {
            if *kind == entry.kind {
                *count += 1;
            }
        }
    }

    println!("{}", "Knowledge Base Statistics".bold());
    println!("Total Entries: {}", knowledge.len());
    println!("Case Studies: {}", knowledge.case_studies().len());
    println!("Total Keywords: {}", knowledge.keyword_count());
    if !knowledge.is_empty() {
        println!(
            "Average Keywords/Entry: {}",
            knowledge.keyword_count() / knowledge.len()
        );
    }
    for (kind, count) in by_kind {
        if count > 0 {
            println!("  {}: {}", kind, count);
        }
    }

    Ok(())
}

/// Block formatting for ranked suggestions
fn format_suggestions(suggestions: &[PageSuggestion]) -> String {
    if suggestions.is_empty() {
        return "No matching pages\n".to_string();
    }

    let mut output = String::new();
    for suggestion in suggestions {
        output.push_str(&"━".repeat(60));
        output.push('\n');
        output.push_str(&suggestion.title.blue().bold().to_string());
        output.push('\n');
        output.push_str(&suggestion.description.bright_black().to_string());
        output.push('\n');

        let mut target = suggestion.page.to_string();
        if let Some(id) = &suggestion.case_study_id {
            target.push_str(&format!("/{}", id));
        }
        output.push_str(&target.cyan().to_string());
        output.push('\n');

        let score_pct = (suggestion.relevance * 100.0) as u32;
        output.push_str(&format!("{}% relevant", score_pct).green().to_string());
        output.push_str("\n\n");
    }

    output
}
