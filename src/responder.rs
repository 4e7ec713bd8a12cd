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

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::knowledge::KnowledgeBase;
use crate::matcher::{match_question_to_pages, MatcherOptions, PageSuggestion};
use crate::templates::{categorize, select_template};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the session transcript. The responder only reads the
/// transcript's length (greeting detection); it never scores history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl ConversationMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// Result of one orchestration call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_pages: Option<Vec<PageSuggestion>>,
}

/// Sequences the core: match pages, categorize intent, pick a template.
/// Holds the immutable knowledge base; safe to share across calls.
#[derive(Debug, Clone)]
pub struct Responder {
    knowledge: KnowledgeBase,
    options: MatcherOptions,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl Responder {
    pub fn new(knowledge: KnowledgeBase, config: &Config) -> Self {
        Self {
            knowledge,
            options: MatcherOptions {
                min_relevance: config.matcher.min_relevance,
                max_suggestions: config.matcher.max_suggestions,
            },
            delay_min_ms: config.responder.delay_min_ms,
            delay_max_ms: config.responder.delay_max_ms,
        }
    }

    /// Override the matcher tuning (CLI flags)
    pub fn with_matcher_options(mut self, options: MatcherOptions) -> Self {
        self.options = options;
        self
    }

    /// Drop the artificial thinking delay (one-shot CLI runs, tests)
    pub fn without_delay(mut self) -> Self {
        self.delay_min_ms = 0;
        self.delay_max_ms = 0;
        self
    }

    /// Generate a reply to a user message. The delay is cosmetic only;
    /// matching and categorization are deterministic, template choice
    /// is random. Cannot fail: unmatched input yields the default
    /// category and no suggestions.
    pub async fn generate_response(
        &self,
        message: &str,
        history: &[ConversationMessage],
    ) -> AiResponse {
        // "Thinking" pause, uniform within the configured bounds.
        // Computed before the await point so the rng is not held across it.
        let delay_ms = if self.delay_max_ms > self.delay_min_ms {
            rand::thread_rng().gen_range(self.delay_min_ms..=self.delay_max_ms)
        } else {
            self.delay_min_ms
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let suggestions = match_question_to_pages(message, &self.knowledge, &self.options);
        let category = categorize(message, &suggestions, history.len());
        debug!(?category, suggestions = suggestions.len(), "generated reply");

        AiResponse {
            response: select_template(category),
            suggested_pages: if suggestions.is_empty() {
                None
            } else {
                Some(suggestions)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::PageKind;
    use crate::templates::ResponseCategory;

    fn responder() -> Responder {
        let knowledge = KnowledgeBase::builtin().unwrap();
        Responder::new(knowledge, &Config::default()).without_delay()
    }

    #[tokio::test]
    async fn test_work_question_gets_suggestions() {
        let reply = responder()
            .generate_response("show me your work and projects", &[])
            .await;
        let pages = reply.suggested_pages.expect("should suggest pages");
        assert!(pages.iter().any(|s| s.page == PageKind::Home));
    }

    #[tokio::test]
    async fn test_unrelated_message_has_no_suggestions() {
        let reply = responder().generate_response("asdf qwerty", &[]).await;
        assert!(reply.suggested_pages.is_none());
        assert!(!reply.response.is_empty());
    }

    #[tokio::test]
    async fn test_greeting_only_on_empty_history() {
        let responder = responder();
        let history = [
            ConversationMessage::user("hi"),
            ConversationMessage::assistant("Hello!"),
        ];

        // With history, "hi" falls through to the non-greeting rules
        let category = categorize("hi", &[], history.len());
        assert_ne!(category, ResponseCategory::Greeting);

        let reply = responder.generate_response("hi", &history).await;
        assert!(!reply.response.is_empty());
    }

    #[tokio::test]
    async fn test_responses_resolve_independently() {
        let responder = responder();
        let (a, b) = tokio::join!(
            responder.generate_response("show me your projects", &[]),
            responder.generate_response("how can I contact you?", &[]),
        );
        assert!(a.suggested_pages.is_some());
        assert!(!b.response.is_empty());
    }

    #[test]
    fn test_messages_carry_epoch_millis() {
        let before = Utc::now().timestamp_millis();
        let message = ConversationMessage::user("hello");
        let after = Utc::now().timestamp_millis();
        assert!(message.timestamp >= before && message.timestamp <= after);
        assert_eq!(message.role, Role::User);
    }
}
