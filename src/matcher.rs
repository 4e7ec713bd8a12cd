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

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{
    DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_RELEVANCE, EXACT_MATCH_SCORE, PARTIAL_MATCH_SCORE,
};
use crate::knowledge::{KnowledgeBase, PageKind};
use crate::text::{extract_keywords, normalize};

/// A ranked navigation suggestion returned alongside a chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSuggestion {
    pub page: PageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study_id: Option<String>,
    pub title: String,
    pub description: String,
    pub relevance: f32,
}

/// Matcher tuning knobs
#[derive(Debug, Clone, Copy)]
pub struct MatcherOptions {
    pub min_relevance: f32,
    pub max_suggestions: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            min_relevance: DEFAULT_MIN_RELEVANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Match a user message to portfolio pages.
///
/// Each entry is scored over all (keyword, token) pairs: an exact match
/// counts double a substring match (either direction). The raw score is
/// divided by the entry's keyword count so long keyword lists are not
/// unfairly advantaged, then clamped to 1.0. Entries at or below
/// `min_relevance` are dropped; the rest are sorted descending (stable,
/// so ties keep knowledge-base order) and capped at `max_suggestions`.
pub fn match_question_to_pages(
    message: &str,
    knowledge: &KnowledgeBase,
    options: &MatcherOptions,
) -> Vec<PageSuggestion> {
    let tokens = extract_keywords(message);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<PageSuggestion> = Vec::new();

    for entry in knowledge.entries() {
        let mut score: u32 = 0;
        for keyword in &entry.keywords {
            let keyword = normalize(keyword);
            for token in &tokens {
                if keyword.contains(token.as_str()) || token.contains(keyword.as_str()) {
                    score += if keyword == *token {
                        EXACT_MATCH_SCORE
                    } else {
                        PARTIAL_MATCH_SCORE
                    };
                }
            }
        }

        if score == 0 {
            continue;
        }

        let relevance = (score as f32 / entry.keywords.len() as f32).min(1.0);
        trace!("entry '{}' scored {} -> relevance {:.3}", entry.key, score, relevance);

        if relevance > options.min_relevance {
            suggestions.push(PageSuggestion {
                page: entry.kind,
                case_study_id: entry.case_study_id.clone(),
                title: entry.title.clone(),
                description: entry.description.clone(),
                relevance,
            });
        }
    }

    // Vec::sort_by is stable, so equal scores keep source order
    suggestions.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(options.max_suggestions);

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knowledge() -> KnowledgeBase {
        KnowledgeBase::builtin().unwrap()
    }

    #[test]
    fn test_work_question_suggests_home() {
        let suggestions = match_question_to_pages(
            "show me your work and projects",
            &knowledge(),
            &MatcherOptions::default(),
        );
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().any(|s| s.page == PageKind::Home));
    }

    #[test]
    fn test_exact_keyword_hit_scores_full_relevance() {
        let toml = r#"
            [[pages]]
            key = "home"
            title = "My Work"
            description = "projects"
            keywords = ["portfolio"]
        "#;
        let kb = KnowledgeBase::from_toml(toml).unwrap();
        let suggestions =
            match_question_to_pages("Can I see your portfolio?", &kb, &MatcherOptions::default());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].page, PageKind::Home);
        // Raw score 2 (exact match), one keyword, clamped to 1.0
        assert_eq!(suggestions[0].relevance, 1.0);
    }

    #[test]
    fn test_suggestions_are_sorted_capped_and_above_threshold() {
        let options = MatcherOptions::default();
        let suggestions = match_question_to_pages(
            "tell me about your healthcare and ecommerce work and projects",
            &knowledge(),
            &options,
        );
        assert!(suggestions.len() <= options.max_suggestions);
        for pair in suggestions.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
        for suggestion in &suggestions {
            assert!(suggestion.relevance > options.min_relevance);
            assert!(suggestion.relevance <= 1.0);
        }
    }

    #[test]
    fn test_message_with_only_short_tokens_yields_nothing() {
        let suggestions =
            match_question_to_pages("hi", &knowledge(), &MatcherOptions::default());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_unrelated_message_yields_nothing() {
        let suggestions =
            match_question_to_pages("asdf qwerty", &knowledge(), &MatcherOptions::default());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_matching_is_deterministic() {
        let kb = knowledge();
        let options = MatcherOptions::default();
        let message = "show me the b2p procurement project";
        let first = match_question_to_pages(message, &kb, &options);
        let second = match_question_to_pages(message, &kb, &options);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.relevance, b.relevance);
        }
    }

    #[test]
    fn test_exact_match_outscores_substring_match() {
        let toml = r#"
            [[pages]]
            key = "home"
            title = "Home"
            description = "home"
            keywords = ["portfolio", "design"]

            [[pages]]
            key = "about"
            title = "About"
            description = "about"
            keywords = ["portfolios", "design"]
        "#;
        let kb = KnowledgeBase::from_toml(toml).unwrap();
        let suggestions =
            match_question_to_pages("portfolio", &kb, &MatcherOptions::default());
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].page, PageKind::Home);
        assert!(suggestions[0].relevance > suggestions[1].relevance);
    }

    #[test]
    fn test_case_study_suggestions_carry_their_id() {
        let suggestions = match_question_to_pages(
            "do you have healthcare patient experience?",
            &knowledge(),
            &MatcherOptions::default(),
        );
        let case_study = suggestions
            .iter()
            .find(|s| s.page == PageKind::CaseStudy)
            .expect("healthcare case study should match");
        assert!(case_study.case_study_id.is_some());
    }

    #[test]
    fn test_relevance_is_clamped_to_one() {
        let toml = r#"
            [[pages]]
            key = "home"
            title = "Home"
            description = "home"
            keywords = ["work"]
        "#;
        let kb = KnowledgeBase::from_toml(toml).unwrap();
        let suggestions =
            match_question_to_pages("work work work", &kb, &MatcherOptions::default());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].relevance, 1.0);
    }
}
