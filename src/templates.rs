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

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::SHORT_GREETING_LEN;
use crate::knowledge::PageKind;
use crate::matcher::PageSuggestion;
use crate::text::normalize;

/// Coarse intent classification used to pick a canned response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseCategory {
    Greeting,
    Projects,
    AboutMe,
    Contact,
    Default,
}

static GREETING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(hi|hey|hello)").expect("greeting regex"));
static PROJECTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"project|work|case.?study|showcase|portfolio|see|view").expect("projects regex")
});
static ABOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"about|experience|skill|process|background|who|biography").expect("about regex")
});
static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"contact|email|reach|touch|hire|collaborate|message").expect("contact regex")
});

/// Canned responses per category. Every list has at least two entries
/// for variety; `Default` is the catch-all so selection never fails.
fn templates_for(category: ResponseCategory) -> &'static [&'static str] {
    match category {
        ResponseCategory::Greeting => &[
            "Hi there! I'm Juan Bot, a UX/UI designer. I'd love to help you explore my work and experience. What would you like to know?",
            "Hello! Welcome to my portfolio. Feel free to ask me about my projects, experience, or anything else you'd like to know.",
            "Hey! Thanks for visiting. What are you interested in learning about?",
        ],
        ResponseCategory::Projects => &[
            "I've worked on several interesting projects including B2P procurement redesign, healthcare platforms, and e-commerce optimization. What would you like to explore?",
            "My recent work spans multiple industries, from B2P platforms to healthcare and e-commerce. Which area interests you?",
        ],
        ResponseCategory::AboutMe => &[
            "I'm a UX/UI designer with experience in digital product design, user research, and design systems. I'd be happy to tell you more about my process and background.",
            "I specialize in creating user-centered designs that solve real problems. My work focuses on research-driven design and thoughtful user experiences.",
        ],
        ResponseCategory::Contact => &[
            "I'm always open to new opportunities and collaborations. The contact page has a form where you can reach out to me directly.",
            "Feel free to get in touch! You can send me a message on the contact page with any inquiries or collaboration ideas.",
        ],
        ResponseCategory::Default => &[
            "That's an interesting question! Let me suggest some pages that might help you find what you're looking for.",
            "I'm not entirely sure what you're asking, but here are some sections of my portfolio that might be helpful.",
        ],
    }
}

/// Classify a user message. Rules run in fixed priority order and the
/// first match wins; a message mentioning both hiring and projects is
/// therefore `Projects`.
pub fn categorize(
    message: &str,
    suggestions: &[PageSuggestion],
    conversation_length: usize,
) -> ResponseCategory {
    let normalized = normalize(message);

    // First message: short or a literal greeting
    if conversation_length == 0
        && (normalized.chars().count() < SHORT_GREETING_LEN || GREETING_RE.is_match(&normalized))
    {
        return ResponseCategory::Greeting;
    }

    if PROJECTS_RE.is_match(&normalized)
        || suggestions.iter().any(|s| s.page == PageKind::Home)
    {
        return ResponseCategory::Projects;
    }

    if ABOUT_RE.is_match(&normalized) {
        return ResponseCategory::AboutMe;
    }

    if CONTACT_RE.is_match(&normalized) {
        return ResponseCategory::Contact;
    }

    ResponseCategory::Default
}

/// Pick a uniform-random template for the category
pub fn select_template(category: ResponseCategory) -> String {
    let templates = templates_for(category);
    let index = rand::thread_rng().gen_range(0..templates.len());
    templates[index].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_short_message_is_greeting() {
        assert_eq!(categorize("hi", &[], 0), ResponseCategory::Greeting);
        assert_eq!(categorize("hello there friend", &[], 0), ResponseCategory::Greeting);
    }

    #[test]
    fn test_greeting_only_applies_to_first_message() {
        // Second message: falls through the remaining rules to Default
        assert_eq!(categorize("hi", &[], 2), ResponseCategory::Default);
    }

    #[test]
    fn test_projects_rule_precedes_contact_rule() {
        assert_eq!(
            categorize("I want to hire you for a project", &[], 1),
            ResponseCategory::Projects
        );
    }

    #[test]
    fn test_home_suggestion_forces_projects() {
        let suggestions = vec![PageSuggestion {
            page: PageKind::Home,
            case_study_id: None,
            title: "My Work".to_string(),
            description: "projects".to_string(),
            relevance: 0.8,
        }];
        assert_eq!(
            categorize("anything unrelated here", &suggestions, 1),
            ResponseCategory::Projects
        );
    }

    #[test]
    fn test_about_and_contact_rules_match() {
        assert_eq!(
            categorize("what is your design background?", &[], 1),
            ResponseCategory::AboutMe
        );
        assert_eq!(
            categorize("how do I email you?", &[], 1),
            ResponseCategory::Contact
        );
    }

    #[test]
    fn test_unmatched_message_is_default() {
        assert_eq!(categorize("asdf qwerty zzz", &[], 1), ResponseCategory::Default);
    }

    #[test]
    fn test_punctuation_does_not_break_greeting_detection() {
        assert_eq!(categorize("Hi!!!", &[], 0), ResponseCategory::Greeting);
    }

    #[test]
    fn test_every_category_has_templates() {
        for category in [
            ResponseCategory::Greeting,
            ResponseCategory::Projects,
            ResponseCategory::AboutMe,
            ResponseCategory::Contact,
            ResponseCategory::Default,
        ] {
            assert!(templates_for(category).len() >= 2);
        }
    }

    #[test]
    fn test_selected_template_comes_from_the_category_list() {
        for _ in 0..20 {
            let response = select_template(ResponseCategory::Projects);
            assert!(templates_for(ResponseCategory::Projects).contains(&response.as_str()));
        }
    }
}
