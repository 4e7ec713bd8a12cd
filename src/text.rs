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

use crate::constants::MIN_TOKEN_LEN;

/// Normalize text for matching: lowercase, strip everything that is not
/// a word character or whitespace, trim the ends.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split normalized text into matching tokens, dropping anything shorter
/// than `MIN_TOKEN_LEN` characters. Empty input yields an empty vec.
pub fn extract_keywords(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Can I see your portfolio?"), "can i see your portfolio");
        assert_eq!(normalize("  Hello, World!  "), "hello world");
        assert_eq!(normalize("e-commerce"), "ecommerce");
    }

    #[test]
    fn test_normalize_keeps_underscores_and_digits() {
        assert_eq!(normalize("b2p_redesign 2024"), "b2p_redesign 2024");
    }

    #[test]
    fn test_extract_keywords_drops_short_tokens() {
        let tokens = extract_keywords("Can I see your portfolio?");
        assert_eq!(tokens, vec!["can", "see", "your", "portfolio"]);
    }

    #[test]
    fn test_extract_keywords_is_empty_for_short_or_empty_input() {
        assert!(extract_keywords("hi").is_empty());
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("a to is").is_empty());
    }

    #[test]
    fn test_extract_keywords_returns_lowercase_only() {
        for token in extract_keywords("SHOW Me The PROJECTS!") {
            assert_eq!(token, token.to_lowercase());
            assert!(token.chars().count() >= 3);
        }
    }
}
