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
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_RELEVANCE,
};

/// Matcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub min_relevance: f32,
    pub max_suggestions: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_relevance: DEFAULT_MIN_RELEVANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Responder configuration (artificial delay bounds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: DEFAULT_DELAY_MIN_MS,
            delay_max_ms: DEFAULT_DELAY_MAX_MS,
        }
    }
}

/// Main configuration for juanbot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub matcher: MatcherConfig,
    pub responder: ResponderConfig,
}

impl Config {
    /// Load configuration from config.toml file
    /// First tries to load from system config directory, falls back to embedded template
    pub fn load() -> Result<Self> {
        let config_path = crate::storage::get_system_config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Config doesn't exist, create from template
            let template_content = include_str!("../config-templates/default.toml");
            let config: Self = toml::from_str(template_content)?;

            // Save to system config directory
            if let Some(parent) = config_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&config_path, template_content)?;

            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_template_matches_defaults() {
        let template: Config =
            toml::from_str(include_str!("../config-templates/default.toml")).unwrap();
        let defaults = Config::default();
        assert_eq!(template.matcher.min_relevance, defaults.matcher.min_relevance);
        assert_eq!(template.matcher.max_suggestions, defaults.matcher.max_suggestions);
        assert_eq!(template.responder.delay_min_ms, defaults.responder.delay_min_ms);
        assert_eq!(template.responder.delay_max_ms, defaults.responder.delay_max_ms);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("[matcher]\nmin_relevance = 0.5\nmax_suggestions = 2\n").unwrap();
        assert_eq!(config.matcher.max_suggestions, 2);
        assert_eq!(config.matcher.min_relevance, 0.5);
        assert_eq!(config.responder.delay_min_ms, DEFAULT_DELAY_MIN_MS);
        assert_eq!(config.responder.delay_max_ms, DEFAULT_DELAY_MAX_MS);
    }
}
