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

/// Suggestions at or below this relevance are dropped
pub const DEFAULT_MIN_RELEVANCE: f32 = 0.3;

/// Maximum number of page suggestions per message
pub const DEFAULT_MAX_SUGGESTIONS: usize = 4;

/// Artificial "thinking" delay bounds in milliseconds
pub const DEFAULT_DELAY_MIN_MS: u64 = 500;
pub const DEFAULT_DELAY_MAX_MS: u64 = 800;

/// Tokens shorter than this carry no matching signal ("a", "is", "to")
pub const MIN_TOKEN_LEN: usize = 3;

/// Score added when an entry keyword and a message token match exactly
pub const EXACT_MATCH_SCORE: u32 = 2;

/// Score added when one contains the other as a substring
pub const PARTIAL_MATCH_SCORE: u32 = 1;

/// A first message shorter than this (normalized) counts as a greeting
pub const SHORT_GREETING_LEN: usize = 10;

/// Knowledge-base entry keys for case studies start with this prefix
pub const CASE_STUDY_KEY_PREFIX: &str = "case-study-";
