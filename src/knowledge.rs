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

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::CASE_STUDY_KEY_PREFIX;

/// Kind of page a knowledge entry (and thus a suggestion) points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    About,
    CaseStudy,
    Contact,
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageKind::Home => write!(f, "home"),
            PageKind::About => write!(f, "about"),
            PageKind::CaseStudy => write!(f, "case-study"),
            PageKind::Contact => write!(f, "contact"),
        }
    }
}

/// One matchable entry in the knowledge base: a navigable page plus the
/// keywords that should lead a visitor to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub key: String,
    pub kind: PageKind,
    pub keywords: Vec<String>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study_id: Option<String>,
}

/// Static page record as written in the knowledge file
#[derive(Debug, Clone, Deserialize)]
struct PageRecord {
    key: String,
    title: String,
    description: String,
    keywords: Vec<String>,
}

/// Case-study metadata record. The chat-facing knowledge entry is
/// generated from this so keywords stay in sync with the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudyMeta {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub year: String,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    pages: Vec<PageRecord>,
    #[serde(default)]
    case_studies: Vec<CaseStudyMeta>,
}

/// Flattened, immutable knowledge base. Loaded once at startup; entry
/// order is the file order (static pages first, then case studies), and
/// the matcher relies on it for deterministic tie-breaking.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    case_studies: Vec<CaseStudyMeta>,
}

impl KnowledgeBase {
    /// Load the knowledge base: user override from the data directory if
    /// present, otherwise the embedded default set.
    pub fn load() -> Result<Self> {
        let path = crate::storage::get_knowledge_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read knowledge file {}", path.display()))?;
            let kb = Self::from_toml(&content)?;
            debug!("Loaded {} knowledge entries from {}", kb.len(), path.display());
            Ok(kb)
        } else {
            Self::builtin()
        }
    }

    /// The embedded default knowledge set
    pub fn builtin() -> Result<Self> {
        Self::from_toml(include_str!("../knowledge-templates/default.toml"))
    }

    /// Parse and flatten a knowledge file. Case-study records become
    /// `case-study-<id>` entries carrying the short description.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: KnowledgeFile =
            toml::from_str(content).context("Failed to parse knowledge file")?;

        let mut entries = Vec::with_capacity(file.pages.len() + file.case_studies.len());

        for page in &file.pages {
            let kind = page_kind_for_key(&page.key)?;
            entries.push(KnowledgeEntry {
                key: page.key.clone(),
                kind,
                keywords: page.keywords.clone(),
                title: page.title.clone(),
                description: page.description.clone(),
                case_study_id: None,
            });
        }

        for case_study in &file.case_studies {
            entries.push(KnowledgeEntry {
                key: format!("{}{}", CASE_STUDY_KEY_PREFIX, case_study.id),
                kind: PageKind::CaseStudy,
                keywords: case_study.keywords.clone(),
                title: case_study.title.clone(),
                description: case_study.short_description.clone(),
                case_study_id: Some(case_study.id.clone()),
            });
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                bail!("Duplicate knowledge entry key: {}", entry.key);
            }
            if entry.keywords.is_empty() {
                bail!("Knowledge entry '{}' has no keywords", entry.key);
            }
        }

        Ok(Self {
            entries,
            case_studies: file.case_studies,
        })
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn case_studies(&self) -> &[CaseStudyMeta] {
        &self.case_studies
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Total keyword count across all entries
    pub fn keyword_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.keywords.len()).sum()
    }
}

/// Map a static entry key to its page kind. Case-study keys are handled
/// during flattening; anything else must be a known page.
fn page_kind_for_key(key: &str) -> Result<PageKind> {
    if key.starts_with(CASE_STUDY_KEY_PREFIX) {
        return Ok(PageKind::CaseStudy);
    }
    match key {
        "home" => Ok(PageKind::Home),
        "about" => Ok(PageKind::About),
        "contact" => Ok(PageKind::Contact),
        other => bail!("Unknown page key in knowledge file: {}", other),
    }
}
