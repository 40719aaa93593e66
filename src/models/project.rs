// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project gallery records.
//!
//! This module defines the records shown in the Projects section and the
//! document they are loaded from.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Thumbnail path (relative to the feed file) or URL
    #[serde(default)]
    pub image: String,
    pub live_url: String,
    pub github_url: String,
}

/// The static project feed document: `{ "projects": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCollection {
    pub projects: Vec<ProjectRecord>,
}

impl ProjectCollection {
    /// Project ids key the thumbnails, so they must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                bail!("duplicate project id {} ('{}')", project.id, project.title);
            }
        }
        Ok(())
    }
}
