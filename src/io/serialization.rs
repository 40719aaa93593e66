// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page data deserialization.
//!
//! This module parses the project feed (JSON) and the site content
//! (YAML), including the content document built into the binary.

use crate::models::{content::SiteContent, project::ProjectCollection};
use anyhow::{Context, Result};
use std::path::Path;

/// Content shipped with the binary, used when no override is configured.
const DEFAULT_CONTENT: &str = include_str!("../../assets/content.yaml");

/// Parse and validate a project feed document.
pub fn parse_projects(json: &str) -> Result<ProjectCollection> {
    let data: ProjectCollection = serde_json::from_str(json)?;
    data.validate()?;
    Ok(data)
}

/// Import a project feed from a JSON file.
pub fn import_projects(path: &Path) -> Result<ProjectCollection> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_projects(&json).with_context(|| format!("parsing {}", path.display()))
}

/// Parse and validate a site content document.
pub fn parse_content(yaml: &str) -> Result<SiteContent> {
    let content: SiteContent = serde_yaml::from_str(yaml)?;
    content.validate()?;
    Ok(content)
}

/// Import site content from a YAML file.
pub fn import_content(path: &Path) -> Result<SiteContent> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_content(&yaml).with_context(|| format!("parsing {}", path.display()))
}

/// The built-in site content.
pub fn default_content() -> Result<SiteContent> {
    parse_content(DEFAULT_CONTENT).context("parsing built-in content")
}
