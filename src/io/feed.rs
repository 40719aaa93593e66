// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project feed retrieval.
//!
//! The feed is a static JSON document that lives either next to the
//! binary or behind a plain unauthenticated URL. Fetching is blocking and
//! meant to run on a background thread.

use super::{media, serialization};
use crate::models::project::{ProjectCollection, ProjectRecord};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where the project feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Path(PathBuf),
    Url(String),
}

impl FeedSource {
    /// Interpret a configured location: `http(s)://` is a URL, anything else a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            FeedSource::Url(location.to_string())
        } else {
            FeedSource::Path(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Path(path) => write!(f, "{}", path.display()),
            FeedSource::Url(url) => f.write_str(url),
        }
    }
}

/// A fetched feed plus whatever thumbnails could be decoded, keyed by project id.
#[derive(Debug, Clone, Default)]
pub struct FetchedFeed {
    pub projects: Vec<ProjectRecord>,
    pub thumbnails: HashMap<u32, media::LoadedImage>,
}

/// Fetch the feed once. No retries.
pub fn fetch(source: &FeedSource) -> Result<FetchedFeed> {
    match source {
        FeedSource::Path(path) => {
            let collection = serialization::import_projects(path)?;
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            let thumbnails = load_thumbnails(&collection.projects, base);
            Ok(FetchedFeed {
                projects: collection.projects,
                thumbnails,
            })
        }
        FeedSource::Url(url) => {
            let collection = fetch_url(url)?;
            Ok(FetchedFeed {
                projects: collection.projects,
                thumbnails: HashMap::new(),
            })
        }
    }
}

fn fetch_url(url: &str) -> Result<ProjectCollection> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("requesting {}", url))?
        .error_for_status()
        .with_context(|| format!("requesting {}", url))?;
    let body = response.text().context("reading feed body")?;
    serialization::parse_projects(&body).with_context(|| format!("parsing {}", url))
}

/// Decode local thumbnails. Failures fall back to a placeholder tile.
fn load_thumbnails(projects: &[ProjectRecord], base: &Path) -> HashMap<u32, media::LoadedImage> {
    let mut thumbnails = HashMap::new();
    for project in projects {
        if project.image.is_empty() || project.image.contains("://") {
            continue;
        }
        let path = base.join(&project.image);
        match media::load_image(&path, media::THUMBNAIL_MAX_EDGE) {
            Ok(image) => {
                thumbnails.insert(project.id, image);
            }
            Err(e) => log::warn!("Using placeholder for '{}': {:#}", project.title, e),
        }
    }
    thumbnails
}
