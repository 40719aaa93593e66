// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project feed loading state and the "show more" toggle.

use crate::io::feed::{self, FeedSource, FetchedFeed};
use crate::models::project::ProjectRecord;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Records shown before "Show More" is pressed.
pub const PREVIEW_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded(Vec<ProjectRecord>),
    /// The fetch failed; the gallery renders empty
    Failed,
}

/// Loads the project feed once and tracks which records are visible.
pub struct ProjectFeed {
    state: FeedState,
    show_all: bool,
    requested: bool,
    receiver: Option<Receiver<Result<FetchedFeed, String>>>,
}

impl Default for ProjectFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Loading,
            show_all: false,
            requested: false,
            receiver: None,
        }
    }

    /// Fetch the feed on a background thread. Only the first call does anything.
    pub fn start(&mut self, source: FeedSource) {
        if self.requested {
            return;
        }
        self.requested = true;

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        log::info!("Fetching projects from {}", source);

        std::thread::spawn(move || {
            let result = feed::fetch(&source).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Pick up a finished fetch, returning the thumbnails it decoded.
    ///
    /// A fetch thread that exits without answering counts as a failure.
    pub fn poll(&mut self) -> Option<FetchedFeed> {
        let result = match self.receiver.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err("fetch thread exited".to_string()),
        };
        self.receiver = None;
        self.finish(result)
    }

    /// Apply a fetch result. A failure is logged and leaves an empty gallery.
    pub fn finish(&mut self, result: Result<FetchedFeed, String>) -> Option<FetchedFeed> {
        self.requested = true;
        match result {
            Ok(mut fetched) => {
                log::info!("Loaded {} projects", fetched.projects.len());
                self.state = FeedState::Loaded(std::mem::take(&mut fetched.projects));
                Some(fetched)
            }
            Err(e) => {
                log::error!("Failed to fetch projects: {}", e);
                self.state = FeedState::Failed;
                None
            }
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FeedState::Loading)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        match &self.state {
            FeedState::Loaded(projects) => projects,
            _ => &[],
        }
    }

    /// The records to render right now.
    pub fn visible(&self) -> &[ProjectRecord] {
        let projects = self.projects();
        if self.show_all {
            projects
        } else {
            &projects[..projects.len().min(PREVIEW_COUNT)]
        }
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Whether there is anything for the toggle to reveal.
    pub fn has_more(&self) -> bool {
        self.projects().len() > PREVIEW_COUNT
    }

    /// Records hidden while collapsed.
    pub fn hidden_count(&self) -> usize {
        self.projects().len().saturating_sub(PREVIEW_COUNT)
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }
}
