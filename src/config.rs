// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Startup configuration from environment variables.

use crate::io::email::EmailConfig;
use crate::io::feed::FeedSource;
use std::path::PathBuf;

pub const DEFAULT_PROJECTS: &str = "assets/projects.json";

/// Everything read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the project feed lives (`PORTFOLIO_PROJECTS`)
    pub projects: FeedSource,
    /// Replacement site content (`PORTFOLIO_CONTENT`)
    pub content_path: Option<PathBuf>,
    /// Delivery credentials, absent unless all of them are set
    pub email: Option<EmailConfig>,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let email = EmailConfig::new(
            set("EMAILJS_SERVICE_ID"),
            set("EMAILJS_TEMPLATE_ID"),
            set("EMAILJS_PUBLIC_KEY"),
            set("EMAILJS_API_URL"),
        );
        if email.is_none() {
            log::warn!("EmailJS is not configured; the contact form will report an error on send");
        }

        Self {
            projects: FeedSource::parse(&set("PORTFOLIO_PROJECTS").unwrap_or_else(|| DEFAULT_PROJECTS.to_string())),
            content_path: set("PORTFOLIO_CONTENT").map(PathBuf::from),
            email,
        }
    }
}
