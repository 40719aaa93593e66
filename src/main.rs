// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - a single-page developer portfolio
//!
//! A cross-platform desktop rendition of a personal portfolio site:
//! biography, skills, project gallery, services and a contact form, with
//! light/dark theme switching.

mod app;
mod config;
mod io;
mod models;
mod state;
mod ui;
mod util;

use anyhow::Result;
use app::PortfolioApp;
use config::AppConfig;
use io::{email::EmailJsMailer, serialization};
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::from_env();
    let content = match &config.content_path {
        Some(path) => serialization::import_content(path)?,
        None => serialization::default_content()?,
    };
    let title = format!("{} - Portfolio", content.owner.name);

    // Configure egui options; the theme never follows the OS
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 600.0])
            .with_title(title),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PortfolioApp::new(
                config,
                content,
                Arc::new(EmailJsMailer::new()),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
