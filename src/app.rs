// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the page-level structure that implements the
//! eframe::App trait. It owns every stateful piece of the page, drives
//! their timers from the frame clock, and applies the actions the section
//! components report.

use crate::config::AppConfig;
use crate::io::email::Mailer;
use crate::io::feed::FetchedFeed;
use crate::models::content::SiteContent;
use crate::state::{
    contact::{ContactForm, SubmissionState},
    feed::ProjectFeed,
    nav::Navigation,
    scheduler::{earliest_wake, Scheduled},
    theme::{self, ThemeState},
    typing::TypingAnimation,
};
use crate::ui::{about, contact, footer, hero, nav_bar, palette, projects, services, skills, PageAction};
use crate::util::time;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// How often to check background work (feed fetch, mail delivery) for results.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Widest the page content grows before it is centered.
const MAX_CONTENT_WIDTH: f32 = 1100.0;

/// Main application state.
pub struct PortfolioApp {
    config: AppConfig,
    content: SiteContent,
    mailer: Arc<dyn Mailer>,

    /// Set once the first frame has been rendered
    mounted: bool,

    theme: ThemeState,
    typing: TypingAnimation,
    feed: ProjectFeed,
    form: ContactForm,
    nav: Navigation,

    /// Uploaded project thumbnails by project id
    thumbnails: HashMap<u32, egui::TextureHandle>,
}

impl PortfolioApp {
    /// Create the page. Nothing starts until the first frame has rendered.
    pub fn new(config: AppConfig, content: SiteContent, mailer: Arc<dyn Mailer>) -> Self {
        let typing = TypingAnimation::new(content.hero.titles.clone());
        Self {
            config,
            content,
            mailer,
            mounted: false,
            theme: ThemeState::new(),
            typing,
            feed: ProjectFeed::new(),
            form: ContactForm::new(),
            nav: Navigation::new(),
            thumbnails: HashMap::new(),
        }
    }

    /// Resolve the theme, start the animation and fetch the projects.
    fn mount(&mut self, ctx: &egui::Context, frame: &eframe::Frame, now: Duration) {
        let theme = self.theme.resolve(frame.storage());
        ctx.set_visuals(palette::visuals(theme));
        self.typing.start(now);
        self.feed.start(self.config.projects.clone());
        self.mounted = true;
        log::info!("Page mounted with {} theme", theme.as_str());
    }

    /// Cancel every pending timer.
    fn unmount(&mut self) {
        self.typing.stop();
        self.form.cancel_timers();
    }

    /// Turn decoded thumbnails into textures.
    fn upload_thumbnails(&mut self, ctx: &egui::Context, fetched: FetchedFeed) {
        for (id, image) in fetched.thumbnails {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.pixels);
            let texture = ctx.load_texture(format!("project-{}", id), color_image, egui::TextureOptions::LINEAR);
            self.thumbnails.insert(id, texture);
        }
        log::info!("Uploaded {} project thumbnails", self.thumbnails.len());
    }

    fn handle_action(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame, now: Duration, action: PageAction) {
        match action {
            PageAction::ScrollTo(section) => self.nav.scroll_to(section),
            PageAction::ToggleMenu => self.nav.toggle_menu(),
            PageAction::ToggleTheme => {
                self.theme.toggle(frame.storage_mut().map(|s| s as &mut dyn eframe::Storage));
                if let Some(theme) = self.theme.get() {
                    ctx.set_visuals(palette::visuals(theme));
                }
            }
            PageAction::OpenUrl(url) => {
                log::debug!("Opening {}", url);
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            PageAction::ToggleShowAll => self.feed.toggle_show_all(),
            PageAction::SendMessage => {
                self.form.send(now, self.config.email.as_ref(), Arc::clone(&self.mailer));
            }
            PageAction::None => {}
        }
    }

    /// Ask egui to wake us for the next timer or background result.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Duration) {
        let blinking = self.typing.is_running() && hero::cursor_blinks(self.typing.phase());
        let blink = blinking.then(|| hero::next_blink(now));
        if let Some(wake) = earliest_wake([self.typing.next_wake(), self.form.next_wake(), blink]) {
            ctx.request_repaint_after(wake.saturating_sub(now));
        }
        if self.feed.is_loading() || self.form.state() == SubmissionState::Submitting {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = time::frame_time(ctx.input(|i| i.time));

        // Collect finished background work
        if let Some(fetched) = self.feed.poll() {
            self.upload_thumbnails(ctx, fetched);
        }
        self.form.poll(now);

        // Run due timers
        self.typing.advance(now);
        self.form.advance(now);

        let palette = palette::Palette::for_theme(self.theme.get());
        let mut actions = Vec::new();

        // Navigation bar
        let nav_action = egui::TopBottomPanel::top("nav_bar")
            .show(ctx, |ui| {
                nav_bar::show(ui, &self.content.owner.name, &self.nav, self.theme.get(), &palette)
            })
            .inner;
        actions.push(nav_action);

        // Page sections
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let margin = ((ui.available_width() - MAX_CONTENT_WIDTH) / 2.0).max(16.0);
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(margin, 0.0))
                    .show(ui, |ui| {
                        actions.push(hero::show(ui, &self.content, &self.typing, &mut self.nav, now, &palette));
                        about::show(ui, &self.content.about, &mut self.nav, &palette);
                        skills::show(ui, &self.content.skills, &mut self.nav, &palette);
                        actions.push(projects::show(ui, &self.feed, &self.thumbnails, &mut self.nav, &palette));
                        actions.push(services::show(ui, &self.content.services, &mut self.nav, &palette));
                        actions.push(contact::show(ui, &mut self.form, &self.content, &mut self.nav, &palette));
                        actions.push(footer::show(ui, &self.content, &palette));
                    });
            });
        });

        for action in actions {
            self.handle_action(ctx, frame, now, action);
        }

        if !self.mounted {
            self.mount(ctx, frame, now);
            ctx.request_repaint();
        }

        self.schedule_repaint(ctx, now);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(theme) = self.theme.get() {
            theme::save_theme(storage, theme);
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.unmount();
    }
}
