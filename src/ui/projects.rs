// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project gallery.
//!
//! This module renders the project cards from the loaded feed, the
//! loading spinner, and the Show More / Show Less toggle.

use super::{badge, card, palette::Palette, responsive_grid, section_heading, PageAction};
use crate::models::project::ProjectRecord;
use crate::state::feed::{FeedState, ProjectFeed};
use crate::state::nav::{Navigation, Section};
use std::collections::HashMap;

const THUMBNAIL_HEIGHT: f32 = 160.0;

/// Label for the show-more toggle.
pub fn toggle_label(feed: &ProjectFeed) -> String {
    if feed.show_all() {
        "Show Less".to_string()
    } else {
        format!("Show More ({} more)", feed.hidden_count())
    }
}

pub fn show(
    ui: &mut egui::Ui,
    feed: &ProjectFeed,
    thumbnails: &HashMap<u32, egui::TextureHandle>,
    nav: &mut Navigation,
    palette: &Palette,
) -> PageAction {
    let mut action = PageAction::None;

    section_heading(
        ui,
        nav,
        Section::Projects,
        "Projects",
        Some("A showcase of my recent work and technical projects."),
        palette,
    );

    match feed.state() {
        FeedState::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(egui::Spinner::new().size(40.0).color(palette.accent));
                ui.add_space(40.0);
            });
            return action;
        }
        // failures are logged; the gallery just stays empty
        FeedState::Failed => return action,
        FeedState::Loaded(_) => {}
    }

    responsive_grid(ui, feed.visible(), 340.0, 3, |ui, project| {
        if let Some(clicked) = project_card(ui, project, thumbnails.get(&project.id), palette) {
            action = clicked;
        }
    });

    if feed.has_more() {
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(egui::RichText::new(toggle_label(feed)).color(palette.accent))
                .stroke(egui::Stroke::new(1.0, palette.accent));
            if ui.add(button).clicked() {
                action = PageAction::ToggleShowAll;
            }
        });
    }

    action
}

fn project_card(
    ui: &mut egui::Ui,
    project: &ProjectRecord,
    thumbnail: Option<&egui::TextureHandle>,
    palette: &Palette,
) -> Option<PageAction> {
    card(ui, palette, |ui| {
        let mut action = None;

        match thumbnail {
            Some(texture) => {
                let image = egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .max_height(THUMBNAIL_HEIGHT)
                    .max_width(ui.available_width())
                    .rounding(6.0);
                ui.add(image);
            }
            None => placeholder(ui, &project.title, palette),
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new(&project.title).size(18.0).strong());
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&project.description).size(14.0).color(palette.muted));
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for tech in &project.tech_stack {
                badge(ui, tech, palette);
            }
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("↗ Live Demo").clicked() {
                action = Some(PageAction::OpenUrl(project.live_url.clone()));
            }
            if ui.button("View Code").clicked() {
                action = Some(PageAction::OpenUrl(project.github_url.clone()));
            }
        });

        action
    })
}

/// Tile drawn when a project has no decodable thumbnail.
fn placeholder(ui: &mut egui::Ui, title: &str, palette: &Palette) {
    let size = egui::vec2(ui.available_width(), THUMBNAIL_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, palette.border);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        title.chars().next().map(String::from).unwrap_or_default(),
        egui::FontId::proportional(48.0),
        palette.muted,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::feed::FetchedFeed;

    fn feed_of(count: u32) -> ProjectFeed {
        let projects = (1..=count)
            .map(|id| ProjectRecord {
                id,
                title: format!("P{}", id),
                description: String::new(),
                tech_stack: Vec::new(),
                image: String::new(),
                live_url: String::new(),
                github_url: String::new(),
            })
            .collect();
        let mut feed = ProjectFeed::new();
        feed.finish(Ok(FetchedFeed {
            projects,
            thumbnails: Default::default(),
        }));
        feed
    }

    #[test]
    fn test_toggle_label() {
        let mut feed = feed_of(9);
        assert_eq!(toggle_label(&feed), "Show More (3 more)");
        feed.toggle_show_all();
        assert_eq!(toggle_label(&feed), "Show Less");
    }
}
