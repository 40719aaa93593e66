// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page footer with quick links.

use super::{contact::social_buttons, palette::Palette, PageAction};
use crate::models::content::SiteContent;
use crate::state::nav::Section;
use crate::util::{links, time};

const QUICK_LINKS: [Section; 4] = [Section::About, Section::Projects, Section::Services, Section::Contact];

pub fn show(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) -> PageAction {
    let mut action = PageAction::None;
    let owner = &content.owner;

    ui.add_space(48.0);
    ui.separator();
    ui.add_space(24.0);

    ui.columns(3, |cols| {
        cols[0].label(egui::RichText::new(&owner.name).size(22.0).strong());
        cols[0].label(egui::RichText::new(&content.footer.blurb).color(palette.muted));
        cols[0].horizontal(|ui| {
            if let Some(a) = social_buttons(ui, content) {
                action = a;
            }
        });

        cols[1].label(egui::RichText::new("Quick Links").size(16.0).strong());
        for section in QUICK_LINKS {
            if cols[1].link(section.label()).clicked() {
                action = PageAction::ScrollTo(section);
            }
        }

        cols[2].label(egui::RichText::new("Contact").size(16.0).strong());
        if cols[2].link(format!("✉ {}", owner.email)).clicked() {
            action = PageAction::OpenUrl(links::mailto_plain(&owner.email));
        }
        if cols[2].link("GitHub").clicked() {
            action = PageAction::OpenUrl(owner.github_url.clone());
        }
        if cols[2].link("LinkedIn").clicked() {
            action = PageAction::OpenUrl(owner.linkedin_url.clone());
        }
    });

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "© {} {}. All rights reserved. {}",
                time::current_year(),
                owner.name,
                content.footer.credits
            ))
            .size(12.0)
            .color(palette.muted),
        );
    });
    ui.add_space(24.0);

    action
}
