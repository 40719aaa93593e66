// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! About section: bio, headline numbers, certifications and industries.

use super::{badge, card, palette::Palette, section_heading};
use crate::models::content::About;
use crate::state::nav::{Navigation, Section};

pub fn show(ui: &mut egui::Ui, about: &About, nav: &mut Navigation, palette: &Palette) {
    section_heading(ui, nav, Section::About, "About Me", None, palette);

    for paragraph in &about.paragraphs {
        ui.label(egui::RichText::new(paragraph).size(17.0).color(palette.muted));
        ui.add_space(12.0);
    }

    if !about.stats.is_empty() {
        ui.add_space(8.0);
        ui.columns(about.stats.len(), |cols| {
            for (col, stat) in cols.iter_mut().zip(&about.stats) {
                card(col, palette, |ui| {
                    ui.label(egui::RichText::new(&stat.value).size(26.0).strong().color(palette.accent));
                    ui.label(egui::RichText::new(&stat.label).color(palette.muted));
                });
            }
        });
    }

    if !about.certifications.is_empty() {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("Achievements & Certifications").size(20.0).strong());
        ui.add_space(12.0);
        for cert in &about.certifications {
            card(ui, palette, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("</>").color(palette.accent).monospace());
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&cert.name).strong());
                        ui.label(egui::RichText::new(&cert.issuer).size(13.0).color(palette.muted));
                    });
                });
            });
            ui.add_space(8.0);
        }
    }

    if !about.industries.is_empty() {
        ui.add_space(16.0);
        ui.label(egui::RichText::new("Industry Experience").size(20.0).strong());
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for industry in &about.industries {
                badge(ui, industry, palette);
            }
        });
    }
}
