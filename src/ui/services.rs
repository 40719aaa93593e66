// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Services section.

use super::{card, palette::Palette, responsive_grid, section_heading, PageAction};
use crate::models::content::Service;
use crate::state::nav::{Navigation, Section};

pub fn show(ui: &mut egui::Ui, services: &[Service], nav: &mut Navigation, palette: &Palette) -> PageAction {
    section_heading(
        ui,
        nav,
        Section::Services,
        "Services",
        Some("Comprehensive development services tailored to bring your digital vision to life with modern technologies and best practices."),
        palette,
    );

    responsive_grid(ui, services, 360.0, 2, |ui, service| {
        card(ui, palette, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(service.icon.glyph()).size(26.0));
                ui.label(egui::RichText::new(&service.title).size(18.0).strong());
            });
            ui.add_space(8.0);
            ui.label(egui::RichText::new(&service.description).color(palette.muted));
            ui.add_space(8.0);
            for feature in &service.features {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✔").color(palette.accent));
                    ui.label(feature);
                });
            }
        });
    });

    let mut action = PageAction::None;
    ui.vertical_centered(|ui| {
        let button = egui::Button::new(egui::RichText::new("Work With Me").size(16.0).color(egui::Color32::WHITE))
            .fill(palette.accent);
        if ui.add(button).clicked() {
            action = PageAction::ScrollTo(Section::Contact);
        }
    });
    action
}
