// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Skills section with per-category proficiency bars.

use super::{card, palette::Palette, responsive_grid, section_heading};
use crate::models::content::SkillCategory;
use crate::state::nav::{Navigation, Section};

pub fn show(ui: &mut egui::Ui, categories: &[SkillCategory], nav: &mut Navigation, palette: &Palette) {
    section_heading(
        ui,
        nav,
        Section::Skills,
        "Skills & Technologies",
        Some("A comprehensive toolkit of modern technologies and frameworks I use to build exceptional digital experiences."),
        palette,
    );

    responsive_grid(ui, categories, 320.0, 2, |ui, category| {
        card(ui, palette, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(&category.category).size(18.0).strong());
            });
            ui.add_space(12.0);
            for skill in &category.skills {
                ui.horizontal(|ui| {
                    ui.label(&skill.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(format!("{}%", skill.level)).color(palette.muted));
                    });
                });
                ui.add(egui::ProgressBar::new(f32::from(skill.level) / 100.0).desired_height(6.0));
                ui.add_space(8.0);
            }
        });
    });
}
