// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sticky navigation bar.
//!
//! This module provides the top bar with the section links, the theme
//! switch and, on narrow windows, the collapsible menu.

use super::{palette::Palette, PageAction};
use crate::state::nav::{Navigation, Section};
use crate::state::theme::Theme;

/// Below this window width the section links collapse into a menu.
pub const COMPACT_WIDTH: f32 = 720.0;

/// Display the navigation bar.
pub fn show(
    ui: &mut egui::Ui,
    owner_name: &str,
    nav: &Navigation,
    theme: Option<Theme>,
    palette: &Palette,
) -> PageAction {
    let mut action = PageAction::None;
    let compact = ui.ctx().screen_rect().width() < COMPACT_WIDTH;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;

        ui.label(egui::RichText::new(owner_name).size(20.0).strong().color(palette.text));

        if !compact {
            ui.add_space(24.0);
            for section in Section::ALL {
                if ui.link(egui::RichText::new(section.label()).color(palette.text)).clicked() {
                    action = PageAction::ScrollTo(section);
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if compact {
                let icon = if nav.menu_open() { "✕" } else { "☰" };
                if ui.button(egui::RichText::new(icon).size(18.0)).clicked() {
                    action = PageAction::ToggleMenu;
                }
            } else if ui
                .add(egui::Button::new(egui::RichText::new("Hire Me").color(palette.accent))
                    .stroke(egui::Stroke::new(1.0, palette.accent)))
                .clicked()
            {
                action = PageAction::ScrollTo(Section::Contact);
            }

            if theme_switch(ui, theme, palette).clicked() {
                action = PageAction::ToggleTheme;
            }
        });
    });

    if compact && nav.menu_open() {
        ui.add_space(8.0);
        for section in Section::ALL {
            if ui
                .add(egui::SelectableLabel::new(false, section.label()))
                .clicked()
            {
                action = PageAction::ScrollTo(section);
            }
        }
    }
    ui.add_space(8.0);

    action
}

/// Sliding sun/moon switch. Shows a neutral knob until the theme is resolved.
fn theme_switch(ui: &mut egui::Ui, theme: Option<Theme>, palette: &Palette) -> egui::Response {
    let size = egui::vec2(56.0, 28.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let response = response.on_hover_text("Toggle theme");

    let painter = ui.painter();
    let radius = rect.height() / 2.0;
    painter.rect_filled(rect, radius, palette.border);

    let knob_x = match theme {
        Some(Theme::Dark) => rect.right() - radius,
        Some(Theme::Light) => rect.left() + radius,
        None => rect.center().x,
    };
    painter.circle_filled(egui::pos2(knob_x, rect.center().y), radius - 3.0, egui::Color32::WHITE);

    let glyph = match theme {
        Some(Theme::Dark) => "🌙",
        Some(Theme::Light) => "☀",
        None => "",
    };
    painter.text(
        egui::pos2(knob_x, rect.center().y),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(14.0),
        palette.accent,
    );

    response
}
