// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio page.
//!
//! Each section renders from borrowed state and reports what the visitor
//! did as a [`PageAction`]; the app applies the actions after the frame.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod palette;
pub mod projects;
pub mod services;
pub mod skills;

use crate::state::nav::{Navigation, Section};
use palette::Palette;

/// Result of a section's interaction this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    None,
    ScrollTo(Section),
    ToggleMenu,
    ToggleTheme,
    OpenUrl(String),
    ToggleShowAll,
    SendMessage,
}

/// Section title with an accent rule and optional subtitle.
///
/// Scrolls itself into view when it is the pending navigation target.
pub fn section_heading(
    ui: &mut egui::Ui,
    nav: &mut Navigation,
    section: Section,
    title: &str,
    subtitle: Option<&str>,
    palette: &Palette,
) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        let response = ui.label(egui::RichText::new(title).size(30.0).strong().color(palette.text));
        if nav.take_scroll_target(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
        }

        let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 4.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, palette.accent);

        if let Some(subtitle) = subtitle {
            ui.add_space(12.0);
            ui.label(egui::RichText::new(subtitle).size(16.0).color(palette.muted));
        }
    });
    ui.add_space(24.0);
}

/// Bordered surface card.
pub fn card<R>(ui: &mut egui::Ui, palette: &Palette, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(palette.surface)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Small pill label.
pub fn badge(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, palette.border))
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(palette.muted));
        });
}

/// Columns that fit in `width` with each at least `min_width` wide.
pub fn column_count(width: f32, min_width: f32, max_columns: usize) -> usize {
    let fit = if min_width > 0.0 { (width / min_width).floor() as usize } else { max_columns };
    fit.clamp(1, max_columns.max(1))
}

/// Lay out `items` in as many columns as fit, row by row.
pub fn responsive_grid<T>(
    ui: &mut egui::Ui,
    items: &[T],
    min_width: f32,
    max_columns: usize,
    mut show: impl FnMut(&mut egui::Ui, &T),
) {
    let columns = column_count(ui.available_width(), min_width, max_columns);
    for row in items.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, item) in cols.iter_mut().zip(row) {
                show(col, item);
            }
        });
        ui.add_space(16.0);
    }
}
