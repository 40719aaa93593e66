// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hero section with the typing title animation.

use super::{palette::Palette, PageAction};
use crate::models::content::SiteContent;
use crate::state::nav::{Navigation, Section};
use crate::state::typing::{Phase, TypingAnimation};
use std::time::Duration;

/// Half period of the text cursor blink.
pub const CURSOR_BLINK: Duration = Duration::from_millis(530);

pub fn cursor_visible(now: Duration) -> bool {
    (now.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
}

/// Whether the cursor blinks in this phase. It stays solid while characters change.
pub fn cursor_blinks(phase: Phase) -> bool {
    phase == Phase::PausingAtFull
}

/// Cursor glyph for the animated title.
pub fn cursor(typing: &TypingAnimation, now: Duration) -> &'static str {
    if !typing.is_running() {
        " "
    } else if !cursor_blinks(typing.phase()) || cursor_visible(now) {
        "|"
    } else {
        " "
    }
}

/// When the cursor next changes visibility.
pub fn next_blink(now: Duration) -> Duration {
    let period = CURSOR_BLINK.as_millis();
    let next = (now.as_millis() / period + 1) * period;
    Duration::from_millis(next as u64)
}

pub fn show(
    ui: &mut egui::Ui,
    content: &SiteContent,
    typing: &TypingAnimation,
    nav: &mut Navigation,
    now: Duration,
    palette: &Palette,
) -> PageAction {
    let mut action = PageAction::None;

    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        let avatar = monogram(ui, &content.owner.initial(), palette);
        if nav.take_scroll_target(Section::Home) {
            avatar.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.add_space(24.0);

        ui.label(
            egui::RichText::new(format!("{}{}", typing.displayed_text(), cursor(typing, now)))
                .size(44.0)
                .strong()
                .color(palette.text),
        );
        ui.add_space(16.0);
        ui.label(egui::RichText::new(&content.hero.tagline).size(20.0).color(palette.muted));
        ui.add_space(32.0);

        ui.horizontal(|ui| {
            // center the two buttons
            let width = 320.0_f32.min(ui.available_width());
            ui.add_space((ui.available_width() - width).max(0.0) / 2.0);

            let view_work = egui::Button::new(
                egui::RichText::new("View My Work").size(16.0).color(egui::Color32::WHITE),
            )
            .fill(palette.accent);
            if ui.add(view_work).clicked() {
                action = PageAction::ScrollTo(Section::Projects);
            }

            let cv = ui.add_enabled(
                content.owner.cv_url.is_some(),
                egui::Button::new(egui::RichText::new("⬇ Download CV").size(16.0).color(palette.accent))
                    .stroke(egui::Stroke::new(1.0, palette.accent)),
            );
            if cv.clicked() {
                if let Some(url) = &content.owner.cv_url {
                    action = PageAction::OpenUrl(url.clone());
                }
            }
            cv.on_disabled_hover_text("CV not available yet");
        });
    });
    ui.add_space(48.0);

    action
}

/// Initial in an accent ring.
fn monogram(ui: &mut egui::Ui, initial: &str, palette: &Palette) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(128.0, 128.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 64.0, palette.accent);
    painter.circle_filled(rect.center(), 60.0, palette.background);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(44.0),
        palette.accent,
    );
    response
}
