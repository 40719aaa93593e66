// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page colors for the light and dark themes.

use crate::state::theme::Theme;
use egui::Color32;

/// Colors used across the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub error: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(0xF9, 0xFA, 0xFB),
        surface: Color32::from_rgb(0xFF, 0xFF, 0xFF),
        border: Color32::from_rgb(0xE5, 0xE7, 0xEB),
        text: Color32::from_rgb(0x1E, 0x29, 0x3B),
        muted: Color32::from_rgb(0x64, 0x74, 0x8B),
        accent: Color32::from_rgb(0x25, 0x63, 0xEB),
        success: Color32::from_rgb(0x16, 0x65, 0x34),
        error: Color32::from_rgb(0x99, 0x1B, 0x1B),
    };

    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(0x0D, 0x11, 0x17),
        surface: Color32::from_rgb(0x16, 0x1B, 0x22),
        border: Color32::from_rgb(0x37, 0x41, 0x51),
        text: Color32::from_rgb(0xE6, 0xED, 0xF3),
        muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
        accent: Color32::from_rgb(0x3B, 0x82, 0xF6),
        success: Color32::from_rgb(0xBB, 0xF7, 0xD0),
        error: Color32::from_rgb(0xFE, 0xCA, 0xCA),
    };

    /// Palette for a theme. Unresolved renders with the light palette.
    pub fn for_theme(theme: Option<Theme>) -> Self {
        match theme {
            Some(Theme::Dark) => Self::DARK,
            Some(Theme::Light) | None => Self::LIGHT,
        }
    }
}

/// egui visuals for a resolved theme.
pub fn visuals(theme: Theme) -> egui::Visuals {
    let palette = Palette::for_theme(Some(theme));
    let mut visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = palette.surface;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent;
    visuals.override_text_color = Some(palette.text);
    visuals
}
