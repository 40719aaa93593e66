// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section navigation and the compact-layout menu.

/// Page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Services,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }
}

/// Menu flag plus a pending scroll-into-view request.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    menu_open: bool,
    scroll_target: Option<Section>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Request that `section` be scrolled into view. Closes the menu.
    pub fn scroll_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
        self.menu_open = false;
    }

    /// Consume the scroll request if it is for `section`.
    pub fn take_scroll_target(&mut self, section: Section) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }
}
