// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Light/dark theme preference.
//!
//! The preference lives in eframe's persistent storage. Until the app has
//! rendered its first frame and read that storage, the theme is unresolved
//! and callers must not render anything that depends on it.

/// Storage key for the persisted preference.
pub const THEME_KEY: &str = "theme_preference";

/// A resolved light or dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read/write view of the persisted theme preference.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    resolved: Option<Theme>,
}

impl ThemeState {
    /// Create an unresolved theme state.
    pub fn new() -> Self {
        Self { resolved: None }
    }

    /// The current theme, or `None` while unresolved.
    pub fn get(&self) -> Option<Theme> {
        self.resolved
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Resolve the theme from storage.
    ///
    /// A first-ever visit (or missing storage) resolves to light, never to
    /// the operating system's preference. Resolving twice keeps the first
    /// result.
    pub fn resolve(&mut self, storage: Option<&dyn eframe::Storage>) -> Theme {
        if let Some(theme) = self.resolved {
            return theme;
        }
        let theme = storage
            .and_then(|s| s.get_string(THEME_KEY))
            .and_then(|value| Theme::parse(&value))
            .unwrap_or(Theme::Light);
        log::debug!("Resolved theme: {}", theme.as_str());
        self.resolved = Some(theme);
        theme
    }

    /// Set and persist the theme.
    pub fn set(&mut self, theme: Theme, storage: Option<&mut dyn eframe::Storage>) {
        self.resolved = Some(theme);
        if let Some(storage) = storage {
            save_theme(storage, theme);
        }
        log::debug!("Theme set to {}", theme.as_str());
    }

    /// Flip between light and dark. Ignored while unresolved.
    pub fn toggle(&mut self, storage: Option<&mut dyn eframe::Storage>) {
        if let Some(theme) = self.resolved {
            self.set(theme.toggled(), storage);
        }
    }
}

/// Write the preference to storage and flush it.
pub fn save_theme(storage: &mut dyn eframe::Storage, theme: Theme) {
    storage.set_string(THEME_KEY, theme.as_str().to_string());
    storage.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for eframe's file storage.
    #[derive(Default)]
    struct MemoryStorage {
        pub values: HashMap<String, String>,
        pub flushes: usize,
    }

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_unset_before_resolution() {
        let state = ThemeState::new();
        assert_eq!(state.get(), None);
        assert!(!state.is_resolved());
    }

    #[test]
    fn test_first_visit_resolves_light() {
        let storage = MemoryStorage::default();
        let mut state = ThemeState::new();

        assert_eq!(state.resolve(Some(&storage)), Theme::Light);
        assert_eq!(state.get(), Some(Theme::Light));
    }

    #[test]
    fn test_missing_storage_resolves_light() {
        let mut state = ThemeState::new();
        assert_eq!(state.resolve(None), Theme::Light);
    }

    #[test]
    fn test_resolves_persisted_preference() {
        let mut storage = MemoryStorage::default();
        storage.values.insert(THEME_KEY.to_string(), "dark".to_string());
        let mut state = ThemeState::new();

        assert_eq!(state.resolve(Some(&storage)), Theme::Dark);
    }

    #[test]
    fn test_garbage_preference_resolves_light() {
        let mut storage = MemoryStorage::default();
        storage.values.insert(THEME_KEY.to_string(), "system".to_string());
        let mut state = ThemeState::new();

        assert_eq!(state.resolve(Some(&storage)), Theme::Light);
    }

    #[test]
    fn test_set_persists_and_updates() {
        let mut storage = MemoryStorage::default();
        let mut state = ThemeState::new();
        state.resolve(Some(&storage));

        state.set(Theme::Dark, Some(&mut storage));

        assert_eq!(state.get(), Some(Theme::Dark));
        assert_eq!(storage.values.get(THEME_KEY).map(String::as_str), Some("dark"));
        assert_eq!(storage.flushes, 1);

        // a later visit picks it up
        let mut next_visit = ThemeState::new();
        assert_eq!(next_visit.resolve(Some(&storage)), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        let mut storage = MemoryStorage::default();
        let mut state = ThemeState::new();

        state.toggle(Some(&mut storage));
        assert_eq!(state.get(), None);

        state.resolve(Some(&storage));
        state.toggle(Some(&mut storage));
        assert_eq!(state.get(), Some(Theme::Dark));
        state.toggle(Some(&mut storage));
        assert_eq!(state.get(), Some(Theme::Light));
        assert_eq!(storage.values.get(THEME_KEY).map(String::as_str), Some("light"));
    }
}
