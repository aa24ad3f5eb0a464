use log::{error, info};

use crate::config::THEME_KEY;
use crate::dom;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of `data-theme` on `<html>`. Dark is the stylesheet default and
    /// carries no attribute.
    pub fn data_attribute(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("light"),
            Theme::Dark => None,
        }
    }

    pub fn from_data_attribute(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

/// Stored preference wins; otherwise follow the OS colour scheme.
pub fn preferred(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub fn load(store: &impl KeyValueStore) -> Theme {
    let stored = store.get(THEME_KEY);
    preferred(
        stored.as_deref(),
        dom::media_matches("(prefers-color-scheme: dark)"),
    )
}

pub fn apply(theme: Theme) {
    let Some(root) = dom::root_element() else {
        return;
    };
    let result = match theme.data_attribute() {
        Some(value) => root.set_attribute("data-theme", value),
        None => root.remove_attribute("data-theme"),
    };
    if result.is_err() {
        error!("Failed to apply {} theme", theme.as_str());
    }
}

/// Theme currently shown, read back from the document root.
pub fn current() -> Theme {
    let attr = dom::root_element().and_then(|root| root.get_attribute("data-theme"));
    Theme::from_data_attribute(attr.as_deref())
}

/// Flips `current` and persists the result. Returns the new theme.
pub fn persist_toggle(store: &impl KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(THEME_KEY, next.as_str()) {
        error!("Failed to persist theme: {}", e);
    }
    next
}

/// Click handler body for the theme button: flip what the page shows, apply
/// and store it.
pub fn toggle(store: &impl KeyValueStore) -> Theme {
    let next = persist_toggle(store, current());
    apply(next);
    info!("Theme switched to {}", next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn stored_preference_overrides_os() {
        assert_eq!(preferred(Some("light"), true), Theme::Light);
        assert_eq!(preferred(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn missing_or_unknown_preference_follows_os() {
        assert_eq!(preferred(None, true), Theme::Dark);
        assert_eq!(preferred(None, false), Theme::Light);
        assert_eq!(preferred(Some("sepia"), false), Theme::Light);
    }

    #[test]
    fn only_light_sets_the_attribute() {
        assert_eq!(Theme::Light.data_attribute(), Some("light"));
        assert_eq!(Theme::Dark.data_attribute(), None);
        assert_eq!(Theme::from_data_attribute(None), Theme::Dark);
        assert_eq!(
            Theme::from_data_attribute(Theme::Light.data_attribute()),
            Theme::Light
        );
    }

    #[test]
    fn double_toggle_restores_stored_value() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "dark").unwrap();

        let once = persist_toggle(&store, Theme::Dark);
        assert_eq!(once, Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        let twice = persist_toggle(&store, once);
        assert_eq!(twice, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(twice.data_attribute(), None);
    }
}
