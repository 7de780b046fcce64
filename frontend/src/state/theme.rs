use leptos::*;
use std::rc::Rc;

use crate::utils::storage::{self, StorageError};

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
const DARK_MODE_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interprets a persisted preference. An empty record counts as no record;
    /// anything other than `"dark"` is treated as light.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait SystemThemeSignal {
    fn prefers_dark(&self) -> bool;
}

pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        storage::read_item(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage::write_item(key, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQuerySignal;

impl SystemThemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        storage::window()
            .ok()
            .and_then(|w| w.match_media(DARK_MODE_QUERY).ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply(&self, theme: Theme) {
        let Some(html) = storage::window()
            .ok()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if html.set_attribute(THEME_ATTRIBUTE, theme.as_str()).is_err() {
            log::warn!("failed to set {THEME_ATTRIBUTE} on the document element");
        }
    }
}

/// The page-wide light/dark mode. One writer (the toggle), many readers.
#[derive(Clone)]
pub struct ThemePreference {
    theme: RwSignal<Theme>,
    store: Rc<dyn PreferenceStore>,
    system: Rc<dyn SystemThemeSignal>,
    surface: Rc<dyn ThemeSurface>,
}

impl ThemePreference {
    pub fn new(
        store: Rc<dyn PreferenceStore>,
        system: Rc<dyn SystemThemeSignal>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        Self {
            theme: create_rw_signal(Theme::default()),
            store,
            system,
            surface,
        }
    }

    pub fn browser() -> Self {
        Self::new(
            Rc::new(LocalStorageStore),
            Rc::new(MediaQuerySignal),
            Rc::new(DocumentSurface),
        )
    }

    /// Resolves the starting theme: persisted record, then the system
    /// preference, then light. Does not write the record back.
    pub fn initialize(&self) -> Theme {
        let theme = match self
            .store
            .get(THEME_STORAGE_KEY)
            .and_then(|value| Theme::from_stored(&value))
        {
            Some(saved) => saved,
            None if self.system.prefers_dark() => Theme::Dark,
            None => Theme::Light,
        };
        log::debug!("initial theme: {}", theme.as_str());
        self.theme.set(theme);
        self.surface.apply(theme);
        theme
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        self.surface.apply(next);
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        next
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    pub fn get(&self) -> Theme {
        self.theme.get_untracked()
    }
}

pub fn use_theme() -> ThemePreference {
    expect_context::<ThemePreference>()
}

pub fn provide_theme(preference: ThemePreference) -> ThemePreference {
    provide_context(preference.clone());
    preference
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fakes::{FixedSystemSignal, MemoryStore, RecordingSurface};
    use crate::test_support::ssr::with_runtime;

    struct Harness {
        store: Rc<MemoryStore>,
        surface: Rc<RecordingSurface>,
        preference: ThemePreference,
    }

    fn harness(store: MemoryStore, prefers_dark: bool) -> Harness {
        let store = Rc::new(store);
        let surface = Rc::new(RecordingSurface::default());
        let preference = ThemePreference::new(
            store.clone(),
            Rc::new(FixedSystemSignal(prefers_dark)),
            surface.clone(),
        );
        Harness {
            store,
            surface,
            preference,
        }
    }

    #[test]
    fn system_dark_used_when_nothing_persisted() {
        with_runtime(|| {
            let h = harness(MemoryStore::default(), true);
            assert_eq!(h.preference.initialize(), Theme::Dark);
            assert_eq!(h.preference.current().get(), Theme::Dark);
            assert_eq!(h.surface.applied(), vec![Theme::Dark]);
            assert_eq!(h.store.value(THEME_STORAGE_KEY), None);
        });
    }

    #[test]
    fn defaults_to_light_without_any_signal() {
        with_runtime(|| {
            let h = harness(MemoryStore::default(), false);
            assert_eq!(h.preference.initialize(), Theme::Light);
            assert_eq!(h.surface.applied(), vec![Theme::Light]);
        });
    }

    #[test]
    fn persisted_value_wins_over_system_signal() {
        with_runtime(|| {
            let h = harness(MemoryStore::with(THEME_STORAGE_KEY, "light"), true);
            assert_eq!(h.preference.initialize(), Theme::Light);

            let h = harness(MemoryStore::with(THEME_STORAGE_KEY, "dark"), false);
            assert_eq!(h.preference.initialize(), Theme::Dark);
        });
    }

    #[test]
    fn empty_persisted_value_falls_through_to_system() {
        with_runtime(|| {
            let h = harness(MemoryStore::with(THEME_STORAGE_KEY, ""), true);
            assert_eq!(h.preference.initialize(), Theme::Dark);
        });
    }

    #[test]
    fn toggle_applies_and_persists() {
        with_runtime(|| {
            let h = harness(MemoryStore::default(), false);
            h.preference.initialize();

            assert_eq!(h.preference.toggle(), Theme::Dark);
            assert_eq!(h.store.value(THEME_STORAGE_KEY).as_deref(), Some("dark"));
            assert_eq!(h.surface.applied(), vec![Theme::Light, Theme::Dark]);
        });
    }

    #[test]
    fn double_toggle_restores_state_and_record() {
        with_runtime(|| {
            for (stored, prefers_dark) in [("dark", false), ("light", true)] {
                let h = harness(MemoryStore::with(THEME_STORAGE_KEY, stored), prefers_dark);
                let start = h.preference.initialize();

                h.preference.toggle();
                h.preference.toggle();

                assert_eq!(h.preference.get(), start);
                assert_eq!(
                    h.store.value(THEME_STORAGE_KEY).as_deref(),
                    Some(start.as_str())
                );
            }
        });
    }

    #[test]
    fn failed_write_still_flips_theme() {
        with_runtime(|| {
            let h = harness(MemoryStore::failing_writes(), false);
            h.preference.initialize();

            assert_eq!(h.preference.toggle(), Theme::Dark);
            assert_eq!(h.preference.get(), Theme::Dark);
            assert_eq!(h.surface.applied().last(), Some(&Theme::Dark));
            assert_eq!(h.store.value(THEME_STORAGE_KEY), None);
        });
    }
}
