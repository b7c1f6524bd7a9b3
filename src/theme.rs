//! ThemeStore - current UI theme with durable persistence and observers.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::storage::KeyValueStorage;

/// Fixed storage key the current theme is persisted under.
pub const THEME_KEY: &str = "theme";

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

    /// Parses a persisted value; anything other than the two recognized
    /// strings is treated as absent.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
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
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Watcher = Box<dyn Fn(Theme) + Send + Sync>;

/// Holds the current theme. Every change is persisted under [`THEME_KEY`]
/// and pushed to registered watchers in registration order, for side effects
/// like toggling a document attribute.
pub struct ThemeStore {
    storage: Box<dyn KeyValueStorage>,
    current: RwLock<Theme>,
    watchers: RwLock<Vec<Watcher>>,
}

impl ThemeStore {
    /// Creates a store whose initial value is read from the backend,
    /// defaulting to light when the key is absent or unrecognized.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        let initial = match storage.get(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(e) => {
                warn!(error = %e, "failed to read persisted theme");
                None
            }
        }
        .unwrap_or(Theme::Light);

        ThemeStore {
            storage,
            current: RwLock::new(initial),
            watchers: RwLock::new(Vec::new()),
        }
    }

    pub fn current(&self) -> Theme {
        *self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_dark(&self) -> bool {
        self.current() == Theme::Dark
    }

    /// Assigns the theme directly. A no-op when the value is unchanged;
    /// otherwise persists and notifies watchers.
    pub fn set(&self, theme: Theme) {
        {
            let mut current = self
                .current
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if *current == theme {
                return;
            }
            *current = theme;
        }

        debug!(theme = %theme, "theme changed");
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            // The in-memory value stays authoritative; the next successful
            // write repairs the persisted copy.
            warn!(error = %e, "failed to persist theme");
        }
        self.notify(theme);
    }

    /// Flips between light and dark. Returns the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    /// Registers a watcher invoked synchronously on every theme change.
    pub fn watch<F>(&self, watcher: F)
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        let mut watchers = self
            .watchers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        watchers.push(Box::new(watcher));
    }

    fn notify(&self, theme: Theme) {
        let watchers = self
            .watchers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for watcher in watchers.iter() {
            if catch_unwind(AssertUnwindSafe(|| watcher(theme))).is_err() {
                warn!("theme watcher panicked");
            }
        }
    }
}
