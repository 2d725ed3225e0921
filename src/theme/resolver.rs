//! Theme preference state machine.
//!
//! Resolution order on startup: persisted user choice, then the OS
//! color-scheme signal, then dark. A persisted choice pins the source to
//! `UserSet` and takes precedence over later OS changes; clearing it (the
//! "follow system" command) returns the resolver to live OS tracking.
//!
//! ERROR HANDLING
//! ==============
//! The environment reports unreadable storage or an unsupported media query
//! as `None`, never as an error, so every operation here is infallible and
//! degrades to the dark/system defaults.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

/// Resolved theme value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The opposite value, used by the header toggle.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The literal stored in browser storage and mirrored into the
    /// `data-theme` root attribute.
    #[must_use]
    pub fn as_storage_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything other than the two known values is
    /// treated as absent so a corrupted entry falls through to the OS signal.
    #[must_use]
    pub fn from_storage_str(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Where the current value came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeSource {
    /// Explicitly chosen by the user and persisted.
    UserSet,
    /// Tracking the OS color-scheme signal; nothing persisted.
    #[default]
    SystemDefault,
}

/// The resolved value plus its provenance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub source: ThemeSource,
    pub theme: Theme,
}

impl ThemePreference {
    /// Whether a settings-menu option corresponds to this preference.
    #[must_use]
    pub fn matches(self, request: ThemeRequest) -> bool {
        match request {
            ThemeRequest::Light => self.source == ThemeSource::UserSet && self.theme == Theme::Light,
            ThemeRequest::Dark => self.source == ThemeSource::UserSet && self.theme == Theme::Dark,
            ThemeRequest::System => self.source == ThemeSource::SystemDefault,
        }
    }
}

/// Explicit command from the theme settings menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeRequest {
    Light,
    Dark,
    System,
}

/// Environment seam: persisted storage, the OS signal, and the visual sink.
///
/// `store`, `clear` and `apply` are best-effort; implementations swallow
/// failures so callers never observe them.
pub trait ThemeEnv {
    /// The persisted user choice, `None` when absent, invalid or unreadable.
    fn load(&self) -> Option<Theme>;
    /// Persist a user choice.
    fn store(&self, theme: Theme);
    /// Remove the persisted choice (return to following the system).
    fn clear(&self);
    /// The current OS color-scheme signal, `None` when unsupported.
    fn system_theme(&self) -> Option<Theme>;
    /// Reflect the resolved value into the visual root and chrome hint.
    fn apply(&self, theme: Theme);
}

/// Owns the current [`ThemePreference`] and the environment it syncs with.
#[derive(Clone, Debug)]
pub struct ThemeResolver<E> {
    env: E,
    current: ThemePreference,
}

impl<E: ThemeEnv> ThemeResolver<E> {
    /// Resolve the startup preference and apply it. Never fails: unreadable
    /// storage and an unsupported media query both fall through to the next
    /// rule, ending at dark.
    pub fn initialize(env: E) -> Self {
        let current = if let Some(saved) = env.load() {
            ThemePreference { source: ThemeSource::UserSet, theme: saved }
        } else if let Some(system) = env.system_theme() {
            ThemePreference { source: ThemeSource::SystemDefault, theme: system }
        } else {
            ThemePreference::default()
        };
        env.apply(current.theme);
        Self { env, current }
    }

    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current.theme.is_dark()
    }

    /// Flip the value and pin it as a user choice. The persistence write is
    /// best-effort; the in-memory state updates regardless.
    pub fn toggle(&mut self) -> ThemePreference {
        self.commit_user_choice(self.current.theme.flipped())
    }

    /// Apply an explicit settings-menu command.
    pub fn set(&mut self, request: ThemeRequest) -> ThemePreference {
        match request {
            ThemeRequest::Light => self.commit_user_choice(Theme::Light),
            ThemeRequest::Dark => self.commit_user_choice(Theme::Dark),
            ThemeRequest::System => {
                self.env.clear();
                self.current = ThemePreference {
                    source: ThemeSource::SystemDefault,
                    theme: self.env.system_theme().unwrap_or_default(),
                };
                self.env.apply(self.current.theme);
                self.current
            }
        }
    }

    /// React to an OS color-scheme change. Ignored while a user choice is
    /// pinned; otherwise the value tracks the signal immediately.
    pub fn system_changed(&mut self, system: Theme) -> ThemePreference {
        if self.current.source == ThemeSource::SystemDefault && self.current.theme != system {
            self.current.theme = system;
            self.env.apply(system);
        }
        self.current
    }

    fn commit_user_choice(&mut self, theme: Theme) -> ThemePreference {
        self.current = ThemePreference { source: ThemeSource::UserSet, theme };
        self.env.store(theme);
        self.env.apply(theme);
        self.current
    }
}
