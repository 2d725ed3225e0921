use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MockState {
    stored: Option<Theme>,
    system: Option<Theme>,
    applied: Vec<Theme>,
}

#[derive(Clone, Debug, Default)]
struct MockEnv(Rc<RefCell<MockState>>);

impl MockEnv {
    fn with(stored: Option<Theme>, system: Option<Theme>) -> Self {
        Self(Rc::new(RefCell::new(MockState { stored, system, applied: Vec::new() })))
    }

    fn stored(&self) -> Option<Theme> {
        self.0.borrow().stored
    }

    fn applied(&self) -> Vec<Theme> {
        self.0.borrow().applied.clone()
    }
}

impl ThemeEnv for MockEnv {
    fn load(&self) -> Option<Theme> {
        self.0.borrow().stored
    }

    fn store(&self, theme: Theme) {
        self.0.borrow_mut().stored = Some(theme);
    }

    fn clear(&self) {
        self.0.borrow_mut().stored = None;
    }

    fn system_theme(&self) -> Option<Theme> {
        self.0.borrow().system
    }

    fn apply(&self, theme: Theme) {
        self.0.borrow_mut().applied.push(theme);
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_prefers_persisted_value_over_system_signal() {
    let env = MockEnv::with(Some(Theme::Dark), Some(Theme::Light));
    let resolver = ThemeResolver::initialize(env);
    assert_eq!(
        resolver.current(),
        ThemePreference { source: ThemeSource::UserSet, theme: Theme::Dark }
    );
}

#[test]
fn initialize_with_persisted_light_is_user_set_light() {
    let env = MockEnv::with(Some(Theme::Light), Some(Theme::Dark));
    let resolver = ThemeResolver::initialize(env);
    assert_eq!(
        resolver.current(),
        ThemePreference { source: ThemeSource::UserSet, theme: Theme::Light }
    );
}

#[test]
fn initialize_falls_back_to_system_signal() {
    let env = MockEnv::with(None, Some(Theme::Dark));
    let resolver = ThemeResolver::initialize(env);
    assert_eq!(
        resolver.current(),
        ThemePreference { source: ThemeSource::SystemDefault, theme: Theme::Dark }
    );

    let env = MockEnv::with(None, Some(Theme::Light));
    let resolver = ThemeResolver::initialize(env);
    assert_eq!(resolver.current().theme, Theme::Light);
}

#[test]
fn initialize_defaults_to_dark_without_any_signal() {
    let env = MockEnv::with(None, None);
    let resolver = ThemeResolver::initialize(env);
    assert_eq!(
        resolver.current(),
        ThemePreference { source: ThemeSource::SystemDefault, theme: Theme::Dark }
    );
}

#[test]
fn initialize_applies_the_resolved_value() {
    let env = MockEnv::with(Some(Theme::Light), None);
    let resolver = ThemeResolver::initialize(env.clone());
    assert_eq!(env.applied(), vec![Theme::Light]);
    assert!(!resolver.is_dark());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_value_and_pins_user_source() {
    let env = MockEnv::with(None, Some(Theme::Dark));
    let mut resolver = ThemeResolver::initialize(env.clone());

    let after = resolver.toggle();
    assert_eq!(after, ThemePreference { source: ThemeSource::UserSet, theme: Theme::Light });
    assert_eq!(env.stored(), Some(Theme::Light));
}

#[test]
fn double_toggle_restores_value_but_stays_user_set() {
    let env = MockEnv::with(None, Some(Theme::Dark));
    let mut resolver = ThemeResolver::initialize(env);

    resolver.toggle();
    let after = resolver.toggle();
    assert_eq!(after.theme, Theme::Dark);
    assert_eq!(after.source, ThemeSource::UserSet);
}

#[test]
fn toggle_applies_each_transition() {
    let env = MockEnv::with(None, None);
    let mut resolver = ThemeResolver::initialize(env.clone());
    resolver.toggle();
    resolver.toggle();
    assert_eq!(env.applied(), vec![Theme::Dark, Theme::Light, Theme::Dark]);
}

// =============================================================
// set
// =============================================================

#[test]
fn set_light_and_dark_persist_a_user_choice() {
    let env = MockEnv::with(None, None);
    let mut resolver = ThemeResolver::initialize(env.clone());

    let after = resolver.set(ThemeRequest::Light);
    assert_eq!(after, ThemePreference { source: ThemeSource::UserSet, theme: Theme::Light });
    assert_eq!(env.stored(), Some(Theme::Light));

    let after = resolver.set(ThemeRequest::Dark);
    assert_eq!(after.theme, Theme::Dark);
    assert_eq!(env.stored(), Some(Theme::Dark));
}

#[test]
fn set_system_clears_storage_and_tracks_the_os() {
    let env = MockEnv::with(Some(Theme::Dark), Some(Theme::Light));
    let mut resolver = ThemeResolver::initialize(env.clone());

    let after = resolver.set(ThemeRequest::System);
    assert_eq!(
        after,
        ThemePreference { source: ThemeSource::SystemDefault, theme: Theme::Light }
    );
    assert_eq!(env.stored(), None);
}

#[test]
fn set_system_without_signal_defaults_to_dark() {
    let env = MockEnv::with(Some(Theme::Light), None);
    let mut resolver = ThemeResolver::initialize(env.clone());

    let after = resolver.set(ThemeRequest::System);
    assert_eq!(after.theme, Theme::Dark);
    assert_eq!(after.source, ThemeSource::SystemDefault);
    assert_eq!(env.stored(), None);
}

// =============================================================
// system_changed
// =============================================================

#[test]
fn system_change_is_ignored_while_user_set() {
    let env = MockEnv::with(Some(Theme::Dark), None);
    let mut resolver = ThemeResolver::initialize(env);

    let after = resolver.system_changed(Theme::Light);
    assert_eq!(after, ThemePreference { source: ThemeSource::UserSet, theme: Theme::Dark });
}

#[test]
fn system_change_updates_value_while_following_system() {
    let env = MockEnv::with(None, Some(Theme::Dark));
    let mut resolver = ThemeResolver::initialize(env);

    let after = resolver.system_changed(Theme::Light);
    assert_eq!(
        after,
        ThemePreference { source: ThemeSource::SystemDefault, theme: Theme::Light }
    );
}

#[test]
fn redundant_system_change_does_not_reapply() {
    let env = MockEnv::with(None, Some(Theme::Dark));
    let mut resolver = ThemeResolver::initialize(env.clone());

    resolver.system_changed(Theme::Dark);
    assert_eq!(env.applied(), vec![Theme::Dark]);
}

// =============================================================
// Theme parsing and preference matching
// =============================================================

#[test]
fn storage_literals_round_trip() {
    assert_eq!(Theme::from_storage_str("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_storage_str("light"), Some(Theme::Light));
    assert_eq!(Theme::Dark.as_storage_str(), "dark");
    assert_eq!(Theme::Light.as_storage_str(), "light");
}

#[test]
fn unknown_storage_value_is_treated_as_absent() {
    assert_eq!(Theme::from_storage_str("solarized"), None);
    assert_eq!(Theme::from_storage_str(""), None);
    assert_eq!(Theme::from_storage_str("DARK"), None);
}

#[test]
fn preference_matches_settings_options() {
    let user_dark = ThemePreference { source: ThemeSource::UserSet, theme: Theme::Dark };
    assert!(user_dark.matches(ThemeRequest::Dark));
    assert!(!user_dark.matches(ThemeRequest::Light));
    assert!(!user_dark.matches(ThemeRequest::System));

    let following = ThemePreference { source: ThemeSource::SystemDefault, theme: Theme::Dark };
    assert!(following.matches(ThemeRequest::System));
    assert!(!following.matches(ThemeRequest::Dark));
}
