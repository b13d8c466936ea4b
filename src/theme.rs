//! Dark/light display mode.
//!
//! The preference lives in `localStorage` under [`THEME_KEY`] and is applied
//! as a `data-theme` attribute on `<html>` together with the `--bg-color-rgb`
//! custom property used by translucent backgrounds.

#[cfg(target_arch = "wasm32")]
use crate::config::THEME_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolves a stored preference. Nothing stored means dark; anything
    /// stored other than exactly `"dark"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// RGB triple behind `--bg-color-rgb`.
    pub fn background_rgb(self) -> &'static str {
        match self {
            Self::Light => "255, 255, 255",
            Self::Dark => "13, 17, 23",
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

/// Where a theme gets persisted and shown.
pub trait ThemeHost {
    fn store(&mut self, theme: Theme);
    fn apply(&mut self, theme: Theme);
}

/// Flips `current`, persists and applies the result, and returns it.
pub fn toggle_on(current: Theme, host: &mut impl ThemeHost) -> Theme {
    let next = current.toggled();
    host.store(next);
    host.apply(next);
    next
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{toggle_on, Theme, ThemeHost, THEME_KEY};
    use crate::dom::prefers_reduced_motion;
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{window, HtmlElement, Storage};

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }

    pub fn resolve_theme() -> Theme {
        let stored = local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }

    pub fn apply_theme(theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let _ = root.set_attribute("data-theme", theme.as_str());
        if let Some(root) = root.dyn_ref::<HtmlElement>() {
            let _ = root
                .style()
                .set_property("--bg-color-rgb", theme.background_rgb());
        }
    }

    pub fn apply_theme_with_transition(theme: Theme) {
        if prefers_reduced_motion() {
            apply_theme(theme);
            return;
        }

        let Some(document) = window().and_then(|w| w.document()) else {
            apply_theme(theme);
            return;
        };

        let document_js: JsValue = document.into();
        let Ok(start_view_transition) =
            Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
        else {
            apply_theme(theme);
            return;
        };

        let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
            apply_theme(theme);
            return;
        };

        let callback = Closure::once_into_js(move || apply_theme(theme));
        if start_view_transition.call1(&document_js, &callback).is_err() {
            apply_theme(theme);
        }
    }

    pub fn persist_theme(theme: Theme) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(THEME_KEY, theme.as_str()) {
                log::warn!("could not persist theme: {err:?}");
            }
        }
    }

    struct Page;

    impl ThemeHost for Page {
        fn store(&mut self, theme: Theme) {
            persist_theme(theme);
        }

        fn apply(&mut self, theme: Theme) {
            apply_theme_with_transition(theme);
        }
    }

    pub fn toggle_theme(current: Theme) -> Theme {
        toggle_on(current, &mut Page)
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{apply_theme, resolve_theme, toggle_theme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_defaults_to_dark() {
        let theme = Theme::from_stored(None);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.background_rgb(), "13, 17, 23");
    }

    #[test]
    fn only_exact_dark_resolves_to_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn stored_string_round_trips_through_resolution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[derive(Default)]
    struct Recorder {
        stored: Option<String>,
        applied: Option<Theme>,
    }

    impl ThemeHost for Recorder {
        fn store(&mut self, theme: Theme) {
            self.stored = Some(theme.as_str().to_owned());
        }

        fn apply(&mut self, theme: Theme) {
            self.applied = Some(theme);
        }
    }

    #[test]
    fn stored_preference_matches_applied_theme_after_toggles() {
        let mut host = Recorder::default();

        let once = toggle_on(Theme::Dark, &mut host);
        assert_eq!(once, Theme::Light);
        assert_eq!(host.applied, Some(once));
        assert_eq!(Theme::from_stored(host.stored.as_deref()), once);

        let twice = toggle_on(once, &mut host);
        assert_eq!(twice, Theme::Dark);
        assert_eq!(host.applied, Some(twice));
        assert_eq!(host.stored.as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
