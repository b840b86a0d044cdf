use leptos::prelude::*;

use crate::state::{AnimationSpeed, AnimationState, AppState, SectionId, ThemeState, UiState};
use crate::theme::{ColorTokens, ThemeMode};

/// Page-wide state, one signal per slice so a mutation only re-renders the
/// components that read that slice. Provided as context by [`crate::app::App`].
#[derive(Debug, Clone, Copy)]
pub struct AppStore {
    theme: RwSignal<ThemeState>,
    ui: RwSignal<UiState>,
    animation: RwSignal<AnimationState>,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            theme: RwSignal::new(initial.theme),
            ui: RwSignal::new(initial.ui),
            animation: RwSignal::new(initial.animation),
        }
    }

    pub fn provide() -> Self {
        let store = Self::new(AppState::default());
        provide_context(store);
        store
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn mode(&self) -> ThemeMode {
        self.theme.with(|t| t.mode)
    }

    pub fn colors(&self) -> ColorTokens {
        self.theme.with(|t| *t.current_colors())
    }

    pub fn active_section(&self) -> SectionId {
        self.ui.with(|ui| ui.active_section)
    }

    pub fn active_section_untracked(&self) -> SectionId {
        self.ui.with_untracked(|ui| ui.active_section)
    }

    pub fn menu_open(&self) -> bool {
        self.ui.with(|ui| ui.menu_open)
    }

    pub fn menu_open_untracked(&self) -> bool {
        self.ui.with_untracked(|ui| ui.menu_open)
    }

    pub fn show_cursor(&self) -> bool {
        self.ui.with(|ui| ui.show_cursor)
    }

    pub fn cursor_type(&self) -> String {
        self.ui.with(|ui| ui.cursor_type.clone())
    }

    pub fn animations_active(&self) -> bool {
        self.animation.with(AnimationState::is_active)
    }

    pub fn animation_speed(&self) -> AnimationSpeed {
        self.animation.with(|a| a.speed)
    }

    pub fn toggle_theme(&self) {
        self.theme.update(ThemeState::toggle);
        log::debug!("theme switched to {}", self.theme.with_untracked(|t| t.mode));
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.theme.update(|t| t.set(mode));
    }

    pub fn set_active_section(&self, section: SectionId) {
        self.ui.update(|ui| ui.set_active_section(section));
    }

    pub fn set_menu_open(&self, open: bool) {
        self.ui.update(|ui| ui.set_menu_open(open));
    }

    pub fn set_show_cursor(&self, show: bool) {
        self.ui.update(|ui| ui.set_show_cursor(show));
    }

    pub fn set_cursor_type(&self, cursor_type: impl Into<String>) {
        let cursor_type = cursor_type.into();
        self.ui.update(|ui| ui.set_cursor_type(cursor_type));
    }

    pub fn toggle_animations(&self) {
        self.animation.update(AnimationState::toggle);
    }

    pub fn set_animation_speed(&self, speed: AnimationSpeed) {
        self.animation.update(|a| a.set_speed(speed));
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.animation.update(|a| a.set_reduced_motion(reduced));
    }

    /// Inline style for the page root: theme tokens plus the motion scale.
    pub fn root_style(&self) -> String {
        format!(
            "{}--motion-scale:{};",
            self.colors().css_vars(),
            self.animation_speed().duration_scale()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(f: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.set();
        f(AppStore::new(AppState::default()));
    }

    #[test]
    fn test_toggle_theme_updates_colors() {
        with_store(|store| {
            assert_eq!(store.mode(), ThemeMode::Light);
            store.toggle_theme();
            assert_eq!(store.mode(), ThemeMode::Dark);
            assert_eq!(store.colors().accent, "#00f5ff");
            store.toggle_theme();
            assert_eq!(store.mode(), ThemeMode::Light);
            store.set_theme(ThemeMode::Dark);
            assert_eq!(store.mode(), ThemeMode::Dark);
        });
    }

    #[test]
    fn test_ui_actions() {
        with_store(|store| {
            store.set_active_section(SectionId::Skills);
            store.set_menu_open(true);
            store.set_show_cursor(false);
            store.set_cursor_type("text");
            assert_eq!(store.active_section_untracked(), SectionId::Skills);
            assert!(store.menu_open_untracked());
            assert!(!store.show_cursor());
            assert_eq!(store.cursor_type(), "text");
        });
    }

    #[test]
    fn test_animation_actions() {
        with_store(|store| {
            assert!(store.animations_active());
            store.set_reduced_motion(true);
            assert!(!store.animations_active());
            store.set_reduced_motion(false);
            store.toggle_animations();
            assert!(!store.animations_active());
            store.set_animation_speed(AnimationSpeed::Slow);
            assert!(store.root_style().ends_with("--motion-scale:1.5;"));
        });
    }
}
