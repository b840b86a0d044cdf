use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theme::{ColorTokens, ThemeMode, ThemePalette};

/// Content sections of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub colors: ThemePalette,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    pub fn current_colors(&self) -> &ColorTokens {
        self.colors.get(self.mode)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub active_section: SectionId,
    pub menu_open: bool,
    pub show_cursor: bool,
    pub cursor_type: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Hero,
            menu_open: false,
            show_cursor: true,
            cursor_type: "default".to_string(),
        }
    }
}

impl UiState {
    pub fn set_active_section(&mut self, id: SectionId) {
        self.active_section = id;
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn set_show_cursor(&mut self, show: bool) {
        self.show_cursor = show;
    }

    pub fn set_cursor_type(&mut self, cursor_type: impl Into<String>) {
        self.cursor_type = cursor_type.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to every CSS transition duration.
    pub fn duration_scale(self) -> f32 {
        match self {
            Self::Slow => 1.5,
            Self::Normal => 1.0,
            Self::Fast => 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub enabled: bool,
    pub speed: AnimationSpeed,
    pub reduced_motion: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: AnimationSpeed::Normal,
            reduced_motion: false,
        }
    }
}

impl AnimationState {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Whether entrance animations should play at all.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.reduced_motion
    }
}

/// Initial state of the whole page. Split into slices by the reactive store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub theme: ThemeState,
    pub ui: UiState,
    pub animation: AnimationState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!(state.theme.mode, ThemeMode::Light);
        assert_eq!(state.ui.active_section, SectionId::Hero);
        assert!(!state.ui.menu_open);
        assert!(state.ui.show_cursor);
        assert_eq!(state.ui.cursor_type, "default");
        assert!(state.animation.is_active());
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..7 {
            let mut theme = ThemeState::default();
            for _ in 0..n {
                theme.toggle();
            }
            let expected = if n % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(theme.mode, expected, "after {n} toggles");
        }
    }

    #[test]
    fn test_current_colors_follow_mode() {
        let mut theme = ThemeState::default();
        assert_eq!(theme.current_colors().primary, "#ffffff");
        theme.set(ThemeMode::Dark);
        assert_eq!(theme.current_colors().primary, "#0a0a0f");
        theme.set(ThemeMode::Dark);
        assert_eq!(theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_ui_setters() {
        let mut ui = UiState::default();
        ui.set_active_section(SectionId::Projects);
        ui.set_menu_open(true);
        ui.set_show_cursor(false);
        ui.set_cursor_type("pointer");
        assert_eq!(
            ui,
            UiState {
                active_section: SectionId::Projects,
                menu_open: true,
                show_cursor: false,
                cursor_type: "pointer".to_string(),
            }
        );
    }

    #[test]
    fn test_animation_activity() {
        let mut anim = AnimationState::default();
        anim.set_reduced_motion(true);
        assert!(!anim.is_active());
        anim.set_reduced_motion(false);
        anim.toggle();
        assert!(!anim.is_active());
        anim.toggle();
        anim.set_speed(AnimationSpeed::Fast);
        assert!(anim.is_active());
        assert_eq!(anim.speed.duration_scale(), 0.6);
    }

    #[test]
    fn test_section_order_and_ids() {
        let ids = SectionId::ALL.map(SectionId::as_str);
        assert_eq!(
            ids,
            ["hero", "about", "skills", "experience", "projects", "contact"]
        );
        assert_eq!(SectionId::Hero.label(), "Home");
        assert_eq!(SectionId::Contact.anchor(), "#contact");
    }
}
