use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named color, gradient and shadow values for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub accent2: &'static str,
    pub accent3: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_light: &'static str,
    pub background_light: &'static str,
    pub background_blue: &'static str,
    pub gradient1: &'static str,
    pub gradient2: &'static str,
    pub gradient3: &'static str,
    pub gradient_hero: &'static str,
    pub shadow: &'static str,
    pub shadow_hover: &'static str,
    pub shadow_button: &'static str,
}

pub const LIGHT: ColorTokens = ColorTokens {
    primary: "#ffffff",
    secondary: "#f8f9fa",
    accent: "#0066ff",
    accent2: "#4facfe",
    accent3: "#667eea",
    text: "#1a1a1a",
    text_secondary: "#666666",
    text_light: "#999999",
    background_light: "#e8f0fe",
    background_blue: "#f0f5ff",
    gradient1: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    gradient2: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    gradient3: "linear-gradient(135deg, #0066ff 0%, #4facfe 100%)",
    gradient_hero: "linear-gradient(135deg, #ffffff 0%, #f0f5ff 100%)",
    shadow: "0 4px 20px rgba(0, 0, 0, 0.08)",
    shadow_hover: "0 8px 30px rgba(0, 0, 0, 0.12)",
    shadow_button: "0 4px 15px rgba(0, 102, 255, 0.3)",
};

pub const DARK: ColorTokens = ColorTokens {
    primary: "#0a0a0f",
    secondary: "#1a1a2e",
    accent: "#00f5ff",
    accent2: "#00ff88",
    accent3: "#ff6b6b",
    text: "#ffffff",
    text_secondary: "#a0a0a0",
    text_light: "#888888",
    background_light: "#1a1a2e",
    background_blue: "#1a1a2e",
    gradient1: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    gradient2: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    gradient3: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    gradient_hero: "linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%)",
    shadow: "0 4px 20px rgba(255, 255, 255, 0.05)",
    shadow_hover: "0 8px 30px rgba(255, 255, 255, 0.1)",
    shadow_button: "0 4px 15px rgba(0, 245, 255, 0.3)",
};

impl ColorTokens {
    /// Renders the tokens as CSS custom properties, e.g. `--accent:#0066ff;`.
    pub fn css_vars(&self) -> String {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("accent2", self.accent2),
            ("accent3", self.accent3),
            ("text", self.text),
            ("text-secondary", self.text_secondary),
            ("text-light", self.text_light),
            ("background-light", self.background_light),
            ("background-blue", self.background_blue),
            ("gradient1", self.gradient1),
            ("gradient2", self.gradient2),
            ("gradient3", self.gradient3),
            ("gradient-hero", self.gradient_hero),
            ("shadow", self.shadow),
            ("shadow-hover", self.shadow_hover),
            ("shadow-button", self.shadow_button),
        ]
        .iter()
        .map(|(name, value)| format!("--{name}:{value};"))
        .collect()
    }
}

/// One set of tokens per mode. Both entries always exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

impl ThemePalette {
    pub fn get(&self, mode: ThemeMode) -> &ColorTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            light: LIGHT,
            dark: DARK,
        }
    }
}
