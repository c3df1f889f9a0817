//! Themes and the palettes they stamp onto slides.

use crate::slide::Background;
use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Theme-derived colors copied onto every slide when a theme is applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePalette {
    pub text_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text_color: Option<String>,
}

/// Global presentation theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub mode: ThemeMode,
    pub background: Background,
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub muted_color: String,
    pub border_color: String,
    pub font_family: String,
    pub header_font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text_color: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Colors that vary between preset themes.
struct Swatch {
    id: &'static str,
    name: &'static str,
    mode: ThemeMode,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    muted: &'static str,
    border: &'static str,
    text: &'static str,
    title: &'static str,
    subtitle: &'static str,
    username: &'static str,
    footer: &'static str,
}

impl Swatch {
    fn into_theme(self, background: Background) -> Theme {
        Theme {
            id: self.id.to_string(),
            name: self.name.to_string(),
            mode: self.mode,
            background,
            primary_color: self.primary.to_string(),
            secondary_color: self.secondary.to_string(),
            text_color: self.text.to_string(),
            accent_color: self.accent.to_string(),
            muted_color: self.muted.to_string(),
            border_color: self.border.to_string(),
            font_family: "Inter".to_string(),
            header_font: "JetBrains Mono".to_string(),
            title_color: Some(self.title.to_string()),
            subtitle_color: Some(self.subtitle.to_string()),
            body_text_color: Some(self.text.to_string()),
            username_color: Some(self.username.to_string()),
            footer_text_color: Some(self.footer.to_string()),
        }
    }
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Swatch {
            id: "conceptstocode-dark",
            name: "Favourite Dark",
            mode: ThemeMode::Dark,
            primary: "#38bdf8",
            secondary: "#22c55e",
            accent: "#a78bfa",
            muted: "#94a3b8",
            border: "#1e293b",
            text: "#e5e7eb",
            title: "#f8fafc",
            subtitle: "#cbd5f5",
            username: "#38bdf8",
            footer: "#a78bfa",
        }
        .into_theme(Background::gradient("#0f172a", "#020617", 180.0))
    }

    /// The default light theme.
    pub fn light() -> Self {
        Swatch {
            id: "conceptstocode-light",
            name: "Favourite Light",
            mode: ThemeMode::Light,
            primary: "#2563eb",
            secondary: "#16a34a",
            accent: "#7c3aed",
            muted: "#64748b",
            border: "#e2e8f0",
            text: "#0f172a",
            title: "#0f172a",
            subtitle: "#475569",
            username: "#2563eb",
            footer: "#64748b",
        }
        .into_theme(Background::solid("#f8fafc"))
    }

    /// All built-in themes, default dark first.
    pub fn presets() -> Vec<Theme> {
        let dark = |swatch: Swatch, from: &str, to: &str, direction: f64| {
            swatch.into_theme(Background::gradient(from, to, direction))
        };
        vec![
            Self::dark(),
            Self::light(),
            dark(
                Swatch {
                    id: "midnight-purple",
                    name: "Midnight Purple",
                    mode: ThemeMode::Dark,
                    primary: "#a855f7",
                    secondary: "#ec4899",
                    accent: "#fbbf24",
                    muted: "#94a3b8",
                    border: "#1e293b",
                    text: "#e5e7eb",
                    title: "#f8fafc",
                    subtitle: "#ddd6fe",
                    username: "#c084fc",
                    footer: "#a78bfa",
                },
                "#0f0c29",
                "#302b63",
                135.0,
            ),
            dark(
                Swatch {
                    id: "ocean-blue",
                    name: "Ocean Blue",
                    mode: ThemeMode::Dark,
                    primary: "#3b82f6",
                    secondary: "#06b6d4",
                    accent: "#22c55e",
                    muted: "#94a3b8",
                    border: "#1e293b",
                    text: "#e5e7eb",
                    title: "#f8fafc",
                    subtitle: "#bae6fd",
                    username: "#38bdf8",
                    footer: "#7dd3fc",
                },
                "#0c1220",
                "#1e3a5f",
                180.0,
            ),
            dark(
                Swatch {
                    id: "forest-green",
                    name: "Forest Green",
                    mode: ThemeMode::Dark,
                    primary: "#22c55e",
                    secondary: "#84cc16",
                    accent: "#fbbf24",
                    muted: "#94a3b8",
                    border: "#1e293b",
                    text: "#dcfce7",
                    title: "#f0fdf4",
                    subtitle: "#bbf7d0",
                    username: "#4ade80",
                    footer: "#86efac",
                },
                "#0a120a",
                "#1a2f1a",
                180.0,
            ),
            dark(
                Swatch {
                    id: "cyber-neon",
                    name: "Cyber Neon",
                    mode: ThemeMode::Dark,
                    primary: "#22d3ee",
                    secondary: "#f43f5e",
                    accent: "#a78bfa",
                    muted: "#64748b",
                    border: "#1e293b",
                    text: "#e5e7eb",
                    title: "#e0f2fe",
                    subtitle: "#67e8f9",
                    username: "#22d3ee",
                    footer: "#a5f3fc",
                },
                "#020617",
                "#0f172a",
                135.0,
            ),
            dark(
                Swatch {
                    id: "sunset-code",
                    name: "Sunset Code",
                    mode: ThemeMode::Dark,
                    primary: "#fb7185",
                    secondary: "#facc15",
                    accent: "#38bdf8",
                    muted: "#94a3b8",
                    border: "#312e81",
                    text: "#f8fafc",
                    title: "#fff1f2",
                    subtitle: "#fecdd3",
                    username: "#fb7185",
                    footer: "#fda4af",
                },
                "#1f0c2f",
                "#2c1b47",
                135.0,
            ),
            Swatch {
                id: "terminal-green",
                name: "Terminal Green",
                mode: ThemeMode::Dark,
                primary: "#22c55e",
                secondary: "#4ade80",
                accent: "#86efac",
                muted: "#4b5563",
                border: "#14532d",
                text: "#bbf7d0",
                title: "#dcfce7",
                subtitle: "#86efac",
                username: "#22c55e",
                footer: "#4ade80",
            }
            .into_theme(Background::solid("#020c05")),
            Swatch {
                id: "minimal-light-pro",
                name: "Minimal Light Pro",
                mode: ThemeMode::Light,
                primary: "#2563eb",
                secondary: "#16a34a",
                accent: "#7c3aed",
                muted: "#64748b",
                border: "#e5e7eb",
                text: "#1e293b",
                title: "#0f172a",
                subtitle: "#334155",
                username: "#2563eb",
                footer: "#64748b",
            }
            .into_theme(Background::solid("#ffffff")),
            Swatch {
                id: "github-dark",
                name: "GitHub Dark",
                mode: ThemeMode::Dark,
                primary: "#58a6ff",
                secondary: "#3fb950",
                accent: "#d2a8ff",
                muted: "#8b949e",
                border: "#30363d",
                text: "#c9d1d9",
                title: "#f0f6fc",
                subtitle: "#c9d1d9",
                username: "#58a6ff",
                footer: "#8b949e",
            }
            .into_theme(Background::solid("#0d1117")),
            dark(
                Swatch {
                    id: "coffee-code",
                    name: "Coffee Code",
                    mode: ThemeMode::Dark,
                    primary: "#f59e0b",
                    secondary: "#a16207",
                    accent: "#38bdf8",
                    muted: "#a8a29e",
                    border: "#44403c",
                    text: "#fafaf9",
                    title: "#fffbeb",
                    subtitle: "#fde68a",
                    username: "#f59e0b",
                    footer: "#fcd34d",
                },
                "#1c1917",
                "#292524",
                180.0,
            ),
        ]
    }

    /// Find a preset theme by id.
    pub fn preset(id: &str) -> Option<Theme> {
        Self::presets().into_iter().find(|theme| theme.id == id)
    }

    /// Palette stamped onto slides when this theme is applied.
    pub fn palette(&self) -> SlidePalette {
        SlidePalette {
            text_color: self.text_color.clone(),
            title_color: self.title_color.clone(),
            subtitle_color: self.subtitle_color.clone(),
            body_text_color: self.body_text_color.clone(),
            username_color: self.username_color.clone(),
            footer_text_color: self.footer_text_color.clone(),
        }
    }

    /// Default color for newly added plain text.
    pub fn default_text_color(&self) -> &'static str {
        if self.mode.is_dark() { "#ffffff" } else { "#0f172a" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark_gradient() {
        let theme = Theme::default();
        assert!(theme.mode.is_dark());
        assert_eq!(theme.background, Background::gradient("#0f172a", "#020617", 180.0));
    }

    #[test]
    fn test_preset_ids_unique() {
        let presets = Theme::presets();
        assert_eq!(presets.len(), 11);
        let mut ids: Vec<_> = presets.iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), presets.len());
    }

    #[test]
    fn test_preset_lookup() {
        let theme = Theme::preset("github-dark").unwrap();
        assert_eq!(theme.background, Background::solid("#0d1117"));
        assert!(Theme::preset("does-not-exist").is_none());
    }

    #[test]
    fn test_palette_copies_theme_colors() {
        let theme = Theme::light();
        let palette = theme.palette();
        assert_eq!(palette.text_color, "#0f172a");
        assert_eq!(palette.subtitle_color.as_deref(), Some("#475569"));
    }
}
