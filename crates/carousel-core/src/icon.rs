//! Closed set of icons that icon elements can display.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon picker category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Tech,
    Arrows,
    Symbols,
}

/// A statically known icon.
///
/// Icons are serialized by their kebab-case name (`"arrow-right"`), which is
/// also the name the renderer resolves glyphs by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    // Tech
    Code,
    Terminal,
    Database,
    Cpu,
    Globe,
    Github,
    Server,
    Cloud,
    Bug,
    GitBranch,
    // Arrows
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    ChevronRight,
    ChevronLeft,
    MoveRight,
    // Symbols
    Check,
    X,
    Star,
    Heart,
    Zap,
    Lightbulb,
    Rocket,
    Bookmark,
    Share,
}

impl IconName {
    /// Kebab-case name of the icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Code => "code",
            IconName::Terminal => "terminal",
            IconName::Database => "database",
            IconName::Cpu => "cpu",
            IconName::Globe => "globe",
            IconName::Github => "github",
            IconName::Server => "server",
            IconName::Cloud => "cloud",
            IconName::Bug => "bug",
            IconName::GitBranch => "git-branch",
            IconName::ArrowRight => "arrow-right",
            IconName::ArrowLeft => "arrow-left",
            IconName::ArrowUp => "arrow-up",
            IconName::ArrowDown => "arrow-down",
            IconName::ChevronRight => "chevron-right",
            IconName::ChevronLeft => "chevron-left",
            IconName::MoveRight => "move-right",
            IconName::Check => "check",
            IconName::X => "x",
            IconName::Star => "star",
            IconName::Heart => "heart",
            IconName::Zap => "zap",
            IconName::Lightbulb => "lightbulb",
            IconName::Rocket => "rocket",
            IconName::Bookmark => "bookmark",
            IconName::Share => "share",
        }
    }

    /// Picker category for this icon.
    pub fn category(&self) -> IconCategory {
        match self {
            IconName::Code
            | IconName::Terminal
            | IconName::Database
            | IconName::Cpu
            | IconName::Globe
            | IconName::Github
            | IconName::Server
            | IconName::Cloud
            | IconName::Bug
            | IconName::GitBranch => IconCategory::Tech,
            IconName::ArrowRight
            | IconName::ArrowLeft
            | IconName::ArrowUp
            | IconName::ArrowDown
            | IconName::ChevronRight
            | IconName::ChevronLeft
            | IconName::MoveRight => IconCategory::Arrows,
            _ => IconCategory::Symbols,
        }
    }

    /// Get all available icons.
    pub fn all() -> &'static [IconName] {
        &[
            IconName::Code,
            IconName::Terminal,
            IconName::Database,
            IconName::Cpu,
            IconName::Globe,
            IconName::Github,
            IconName::Server,
            IconName::Cloud,
            IconName::Bug,
            IconName::GitBranch,
            IconName::ArrowRight,
            IconName::ArrowLeft,
            IconName::ArrowUp,
            IconName::ArrowDown,
            IconName::ChevronRight,
            IconName::ChevronLeft,
            IconName::MoveRight,
            IconName::Check,
            IconName::X,
            IconName::Star,
            IconName::Heart,
            IconName::Zap,
            IconName::Lightbulb,
            IconName::Rocket,
            IconName::Bookmark,
            IconName::Share,
        ]
    }

    /// Icons belonging to a picker category.
    pub fn in_category(category: IconCategory) -> impl Iterator<Item = IconName> {
        Self::all()
            .iter()
            .copied()
            .filter(move |icon| icon.category() == category)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| CoreError::UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_icon() {
        assert_eq!("arrow-right".parse::<IconName>().unwrap(), IconName::ArrowRight);
        assert_eq!("x".parse::<IconName>().unwrap(), IconName::X);
    }

    #[test]
    fn test_parse_unknown_icon() {
        let err = "ArrowRight".parse::<IconName>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownIcon(name) if name == "ArrowRight"));
    }

    #[test]
    fn test_serde_matches_as_str() {
        for icon in IconName::all() {
            let json = serde_json::to_string(icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
    }

    #[test]
    fn test_categories_cover_all_icons() {
        let total: usize = [IconCategory::Tech, IconCategory::Arrows, IconCategory::Symbols]
            .into_iter()
            .map(|c| IconName::in_category(c).count())
            .sum();
        assert_eq!(total, IconName::all().len());
    }
}
