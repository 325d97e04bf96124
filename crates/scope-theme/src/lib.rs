//! # Scope Theme
//!
//! Colors used to paint scope highlights. Every highlighted range type
//! (domain, content, removal, iteration) has a fill color plus two border
//! colors: one for solid edges and a fainter one for porous (dashed) edges.

pub mod color;

use serde::{Deserialize, Serialize};

pub use color::{Color, ColorParseError, Rgba};

/// Theme type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
}

/// A color with a variant for light and for dark themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemedColor {
    pub light: Color,
    pub dark: Color,
}

impl ThemedColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Same color for both theme kinds
    pub const fn uniform(color: Color) -> Self {
        Self { light: color, dark: color }
    }

    pub fn get(&self, kind: ThemeKind) -> Color {
        match kind {
            ThemeKind::Light => self.light,
            ThemeKind::Dark => self.dark,
        }
    }

    /// `self` composited over `base`, per theme kind
    pub fn over(&self, base: &ThemedColor) -> Self {
        Self {
            light: self.light.over(base.light),
            dark: self.dark.over(base.dark),
        }
    }
}

/// Colors for one type of highlighted range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeTypeColors {
    pub background: ThemedColor,
    pub border_solid: ThemedColor,
    pub border_porous: ThemedColor,
}

impl RangeTypeColors {
    /// Colors for a range that is both a domain and the target inside it.
    ///
    /// The fills are stacked so the overlap reads as both types at once;
    /// borders come from the nested (`top`) type.
    pub fn blend(base: &RangeTypeColors, top: &RangeTypeColors) -> Self {
        Self {
            background: top.background.over(&base.background),
            border_solid: top.border_solid,
            border_porous: top.border_porous,
        }
    }
}

/// Built-in palettes
pub mod builtin {
    use once_cell::sync::Lazy;

    use super::*;

    fn themed(light: &str, dark: &str) -> ThemedColor {
        ThemedColor::new(
            Color::from_hex(light).unwrap_or(Color::TRANSPARENT),
            Color::from_hex(dark).unwrap_or(Color::TRANSPARENT),
        )
    }

    pub static DOMAIN: Lazy<RangeTypeColors> = Lazy::new(|| RangeTypeColors {
        background: themed("#2b71cb0a", "#00e1ff0f"),
        border_solid: themed("#241390a1", "#ebdeec84"),
        border_porous: themed("#7e734650", "#cfc9c23c"),
    });

    pub static CONTENT: Lazy<RangeTypeColors> = Lazy::new(|| RangeTypeColors {
        background: themed("#00ad4c10", "#ad00bc5b"),
        border_solid: themed("#ee00ff78", "#ee00ff78"),
        border_porous: themed("#ebdeec3b", "#ebdeec3b"),
    });

    pub static REMOVAL: Lazy<RangeTypeColors> = Lazy::new(|| RangeTypeColors {
        background: themed("#ff00002e", "#ff00002e"),
        border_solid: themed("#ff000080", "#ff000080"),
        border_porous: themed("#ff00004a", "#ff00004a"),
    });

    pub static ITERATION: Lazy<RangeTypeColors> = Lazy::new(|| RangeTypeColors {
        background: themed("#00725f0d", "#00725f6c"),
        border_solid: themed("#00ffd578", "#00ffd578"),
        border_porous: themed("#00ffd525", "#00ffd525"),
    });
}
