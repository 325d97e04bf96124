//! Render options
//!
//! Turns a [`DecorationStyle`] and a set of range colors into the CSS-like
//! options a host editor uses to create a paint handle.

use scope_decorations::{BorderStyle, DecorationStyle};
use scope_theme::{Color, RangeTypeColors, ThemeKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BORDER_WIDTH: &str = "1px";
pub const DEFAULT_BORDER_RADIUS: &str = "2px";

/// Border width and corner radius shared by every highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderAppearance {
    pub width: String,
    pub radius: String,
}

impl Default for BorderAppearance {
    fn default() -> Self {
        Self {
            width: DEFAULT_BORDER_WIDTH.to_string(),
            radius: DEFAULT_BORDER_RADIUS.to_string(),
        }
    }
}

/// Options that differ between light and dark themes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemableRenderOptions {
    pub background_color: String,
    pub border_color: String,
}

/// Everything needed to create one paint handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationRenderOptions {
    pub light: ThemableRenderOptions,
    pub dark: ThemableRenderOptions,
    pub border_style: String,
    pub border_width: String,
    pub border_radius: String,
    pub is_whole_line: bool,
}

impl DecorationRenderOptions {
    pub fn new(
        style: &DecorationStyle,
        colors: &RangeTypeColors,
        appearance: &BorderAppearance,
    ) -> Self {
        let themable = |kind: ThemeKind| ThemableRenderOptions {
            background_color: colors.background.get(kind).to_hex(),
            border_color: border_color(
                colors.border_solid.get(kind),
                colors.border_porous.get(kind),
                style,
            ),
        };

        Self {
            light: themable(ThemeKind::Light),
            dark: themable(ThemeKind::Dark),
            border_style: border_style(style),
            border_width: appearance.width.clone(),
            border_radius: border_radius(style, &appearance.radius),
            is_whole_line: style.is_whole_line,
        }
    }

    pub fn themed(&self, kind: ThemeKind) -> &ThemableRenderOptions {
        match kind {
            ThemeKind::Light => &self.light,
            ThemeKind::Dark => &self.dark,
        }
    }
}

/// `border-style` shorthand: top, right, bottom, left
pub fn border_style(style: &DecorationStyle) -> String {
    style.edges().map(|edge| edge.as_css()).join(" ")
}

/// `border-color` shorthand; porous and absent edges use the porous color
pub fn border_color(solid: Color, porous: Color, style: &DecorationStyle) -> String {
    style
        .edges()
        .map(|edge| {
            let color = if edge.is_solid() { solid } else { porous };
            color.to_hex()
        })
        .join(" ")
}

/// `border-radius` shorthand: top-left, top-right, bottom-right, bottom-left.
///
/// A corner is rounded only where both of its edges are solid; anywhere the
/// shape continues the corner stays square so it looks cut off.
pub fn border_radius(style: &DecorationStyle, radius: &str) -> String {
    let corner = |a: BorderStyle, b: BorderStyle| {
        if a.is_solid() && b.is_solid() { radius } else { "0px" }
    };

    [
        corner(style.top, style.left),
        corner(style.top, style.right),
        corner(style.bottom, style.right),
        corner(style.bottom, style.left),
    ]
    .join(" ")
}
