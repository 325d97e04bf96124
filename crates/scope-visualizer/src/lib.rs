//! # Scope Visualizer
//!
//! Paints the scopes of a scope type into an editor: domains, target
//! content or removal ranges, and iteration ranges. Geometry comes from
//! [`scope_decorations`], colors from [`scope_theme`]; the editor itself is
//! reached through the [`DecorationRenderer`] trait.

pub mod highlighter;
pub mod render;
pub mod renderer;
pub mod settings;
pub mod visualizer;

pub use highlighter::FancyRangeHighlighter;
pub use render::{BorderAppearance, DecorationRenderOptions, ThemableRenderOptions};
pub use renderer::{DecorationRenderer, PaintRequest};
pub use settings::{ScopeColors, SettingsError, VisualizerSettings};
pub use visualizer::{
    EditorScopeRanges, IterationScopeRanges, ScopeRanges, ScopeVisualizer, TargetRanges,
    VisualizationPlan, VisualizationType,
};
