//! Scope visualizer
//!
//! Shows the scopes of one scope type in an editor. Each scope paints its
//! domain plus either its targets (content or removal ranges) or its
//! iteration ranges, each through its own [`FancyRangeHighlighter`] layer.

use scope_decorations::{CharacterRange, GeneralizedRange, LineLengths};
use scope_theme::RangeTypeColors;
use serde::{Deserialize, Serialize};

use crate::highlighter::FancyRangeHighlighter;
use crate::renderer::DecorationRenderer;
use crate::settings::VisualizerSettings;

pub const DOMAIN_LAYER: &str = "domain";
pub const TARGET_LAYER: &str = "target";
pub const BLENDED_LAYER: &str = "blended";

/// What to show for each scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    /// The content range of each target
    Content,
    /// The removal range of each target
    Removal,
    /// The ranges iterated over by "every"
    Iteration,
}

/// Ranges of one target of a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRanges {
    pub content_range: CharacterRange,
    /// May cover whole lines, e.g. when removing a line also removes its
    /// line break
    pub removal_range: GeneralizedRange,
}

/// One scope and its targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRanges {
    pub domain: CharacterRange,
    pub targets: Vec<TargetRanges>,
}

/// One iteration scope and the ranges it iterates over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationScopeRanges {
    pub domain: CharacterRange,
    pub ranges: Vec<CharacterRange>,
}

/// Ranges a scope provider produced for one editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "scopes", rename_all = "lowercase")]
pub enum EditorScopeRanges {
    Targets(Vec<ScopeRanges>),
    Iteration(Vec<IterationScopeRanges>),
}

/// Ranges to hand to each highlight layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizationPlan {
    pub domain: Vec<GeneralizedRange>,
    pub targets: Vec<GeneralizedRange>,
    /// Scopes whose single target is exactly the domain, painted once with
    /// blended colors instead of twice on top of each other
    pub blended: Vec<GeneralizedRange>,
}

impl VisualizationPlan {
    pub fn for_targets(scopes: &[ScopeRanges], visualization_type: VisualizationType) -> Self {
        let target_range = |target: &TargetRanges| match visualization_type {
            VisualizationType::Removal => target.removal_range,
            _ => GeneralizedRange::Character(target.content_range),
        };

        let mut plan = Self::default();
        for scope in scopes {
            let domain = GeneralizedRange::Character(scope.domain);

            match scope.targets.as_slice() {
                [target] if target_range(target) == domain => plan.blended.push(domain),
                targets => {
                    plan.domain.push(domain);
                    plan.targets.extend(targets.iter().map(target_range));
                }
            }
        }
        plan
    }

    pub fn for_iteration(scopes: &[IterationScopeRanges]) -> Self {
        let mut plan = Self::default();
        for scope in scopes {
            plan.domain.push(GeneralizedRange::Character(scope.domain));
            plan.targets
                .extend(scope.ranges.iter().copied().map(GeneralizedRange::Character));
        }
        plan
    }
}

struct Layers {
    visualization_type: VisualizationType,
    domain: FancyRangeHighlighter,
    target: FancyRangeHighlighter,
    blended: FancyRangeHighlighter,
}

impl Layers {
    fn new(settings: &VisualizerSettings, visualization_type: VisualizationType) -> Self {
        let colors = &settings.colors;
        let target_colors = match visualization_type {
            VisualizationType::Content => colors.content,
            VisualizationType::Removal => colors.removal,
            VisualizationType::Iteration => colors.iteration,
        };
        let layer = |name: &str, colors: RangeTypeColors| {
            FancyRangeHighlighter::new(name, colors, settings.border.clone())
        };

        Self {
            visualization_type,
            domain: layer(DOMAIN_LAYER, colors.domain),
            target: layer(TARGET_LAYER, target_colors),
            blended: layer(BLENDED_LAYER, RangeTypeColors::blend(&colors.domain, &target_colors)),
        }
    }

    fn all(&self) -> [&FancyRangeHighlighter; 3] {
        [&self.domain, &self.target, &self.blended]
    }
}

/// Paints scopes of one visualization type into an editor
pub struct ScopeVisualizer {
    settings: VisualizerSettings,
    layers: Option<Layers>,
}

impl ScopeVisualizer {
    pub fn new(settings: VisualizerSettings) -> Self {
        Self {
            settings,
            layers: None,
        }
    }

    pub fn settings(&self) -> &VisualizerSettings {
        &self.settings
    }

    pub fn visualization_type(&self) -> Option<VisualizationType> {
        self.layers.as_ref().map(|layers| layers.visualization_type)
    }

    /// Switches what is shown, clearing everything painted so far.
    ///
    /// `None` turns the visualizer off.
    pub fn set_visualization_type<R: DecorationRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        visualization_type: Option<VisualizationType>,
    ) {
        self.clear(renderer);
        self.layers = visualization_type.map(|ty| Layers::new(&self.settings, ty));

        tracing::debug!(?visualization_type, "scope visualization type changed");
    }

    /// Replaces the settings; layers are rebuilt and everything painted so
    /// far is cleared
    pub fn set_settings<R: DecorationRenderer + ?Sized>(&mut self, renderer: &mut R, settings: VisualizerSettings) {
        let visualization_type = self.visualization_type();
        self.settings = settings;
        self.set_visualization_type(renderer, visualization_type);
    }

    /// Paints `scopes`, replacing what was painted before.
    ///
    /// Iteration scopes are only shown by an iteration visualizer and
    /// target scopes only by a content or removal one; anything else clears
    /// the editor.
    pub fn render_scopes<R, L>(&self, renderer: &mut R, lines: &L, scopes: &EditorScopeRanges)
    where
        R: DecorationRenderer + ?Sized,
        L: LineLengths + ?Sized,
    {
        let Some(layers) = &self.layers else {
            return;
        };

        let plan = match (layers.visualization_type, scopes) {
            (VisualizationType::Iteration, EditorScopeRanges::Iteration(scopes)) => {
                VisualizationPlan::for_iteration(scopes)
            }
            (ty @ (VisualizationType::Content | VisualizationType::Removal), EditorScopeRanges::Targets(scopes)) => {
                VisualizationPlan::for_targets(scopes, ty)
            }
            (ty, _) => {
                tracing::warn!(visualization_type = ?ty, "scope ranges do not match visualization type");
                VisualizationPlan::default()
            }
        };

        tracing::debug!(
            domains = plan.domain.len(),
            targets = plan.targets.len(),
            blended = plan.blended.len(),
            "rendering scopes"
        );

        layers.domain.set_ranges(renderer, lines, &plan.domain);
        layers.target.set_ranges(renderer, lines, &plan.targets);
        layers.blended.set_ranges(renderer, lines, &plan.blended);
    }

    pub fn clear<R: DecorationRenderer + ?Sized>(&self, renderer: &mut R) {
        if let Some(layers) = &self.layers {
            for highlighter in layers.all() {
                highlighter.clear(renderer);
            }
        }
    }
}
