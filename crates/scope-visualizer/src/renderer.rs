//! Host renderer seam

use scope_decorations::{DifferentiationIndex, GeneralizedRange};
use serde::{Deserialize, Serialize};

use crate::render::DecorationRenderOptions;

/// One paint handle worth of ranges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintRequest {
    /// Stable identity of the visual signature, see
    /// [`scope_decorations::DifferentiatedStyle::map_key`]
    pub key: String,
    pub index: DifferentiationIndex,
    pub options: DecorationRenderOptions,
    pub ranges: Vec<GeneralizedRange>,
}

/// Something that can paint decorations in one editor.
///
/// Each call replaces everything previously painted for `layer`. A
/// renderer is expected to reuse its handle for a key it has seen before,
/// create handles for new keys in the order given, and clear the handles
/// whose key is absent from `requests`.
pub trait DecorationRenderer {
    fn set_decorations(&mut self, layer: &str, requests: Vec<PaintRequest>);
}

impl<R: DecorationRenderer + ?Sized> DecorationRenderer for &mut R {
    fn set_decorations(&mut self, layer: &str, requests: Vec<PaintRequest>) {
        (**self).set_decorations(layer, requests)
    }
}

impl<R: DecorationRenderer + ?Sized> DecorationRenderer for Box<R> {
    fn set_decorations(&mut self, layer: &str, requests: Vec<PaintRequest>) {
        (**self).set_decorations(layer, requests)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::BTreeMap;

    use super::*;

    /// Keeps the latest requests per layer plus a log of every call
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub layers: BTreeMap<String, Vec<PaintRequest>>,
        pub calls: Vec<(String, usize)>,
    }

    impl RecordingRenderer {
        pub fn layer(&self, layer: &str) -> &[PaintRequest] {
            self.layers.get(layer).map(Vec::as_slice).unwrap_or(&[])
        }
    }

    impl DecorationRenderer for RecordingRenderer {
        fn set_decorations(&mut self, layer: &str, requests: Vec<PaintRequest>) {
            self.calls.push((layer.to_string(), requests.len()));
            self.layers.insert(layer.to_string(), requests);
        }
    }
}
