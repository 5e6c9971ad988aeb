use appforge_core::{
    application::ports::{TemplateAssets, TemplateName},
    error::ForgeResult,
};

use super::{BuiltinAssets, DirectoryAssets};

/// Providers consulted in order; the first that has a template wins.
pub struct LayeredAssets {
    layers: Vec<Box<dyn TemplateAssets>>,
}

impl LayeredAssets {
    pub fn new(layers: Vec<Box<dyn TemplateAssets>>) -> Self {
        Self { layers }
    }

    /// User overrides from `dir`, falling back to the built-in templates.
    pub fn with_overrides(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(vec![
            Box::new(DirectoryAssets::new(dir)),
            Box::new(BuiltinAssets),
        ])
    }
}

impl TemplateAssets for LayeredAssets {
    fn load(&self, name: TemplateName) -> ForgeResult<Option<String>> {
        for layer in &self.layers {
            if let Some(source) = layer.load(name)? {
                return Ok(Some(source));
            }
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        self.layers
            .iter()
            .map(|layer| layer.describe())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}
