//! minijinja-backed renderer.

use appforge_core::{
    application::{
        ApplicationError,
        ports::{TemplateAssets, TemplateName, TemplateRenderer},
    },
    domain::RenderContext,
    error::{ForgeError, ForgeResult},
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::{instrument, trace};

use crate::assets::BuiltinAssets;

/// Label used for template text that has no name of its own.
const INLINE: &str = "inline";

/// Renders named templates from an injected asset provider.
///
/// Output is never escaped and undefined placeholders render as empty text.
pub struct JinjaRenderer {
    assets: Box<dyn TemplateAssets>,
}

impl JinjaRenderer {
    pub fn new(assets: Box<dyn TemplateAssets>) -> Self {
        Self { assets }
    }

    /// Renderer over the compiled-in templates.
    pub fn builtin() -> Self {
        Self::new(Box::new(BuiltinAssets))
    }

    fn render_source(
        &self,
        label: &str,
        source: &str,
        context: &RenderContext,
    ) -> ForgeResult<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        env.add_template(label, source)
            .map_err(|e| rendering_failed(label, e))?;
        let template = env
            .get_template(label)
            .map_err(|e| rendering_failed(label, e))?;
        template
            .render(context.to_value())
            .map_err(|e| rendering_failed(label, e))
    }
}

impl Default for JinjaRenderer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip(self, context), fields(template = %name))]
    fn render(&self, name: TemplateName, context: &RenderContext) -> ForgeResult<String> {
        let source = self
            .assets
            .load(name)?
            .ok_or_else(|| ApplicationError::TemplateNotFound {
                name: name.to_string(),
                source_description: self.assets.describe(),
            })?;

        trace!(bytes = source.len(), "Rendering template");
        self.render_source(name.as_str(), &source, context)
    }

    fn render_str(&self, source: &str, context: &RenderContext) -> ForgeResult<String> {
        self.render_source(INLINE, source, context)
    }
}

fn rendering_failed(template: &str, e: minijinja::Error) -> ForgeError {
    ApplicationError::RenderingFailed {
        template: template.to_string(),
        reason: e.to_string(),
    }
    .into()
}
