use appforge_core::{
    application::ports::{TemplateAssets, TemplateName},
    error::ForgeResult,
};

const MODULE_COMPONENT: &str = include_str!("../../assets/module-component.tsx.j2");
const MODULE_SERVICE: &str = include_str!("../../assets/module-service.ts.j2");
const README: &str = include_str!("../../assets/readme.md.j2");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl BuiltinAssets {
    pub fn new() -> Self {
        Self
    }

    pub fn source(name: TemplateName) -> &'static str {
        match name {
            TemplateName::ModuleComponent => MODULE_COMPONENT,
            TemplateName::ModuleService => MODULE_SERVICE,
            TemplateName::Readme => README,
        }
    }
}

impl TemplateAssets for BuiltinAssets {
    fn load(&self, name: TemplateName) -> ForgeResult<Option<String>> {
        Ok(Some(Self::source(name).to_string()))
    }

    fn describe(&self) -> String {
        "built-in templates".into()
    }
}
