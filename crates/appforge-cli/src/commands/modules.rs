//! Implementation of the `appforge modules` command.

use appforge_adapters::BuiltinRegistry;
use appforge_core::domain::ModuleDefinition;

use crate::{
    cli::{ListFormat, ModulesArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ModulesArgs, output: OutputManager) -> CliResult<()> {
    let registry = BuiltinRegistry::load()?;
    let modules = registry.list();

    match args.format {
        ListFormat::Table => {
            output.header("Available Modules:")?;
            for module in modules {
                output.print(&table_row(module))?;
            }
        }

        // JSON must stay parseable in pipes, so it bypasses quiet mode.
        ListFormat::Json => output.json(&modules)?,

        ListFormat::List => {
            for module in modules {
                output.print(&module.id)?;
            }
        }
    }

    Ok(())
}

fn table_row(module: &ModuleDefinition) -> String {
    let icon = module.icon.as_deref().unwrap_or(" ");
    let mut row = format!("  {icon} {:<18} {}", module.id, module.name);
    if !module.description.is_empty() {
        row.push_str(&format!("\n      {}", module.description));
    }
    row
}
