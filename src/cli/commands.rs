use std::path::PathBuf;

use clap::{Parser, Subcommand};

use funcpack::{
    discover_entry_files, inject_registration, FuncPackError, ModuleKind, ProgrammingModel, Result,
};

#[derive(Parser)]
#[command(name = "funcpack")]
#[command(about = "Entry-file discovery and path-registration injection for packaged Azure Functions apps")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # List the entry files of a v4 app
    funcpack discover apps/my-app

    # List the entry files of a legacy v3 app
    funcpack discover apps/my-app --model v3

    # Inject the path-registration header after a build
    funcpack inject apps/my-app --output-path dist --module-kind commonjs
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the entry files the host would load for an app
    Discover {
        /// Root directory of the function app
        app_root: PathBuf,

        /// Programming model of the app (v3 or v4)
        #[arg(long, default_value = "v4")]
        model: String,
    },

    /// Prepend the path-registration load statement to every entry file
    Inject {
        /// Root directory of the function app
        app_root: PathBuf,

        /// Build output directory containing the compiled shim
        #[arg(long)]
        output_path: PathBuf,

        /// Programming model of the app (v3 or v4)
        #[arg(long, default_value = "v4")]
        model: String,

        /// Module system the app compiles to
        #[arg(long, default_value = "commonjs")]
        module_kind: String,
    },
}

fn parse_model(s: &str) -> Result<ProgrammingModel> {
    ProgrammingModel::from_str(s)
        .ok_or_else(|| FuncPackError::Parse(format!("Unknown programming model: {}", s)))
}

fn parse_module_kind(s: &str) -> Result<ModuleKind> {
    ModuleKind::from_str(s)
        .ok_or_else(|| FuncPackError::Parse(format!("Unknown module kind: {}", s)))
}

pub async fn discover(app_root: &PathBuf, model: &str) -> Result<()> {
    let model = parse_model(model)?;
    let entries = discover_entry_files(app_root, model).await?;

    if entries.is_empty() {
        println!("No entry files found under {}", app_root.display());
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.display());
    }

    Ok(())
}

pub async fn inject(
    output_path: &PathBuf,
    app_root: &PathBuf,
    model: &str,
    module_kind: &str,
) -> Result<()> {
    let model = parse_model(model)?;
    let module_kind = parse_module_kind(module_kind)?;

    inject_registration(output_path, app_root, model, module_kind).await?;
    tracing::info!("Path registration injected for {}", app_root.display());

    Ok(())
}
