//! Plasma CLI
//!
//! Resolves themes and component configurations into CSS variables.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use plasma_component::{create_component_vars, RenderContext};
use plasma_theme::{create_theme_vars, ThemeMode};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod input;
mod output;

use config::{OutputFormat, PlasmaConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "plasma")]
#[command(version, about = "Resolve Plasma themes and component configs into CSS variables")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file or directory containing plasma.toml
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config_file: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CSS variables of a theme mode
    ThemeVars {
        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Print the CSS variables of a component instance
    ComponentVars {
        /// Component description (ComponentMeta JSON)
        #[arg(long)]
        component: PathBuf,

        /// Component configuration (ConfigData JSON)
        #[arg(long)]
        config: PathBuf,

        /// Selected style as `variation=style`; defaults to the bound
        /// default styles
        #[arg(long = "select", value_parser = input::parse_selection)]
        selections: Vec<(String, String)>,

        #[command(flatten)]
        theme: ThemeArgs,
    },
}

#[derive(Args)]
struct ThemeArgs {
    /// Token declarations (ThemeMeta JSON)
    #[arg(long)]
    meta: Option<PathBuf>,

    /// Raw platform values (PlatformsVariations JSON)
    #[arg(long)]
    variations: Option<PathBuf>,

    /// Palette for color references
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Theme mode
    #[arg(long)]
    mode: Option<ThemeMode>,
}

impl ThemeArgs {
    /// Flags first, then plasma.toml
    fn merged<'a>(&'a self, config: &'a PlasmaConfig) -> ThemeInputs<'a> {
        ThemeInputs {
            meta: self.meta.as_deref().or(config.theme.meta.as_deref()),
            variations: self.variations.as_deref().or(config.theme.variations.as_deref()),
            palette: self.palette.as_deref().or(config.theme.palette.as_deref()),
            mode: self.mode.unwrap_or(config.theme.mode),
        }
    }
}

struct ThemeInputs<'a> {
    meta: Option<&'a Path>,
    variations: Option<&'a Path>,
    palette: Option<&'a Path>,
    mode: ThemeMode,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlasmaConfig::load(&cli.config_file)?;
    let format = cli.format.unwrap_or(config.output.format);

    let vars = match &cli.command {
        Commands::ThemeVars { theme } => {
            let inputs = theme.merged(&config);
            let meta = inputs.meta.context("No theme declarations: pass --meta or set [theme].meta")?;
            let variations = inputs
                .variations
                .context("No theme values: pass --variations or set [theme].variations")?;
            let theme = input::load_theme(meta, variations, inputs.palette)?;
            create_theme_vars(&theme, inputs.mode)
        }
        Commands::ComponentVars {
            component,
            config: config_path,
            selections,
            theme,
        } => {
            let inputs = theme.merged(&config);
            let (meta, component_config) = input::load_component(component, config_path)?;

            let theme = match (inputs.meta, inputs.variations) {
                (Some(meta), Some(variations)) => Some(input::load_theme(meta, variations, inputs.palette)?),
                _ => {
                    tracing::debug!("no theme given, theme names render as var() references");
                    None
                }
            };

            let selections = if selections.is_empty() {
                component_config.default_selections()
            } else {
                selections
                    .iter()
                    .map(|(variation, style)| input::resolve_selection(&meta, &component_config, variation, style))
                    .collect::<Result<Vec<_>>>()?
            };

            let mut ctx = RenderContext::new(inputs.mode);
            if let Some(theme) = &theme {
                ctx = ctx.with_theme(theme);
            }
            create_component_vars(&meta, &component_config, &selections, &ctx)
        }
    };

    print!("{}", output::render(&vars, format, &config.output.selector)?);
    Ok(())
}
