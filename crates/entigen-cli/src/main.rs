use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use entigen::{load_config, load_descriptor, write_unit};
use entigen_codegen::{CodeGenerator, EntityGenerator, EntityTemplate};

#[derive(Parser)]
#[command(name = "entigen")]
#[command(about = "Generate entity companions for schema-derived binding types", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print whether the type gets an entity companion
    Check {
        /// Type descriptor file (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the unit name of the type's entity
    UnitName {
        /// Type descriptor file (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Render the entity companion
    Generate {
        /// Type descriptor file (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Codegen settings (TOML)
        #[arg(short, long, env = "ENTIGEN_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.debug {
        LevelFilter::TRACE
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(cli.debug) // Show target module in debug mode
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { input } => {
            let descriptor = load_descriptor(&input)?;
            println!("{}", EntityGenerator::new().is_acceptable(&descriptor));
            Ok(())
        }
        Commands::UnitName { input } => {
            let descriptor = load_descriptor(&input)?;
            println!("{}", EntityGenerator::new().unit_name(&descriptor));
            Ok(())
        }
        Commands::Generate {
            input,
            output,
            config,
        } => handle_generate(input, output, config),
    }
}

fn handle_generate(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let descriptor = load_descriptor(&input)?;
    let config = load_config(config.as_deref())?;
    let generator = EntityGenerator::with_template(EntityTemplate::new().with_config(config));

    let source = generator
        .generate(&descriptor)
        .with_context(|| format!("Failed to generate entity for {}", descriptor.fully_qualified_name))?;

    if source.is_empty() {
        info!(
            "'{}' is not an entity candidate, nothing generated",
            descriptor.fully_qualified_name
        );
        return Ok(());
    }

    match output {
        Some(dir) => {
            write_unit(&dir, &generator.unit_name(&descriptor), &source)?;
        }
        None => print!("{}", source),
    }

    Ok(())
}
