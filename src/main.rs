use clap::{Parser, Subcommand};
use granary_site::types::RenderContext;
use granary_site::{config, generate, output, page};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "granary-site")]
#[command(about = "Homepage generator for the Granary documentation website")]
#[command(long_about = "\
Homepage generator for the Granary documentation website

Reads config.toml from the source directory and renders the homepage (and,
when users are configured, users.html) for the default locale and every
configured language.

Source structure:

  website/
  ├── config.toml        # Site config (optional)
  └── static/            # Copied verbatim to the output root
      └── img/
          └── granary-logo.png

Run 'granary-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Website source directory
    #[arg(long, default_value = "website", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "build", global = true)]
    output: PathBuf,

    /// Log progress at info level (otherwise RUST_LOG applies)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved homepage model as JSON
    Resolve {
        /// Locale to resolve for (empty = default)
        #[arg(long, default_value = "")]
        language: String,
    },
    /// Render every page into the output directory
    Generate,
    /// Validate config.toml without generating
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Resolve { language } => {
            let site_config = config::load_config(&cli.source)?;
            if !language.is_empty() {
                config::validate_language(&language)?;
            }
            if !language.is_empty() && !site_config.languages.contains(&language) {
                tracing::warn!(%language, "Language is not listed in config.toml");
            }
            let home = page::resolve_home_page(&site_config, &RenderContext::new(language));
            println!("{}", serde_json::to_string_pretty(&home)?);
        }
        Command::Generate => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Generating {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&site_config, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_check_output(&site_config);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
