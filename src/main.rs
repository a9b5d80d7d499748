use clap::{Parser, Subcommand};
use expresskit::{config, generate, output, registry::Registry};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "expresskit")]
#[command(about = "Static site generator for the ExpressKit docs and template gallery")]
#[command(long_about = "\
Static site generator for the ExpressKit docs and template gallery

All content is compiled into the binary: 20 Express.js documentation
topics and 9 code templates. A build pre-renders one detail page per
content id plus the home, list, and 404 pages, so the output directory
can be dropped on any static file server.

Output structure:

  dist/
  ├── index.html                 # Home page
  ├── 404.html                   # Not-found page
  ├── manifest.json              # Build inventory
  ├── docs/
  │   ├── index.html             # Docs list
  │   └── <id>/index.html        # One per documentation topic
  └── templates/
      ├── index.html             # Templates list
      └── <id>/index.html        # One per code template

Run 'expresskit gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file (stock defaults are used if it does not exist)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the full site into the output directory
    Build,
    /// Validate the registry and config without writing anything
    Check,
    /// Print the content inventory
    List,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::SiteConfig::load(&cli.config)?;
            let registry = Registry::stock()?;
            println!("==> Generating site → {}", cli.output.display());
            let manifest = generate::generate(&registry, &config, &cli.output)?;
            output::print_build_output(&manifest);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            let config = config::SiteConfig::load(&cli.config)?;
            config.validate()?;
            let registry = Registry::stock()?;
            output::print_check_output(&registry);
            println!("==> Content is valid");
        }
        Command::List => {
            let registry = Registry::stock()?;
            output::print_list_output(&registry);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
