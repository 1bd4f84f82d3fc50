use clap::{Parser, Subcommand};
use routegen::{config, generate, output};
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
#[command(name = "routegen")]
#[command(about = "Route table generator for React page modules")]
#[command(long_about = "\
Route table generator for React page modules

Your pages directory is the data source. Each page file and each
index-bearing subdirectory becomes one route in a generated routes.tsx.

Pages structure:

  src/pages/
  ├── home.tsx                 # → route \"/\" (the root page)
  ├── about.tsx                # → route \"/about\", component About
  ├── user-profile.tsx         # → route \"/user-profile\", component UserProfile
  ├── blog/                    # → route \"/blog\" (contains index.tsx)
  │   └── index.tsx
  └── drafts/                  # No index.tsx → ignored

The generated src/routes.tsx is replaced wholesale on every run — never
hand-edit it.

Run 'routegen gen-config' to print a documented routegen.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project root: routegen.toml is read here and relative paths resolve
    /// against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the pages directory and print the route table as JSON
    Scan,
    /// Validate the pages directory without writing the routes file
    Check,
    /// Generate the routes file
    Generate,
    /// Print a stock routegen.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let config = config::load_config(&cli.root)?.resolve_at(&cli.root);
            let summary = generate::check(&config)?;
            println!("{}", serde_json::to_string_pretty(&summary.routes)?);
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?.resolve_at(&cli.root);
            let summary = generate::check(&config)?;
            output::print_check_output(&summary);
        }
        Command::Generate => {
            let config = config::load_config(&cli.root)?.resolve_at(&cli.root);
            let summary = generate::generate(&config)?;
            output::print_generate_output(&summary);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
