use clap::{Parser, Subcommand};
use larder::{bundle, catalog, config, output, shopping};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Plain-text cookbook toolkit")]
#[command(long_about = "\
Plain-text cookbook toolkit

Your recipe catalog is one flat text file. Each dish is a block: the dish
name, the number of ingredients, then one line per ingredient, with blocks
separated by blank lines.

Catalog format:

  Omelette                      # dish name
  3                             # ingredient count
  eggs | 2 | piece              # name | quantity | measure
  milk | 100 | ml
  butter | 20 | g
                                # blank line between dishes
  Baked potato
  2
  potatoes | 1000 | g
  cheese | 50 | g

Shopping lists scale every quantity by the head count and merge ingredients
shared between dishes. Dishes the catalog does not know are reported
separately without failing the run.

Run 'larder gen-config' to generate a documented larder.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "larder.toml", global = true)]
    config: PathBuf,

    /// Recipe catalog file (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse the recipe catalog and display it
    Check,
    /// Aggregate a scaled shopping list for the given dishes
    Shop(ShopArgs),
    /// Merge every file in a notes directory into one bundle
    Bundle(BundleArgs),
    /// Print a stock larder.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct ShopArgs {
    /// Dishes to cook, by exact catalog name
    #[arg(required = true)]
    dishes: Vec<String>,

    /// Number of persons to cook for, at least 1 (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    persons: Option<u64>,

    /// Also write the list as JSON to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(clap::Args)]
struct BundleArgs {
    /// Directory holding the notes to bundle
    dir: PathBuf,

    /// Output file (defaults to the configured name inside DIR)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_config(&cli.config)?;
    let catalog_path = cli
        .catalog
        .unwrap_or_else(|| PathBuf::from(&config.catalog));

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", catalog_path.display());
            let catalog = catalog::load(&catalog_path)?;
            output::print_catalog(&catalog);
            println!("==> Catalog is well-formed");
        }
        Command::Shop(args) => {
            let catalog = catalog::load(&catalog_path)?;
            let persons = args.persons.unwrap_or(config.shopping.persons);
            let list = shopping::shopping_list(&args.dishes, persons, &catalog);
            output::print_shopping(&list, persons);

            if let Some(out) = args.out {
                let json = serde_json::to_string_pretty(&list)?;
                std::fs::write(&out, json)?;
                println!("Wrote {}", out.display());
            }
        }
        Command::Bundle(args) => {
            let out = args
                .out
                .unwrap_or_else(|| args.dir.join(&config.bundle.output));
            let summary = bundle::bundle(&args.dir, &out)?;
            output::print_bundle(&summary);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
