mod catalog;

use clap::{Parser, Subcommand};
use storefront_catalog::ProductFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Query the storefront catalog and slides from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally scoped to one category
    Products {
        /// Catalog category id
        #[arg(long)]
        category: Option<u64>,
        /// Page size (1-100); defaults to `STOREFRONT_PER_PAGE`
        #[arg(long)]
        per_page: Option<u32>,
        /// Publish state, e.g. `publish`
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one published product by slug
    Product { slug: String },
    /// List catalog categories
    Categories,
    /// List home-page banners
    Slides,
    /// Compose the home page
    Home,
}

fn product_filter(
    category: Option<u64>,
    per_page: Option<u32>,
    status: Option<String>,
) -> ProductFilter {
    ProductFilter {
        category,
        per_page,
        status,
        slug: None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Products {
            category,
            per_page,
            status,
        }) => {
            let filter = product_filter(category, per_page, status);
            catalog::run_products(&config, &filter).await?;
        }
        Some(Commands::Product { slug }) => catalog::run_product(&config, &slug).await?,
        Some(Commands::Categories) => catalog::run_categories(&config).await?,
        Some(Commands::Slides) => catalog::run_slides(&config).await?,
        Some(Commands::Home) => catalog::run_home(&config).await?,
        None => println!("no command given; run `storefront-cli --help` for usage"),
    }

    Ok(())
}
