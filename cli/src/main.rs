mod render;

use std::sync::Arc;

use anyhow::Context;
use catalog_core::{
    load_config, ControllerState, ListPhase, LoadOrdering, ProductController, ProductSource,
    ReqwestTransport,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Browse the product catalog from the terminal")]
struct Cli {
    /// Catalog API root, e.g. http://127.0.0.1:3000
    #[arg(long, env = "CATALOG_API_BASE_URL")]
    base_url: Option<String>,

    /// How overlapping loads are applied: last-completed or latest-issued
    #[arg(long, env = "CATALOG_LOAD_ORDERING")]
    ordering: Option<LoadOrdering>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product
    List,
    /// Show one product
    Show { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config().context("loading catalog configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(ordering) = cli.ordering {
        config.load_ordering = ordering;
    }
    tracing::debug!(base_url = %config.base_url, ordering = %config.load_ordering, "configured");

    let transport = ReqwestTransport::new().context("building HTTP client")?;
    let source = ProductSource::new(&config.base_url, transport);
    let controller = ProductController::with_ordering(Arc::new(source), config.load_ordering);

    let state = match cli.command {
        Commands::List => {
            controller.load_products().await?;
            let state = controller.state();
            if !state.showing_error {
                print_list(&state);
            }
            state
        }
        Commands::Show { id } => {
            controller.load_product(id).await?;
            let state = controller.state();
            if let Some(product) = &state.selected_product {
                print!("{}", render::product_detail(product));
            }
            state
        }
    };

    if let Some(message) = state.alert_message() {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
    Ok(())
}

fn print_list(state: &ControllerState) {
    match state.list_phase() {
        ListPhase::Ready => {
            for product in &state.products {
                println!("{}", render::product_row(product));
            }
        }
        ListPhase::Empty => println!("No products found"),
        ListPhase::Loading => println!("Loading products..."),
    }
}
