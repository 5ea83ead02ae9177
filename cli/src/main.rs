use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use stockroom_core::{
    inventory_dashboard, purchase_order_dashboard, resolve, routes, search_products,
    search_suppliers, ApiConfig, HttpBackend, Resource, State, Store, Target,
};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(
    about = "Query the Stockroom inventory API and inspect the front-end routes",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// API root URL [default: http://localhost:8000/api/]
    #[arg(long, global = true, env = "STOCKROOM_API_URL")]
    api_url: Option<String>,

    /// API token sent as `Authorization: Token <token>`
    #[arg(long, global = true, env = "STOCKROOM_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, global = true, env = "STOCKROOM_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Output file for JSON results (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the front-end route table
    Routes,

    /// Show which view a path resolves to
    Resolve { path: String },

    /// Fetch one collection and print it as JSON
    Fetch {
        #[arg(value_enum)]
        resource: ResourceArg,
    },

    /// Fetch every collection concurrently and print record counts
    Sync,

    /// Print the purchase-order and inventory dashboards
    Dashboard,

    /// Search suppliers or products
    Search {
        #[arg(value_enum)]
        kind: SearchKind,
        query: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ResourceArg {
    Suppliers,
    Categories,
    Products,
    PurchaseOrders,
    Inventory,
    LowStock,
}

impl From<ResourceArg> for Resource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Suppliers => Resource::Suppliers,
            ResourceArg::Categories => Resource::Categories,
            ResourceArg::Products => Resource::Products,
            ResourceArg::PurchaseOrders => Resource::PurchaseOrders,
            ResourceArg::Inventory => Resource::Inventory,
            ResourceArg::LowStock => Resource::LowStock,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SearchKind {
    Suppliers,
    Products,
}

const DEFAULT_LOG_FILTER: &str = "stockroom=info,stockroom_core=info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Routes => print_routes(),
        Command::Resolve { path } => print_resolved(path),
        Command::Fetch { resource } => handle_fetch(&cli, (*resource).into()).await,
        Command::Sync => handle_sync(&cli).await,
        Command::Dashboard => handle_dashboard(&cli).await,
        Command::Search { kind, query } => handle_search(&cli, *kind, query).await,
    }
}

fn api_config(cli: &Cli) -> ApiConfig {
    let mut config = ApiConfig::default();
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        config.token = Some(token.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config
}

fn open_store(cli: &Cli) -> Result<Store<HttpBackend>> {
    let config = api_config(cli);
    let backend = HttpBackend::new(&config).context("Failed to configure API client")?;
    tracing::info!(base = %backend.base(), "using API");
    Ok(Store::new(backend))
}

fn write_json(cli: &Cli, value: &Value) -> Result<()> {
    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    Ok(())
}

fn print_routes() -> Result<()> {
    let mut out = io::stdout().lock();
    for def in routes() {
        match def.target {
            Target::View { name, view } => {
                writeln!(out, "{:<28} {:<20} {:?}", def.path, name, view)?;
            }
            Target::Redirect(to) => {
                writeln!(out, "{:<28} -> {}", def.path, to)?;
            }
        }
    }
    Ok(())
}

fn print_resolved(path: &str) -> Result<()> {
    let Some(matched) = resolve(path) else {
        bail!("No route matches {path}");
    };

    let mut out = io::stdout().lock();
    if let Some(from) = &matched.redirected_from {
        writeln!(out, "redirect: {from} -> {}", matched.path)?;
    }
    writeln!(out, "name:     {}", matched.name)?;
    writeln!(out, "view:     {:?}", matched.view)?;
    writeln!(out, "path:     {}", matched.path)?;
    for (key, value) in &matched.params {
        writeln!(out, "param:    {key} = {value}")?;
    }
    if let Some(resource) = matched.view.resource() {
        writeln!(out, "reads:    {resource} ({})", resource.endpoint())?;
    }
    Ok(())
}

async fn handle_fetch(cli: &Cli, resource: Resource) -> Result<()> {
    let store = open_store(cli)?;
    store.fetch(resource).await;

    let state = store.snapshot();
    if let Some(failure) = &state.error {
        bail!("Failed to fetch {}: {}", failure.resource, failure.message);
    }
    write_json(cli, &collection_json(&state, resource)?)
}

async fn handle_sync(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    store.fetch_all().await;

    let state = store.snapshot();
    let mut out = io::stdout().lock();
    for resource in Resource::ALL {
        writeln!(out, "{:<16} {}", resource.name(), state.count(resource))?;
    }

    if let Some(failure) = &state.error {
        bail!("Failed to fetch {}: {}", failure.resource, failure.message);
    }
    Ok(())
}

async fn handle_dashboard(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    let backend = store.backend();

    let (orders, stock) = futures::try_join!(
        purchase_order_dashboard(backend),
        inventory_dashboard(backend)
    )
    .context("Failed to load dashboards")?;

    write_json(
        cli,
        &serde_json::json!({
            "purchase_orders": orders,
            "inventory": stock,
        }),
    )
}

async fn handle_search(cli: &Cli, kind: SearchKind, query: &str) -> Result<()> {
    let store = open_store(cli)?;
    let backend = store.backend();

    let found = match kind {
        SearchKind::Suppliers => serde_json::to_value(search_suppliers(backend, query).await?)?,
        SearchKind::Products => serde_json::to_value(search_products(backend, query).await?)?,
    };
    write_json(cli, &found)
}

fn collection_json(state: &State, resource: Resource) -> Result<Value> {
    let value = match resource {
        Resource::Suppliers => serde_json::to_value(&state.suppliers)?,
        Resource::Categories => serde_json::to_value(&state.categories)?,
        Resource::Products => serde_json::to_value(&state.products)?,
        Resource::PurchaseOrders => serde_json::to_value(&state.purchase_orders)?,
        Resource::Inventory => serde_json::to_value(&state.inventory)?,
        Resource::LowStock => serde_json::to_value(&state.low_stock)?,
    };
    Ok(value)
}
