use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use storefront_cache::CacheManager;
use storefront_core::{
    load_catalog, providers::FakeStoreProvider, BrowserState, CatalogView, CategoryFilter,
    Config, FavoriteSet, FavoritesStore, Intent, KeyValueStore, MemoryStore, ProductId,
    SortOrder,
};
use storefront_tui::{run_tui, App};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version, about = "Browse a product catalog from the terminal", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Overrides for values normally read from the config file
#[derive(Args)]
struct GlobalOptions {
    /// Catalog API base URL (products are read from `<url>/products`)
    #[arg(long, env = "STOREFRONT_API_URL", global = true)]
    api_url: Option<String>,

    /// SQLite file holding favorites
    #[arg(long, env = "STOREFRONT_DB", global = true)]
    db_path: Option<PathBuf>,

    /// Keep favorites in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser (the default)
    Browse {
        /// Products per page
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Print one page of the filtered catalog
    List(ListArgs),
    /// Print the categories present in the catalog
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Manage saved favorites
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Show or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
struct ListArgs {
    /// Only this category ("all" for every category)
    #[arg(long, short)]
    category: Option<String>,

    /// Case-insensitive match on title, description or category
    #[arg(long, short)]
    search: Option<String>,

    /// Price order: none, asc or desc
    #[arg(long, default_value = "none")]
    sort: SortOrder,

    /// 1-based page; clamped to the pages that exist
    #[arg(long, short, default_value_t = 1)]
    page: usize,

    /// Products per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// Print favorite product ids
    List {
        #[arg(long)]
        json: bool,
    },
    /// Mark a product as favorite
    Add { id: ProductId },
    /// Unmark a product
    Remove { id: ProductId },
    /// Forget every favorite
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The browser owns the screen, so keep stderr quiet unless asked
    let default_filter = match cli.command {
        None | Some(Commands::Browse { .. }) => "storefront=warn",
        Some(_) => "storefront=info",
    };
    init_tracing(default_filter);

    let mut config = Config::load().context("Failed to load config")?;
    if let Some(api_url) = cli.global.api_url {
        config.catalog.api_url = api_url;
    }
    if let Some(db_path) = cli.global.db_path {
        config.storage.db_path = Some(db_path);
    }

    match cli.command.unwrap_or(Commands::Browse { page_size: None }) {
        Commands::Browse { page_size } => {
            let source = catalog_source(&config)?;
            let favorites = favorites_store(&config, cli.global.ephemeral)?;

            let mut app = App::new(page_size.unwrap_or(config.ui.page_size));
            app.mouse_enabled = config.ui.mouse_enabled;

            run_tui(app, &source, favorites).await?;
        }
        Commands::List(args) => {
            let source = catalog_source(&config)?;
            let favorites = favorites_store(&config, cli.global.ephemeral)?;

            let catalog = load_catalog(&source).await;
            let mut state = BrowserState::new(args.page_size.unwrap_or(config.ui.page_size))
                .apply(Intent::CatalogLoaded(catalog))
                .apply(Intent::FavoritesLoaded(favorites.load().await));

            if let Some(category) = &args.category {
                state = state.apply(Intent::CategorySelected(CategoryFilter::parse(category)));
            }
            if let Some(search) = args.search {
                state = state.apply(Intent::SearchChanged(search));
            }
            let state = state
                .apply(Intent::SortSelected(args.sort))
                .apply(Intent::GoToPage(args.page));

            let view = state.view();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view_json(&view))?);
            } else {
                print_view(&view, &state.favorites);
            }
        }
        Commands::Categories { json } => {
            let source = catalog_source(&config)?;
            let categories = load_catalog(&source).await.categories();

            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else if categories.is_empty() {
                println!("No categories found");
            } else {
                for category in categories {
                    println!("{}", category);
                }
            }
        }
        Commands::Favorites(command) => {
            let favorites = favorites_store(&config, cli.global.ephemeral)?;
            let current = favorites.load().await;

            match command {
                FavoritesCommand::List { json } => {
                    let ids: Vec<ProductId> = current.iter().copied().collect();
                    if json {
                        println!("{}", serde_json::to_string(&ids)?);
                    } else if ids.is_empty() {
                        println!("No favorites yet");
                    } else {
                        for id in ids {
                            println!("{}", id);
                        }
                    }
                }
                FavoritesCommand::Add { id } => {
                    let updated = favorites.add(&current, id).await;
                    println!("Added {} ({} favorites)", id, updated.len());
                }
                FavoritesCommand::Remove { id } => {
                    if current.contains(&id) {
                        let updated = favorites.remove(&current, id).await;
                        println!("Removed {} ({} favorites)", id, updated.len());
                    } else {
                        println!("{} was not a favorite", id);
                    }
                }
                FavoritesCommand::Clear => {
                    favorites.clear().await;
                    println!("Cleared {} favorites", current.len());
                }
            }
        }
        Commands::Config(ConfigCommand::Show) => {
            println!("# {}", Config::config_path()?.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Commands::Config(ConfigCommand::Init { force }) => {
            let path = Config::config_path()?;
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let written = Config::default().save()?;
            println!("Wrote {}", written.display());
        }
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn catalog_source(config: &Config) -> anyhow::Result<FakeStoreProvider> {
    FakeStoreProvider::new(&config.catalog.api_url, config.catalog.timeout())
        .context("Failed to build catalog client")
}

fn favorites_store(config: &Config, ephemeral: bool) -> anyhow::Result<FavoritesStore> {
    let store: Arc<dyn KeyValueStore> = if ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        let path = config.database_path()?;
        tracing::debug!("Opening favorites database at {}", path.display());
        let cache = CacheManager::new(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        Arc::new(cache)
    };

    Ok(FavoritesStore::new(store))
}

fn view_json(view: &CatalogView) -> serde_json::Value {
    let window: Vec<String> = view.page_window.iter().map(ToString::to_string).collect();

    serde_json::json!({
        "page": view.current_page,
        "total_pages": view.total_pages,
        "total_items": view.total_items,
        "page_window": window,
        "items": view.items,
    })
}

fn print_view(view: &CatalogView, favorites: &FavoriteSet) {
    if view.items.is_empty() {
        println!("No products found");
        println!("Try adjusting your filters or search term");
        return;
    }

    println!(
        "Page {} of {} ({} products)\n",
        view.current_page, view.total_pages, view.total_items
    );

    for product in &view.items {
        let heart = if favorites.contains(&product.id) { "♥" } else { "♡" };
        println!("{} [{}] {}", heart, product.id, product.title);
        println!(
            "    ${:.2} · {} · ⭐ {} ({} reviews)",
            product.price, product.category, product.rating.rate, product.rating.count
        );
    }

    if view.show_pager() {
        let window: Vec<String> = view
            .page_window
            .iter()
            .map(|label| match label.page() {
                Some(n) if n == view.current_page => format!("[{}]", n),
                _ => label.to_string(),
            })
            .collect();
        println!("\nPages: {}", window.join(" "));
    }
}
