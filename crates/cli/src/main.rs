use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dex_catalog::{CatalogStore, CatalogView, LoadStatus, Pager};
use dex_client::{ApiClient, ClientConfig};
use dex_protocol::TypeTag;
use dex_session::Session;
use indicatif::ProgressBar;
use std::sync::Arc;
use std::time::Duration;

mod render;

#[derive(Parser)]
#[command(name = "dex")]
#[command(about = "Terminal Pokédex backed by the public species catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog: all species paged, or one type tab in full
    List(ListArgs),

    /// Show the 18 type tabs with their record counts
    Types,

    /// Show the full detail record for one species
    Show(ShowArgs),

    /// Sign in with a demo trainer account and print the profile
    Login(LoginArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Page of the unfiltered view (50 records per page)
    #[arg(long)]
    page: Option<usize>,

    /// Render one category tab instead: the full filtered list, unpaged
    #[arg(long = "type", value_name = "TAG")]
    type_tag: Option<TypeTag>,
}

#[derive(Args)]
struct ShowArgs {
    /// Numeric id or name
    id_or_name: String,
}

#[derive(Args)]
struct LoginArgs {
    username: String,

    /// Password; prompted interactively when omitted
    #[arg(long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::List(args) => run_list(args).await?,
        Commands::Types => run_types().await?,
        Commands::Show(args) => run_show(args).await?,
        Commands::Login(args) => run_login(args)?,
    }

    Ok(())
}

fn build_store() -> Result<Arc<CatalogStore>> {
    let client = ApiClient::new(ClientConfig::from_env()).context("Failed to build API client")?;
    Ok(Arc::new(CatalogStore::new(Arc::new(client))))
}

async fn spin_while<F: std::future::Future>(message: &str, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let out = fut.await;
    spinner.finish_and_clear();
    out
}

/// Run the aggregation pass, offering a retry wherever it failed. The
/// store's `refetch` is the only retry surface; one prompt per failure.
async fn ensure_loaded(store: &Arc<CatalogStore>) -> Result<()> {
    spin_while("Loading Pokémon...", store.load()).await;
    loop {
        let status = store.snapshot().await.status;
        let LoadStatus::Failed(message) = status else {
            return Ok(());
        };
        render::failure(&message);
        let retry = console::user_attended()
            && dialoguer::Confirm::new()
                .with_prompt("Try again?")
                .default(false)
                .interact()?;
        if !retry {
            anyhow::bail!("catalog aggregation failed: {message}");
        }
        spin_while("Loading Pokémon...", store.refetch()).await;
    }
}

async fn run_list(args: ListArgs) -> Result<()> {
    let store = build_store()?;
    ensure_loaded(&store).await?;
    let view = CatalogView::new(Arc::clone(&store));

    match args.type_tag {
        Some(tag) => {
            render::type_view(&view.by_type(tag).await);
        }
        None => {
            let mut pager = Pager::new();
            if let Some(page) = args.page {
                let len = store.snapshot().await.records.len();
                pager.go_to(page, len);
            }
            render::paged_view(&view.all_pages(&pager).await);
        }
    }
    Ok(())
}

async fn run_types() -> Result<()> {
    let store = build_store()?;
    ensure_loaded(&store).await?;
    let view = CatalogView::new(store);
    render::tab_counts(&view.tab_counts().await);
    Ok(())
}

async fn run_show(args: ShowArgs) -> Result<()> {
    let client = ApiClient::new(ClientConfig::from_env()).context("Failed to build API client")?;
    loop {
        let result = spin_while(
            "Loading Pokémon details...",
            client.get_detail(&args.id_or_name),
        )
        .await;
        match result {
            Ok(pokemon) => {
                render::detail(&pokemon);
                return Ok(());
            }
            Err(err) => {
                render::failure(&err.to_string());
                let retry = console::user_attended()
                    && dialoguer::Confirm::new()
                        .with_prompt("Try again?")
                        .default(false)
                        .interact()?;
                if !retry {
                    anyhow::bail!("detail lookup failed: {err}");
                }
            }
        }
    }
}

fn run_login(args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .context("Password prompt failed; pass --password in non-interactive use")?,
    };

    let mut session = Session::new();
    if !session.login(&args.username, &password) {
        anyhow::bail!("Invalid username or password");
    }

    match session.current_profile() {
        Some(trainer) => render::welcome(trainer),
        None => anyhow::bail!("Invalid username or password"),
    }
    Ok(())
}
