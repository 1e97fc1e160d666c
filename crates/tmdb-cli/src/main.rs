//! tmdb - command line client for The Movie Database.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tmdb_api::http::DEFAULT_BASE_URL;
use tmdb_api::model::Page;
use tmdb_api::{Client, NamedParam, QueryParameters, ResourceKind};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path};

/// Environment variable overriding the configured API token.
const TOKEN_ENV: &str = "TMDB_API_TOKEN";

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List accepted resource names and the resource each resolves to.
    Resources,
    /// Fetch one item of any resource by id (e.g. `get movies 550`).
    Get(GetArgs),
    /// Get movie details.
    Movie(MovieArgs),
    /// Get TV show, season or episode details.
    Tv(TvArgs),
    /// Get person details.
    Person(PersonArgs),
    /// Search TMDB.
    Search(SearchArgs),
    /// List movie or TV genres.
    Genres(GenresArgs),
    /// Manage the config file.
    Config(ConfigCommand),
}

/// Arguments for the `get` subcommand.
#[derive(clap::Args)]
struct GetArgs {
    /// Resource name (see `tmdb resources`).
    resource: String,
    /// Item id.
    id: String,
    /// Response language (default: config `api.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieArgs {
    /// TMDB movie ID.
    id: u64,
    /// Response language (default: config `api.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvArgs {
    /// TMDB series ID.
    id: u64,
    /// Season number.
    #[arg(long)]
    season: Option<u32>,
    /// Episode number (requires --season).
    #[arg(long, requires = "season")]
    episode: Option<u32>,
    /// Response language (default: config `api.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `person` subcommand.
#[derive(clap::Args)]
struct PersonArgs {
    /// TMDB person ID.
    id: u64,
    /// Response language (default: config `api.language`).
    #[arg(long)]
    language: Option<String>,
}

/// What to search for.
#[derive(Clone, Copy, ValueEnum)]
enum SearchKind {
    /// Movies.
    Movie,
    /// TV shows.
    Tv,
    /// People.
    Person,
    /// Collections.
    Collection,
    /// Companies.
    Company,
    /// Keywords.
    Keyword,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// What to search for.
    #[arg(value_enum)]
    kind: SearchKind,
    /// Search query (e.g. "Inception").
    #[arg(long, required = true)]
    query: String,
    /// Result page (1-based).
    #[arg(long)]
    page: Option<u32>,
    /// Response language (default: config `api.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `genres` subcommand.
#[derive(clap::Args)]
struct GenresArgs {
    /// List TV genres instead of movie genres.
    #[arg(long)]
    tv: bool,
    /// Response language (default: config `api.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show the effective configuration.
    Show,
    /// Store the API token in the config file.
    SetToken(SetTokenArgs),
}

/// Arguments for the `config set-token` subcommand.
#[derive(clap::Args)]
struct SetTokenArgs {
    /// API key or read access token.
    token: String,
}

/// Loads the config file for `dir`.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let path = resolve_config_path(dir)?;
    AppConfig::load(&path)
}

/// Builds a `Client` from the config file, with `TMDB_API_TOKEN` taking
/// precedence over the stored token.
///
/// # Errors
///
/// Returns an error if no token is available, `base_url` is invalid, or the
/// client fails to build.
#[instrument(skip_all)]
fn build_client(config: &AppConfig) -> Result<Client> {
    let token = std::env::var(TOKEN_ENV)
        .ok()
        .filter(|token| !token.is_empty())
        .or_else(|| config.api.token.clone())
        .context("TMDB API token is required: set TMDB_API_TOKEN or run `tmdb config set-token`")?;

    let mut builder = Client::builder()
        .token(token)
        .auth_scheme(config.api.auth_scheme)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
    if let Some(base_url) = &config.api.base_url {
        let url = Url::parse(base_url).with_context(|| format!("invalid base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }

    let mut client = builder.build().context("failed to build TMDB client")?;
    if let Some(language) = &config.api.language {
        client.set_option("language", language.as_str())?;
    }
    Ok(client)
}

/// Query parameters carrying the requested language, falling back to the
/// client's `language` option.
fn request_params(client: &Client, language: Option<&str>) -> QueryParameters {
    let language = language.or_else(|| {
        client
            .get_option("language")
            .ok()
            .and_then(Value::as_str)
    });
    match language {
        Some(language) => QueryParameters::new().push(NamedParam::language(language)),
        None => QueryParameters::new(),
    }
}

/// Logs the page header and one line per result.
fn log_page<T>(page: &Page<T>, row: impl Fn(&T) -> String) {
    tracing::info!(
        "Page {}/{} ({} results)",
        page.page,
        page.total_pages,
        page.total_results
    );
    for item in &page.results {
        tracing::info!("{}", row(item));
    }
}

/// Runs the `resources` subcommand.
///
/// # Errors
///
/// Returns an error if a listed name fails to parse.
fn run_resources() -> Result<()> {
    tracing::info!("Name\t\tResource");
    for name in ResourceKind::NAMES {
        let kind: ResourceKind = name.parse()?;
        tracing::info!("{name:<16}{kind}");
    }
    Ok(())
}

/// Runs the `get` subcommand.
///
/// # Errors
///
/// Returns an error if the resource name is unsupported, the client fails
/// to build, or the lookup fails.
#[instrument(skip_all)]
async fn run_get(args: &GetArgs, dir: Option<&PathBuf>) -> Result<()> {
    let kind: ResourceKind = args.resource.parse()?;
    let client = build_client(&load_config(dir)?)?;

    let handle = client.api(&args.resource)?;
    let params = request_params(&client, args.language.as_deref());
    let value = handle
        .fetch(&args.id, &params)
        .await
        .with_context(|| format!("TMDB {kind} lookup failed: {}", args.id))?;

    tracing::info!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie(args: &MovieArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(&load_config(dir)?)?;
    let params = request_params(&client, args.language.as_deref());

    let movie = client
        .movies()
        .get_movie(args.id, &params)
        .await
        .context("TMDB movie request failed")?;

    tracing::info!("ID: {}", movie.id);
    tracing::info!("Title: {}", movie.title);
    tracing::info!("Original Title: {}", movie.original_title);
    tracing::info!(
        "Release Date: {}",
        movie.release_date.as_deref().unwrap_or("-")
    );
    tracing::info!(
        "Runtime: {}",
        movie
            .runtime
            .map_or_else(|| String::from("-"), |r| format!("{r}min"))
    );
    let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
    tracing::info!("Genres: {}", genres.join(", "));
    tracing::info!("Overview: {}", movie.overview.as_deref().unwrap_or("-"));

    Ok(())
}

/// Runs the `tv` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_tv(args: &TvArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(&load_config(dir)?)?;
    let params = request_params(&client, args.language.as_deref());
    let tv = client.tv();

    match (args.season, args.episode) {
        (Some(season), Some(episode)) => {
            let ep = tv
                .get_episode(args.id, season, episode, &params)
                .await
                .context("TMDB tv episode request failed")?;
            tracing::info!("S{:02}E{:02}: {}", ep.season_number, ep.episode_number, ep.name);
            tracing::info!("Air Date: {}", ep.air_date.as_deref().unwrap_or("-"));
            tracing::info!(
                "Runtime: {}",
                ep.runtime
                    .map_or_else(|| String::from("-"), |r| format!("{r}min"))
            );
            tracing::info!("Overview: {}", ep.overview.as_deref().unwrap_or("-"));
        }
        (Some(season), None) => {
            let season = tv
                .get_season(args.id, season, &params)
                .await
                .context("TMDB tv season request failed")?;
            tracing::info!(
                "Season {}: {}",
                season.season_number,
                season.name.as_deref().unwrap_or("-")
            );
            tracing::info!("Episodes:");
            for ep in &season.episodes {
                tracing::info!(
                    "  E{:02}: {} (air_date: {}, runtime: {}min)",
                    ep.episode_number,
                    ep.name,
                    ep.air_date.as_deref().unwrap_or("-"),
                    ep.runtime
                        .map_or_else(|| String::from("-"), |r| r.to_string()),
                );
            }
        }
        (None, _) => {
            let show = tv
                .get_tvshow(args.id, &params)
                .await
                .context("TMDB tv details request failed")?;
            tracing::info!("ID: {}", show.id);
            tracing::info!("Name: {}", show.name);
            tracing::info!("Original Name: {}", show.original_name);
            tracing::info!(
                "First Air Date: {}",
                show.first_air_date.as_deref().unwrap_or("-")
            );
            tracing::info!("Status: {}", show.status.as_deref().unwrap_or("-"));
            tracing::info!("Seasons: {}", show.number_of_seasons);
            tracing::info!("Episodes: {}", show.number_of_episodes);
            tracing::info!("---");
            for season in &show.seasons {
                tracing::info!(
                    "  Season {}: {} episodes (air_date: {})",
                    season.season_number,
                    season.episode_count,
                    season.air_date.as_deref().unwrap_or("-"),
                );
            }
        }
    }

    Ok(())
}

/// Runs the `person` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_person(args: &PersonArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(&load_config(dir)?)?;
    let params = request_params(&client, args.language.as_deref());

    let person = client
        .people()
        .get_person(args.id, &params)
        .await
        .context("TMDB person request failed")?;

    tracing::info!("ID: {}", person.id);
    tracing::info!("Name: {}", person.name);
    tracing::info!(
        "Known For: {}",
        person.known_for_department.as_deref().unwrap_or("-")
    );
    tracing::info!("Birthday: {}", person.birthday.as_deref().unwrap_or("-"));
    tracing::info!(
        "Place of Birth: {}",
        person.place_of_birth.as_deref().unwrap_or("-")
    );
    if let Some(deathday) = &person.deathday {
        tracing::info!("Deathday: {deathday}");
    }

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(&load_config(dir)?)?;
    let mut params = request_params(&client, args.language.as_deref());
    if let Some(page) = args.page {
        params = params.push(NamedParam::page(page));
    }
    let search = client.search();
    let query = args.query.as_str();
    let context = || format!("TMDB search request failed: {query}");

    match args.kind {
        SearchKind::Movie => {
            let page = search
                .search_movies(query, &params)
                .await
                .with_context(context)?;
            log_page(&page, |m| {
                format!(
                    "{}\t{}\t{}",
                    m.id,
                    m.title,
                    m.release_date.as_deref().unwrap_or("-")
                )
            });
        }
        SearchKind::Tv => {
            let page = search
                .search_tv(query, &params)
                .await
                .with_context(context)?;
            log_page(&page, |s| {
                format!(
                    "{}\t{}\t{}",
                    s.id,
                    s.name,
                    s.first_air_date.as_deref().unwrap_or("-")
                )
            });
        }
        SearchKind::Person => {
            let page = search
                .search_people(query, &params)
                .await
                .with_context(context)?;
            log_page(&page, |p| format!("{}\t{}", p.id, p.name));
        }
        SearchKind::Collection => {
            let page = search
                .search_collections(query, &params)
                .await
                .with_context(context)?;
            log_page(&page, |c| format!("{}\t{}", c.id, c.name));
        }
        SearchKind::Company => {
            let page = search
                .search_companies(query, &params)
                .await
                .with_context(context)?;
            log_page(&page, |c| format!("{}\t{}", c.id, c.name));
        }
        SearchKind::Keyword => {
            let page = search
                .search_keywords(query, &params)
                .await
                .with_context(context)?;
            log_page(&page, |k| format!("{}\t{}", k.id, k.name));
        }
    }

    Ok(())
}

/// Runs the `genres` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_genres(args: &GenresArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(&load_config(dir)?)?;
    let params = request_params(&client, args.language.as_deref());
    let genres = client.genres();

    let list = if args.tv {
        genres.get_tv_genres(&params).await
    } else {
        genres.get_movie_genres(&params).await
    }
    .context("TMDB genre list request failed")?;

    tracing::info!("ID\tName");
    for genre in &list {
        tracing::info!("{}\t{}", genre.id, genre.name);
    }

    Ok(())
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config file cannot be resolved or parsed.
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;

    tracing::info!("Config file: {}", path.display());
    tracing::info!(
        "token: {}",
        if config.api.token.is_some() {
            "(set)"
        } else {
            "(not set)"
        }
    );
    tracing::info!(
        "base_url: {}",
        config.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    );
    tracing::info!("auth_scheme: {:?}", config.api.auth_scheme);
    tracing::info!(
        "language: {}",
        config.api.language.as_deref().unwrap_or("-")
    );
    if std::env::var_os(TOKEN_ENV).is_some() {
        tracing::info!("{TOKEN_ENV} is set and overrides the stored token");
    }

    Ok(())
}

/// Runs the `config set-token` subcommand.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
fn run_config_set_token(args: &SetTokenArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let mut config = AppConfig::load(&path)?;
    config.api.token = Some(args.token.clone());
    config.save(&path)?;

    tracing::info!("Saved API token to {}", path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Resources => run_resources(),
        Commands::Get(args) => run_get(&args, dir).await,
        Commands::Movie(args) => run_movie(&args, dir).await,
        Commands::Tv(args) => run_tv(&args, dir).await,
        Commands::Person(args) => run_person(&args, dir).await,
        Commands::Search(args) => run_search(&args, dir).await,
        Commands::Genres(args) => run_genres(&args, dir).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Show => run_config_show(dir),
            ConfigSubcommands::SetToken(args) => run_config_set_token(&args, dir),
        },
    }
}
