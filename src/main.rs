use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cinerec_api::RestApi;
use cinerec_catalog::CatalogStore;
use cinerec_core::Recommender;

/// An in-memory movie catalog API with content-based recommendations
#[derive(Parser, Debug)]
#[command(name = "cinerec")]
#[command(about = "Movie catalog and recommendation API", long_about = None)]
struct Args {
    /// Path to the pre-joined movies CSV
    #[arg(long, default_value = "./data/movies_reducido.csv")]
    movies: PathBuf,

    /// Path to the expanded cast CSV
    #[arg(long, default_value = "./data/df_cast_expanded.csv")]
    cast: PathBuf,

    /// Path to the filtered crew CSV
    #[arg(long, default_value = "./data/filtered_credits_crew.csv")]
    crew: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cinerec v{}", env!("CARGO_PKG_VERSION"));
    info!("Movies dataset: {:?}", args.movies);
    info!("Cast dataset: {:?}", args.cast);
    info!("Crew dataset: {:?}", args.crew);

    let store = Arc::new(CatalogStore::load(&args.movies, &args.cast, &args.crew)?);
    info!("Catalog loaded: {} movies", store.movie_count());

    // The vector space is fitted once here; requests only read it
    let recommender = Arc::new(Recommender::build(&store.entries())?);
    info!(
        "Vector space built: {} entries, {} vocabulary dimensions",
        recommender.len(),
        recommender.vocabulary_size()
    );

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(store, recommender, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("cinerec started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
