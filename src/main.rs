use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use wordfreq::analysis::frequency::AnalyzerConfig;
use wordfreq::analysis::pipeline::AnalysisPipeline;
use wordfreq::config::Config;
use wordfreq::db::pagination::PageMeta;
use wordfreq::db::sqlite::SqliteStore;
use wordfreq::db::traits::ResultStore;
use wordfreq::wiki::WikiClient;

/// Wordfreq: word-frequency analysis of Wikipedia articles.
///
/// Fetches the intro extract for a topic, strips markup, and ranks the
/// most frequent words. Results are stored for later browsing.
#[derive(Parser)]
#[command(name = "wordfreq", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Analyze a topic and print its word-frequency table
    Analyze {
        /// The topic to look up (e.g. "database sharding")
        topic: String,

        /// Number of top words to return
        #[arg(long, default_value = "10")]
        top: usize,

        /// Drop common words (the, is, in, …)
        #[arg(long)]
        skip_common_words: bool,

        /// Drop tokens that are entirely digits
        #[arg(long)]
        skip_numbers: bool,

        /// Don't store the result in the history database
        #[arg(long)]
        no_save: bool,
    },

    /// Browse stored analyses, newest first
    History {
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u32,

        /// Results per page
        #[arg(long, default_value = "10")]
        page_size: u32,
    },

    /// Show database stats (stored analyses, most recent timestamp)
    Status,

    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordfreq=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing wordfreq database...");
            let store = init_store(&config)?;
            let table_count = store.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext: run `wordfreq analyze <topic>` or `wordfreq serve`");
        }

        Commands::Analyze {
            topic,
            top,
            skip_common_words,
            skip_numbers,
            no_save,
        } => {
            if top < 1 {
                anyhow::bail!("--top must be at least 1");
            }

            let fetcher = Arc::new(WikiClient::new(&config.wiki_api_url)?);
            let pipeline = AnalysisPipeline::new(
                fetcher,
                AnalyzerConfig {
                    top_word_count: top,
                    skip_common_words,
                    skip_numbers,
                },
            );

            let result = if no_save {
                pipeline.run(&topic).await?
            } else {
                let store = init_store(&config)?;
                pipeline.process(&topic, &store).await?
            };

            wordfreq::output::display_result(&result);
        }

        Commands::History { page, page_size } => {
            if page < 1 || page_size < 1 {
                anyhow::bail!("--page and --page-size must be at least 1");
            }
            let store = open_store(&config)?;
            let total = store.result_count().await? as u64;
            let meta = PageMeta::compute(total, page, page_size);
            let results = store.results_page(page_size, meta.offset()).await?;
            wordfreq::output::display_history(&results, meta.page, meta.total_pages);
        }

        Commands::Status => {
            let store = open_store(&config)?;
            let count = store.result_count().await?;
            let latest = store.latest_created_at().await?;
            println!("Database: {}", config.db_path);
            println!("Stored analyses: {count}");
            match latest {
                Some(ts) => println!("Most recent: {ts}"),
                None => println!("Most recent: (none)"),
            }
        }

        Commands::Serve { port, bind } => {
            let store: Arc<dyn ResultStore> = Arc::new(init_store(&config)?);
            let fetcher = Arc::new(WikiClient::new(&config.wiki_api_url)?);
            wordfreq::web::run_server(store, fetcher, port, &bind).await?;
        }
    }

    Ok(())
}

fn init_store(config: &Config) -> Result<SqliteStore> {
    let conn = wordfreq::db::initialize(&config.db_path)?;
    Ok(SqliteStore::new(conn))
}

fn open_store(config: &Config) -> Result<SqliteStore> {
    let conn = wordfreq::db::open(&config.db_path)?;
    Ok(SqliteStore::new(conn))
}
