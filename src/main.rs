use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grid_word_search::{
    config::{Config, OutputFormat},
    render, utils, Dictionary, WordSearcher,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grid_word_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let grid = utils::load_grid(&config.input.grid_path).await?;
    let dictionary = Dictionary::load(&config.input.dictionary_path).await?;
    if dictionary.is_empty() {
        tracing::warn!(
            "Dictionary {} has no words, nothing can match",
            config.input.dictionary_path
        );
    }

    tracing::info!(
        "Searching for words (min length {}, {:?} length cap)",
        config.search.min_length,
        config.search.length_cap
    );
    let searcher = WordSearcher::new(&dictionary).with_options(config.search_options());
    let matches = if config.search.parallel {
        searcher.search_parallel(&grid)
    } else {
        searcher.search(&grid)
    };
    tracing::info!("Search finished with {} matches", matches.len());

    match config.output.format {
        OutputFormat::Text => print!("{}", render::render_text(&grid, &matches)),
        OutputFormat::Json => println!("{}", render::render_json(&matches)?),
    }

    Ok(())
}
