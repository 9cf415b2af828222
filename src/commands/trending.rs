//! Trending tags over the recent corpus

use std::sync::Arc;

use anyhow::Result;
use colored::*;

use crate::core::paths::BoardPaths;
use crate::store::SqliteQuestionStore;
use crate::suggest::TrendingAggregator;

pub fn run(limit: Option<usize>, json: bool) -> Result<()> {
    let paths = BoardPaths::new();

    if !paths.database.exists() {
        eprintln!(
            "{}",
            "Question store not found. Run 'tagboard init --config' and 'tagboard import' first."
                .red()
        );
        std::process::exit(1);
    }

    let store = Arc::new(SqliteQuestionStore::open(&paths.database)?);
    let aggregator = TrendingAggregator::new(store)
        .with_window_days(paths.config.suggest.trending_window_days)
        .with_max_tags(limit.unwrap_or(paths.config.suggest.max_trending_tags));

    let runtime = tokio::runtime::Runtime::new()?;
    let trending = runtime.block_on(aggregator.trending_tags());

    if json {
        println!("{}", serde_json::to_string_pretty(&trending)?);
    } else {
        println!("{}", "Trending Tags".bold());
        println!("{}", "=".repeat(50));
        println!(
            "Window: last {} days",
            paths.config.suggest.trending_window_days
        );
        println!();

        if trending.is_empty() {
            println!("{}", "No tagged questions in the window.".yellow());
        } else {
            for (i, tag) in trending.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, tag.green());
            }
        }
    }

    Ok(())
}
