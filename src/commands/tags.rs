//! Corpus tag listing

use std::sync::Arc;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::core::paths::BoardPaths;
use crate::store::SqliteQuestionStore;
use crate::suggest::TrendingAggregator;

#[derive(Serialize)]
struct TagsResult {
    total_questions: i64,
    tagged_questions: i64,
    unique_tags: usize,
    tags: Vec<String>,
}

pub fn run(json: bool) -> Result<()> {
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

    let total_questions = store.question_count()?;
    let tagged_questions = store.tagged_question_count()?;

    let aggregator = TrendingAggregator::new(store);
    let runtime = tokio::runtime::Runtime::new()?;
    let tags = runtime.block_on(aggregator.all_tags());

    let result = TagsResult {
        total_questions,
        tagged_questions,
        unique_tags: tags.len(),
        tags,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", "Board Tag Listing".bold());
        println!("{}", "=".repeat(50));
        println!("Total questions: {}", result.total_questions);
        println!("Tagged questions: {}", result.tagged_questions);
        println!("Unique tags: {}", result.unique_tags);
        println!();

        if result.tags.is_empty() {
            println!("{}", "No tags in the corpus yet.".yellow());
        } else {
            for tag in &result.tags {
                println!("  {}", tag.green());
            }
        }
    }

    Ok(())
}
