//! Tag suggestions for a question draft

use std::sync::Arc;

use anyhow::Result;
use colored::*;

use crate::core::paths::BoardPaths;
use crate::store::SqliteQuestionStore;
use crate::suggest::{ContentTagExtractor, SuggestionBundle, SuggestionComposer, TagDictionary};

pub fn run(title: &str, body: &str, content_only: bool, json: bool) -> Result<()> {
    let paths = BoardPaths::new();

    if content_only {
        let extractor = ContentTagExtractor::new(TagDictionary::builtin())
            .with_max_tags(paths.config.suggest.max_content_tags);
        let tags = extractor.extract(title, body);

        if json {
            println!("{}", serde_json::to_string_pretty(&tags)?);
        } else {
            print_section("From your text", &tags);
        }
        return Ok(());
    }

    if !paths.database.exists() {
        eprintln!(
            "{}",
            "Question store not found. Run 'tagboard init --config' and 'tagboard import' first."
                .red()
        );
        std::process::exit(1);
    }

    let store = Arc::new(SqliteQuestionStore::open(&paths.database)?);
    let composer = SuggestionComposer::from_config(store, &paths.config.suggest);

    let runtime = tokio::runtime::Runtime::new()?;
    let bundle = runtime.block_on(composer.get_tag_suggestions(title, body));

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        print_bundle(title, &bundle);
    }

    Ok(())
}

fn print_bundle(title: &str, bundle: &SuggestionBundle) {
    println!("{}", "Tag Suggestions".bold());
    println!("{}", "=".repeat(50));
    println!("Input: {}", title.dimmed());
    println!();

    print_section("From your text", &bundle.content_based);
    print_section("Trending now", &bundle.trending);
    print_section("All suggestions", &bundle.all);
}

fn print_section(heading: &str, tags: &[String]) {
    println!("{}", format!("{}:", heading).cyan().bold());
    if tags.is_empty() {
        println!("  {}", "(none)".dimmed());
    } else {
        for (i, tag) in tags.iter().enumerate() {
            println!("  {}. {}", i + 1, tag.green());
        }
    }
    println!();
}
