//! Corpus importer: load question fixtures into the local store

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use crate::core::paths::BoardPaths;
use crate::core::question::NewQuestion;
use crate::store::SqliteQuestionStore;

#[derive(Serialize)]
struct ImportResult {
    imported: usize,
    tagged: usize,
    untagged: usize,
    total_in_store: i64,
}

pub fn run(file: &str, json: bool) -> Result<()> {
    let paths = BoardPaths::new();

    let content = std::fs::read_to_string(Path::new(file))
        .with_context(|| format!("Failed to read {}", file))?;
    let questions: Vec<NewQuestion> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as a question array", file))?;

    let store = SqliteQuestionStore::open(&paths.database)?;

    let mut tagged = 0;
    let mut untagged = 0;

    for question in &questions {
        store.insert_question(question)?;
        if question.tags.is_some() {
            tagged += 1;
        } else {
            untagged += 1;
        }
    }

    let result = ImportResult {
        imported: questions.len(),
        tagged,
        untagged,
        total_in_store: store.question_count()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", "Corpus Import".bold());
        println!("{}", "=".repeat(50));
        println!("Source: {}", file.dimmed());
        println!("Store:  {}", paths.database.display().to_string().dimmed());
        println!();
        println!(
            "{} {} questions imported ({} tagged, {} untagged)",
            "✓".green(),
            result.imported.to_string().bold(),
            result.tagged,
            result.untagged
        );
        println!("Store now holds {} questions.", result.total_in_store);
    }

    Ok(())
}
